//! Tivaio Hardware Abstraction Layer
//!
//! This crate defines the interfaces between the GPIO drivers in
//! `tivaio-core` and everything they treat as an external collaborator:
//! the memory-mapped register surface, the diagnostic sink, and the
//! periodic tick source. Chip-specific HALs (TM4C123, ...) implement them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (tivaio-firmware, drivers) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tivaio-core (Port / Dio engines)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tivaio-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ tivaio-hal-   │       │ tivaio-core   │
//! │   tm4c123     │       │  sim (tests)  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`registers::GpioBank`], [`registers::PortRegisters`] - Register surface
//! - [`diag::DiagnosticSink`] - Development error reporting
//! - [`tick::TickSource`] - Periodic millisecond tick
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O

#![no_std]
#![deny(unsafe_code)]

pub mod diag;
pub mod gpio;
pub mod registers;
pub mod tick;

// Re-export key traits at crate root for convenience
pub use diag::{DiagnosticSink, ErrorKind, ModuleId, NullSink, ServiceId};
pub use gpio::{InputPin, Level, OutputPin};
pub use registers::{GpioBank, PortRegisters, Register};
pub use tick::TickSource;
