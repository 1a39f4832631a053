//! TM4C123GH6PM support for the Tivaio GPIO drivers
//!
//! This crate provides the chip-specific pieces behind the `tivaio-hal`
//! traits:
//!
//! - Memory-mapped GPIO register blocks for ports A-F (APB aperture)
//! - Port clock gating through RCGCGPIO
//! - SysTick periodic tick driver
//! - defmt-backed diagnostic sink (`defmt` feature)
//! - LaunchPad (EK-TM4C123GXL) board configuration
//!
//! # Usage
//!
//! ```ignore
//! let gpio = Tm4cGpio::take().unwrap();
//! let mut port = PortDriver::new(gpio, DefmtSink);
//! port.init(&board::LAUNCHPAD_PINS);
//! port.dio().write_channel(board::LED1, Level::High);
//! ```

#![no_std]

pub mod board;
#[cfg(feature = "defmt")]
pub mod det;
pub mod gpio;
pub mod systick;

#[cfg(feature = "defmt")]
pub use det::DefmtSink;
pub use gpio::{RegisterBlock, Tm4cGpio};
pub use systick::{ClockSource, SysTickConfig, SysTickTimer};
