//! Board-agnostic GPIO drivers
//!
//! This crate contains the pin configuration and channel access logic
//! that does not depend on a specific chip:
//!
//! - Configuration types (pin records, modes, channel groups)
//! - Port driver: applies a pin table at boot, runtime direction/mode changes
//! - Dio driver: single channel, whole port and channel group access
//! - Development error detection shared by both drivers
//! - A simulated register bank for host tests (`sim` feature)
//!
//! The drivers talk to hardware only through the `tivaio-hal` register
//! surface traits. All state lives in a caller-owned [`PortDriver`]; there
//! are no globals.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod det;
pub mod dio;
pub mod port;
#[cfg(any(test, feature = "sim"))]
pub mod sim;
pub mod state;
pub mod version;

pub use config::{ChannelGroup, Direction, MuxGroup, PinConfig, PinMode, Resistor};
pub use dio::{Channel, Dio};
pub use port::PortDriver;
pub use tivaio_hal::Level;
