//! Board-agnostic peripheral drivers
//!
//! Small drivers built on the `tivaio-hal` pin traits, so they work with
//! configured Dio channels as well as any other pin implementation:
//!
//! - Status LEDs (active-high or active-low)
//! - Push buttons with tick-driven debouncing

#![no_std]
#![deny(unsafe_code)]

pub mod button;
pub mod led;

pub use button::{Button, ButtonEvent};
pub use led::Led;
