//! Configuration types
//!
//! Pin configuration records and channel group descriptors. Tables of
//! these are plain `const` data supplied by the board crate.

pub mod pins;
pub mod signals;
pub mod types;

pub use pins::*;
pub use types::*;
