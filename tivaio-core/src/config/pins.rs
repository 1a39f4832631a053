//! Pin and channel group descriptors
//!
//! A [`PinConfig`] describes one physical pin as it should look after
//! boot. The pin table is an ordered slice of them; a pin's position in the
//! table is its [`PinIndex`](super::PinIndex), which both the Port and Dio
//! drivers use as the channel id.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use tivaio_hal::registers::{PINS_PER_PORT, PORT_MASK};
use tivaio_hal::Level;

use super::types::{Direction, PinMode, PortIndex, Resistor};

/// Configuration of one physical pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinConfig {
    /// Port index (0 = A)
    pub port: PortIndex,
    /// Bit within the port (0-7)
    pub bit: u8,
    /// Direction applied at init
    pub direction: Direction,
    /// Pull resistor, applied to inputs only
    pub resistor: Resistor,
    /// Level driven at init, applied to outputs only
    pub initial_level: Level,
    /// Function mode applied at init
    pub mode: PinMode,
    /// Direction may be changed at runtime
    pub direction_changeable: bool,
    /// Mode may be changed at runtime
    pub mode_changeable: bool,
}

impl PinConfig {
    /// Create a GPIO input without pull resistor
    pub const fn input(port: PortIndex, bit: u8) -> Self {
        Self {
            port,
            bit,
            direction: Direction::Input,
            resistor: Resistor::Off,
            initial_level: Level::Low,
            mode: PinMode::Gpio,
            direction_changeable: true,
            mode_changeable: true,
        }
    }

    /// Create a GPIO output driven to `level` at init
    pub const fn output(port: PortIndex, bit: u8, level: Level) -> Self {
        Self {
            port,
            bit,
            direction: Direction::Output,
            resistor: Resistor::Off,
            initial_level: level,
            mode: PinMode::Gpio,
            direction_changeable: true,
            mode_changeable: true,
        }
    }

    /// Create a GPIO input with the internal pull-up enabled
    pub const fn with_pullup(port: PortIndex, bit: u8) -> Self {
        Self::input(port, bit).with_resistor(Resistor::PullUp)
    }

    /// Set the pull resistor
    pub const fn with_resistor(mut self, resistor: Resistor) -> Self {
        self.resistor = resistor;
        self
    }

    /// Set the function mode
    pub const fn with_mode(mut self, mode: PinMode) -> Self {
        self.mode = mode;
        self
    }

    /// Lock the direction against runtime changes
    pub const fn fixed_direction(mut self) -> Self {
        self.direction_changeable = false;
        self
    }

    /// Lock the mode against runtime changes
    pub const fn fixed_mode(mut self) -> Self {
        self.mode_changeable = false;
        self
    }

    /// Single-bit mask of the pin within its port
    pub const fn mask(&self) -> u8 {
        1 << (self.bit % PINS_PER_PORT)
    }
}

/// Reasons a channel group descriptor is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GroupError {
    /// Offset beyond the last bit of a port
    OffsetOutOfRange,
    /// Empty mask
    EmptyMask,
    /// Shifted mask spills past the top of the port
    MaskOverflow,
}

/// A contiguous run of bits within one port, accessed as a unit
///
/// Reads return `(port_data >> offset) & mask`; writes replace exactly the
/// bits in `mask << offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChannelGroup {
    /// Port index
    pub port: PortIndex,
    /// Position of the group's least significant bit
    pub offset: u8,
    /// Group mask, right-aligned
    pub mask: u8,
}

impl ChannelGroup {
    /// Create a validated channel group
    ///
    /// The port index is checked against the bank when the group is used.
    pub const fn new(port: PortIndex, offset: u8, mask: u8) -> Result<Self, GroupError> {
        let group = Self { port, offset, mask };
        match group.check() {
            Ok(()) => Ok(group),
            Err(e) => Err(e),
        }
    }

    /// Check that the shifted mask lies within the port
    pub const fn check(&self) -> Result<(), GroupError> {
        if self.offset >= PINS_PER_PORT {
            Err(GroupError::OffsetOutOfRange)
        } else if self.mask == 0 {
            Err(GroupError::EmptyMask)
        } else if ((self.mask as u32) << self.offset) & !PORT_MASK != 0 {
            Err(GroupError::MaskOverflow)
        } else {
            Ok(())
        }
    }

    /// Mask of the group in port position
    pub const fn port_mask(&self) -> u8 {
        ((self.mask as u32) << (self.offset % PINS_PER_PORT)) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MuxGroup;

    #[test]
    fn test_pin_config() {
        let pin = PinConfig::input(4, 2);
        assert_eq!(pin.direction, Direction::Input);
        assert_eq!(pin.resistor, Resistor::Off);
        assert_eq!(pin.mode, PinMode::Gpio);
        assert!(pin.direction_changeable);
        assert!(pin.mode_changeable);

        let led = PinConfig::output(5, 1, Level::High);
        assert_eq!(led.direction, Direction::Output);
        assert_eq!(led.initial_level, Level::High);
        assert_eq!(led.mask(), 0b10);

        let switch = PinConfig::with_pullup(5, 4);
        assert_eq!(switch.resistor, Resistor::PullUp);
    }

    #[test]
    fn test_builders() {
        const UART_RX: PinConfig = PinConfig::input(0, 0)
            .with_mode(PinMode::Alternate(MuxGroup::G1))
            .fixed_direction()
            .fixed_mode();

        assert_eq!(UART_RX.mode.code(), 1);
        assert!(!UART_RX.direction_changeable);
        assert!(!UART_RX.mode_changeable);
    }

    #[test]
    fn test_group_validation() {
        let group = ChannelGroup::new(1, 2, 0b11).unwrap();
        assert_eq!(group.port_mask(), 0b1100);

        assert_eq!(ChannelGroup::new(0, 8, 1), Err(GroupError::OffsetOutOfRange));
        assert_eq!(ChannelGroup::new(0, 0, 0), Err(GroupError::EmptyMask));
        assert_eq!(ChannelGroup::new(0, 7, 0b11), Err(GroupError::MaskOverflow));
        assert!(ChannelGroup::new(0, 0, 0xFF).is_ok());
        assert!(ChannelGroup::new(0, 7, 1).is_ok());
    }
}
