//! Pin attribute types
//!
//! Direction, pull resistor and function mode of a pin, plus the mapping
//! between modes and the numeric codes used at the API boundary.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Index of a GPIO port within the bank
pub type PortIndex = u8;

/// Flattened index of a configured pin (its position in the pin table)
pub type PinIndex = u8;

/// Level of a whole port or a channel group
pub type PortLevel = u8;

/// Pin direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    #[default]
    Input,
    Output,
}

/// Internal pull resistor of an input pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Resistor {
    /// Floating input
    #[default]
    Off,
    PullUp,
    PullDown,
}

/// Alternate function group
///
/// The value is the 4-bit code written into the pin's field of the port
/// control register. Which peripheral signal a group selects depends on
/// the pin; see [`super::signals`] for the named aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum MuxGroup {
    G1 = 1,
    G2 = 2,
    G3 = 3,
    G4 = 4,
    G5 = 5,
    G6 = 6,
    G7 = 7,
    G8 = 8,
    G9 = 9,
    G14 = 14,
}

impl MuxGroup {
    /// Port control code of the group
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decode a port control code
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(MuxGroup::G1),
            2 => Some(MuxGroup::G2),
            3 => Some(MuxGroup::G3),
            4 => Some(MuxGroup::G4),
            5 => Some(MuxGroup::G5),
            6 => Some(MuxGroup::G6),
            7 => Some(MuxGroup::G7),
            8 => Some(MuxGroup::G8),
            9 => Some(MuxGroup::G9),
            14 => Some(MuxGroup::G14),
            _ => None,
        }
    }
}

/// Function mode of a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PinMode {
    /// Plain digital I/O driven by the data register
    #[default]
    Gpio,
    /// Peripheral signal routed through the function multiplexer
    Alternate(MuxGroup),
    /// ADC input
    Adc,
    /// Analog comparator input
    AnalogComparator,
    /// Other analog signals (USB PHY lines)
    Analog,
}

/// Mode code of [`PinMode::Gpio`]
pub const GPIO_MODE_CODE: u8 = 0;
/// Mode code of [`PinMode::Adc`]
pub const ADC_MODE_CODE: u8 = 10;
/// Mode code of [`PinMode::AnalogComparator`]
pub const ANALOG_COMPARATOR_MODE_CODE: u8 = 11;
/// Mode code of [`PinMode::Analog`]
pub const ANALOG_MODE_CODE: u8 = 12;

impl PinMode {
    /// Numeric mode code
    ///
    /// Alternate modes use their mux group code; the analog families use
    /// codes 10-12, which never reach the port control register.
    pub const fn code(self) -> u8 {
        match self {
            PinMode::Gpio => GPIO_MODE_CODE,
            PinMode::Alternate(group) => group.code(),
            PinMode::Adc => ADC_MODE_CODE,
            PinMode::AnalogComparator => ANALOG_COMPARATOR_MODE_CODE,
            PinMode::Analog => ANALOG_MODE_CODE,
        }
    }

    /// Decode a numeric mode code
    ///
    /// Returns `None` for 13 and anything above 14.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            GPIO_MODE_CODE => Some(PinMode::Gpio),
            ADC_MODE_CODE => Some(PinMode::Adc),
            ANALOG_COMPARATOR_MODE_CODE => Some(PinMode::AnalogComparator),
            ANALOG_MODE_CODE => Some(PinMode::Analog),
            _ => match MuxGroup::from_code(code) {
                Some(group) => Some(PinMode::Alternate(group)),
                None => None,
            },
        }
    }

    /// Check if the mode belongs to an analog family
    pub const fn is_analog(self) -> bool {
        matches!(
            self,
            PinMode::Adc | PinMode::AnalogComparator | PinMode::Analog
        )
    }

    /// Code written into the port control register for this mode
    pub const fn mux_code(self) -> u8 {
        match self {
            PinMode::Alternate(group) => group.code(),
            _ => 0,
        }
    }
}

impl TryFrom<u8> for PinMode {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        PinMode::from_code(code).ok_or(code)
    }
}

impl From<PinMode> for u8 {
    fn from(mode: PinMode) -> Self {
        mode.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_codes_roundtrip() {
        for code in 0..=u8::MAX {
            match PinMode::from_code(code) {
                Some(mode) => assert_eq!(mode.code(), code),
                None => assert!(code == 13 || code > 14, "code {} rejected", code),
            }
        }
    }

    #[test]
    fn test_invalid_mode_codes() {
        assert_eq!(PinMode::from_code(13), None);
        assert_eq!(PinMode::from_code(15), None);
        assert_eq!(PinMode::try_from(200), Err(200));
    }

    #[test]
    fn test_analog_families() {
        assert!(PinMode::Adc.is_analog());
        assert!(PinMode::AnalogComparator.is_analog());
        assert!(PinMode::Analog.is_analog());
        assert!(!PinMode::Gpio.is_analog());
        assert!(!PinMode::Alternate(MuxGroup::G3).is_analog());
    }

    #[test]
    fn test_mux_code() {
        assert_eq!(PinMode::Gpio.mux_code(), 0);
        assert_eq!(PinMode::Adc.mux_code(), 0);
        assert_eq!(PinMode::Alternate(MuxGroup::G8).mux_code(), 8);
        assert_eq!(PinMode::Alternate(MuxGroup::G14).mux_code(), 14);
    }
}
