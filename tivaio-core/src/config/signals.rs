//! Named peripheral signals
//!
//! TM4C123 signal names mapped onto the pin mode that routes them. Many
//! signals share a mux group; the pin they appear on decides which one is
//! selected. Signals available in two groups carry a `_G<n>` suffix.

use super::types::{MuxGroup, PinMode};

const fn alt(group: MuxGroup) -> PinMode {
    PinMode::Alternate(group)
}

pub const GPIO: PinMode = PinMode::Gpio;

// Group 1: UART, SSI3, debug
pub const U0RX: PinMode = alt(MuxGroup::G1);
pub const U0TX: PinMode = alt(MuxGroup::G1);
pub const U1RX_G1: PinMode = alt(MuxGroup::G1);
pub const U1TX_G1: PinMode = alt(MuxGroup::G1);
pub const U1RTS: PinMode = alt(MuxGroup::G1);
pub const U1CTS_G1: PinMode = alt(MuxGroup::G1);
pub const U2RX: PinMode = alt(MuxGroup::G1);
pub const U2TX: PinMode = alt(MuxGroup::G1);
pub const U3RX: PinMode = alt(MuxGroup::G1);
pub const U3TX: PinMode = alt(MuxGroup::G1);
pub const U4RX: PinMode = alt(MuxGroup::G1);
pub const U4TX: PinMode = alt(MuxGroup::G1);
pub const U5RX: PinMode = alt(MuxGroup::G1);
pub const U5TX: PinMode = alt(MuxGroup::G1);
pub const U6RX: PinMode = alt(MuxGroup::G1);
pub const U6TX: PinMode = alt(MuxGroup::G1);
pub const U7RX: PinMode = alt(MuxGroup::G1);
pub const U7TX: PinMode = alt(MuxGroup::G1);
pub const SSI3CLK: PinMode = alt(MuxGroup::G1);
pub const SSI3FSS: PinMode = alt(MuxGroup::G1);
pub const SSI3RX: PinMode = alt(MuxGroup::G1);
pub const SSI3TX: PinMode = alt(MuxGroup::G1);
pub const SWCLK: PinMode = alt(MuxGroup::G1);
pub const SWDIO: PinMode = alt(MuxGroup::G1);
pub const TDI: PinMode = alt(MuxGroup::G1);
pub const SWO: PinMode = alt(MuxGroup::G1);

// Group 2: SSI0-2
pub const SSI0CLK: PinMode = alt(MuxGroup::G2);
pub const SSI0FSS: PinMode = alt(MuxGroup::G2);
pub const SSI0RX: PinMode = alt(MuxGroup::G2);
pub const SSI0TX: PinMode = alt(MuxGroup::G2);
pub const SSI1CLK: PinMode = alt(MuxGroup::G2);
pub const SSI1FSS: PinMode = alt(MuxGroup::G2);
pub const SSI1RX: PinMode = alt(MuxGroup::G2);
pub const SSI1TX: PinMode = alt(MuxGroup::G2);
pub const SSI2CLK: PinMode = alt(MuxGroup::G2);
pub const SSI2FSS: PinMode = alt(MuxGroup::G2);
pub const SSI2RX: PinMode = alt(MuxGroup::G2);
pub const SSI2TX: PinMode = alt(MuxGroup::G2);
pub const U1RX_G2: PinMode = alt(MuxGroup::G2);
pub const U1TX_G2: PinMode = alt(MuxGroup::G2);

// Group 3: I2C
pub const I2C0SCL: PinMode = alt(MuxGroup::G3);
pub const I2C0SDA: PinMode = alt(MuxGroup::G3);
pub const I2C1SCL: PinMode = alt(MuxGroup::G3);
pub const I2C1SDA: PinMode = alt(MuxGroup::G3);
pub const I2C2SCL: PinMode = alt(MuxGroup::G3);
pub const I2C2SDA: PinMode = alt(MuxGroup::G3);
pub const I2C3SCL: PinMode = alt(MuxGroup::G3);
pub const I2C3SDA: PinMode = alt(MuxGroup::G3);
pub const CAN0RX_G3: PinMode = alt(MuxGroup::G3);
pub const CAN0TX_G3: PinMode = alt(MuxGroup::G3);

// Group 4: PWM module 0
pub const M0PWM0: PinMode = alt(MuxGroup::G4);
pub const M0PWM1: PinMode = alt(MuxGroup::G4);
pub const M0PWM2: PinMode = alt(MuxGroup::G4);
pub const M0PWM3: PinMode = alt(MuxGroup::G4);
pub const M0PWM4: PinMode = alt(MuxGroup::G4);
pub const M0PWM5: PinMode = alt(MuxGroup::G4);
pub const M0PWM6: PinMode = alt(MuxGroup::G4);
pub const M0PWM7: PinMode = alt(MuxGroup::G4);
pub const M0FAULT0: PinMode = alt(MuxGroup::G4);

// Group 5: PWM module 1
pub const M1PWM0: PinMode = alt(MuxGroup::G5);
pub const M1PWM1: PinMode = alt(MuxGroup::G5);
pub const M1PWM2: PinMode = alt(MuxGroup::G5);
pub const M1PWM3: PinMode = alt(MuxGroup::G5);
pub const M1PWM4: PinMode = alt(MuxGroup::G5);
pub const M1PWM5: PinMode = alt(MuxGroup::G5);
pub const M1PWM6: PinMode = alt(MuxGroup::G5);
pub const M1PWM7: PinMode = alt(MuxGroup::G5);
pub const M1FAULT0: PinMode = alt(MuxGroup::G5);

// Group 6: quadrature encoders
pub const IDX0: PinMode = alt(MuxGroup::G6);
pub const PHA0: PinMode = alt(MuxGroup::G6);
pub const PHB0: PinMode = alt(MuxGroup::G6);
pub const IDX1: PinMode = alt(MuxGroup::G6);
pub const PHA1: PinMode = alt(MuxGroup::G6);
pub const PHB1: PinMode = alt(MuxGroup::G6);

// Group 7: timer capture/compare
pub const T0CCP0: PinMode = alt(MuxGroup::G7);
pub const T0CCP1: PinMode = alt(MuxGroup::G7);
pub const T1CCP0: PinMode = alt(MuxGroup::G7);
pub const T1CCP1: PinMode = alt(MuxGroup::G7);
pub const T2CCP0: PinMode = alt(MuxGroup::G7);
pub const T2CCP1: PinMode = alt(MuxGroup::G7);
pub const T3CCP0: PinMode = alt(MuxGroup::G7);
pub const T3CCP1: PinMode = alt(MuxGroup::G7);
pub const T4CCP0: PinMode = alt(MuxGroup::G7);
pub const T4CCP1: PinMode = alt(MuxGroup::G7);
pub const T5CCP0: PinMode = alt(MuxGroup::G7);
pub const T5CCP1: PinMode = alt(MuxGroup::G7);
pub const WT0CCP0: PinMode = alt(MuxGroup::G7);
pub const WT0CCP1: PinMode = alt(MuxGroup::G7);
pub const WT1CCP0: PinMode = alt(MuxGroup::G7);
pub const WT1CCP1: PinMode = alt(MuxGroup::G7);
pub const WT2CCP0: PinMode = alt(MuxGroup::G7);
pub const WT2CCP1: PinMode = alt(MuxGroup::G7);
pub const WT3CCP0: PinMode = alt(MuxGroup::G7);
pub const WT3CCP1: PinMode = alt(MuxGroup::G7);
pub const WT4CCP0: PinMode = alt(MuxGroup::G7);
pub const WT4CCP1: PinMode = alt(MuxGroup::G7);
pub const WT5CCP0: PinMode = alt(MuxGroup::G7);
pub const WT5CCP1: PinMode = alt(MuxGroup::G7);

// Group 8: CAN, UART1 flow control, USB control, NMI
pub const CAN0RX_G8: PinMode = alt(MuxGroup::G8);
pub const CAN0TX_G8: PinMode = alt(MuxGroup::G8);
pub const CAN1RX: PinMode = alt(MuxGroup::G8);
pub const CAN1TX: PinMode = alt(MuxGroup::G8);
pub const U1RTS_G8: PinMode = alt(MuxGroup::G8);
pub const U1CTS_G8: PinMode = alt(MuxGroup::G8);
pub const USB0EPEN: PinMode = alt(MuxGroup::G8);
pub const USB0PFLT: PinMode = alt(MuxGroup::G8);
pub const NMI: PinMode = alt(MuxGroup::G8);

// Group 9: comparator outputs
pub const C0O: PinMode = alt(MuxGroup::G9);
pub const C1O: PinMode = alt(MuxGroup::G9);

// Group 14: trace port
pub const TRCLK: PinMode = alt(MuxGroup::G14);
pub const TRD0: PinMode = alt(MuxGroup::G14);
pub const TRD1: PinMode = alt(MuxGroup::G14);

// Analog families
pub const AIN: PinMode = PinMode::Adc;
pub const C0_POSITIVE: PinMode = PinMode::AnalogComparator;
pub const C0_NEGATIVE: PinMode = PinMode::AnalogComparator;
pub const C1_POSITIVE: PinMode = PinMode::AnalogComparator;
pub const C1_NEGATIVE: PinMode = PinMode::AnalogComparator;
pub const USB0DM: PinMode = PinMode::Analog;
pub const USB0DP: PinMode = PinMode::Analog;
pub const USB0ID: PinMode = PinMode::Analog;
pub const USB0VBUS: PinMode = PinMode::Analog;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_share_codes() {
        assert_eq!(U0RX, U1RTS);
        assert_eq!(U0RX.code(), 1);
        assert_eq!(I2C1SCL.code(), 3);
        assert_eq!(M1PWM5.code(), 5);
        assert_eq!(CAN0RX_G3.code(), 3);
        assert_eq!(CAN0RX_G8.code(), 8);
        assert_eq!(TRD0.code(), 14);
        assert_eq!(USB0DM.code(), 12);
        assert!(USB0DM.is_analog());
    }
}
