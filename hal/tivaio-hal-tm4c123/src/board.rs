//! EK-TM4C123GXL LaunchPad configuration
//!
//! Every usable pin is configured as GPIO. The RGB LED lines (PF1-PF3) are
//! outputs with the red LED lit at boot; everything else is an input with
//! the pull-up enabled, except PB1/PB5 which are left floating. PC0-PC3
//! carry JTAG and are not part of the table.

use tivaio_core::config::{PinConfig, PinIndex, Resistor};
use tivaio_hal::Level;

use crate::systick::{ClockSource, SysTickConfig, RELOAD_VALUE_1MS};

const A: u8 = 0;
const B: u8 = 1;
const C: u8 = 2;
const D: u8 = 3;
const E: u8 = 4;
const F: u8 = 5;

const fn pulled(port: u8, bit: u8) -> PinConfig {
    PinConfig::with_pullup(port, bit)
}

const fn floating(port: u8, bit: u8) -> PinConfig {
    PinConfig::input(port, bit).with_resistor(Resistor::Off)
}

/// Pin table of the LaunchPad, indexed by channel id
pub static LAUNCHPAD_PINS: [PinConfig; 39] = [
    // Port A
    pulled(A, 0),
    pulled(A, 1),
    pulled(A, 2),
    pulled(A, 3),
    pulled(A, 4),
    pulled(A, 5),
    pulled(A, 6),
    pulled(A, 7),
    // Port B
    pulled(B, 0),
    floating(B, 1),
    pulled(B, 2),
    pulled(B, 3),
    pulled(B, 4),
    floating(B, 5),
    pulled(B, 6),
    pulled(B, 7),
    // Port C, JTAG on PC0-3
    pulled(C, 4),
    pulled(C, 5),
    pulled(C, 6),
    pulled(C, 7),
    // Port D
    pulled(D, 0),
    pulled(D, 1),
    pulled(D, 2),
    pulled(D, 3),
    pulled(D, 4),
    pulled(D, 5),
    pulled(D, 6),
    pulled(D, 7),
    // Port E
    pulled(E, 0),
    pulled(E, 1),
    pulled(E, 2),
    pulled(E, 3),
    pulled(E, 4),
    pulled(E, 5),
    // Port F
    pulled(F, 0),
    PinConfig::output(F, 1, Level::High),
    PinConfig::output(F, 2, Level::Low),
    PinConfig::output(F, 3, Level::Low),
    pulled(F, 4),
];

/// User switch 2 (PF0, active low)
pub const SW2: PinIndex = 34;
/// Red LED (PF1)
pub const LED_RED: PinIndex = 35;
/// Blue LED (PF2)
pub const LED_BLUE: PinIndex = 36;
/// Green LED (PF3)
pub const LED_GREEN: PinIndex = 37;
/// User switch 1 (PF4, active low)
pub const SW1: PinIndex = 38;

/// Primary status LED
pub const LED1: PinIndex = LED_RED;

/// 1 ms tick from the system clock with the interrupt enabled
pub const SYSTICK_1MS: SysTickConfig = SysTickConfig {
    clock_source: ClockSource::System,
    interrupt: true,
    reload_value: RELOAD_VALUE_1MS,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpio::Tm4cGpio;
    use tivaio_core::config::{Direction, PinMode};
    use tivaio_core::sim::{RecordingSink, SimBank};
    use tivaio_core::PortDriver;
    use tivaio_hal::registers::{GpioBank, Register};

    fn pin(index: PinIndex) -> &'static PinConfig {
        &LAUNCHPAD_PINS[usize::from(index)]
    }

    #[test]
    fn test_table_shape() {
        assert!(LAUNCHPAD_PINS.iter().all(|p| p.mode == PinMode::Gpio));
        assert!(LAUNCHPAD_PINS
            .iter()
            .all(|p| !Tm4cGpio::is_reserved(p.port, p.bit)));
        let outputs = LAUNCHPAD_PINS
            .iter()
            .filter(|p| p.direction == Direction::Output)
            .count();
        assert_eq!(outputs, 3);
    }

    #[test]
    fn test_named_channels() {
        assert_eq!((pin(LED1).port, pin(LED1).bit), (F, 1));
        assert_eq!(pin(LED1).initial_level, Level::High);
        assert_eq!((pin(SW1).port, pin(SW1).bit), (F, 4));
        assert_eq!(pin(SW1).resistor, Resistor::PullUp);
        assert_eq!((pin(SW2).port, pin(SW2).bit), (F, 0));
        assert_eq!((pin(LED_GREEN).port, pin(LED_GREEN).bit), (F, 3));
        assert_eq!(pin(9).resistor, Resistor::Off);
        assert_eq!(pin(13).resistor, Resistor::Off);
    }

    #[test]
    fn test_apply_to_simulated_bank() {
        let sink = RecordingSink::new();
        let mut port = PortDriver::new(SimBank::new(), &sink);
        port.init(&LAUNCHPAD_PINS);

        let bank = port.bank();
        assert!(sink.is_empty());
        assert!((0..6).all(|p| bank.clock_enabled(p)));
        // PF0 needs the unlock sequence for its pull-up to stick
        assert!(bank.bit(F, Register::PullUp, 0));
        assert!(bank.bit(D, Register::PullUp, 7));
        assert_eq!(bank.reg(C, Register::DigitalEnable), 0xF0);
        assert_eq!(bank.reg(F, Register::Dir), 0b0000_1110);

        let dio = port.dio();
        assert_eq!(dio.read_channel(LED1), Level::High);
        bank.drive(F, 4, true);
        assert_eq!(dio.read_channel(SW1), Level::High);
    }

    #[test]
    fn test_systick_config() {
        assert_eq!(SYSTICK_1MS.reload_value, 16_000);
        assert!(SYSTICK_1MS.interrupt);
        assert_eq!(SYSTICK_1MS.clock_source, ClockSource::System);
    }
}
