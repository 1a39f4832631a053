//! Status LED
//!
//! An LED on a GPIO output, wired either between pin and ground
//! (active-high) or between supply and pin (active-low).

use tivaio_hal::OutputPin;

/// LED on a digital output
pub struct Led<P> {
    pin: P,
    /// If true, LED on = pin low
    inverted: bool,
}

impl<P: OutputPin> Led<P> {
    /// Create a new LED driver
    ///
    /// The pin keeps its current level, so an LED lit by the boot
    /// configuration stays lit.
    pub fn new(pin: P, inverted: bool) -> Self {
        Self { pin, inverted }
    }

    /// Create an LED that lights when the pin is high
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Create an LED that lights when the pin is low
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Turn the LED on or off
    pub fn set(&mut self, on: bool) {
        if on != self.inverted {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }

    /// Turn the LED on
    pub fn on(&mut self) {
        self.set(true);
    }

    /// Turn the LED off
    pub fn off(&mut self) {
        self.set(false);
    }

    /// Invert the LED
    pub fn toggle(&mut self) {
        self.pin.toggle();
    }

    /// Check if the LED is lit, as read back from the pin
    pub fn is_on(&self) -> bool {
        self.pin.is_set_high() != self.inverted
    }

    /// Release the pin
    pub fn free(self) -> P {
        self.pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock GPIO pin for testing
    struct MockPin {
        high: bool,
    }

    impl MockPin {
        fn new(high: bool) -> Self {
            Self { high }
        }
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn toggle(&mut self) {
            self.high = !self.high;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_active_high_led() {
        let mut led = Led::new_active_high(MockPin::new(false));
        assert!(!led.is_on());

        led.on();
        assert!(led.is_on());
        assert!(led.pin.is_set_high());

        led.toggle();
        assert!(!led.is_on());
        assert!(!led.pin.is_set_high());
    }

    #[test]
    fn test_active_low_led() {
        // Pin high = LED dark for active-low
        let mut led = Led::new_active_low(MockPin::new(true));
        assert!(!led.is_on());

        led.on();
        assert!(led.is_on());
        assert!(!led.pin.is_set_high());

        led.off();
        assert!(led.pin.is_set_high());
    }

    #[test]
    fn test_keeps_boot_level() {
        let led = Led::new_active_high(MockPin::new(true));
        assert!(led.is_on());
        assert!(led.free().high);
    }

    #[test]
    fn test_led_on_dio_channel() {
        use tivaio_core::sim::{RecordingSink, SimBank};
        use tivaio_core::{PinConfig, PortDriver};
        use tivaio_hal::Level;

        static PINS: [PinConfig; 1] = [PinConfig::output(5, 1, Level::High)];
        let sink = RecordingSink::new();
        let mut port = PortDriver::new(SimBank::new(), &sink);
        port.init(&PINS);

        let mut led = Led::new_active_high(port.dio().channel(0));
        assert!(led.is_on());
        led.toggle();
        assert!(!led.is_on());
        assert_eq!(port.dio().read_channel(0), Level::Low);
        assert!(sink.is_empty());
    }
}
