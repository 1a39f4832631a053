//! Push button with debouncing
//!
//! [`Button::update`] is called once per tick. A level change is accepted
//! after it has been seen on `debounce_ticks` consecutive ticks; shorter
//! glitches are ignored.

use tivaio_hal::InputPin;

/// Default number of stable ticks before a change is accepted
pub const DEFAULT_DEBOUNCE_TICKS: u8 = 20;

/// Debounced button transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    Pressed,
    Released,
}

/// Push button on a digital input
pub struct Button<P> {
    pin: P,
    /// If true, pressed = pin low (switch to ground with pull-up)
    active_low: bool,
    debounce_ticks: u8,
    /// Debounced state
    pressed: bool,
    /// Consecutive ticks the raw state has differed from `pressed`
    count: u8,
}

impl<P: InputPin> Button<P> {
    /// Create a new button
    ///
    /// A `debounce_ticks` of 0 is treated as 1. The button starts released.
    pub fn new(pin: P, active_low: bool, debounce_ticks: u8) -> Self {
        Self {
            pin,
            active_low,
            debounce_ticks: debounce_ticks.max(1),
            pressed: false,
            count: 0,
        }
    }

    /// Create a button that pulls the pin to ground when pressed
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true, DEFAULT_DEBOUNCE_TICKS)
    }

    /// Create a button that drives the pin high when pressed
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false, DEFAULT_DEBOUNCE_TICKS)
    }

    /// Raw (undebounced) state
    pub fn is_pressed(&self) -> bool {
        self.pin.is_high() != self.active_low
    }

    /// Debounced state
    pub fn is_held(&self) -> bool {
        self.pressed
    }

    /// Sample the pin, returning an event when the debounced state changes
    pub fn update(&mut self) -> Option<ButtonEvent> {
        if self.is_pressed() == self.pressed {
            self.count = 0;
            return None;
        }

        self.count = self.count.saturating_add(1);
        if self.count < self.debounce_ticks {
            return None;
        }

        self.count = 0;
        self.pressed = !self.pressed;
        Some(if self.pressed {
            ButtonEvent::Pressed
        } else {
            ButtonEvent::Released
        })
    }

    /// Release the pin
    pub fn free(self) -> P {
        self.pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    /// Mock input whose level is set by the test
    struct MockPin<'a> {
        high: &'a Cell<bool>,
    }

    impl InputPin for MockPin<'_> {
        fn is_high(&self) -> bool {
            self.high.get()
        }
    }

    #[test]
    fn test_active_low_raw_state() {
        let level = Cell::new(true);
        let button = Button::new_active_low(MockPin { high: &level });
        assert!(!button.is_pressed());
        level.set(false);
        assert!(button.is_pressed());
    }

    #[test]
    fn test_debounced_press_and_release() {
        let level = Cell::new(true);
        let mut button = Button::new(MockPin { high: &level }, true, 3);

        level.set(false);
        assert_eq!(button.update(), None);
        assert_eq!(button.update(), None);
        assert_eq!(button.update(), Some(ButtonEvent::Pressed));
        assert!(button.is_held());
        assert_eq!(button.update(), None);

        level.set(true);
        assert_eq!(button.update(), None);
        assert_eq!(button.update(), None);
        assert_eq!(button.update(), Some(ButtonEvent::Released));
        assert!(!button.is_held());
    }

    #[test]
    fn test_glitch_ignored() {
        let level = Cell::new(false);
        let mut button = Button::new(MockPin { high: &level }, false, 3);

        level.set(true);
        assert_eq!(button.update(), None);
        assert_eq!(button.update(), None);
        level.set(false);
        assert_eq!(button.update(), None);
        level.set(true);
        assert_eq!(button.update(), None);
        assert!(!button.is_held());
    }

    #[test]
    fn test_zero_debounce_is_one_tick() {
        let level = Cell::new(true);
        let mut button = Button::new(MockPin { high: &level }, false, 0);
        assert_eq!(button.update(), Some(ButtonEvent::Pressed));
    }
}
