//! SysTick periodic tick driver
//!
//! Wraps the core SysTick timer as a [`TickSource`]. The installed callback
//! runs from the `SysTick` exception; the firmware's handler must call
//! [`dispatch`].

use core::cell::Cell;

use cortex_m::interrupt::{self, Mutex};
use cortex_m::peripheral::scb::SystemHandler;
use cortex_m::peripheral::syst::SystClkSource;
use cortex_m::peripheral::{SCB, SYST};
use tivaio_hal::TickSource;

/// Reload value for a 1 ms period at the 16 MHz system clock
pub const RELOAD_VALUE_1MS: u32 = 16_000;

/// Largest value the 24-bit reload register holds
pub const MAX_RELOAD: u32 = 0x00FF_FFFF;

/// Number of implemented priority bits
pub const PRIORITY_BITS: u8 = 3;

static CALLBACK: Mutex<Cell<Option<fn()>>> = Mutex::new(Cell::new(None));

/// SysTick clock source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockSource {
    /// Precision internal oscillator divided by 4
    PioscDiv4,
    /// System clock
    System,
}

/// SysTick configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SysTickConfig {
    pub clock_source: ClockSource,
    /// Enable the tick interrupt at init
    pub interrupt: bool,
    /// Counts per base period
    pub reload_value: u32,
}

/// Compute the reload register value for `periods` base periods
///
/// Saturates at the 24-bit register width.
pub const fn reload_for(reload_value: u32, periods: u32) -> u32 {
    let reload = reload_value.saturating_sub(1).saturating_mul(periods);
    if reload > MAX_RELOAD {
        MAX_RELOAD
    } else {
        reload
    }
}

/// Register value of a 3-bit exception priority
pub const fn priority_value(priority: u8) -> u8 {
    (priority & ((1 << PRIORITY_BITS) - 1)) << (8 - PRIORITY_BITS)
}

/// SysTick timer driving a single callback
pub struct SysTickTimer {
    syst: SYST,
}

impl SysTickTimer {
    /// Configure SysTick for a period of `periods` base periods and start it
    pub fn new(mut syst: SYST, config: &SysTickConfig, periods: u32) -> Self {
        syst.disable_counter();
        syst.set_clock_source(match config.clock_source {
            ClockSource::PioscDiv4 => SystClkSource::External,
            ClockSource::System => SystClkSource::Core,
        });
        syst.set_reload(reload_for(config.reload_value, periods));
        syst.clear_current();
        if config.interrupt {
            syst.enable_interrupt();
        } else {
            syst.disable_interrupt();
        }
        syst.enable_counter();

        #[cfg(feature = "defmt")]
        defmt::debug!("SysTick: reload {}", reload_for(config.reload_value, periods));

        Self { syst }
    }

    /// Set the SysTick exception priority (0-7, lower is more urgent)
    pub fn set_priority(&mut self, scb: &mut SCB, priority: u8) {
        // SAFETY: the tick callback holds no lock shared with code that
        // relies on SysTick's previous priority.
        unsafe { scb.set_priority(SystemHandler::SysTick, priority_value(priority)) };
    }

    /// Release the underlying peripheral
    pub fn free(mut self) -> SYST {
        self.syst.disable_interrupt();
        self.syst.disable_counter();
        self.syst
    }
}

impl TickSource for SysTickTimer {
    fn set_callback(&mut self, callback: fn()) {
        interrupt::free(|cs| CALLBACK.borrow(cs).set(Some(callback)));
    }

    fn start(&mut self) {
        self.syst.enable_counter();
    }

    fn stop(&mut self) {
        self.syst.disable_counter();
    }

    fn enable_interrupt(&mut self) {
        self.syst.enable_interrupt();
    }

    fn disable_interrupt(&mut self) {
        self.syst.disable_interrupt();
    }
}

/// Run the installed tick callback
///
/// Call from the `SysTick` exception handler. Does nothing until a callback
/// is installed.
pub fn dispatch() {
    if let Some(callback) = interrupt::free(|cs| CALLBACK.borrow(cs).get()) {
        callback();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reload() {
        assert_eq!(reload_for(RELOAD_VALUE_1MS, 1), 15_999);
        assert_eq!(reload_for(RELOAD_VALUE_1MS, 10), 159_990);
        assert_eq!(reload_for(RELOAD_VALUE_1MS, 10_000), MAX_RELOAD);
        assert_eq!(reload_for(0, 5), 0);
    }

    #[test]
    fn test_priority_masked() {
        assert_eq!(priority_value(0), 0x00);
        assert_eq!(priority_value(3), 0x60);
        assert_eq!(priority_value(7), 0xE0);
        assert_eq!(priority_value(9), priority_value(1));
    }
}
