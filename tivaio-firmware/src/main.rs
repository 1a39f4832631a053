//! Tivaio - LaunchPad demo firmware
//!
//! Applies the LaunchPad pin table, starts a 1 ms SysTick and then:
//! - blinks the red LED every 500 ms
//! - keeps it lit while SW1 is held
//! - logs every debounced SW1 event

#![no_std]
#![no_main]

use core::sync::atomic::{AtomicU32, Ordering};

use cortex_m_rt::{entry, exception};
use defmt::*;
use {defmt_rtt as _, panic_probe as _};

use tivaio_core::PortDriver;
use tivaio_drivers::{Button, ButtonEvent, Led};
use tivaio_hal::TickSource;
use tivaio_hal_tm4c123::{board, systick, DefmtSink, SysTickTimer, Tm4cGpio};

/// LED blink half-period
const BLINK_PERIOD_MS: u32 = 500;

/// SysTick exception priority (0-7)
const TICK_PRIORITY: u8 = 3;

/// Milliseconds since the tick started
static TICKS: AtomicU32 = AtomicU32::new(0);

fn on_tick() {
    TICKS.fetch_add(1, Ordering::Relaxed);
}

#[entry]
fn main() -> ! {
    info!("Tivaio firmware starting...");

    let mut cp = unwrap!(cortex_m::Peripherals::take());
    let gpio = unwrap!(Tm4cGpio::take());

    let mut port = PortDriver::new(gpio, DefmtSink);
    port.init(&board::LAUNCHPAD_PINS);

    let version = port.version_info();
    info!(
        "Port driver {}.{}.{} ready, {} pins",
        version.sw_major_version,
        version.sw_minor_version,
        version.sw_patch_version,
        board::LAUNCHPAD_PINS.len()
    );

    let dio = port.dio();
    let mut led = Led::new_active_high(dio.channel(board::LED1));
    let mut button = Button::new_active_low(dio.channel(board::SW1));

    let mut tick = SysTickTimer::new(cp.SYST, &board::SYSTICK_1MS, 1);
    tick.set_priority(&mut cp.SCB, TICK_PRIORITY);
    tick.set_callback(on_tick);
    info!("SysTick running, 1 ms period");

    let mut last = TICKS.load(Ordering::Relaxed);
    let mut since_toggle = 0u32;

    loop {
        cortex_m::asm::wfi();

        let now = TICKS.load(Ordering::Relaxed);
        let elapsed = now.wrapping_sub(last);
        if elapsed == 0 {
            continue;
        }
        last = now;

        // The debouncer counts ticks, so catch up on any that were missed
        for _ in 0..elapsed {
            if let Some(event) = button.update() {
                info!("SW1 {}", event);
                match event {
                    ButtonEvent::Pressed => led.on(),
                    ButtonEvent::Released => {
                        led.off();
                        since_toggle = 0;
                    }
                }
            }
        }

        if button.is_held() {
            continue;
        }

        since_toggle += elapsed;
        if since_toggle >= BLINK_PERIOD_MS {
            since_toggle -= BLINK_PERIOD_MS;
            led.toggle();
            trace!("LED1 {}", led.is_on());
        }
    }
}

#[exception]
fn SysTick() {
    systick::dispatch();
}
