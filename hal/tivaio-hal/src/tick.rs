//! Periodic tick source
//!
//! A hardware timer that invokes a single callback once per period. Higher
//! layers use it as their millisecond time base; the GPIO drivers do not
//! depend on it.

/// Periodic timer with one callback slot
pub trait TickSource {
    /// Install the function called on every tick, replacing any previous one
    fn set_callback(&mut self, callback: fn());

    /// Start counting
    fn start(&mut self);

    /// Stop counting
    fn stop(&mut self);

    /// Enable the tick interrupt
    fn enable_interrupt(&mut self);

    /// Disable the tick interrupt
    ///
    /// The counter keeps running; only callback delivery stops.
    fn disable_interrupt(&mut self);
}
