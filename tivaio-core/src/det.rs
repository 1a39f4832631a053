//! Development error detection
//!
//! Every public service starts by running its argument and state checks
//! through a [`Guard`]. All checks are evaluated and every violation is
//! reported; the service then performs its effect only if none failed.
//!
//! With the `dev-error-detect` feature disabled, checks are neither
//! evaluated nor reported and every guard passes.

use tivaio_hal::diag::{DiagnosticSink, ErrorKind, ServiceId};

/// Instance id reported with every diagnostic (single driver instance)
pub const INSTANCE_ID: u8 = 0;

/// Whether checks are compiled in
pub const ENABLED: bool = cfg!(feature = "dev-error-detect");

/// Collects the precondition results of one service call
pub struct Guard<'s, S: DiagnosticSink> {
    sink: &'s S,
    service: ServiceId,
    failed: bool,
}

impl<'s, S: DiagnosticSink> Guard<'s, S> {
    /// Start checking a call of `service`
    pub fn new(sink: &'s S, service: ServiceId) -> Self {
        Self {
            sink,
            service,
            failed: false,
        }
    }

    /// Check one precondition, reporting `error` if `ok` is false
    pub fn require(&mut self, ok: bool, error: ErrorKind) {
        if ENABLED && !ok {
            self.sink
                .report(self.service.module(), INSTANCE_ID, self.service, error);
            self.failed = true;
        }
    }

    /// Check a precondition computed lazily
    ///
    /// `check` is not run at all when checks are compiled out.
    pub fn require_with<F>(&mut self, check: F, error: ErrorKind)
    where
        F: FnOnce() -> bool,
    {
        if ENABLED {
            self.require(check(), error);
        }
    }

    /// True if no precondition failed
    pub fn passed(&self) -> bool {
        !self.failed
    }
}

#[cfg(all(test, feature = "dev-error-detect"))]
mod tests {
    use super::*;
    use crate::sim::RecordingSink;
    use tivaio_hal::diag::ModuleId;

    #[test]
    fn test_all_failures_reported() {
        let sink = RecordingSink::new();
        let mut guard = Guard::new(&sink, ServiceId::PortSetPinMode);
        guard.require(false, ErrorKind::InvalidPin);
        guard.require(true, ErrorKind::Uninitialized);
        guard.require(false, ErrorKind::InvalidMode);

        assert!(!guard.passed());
        assert_eq!(sink.len(), 2);
        let first = sink.get(0).unwrap();
        assert_eq!(first.module, ModuleId::Port);
        assert_eq!(first.instance, INSTANCE_ID);
        assert_eq!(first.error, ErrorKind::InvalidPin);
        assert!(sink.contains(ServiceId::PortSetPinMode, ErrorKind::InvalidMode));
    }

    #[test]
    fn test_passing_guard_is_silent() {
        let sink = RecordingSink::new();
        let mut guard = Guard::new(&sink, ServiceId::DioReadChannel);
        guard.require_with(|| true, ErrorKind::InvalidPin);
        assert!(guard.passed());
        assert!(sink.is_empty());
    }
}
