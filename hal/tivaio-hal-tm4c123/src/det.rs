//! Diagnostic sink that logs over defmt

use tivaio_hal::diag::{DiagnosticSink, ErrorKind, ModuleId, ServiceId};

/// Logs every diagnostic report as a warning
#[derive(Debug, Clone, Copy, Default)]
pub struct DefmtSink;

impl DiagnosticSink for DefmtSink {
    fn report(&self, module: ModuleId, instance: u8, service: ServiceId, error: ErrorKind) {
        defmt::warn!(
            "{}[{}] service {=u8:#04x}: {} (code {=u8:#04x})",
            module,
            instance,
            service.id(),
            error,
            error.code(module)
        );
    }
}
