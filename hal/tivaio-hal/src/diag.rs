//! Development error reporting
//!
//! The drivers validate their arguments up front and report every violated
//! precondition to a [`DiagnosticSink`] as a
//! `(module, instance, service, error)` tuple. Reporting never aborts the
//! caller; the rejected operation simply has no effect.

/// Vendor id carried in version info and diagnostics
pub const VENDOR_ID: u16 = 1000;

/// Driver modules that report diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModuleId {
    /// Pin configuration driver
    Port,
    /// Channel access driver
    Dio,
}

impl ModuleId {
    /// Numeric module id
    pub const fn id(self) -> u16 {
        match self {
            ModuleId::Port => 124,
            ModuleId::Dio => 120,
        }
    }
}

/// Public driver services
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ServiceId {
    PortInit,
    PortSetPinDirection,
    PortRefreshPortDirection,
    PortGetVersionInfo,
    PortSetPinMode,
    DioReadChannel,
    DioWriteChannel,
    DioReadPort,
    DioWritePort,
    DioReadChannelGroup,
    DioWriteChannelGroup,
    DioFlipChannel,
    DioGetVersionInfo,
}

impl ServiceId {
    /// Numeric service id within the owning module
    pub const fn id(self) -> u8 {
        match self {
            ServiceId::PortInit => 0x00,
            ServiceId::PortSetPinDirection => 0x01,
            ServiceId::PortRefreshPortDirection => 0x02,
            ServiceId::PortGetVersionInfo => 0x03,
            ServiceId::PortSetPinMode => 0x04,
            ServiceId::DioReadChannel => 0x00,
            ServiceId::DioWriteChannel => 0x01,
            ServiceId::DioReadPort => 0x02,
            ServiceId::DioWritePort => 0x03,
            ServiceId::DioReadChannelGroup => 0x04,
            ServiceId::DioWriteChannelGroup => 0x05,
            ServiceId::DioFlipChannel => 0x11,
            ServiceId::DioGetVersionInfo => 0x12,
        }
    }

    /// Module that owns the service
    pub const fn module(self) -> ModuleId {
        match self {
            ServiceId::PortInit
            | ServiceId::PortSetPinDirection
            | ServiceId::PortRefreshPortDirection
            | ServiceId::PortGetVersionInfo
            | ServiceId::PortSetPinMode => ModuleId::Port,
            _ => ModuleId::Dio,
        }
    }
}

/// Precondition violations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorKind {
    /// Service called before the port table was applied
    Uninitialized,
    /// Absent or empty configuration table
    InvalidConfig,
    /// Pin/channel index outside the configured table
    InvalidPin,
    /// Port index outside the bank
    InvalidPort,
    /// Channel group whose mask does not fit the port
    InvalidGroup,
    /// Required descriptor argument absent
    InvalidPointer,
    /// Runtime direction change on a fixed-direction pin
    DirectionNotChangeable,
    /// Runtime mode change on a fixed-mode pin
    ModeNotChangeable,
    /// Mode code outside the valid set
    InvalidMode,
}

/// Code for kinds a module never raises
pub const NO_CODE: u8 = 0xFF;

impl ErrorKind {
    /// Error code as reported by `module`
    ///
    /// Kinds the module never raises map to [`NO_CODE`].
    pub const fn code(self, module: ModuleId) -> u8 {
        match module {
            ModuleId::Port => match self {
                ErrorKind::InvalidPin | ErrorKind::InvalidPort => 0x0A,
                ErrorKind::DirectionNotChangeable => 0x0B,
                ErrorKind::InvalidConfig => 0x0C,
                ErrorKind::InvalidMode => 0x0D,
                ErrorKind::ModeNotChangeable => 0x0E,
                ErrorKind::Uninitialized => 0x0F,
                ErrorKind::InvalidPointer => 0x10,
                ErrorKind::InvalidGroup => NO_CODE,
            },
            ModuleId::Dio => match self {
                ErrorKind::InvalidPin => 0x0A,
                ErrorKind::InvalidConfig => 0x10,
                ErrorKind::InvalidPort => 0x14,
                ErrorKind::InvalidGroup => 0x1F,
                ErrorKind::InvalidPointer => 0x20,
                ErrorKind::Uninitialized => 0xF0,
                ErrorKind::DirectionNotChangeable
                | ErrorKind::ModeNotChangeable
                | ErrorKind::InvalidMode => NO_CODE,
            },
        }
    }
}

/// Receiver of development error reports
///
/// Called synchronously from whatever context invoked the failing service,
/// including interrupt handlers. Implementations must not block.
pub trait DiagnosticSink {
    /// Report one violated precondition
    fn report(&self, module: ModuleId, instance: u8, service: ServiceId, error: ErrorKind);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn report(&self, module: ModuleId, instance: u8, service: ServiceId, error: ErrorKind) {
        (**self).report(module, instance, service, error)
    }
}

/// Sink that discards every report
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&self, _module: ModuleId, _instance: u8, _service: ServiceId, _error: ErrorKind) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_error_codes() {
        assert_eq!(ErrorKind::InvalidPin.code(ModuleId::Port), 0x0A);
        assert_eq!(ErrorKind::DirectionNotChangeable.code(ModuleId::Port), 0x0B);
        assert_eq!(ErrorKind::InvalidConfig.code(ModuleId::Port), 0x0C);
        assert_eq!(ErrorKind::InvalidMode.code(ModuleId::Port), 0x0D);
        assert_eq!(ErrorKind::ModeNotChangeable.code(ModuleId::Port), 0x0E);
        assert_eq!(ErrorKind::Uninitialized.code(ModuleId::Port), 0x0F);
        assert_eq!(ErrorKind::InvalidGroup.code(ModuleId::Port), NO_CODE);
    }

    #[test]
    fn test_dio_error_codes() {
        assert_eq!(ErrorKind::InvalidPin.code(ModuleId::Dio), 0x0A);
        assert_eq!(ErrorKind::InvalidPort.code(ModuleId::Dio), 0x14);
        assert_eq!(ErrorKind::InvalidPointer.code(ModuleId::Dio), 0x20);
        assert_eq!(ErrorKind::Uninitialized.code(ModuleId::Dio), 0xF0);
        assert_eq!(ErrorKind::InvalidMode.code(ModuleId::Dio), NO_CODE);
    }

    #[test]
    fn test_service_ids() {
        assert_eq!(ServiceId::PortSetPinMode.id(), 0x04);
        assert_eq!(ServiceId::PortSetPinMode.module(), ModuleId::Port);
        assert_eq!(ServiceId::DioFlipChannel.id(), 0x11);
        assert_eq!(ServiceId::DioFlipChannel.module(), ModuleId::Dio);
        assert_eq!(ModuleId::Port.id(), 124);
        assert_eq!(ModuleId::Dio.id(), 120);
    }
}
