//! Port driver
//!
//! Applies the pin table at boot and services runtime direction and mode
//! changes. The driver owns the register bank, the diagnostic sink and the
//! lifecycle state; channel access goes through the [`Dio`] view it hands
//! out.
//!
//! Per-pin init sequence:
//! 1. Enable the port clock
//! 2. Unlock the commit register for protected pins
//! 3. Program direction, then the initial level of outputs
//! 4. Program the pull resistor of inputs
//! 5. Program the function mode
//!
//! Reserved (debug interface) pins are skipped entirely.

#[cfg(feature = "version-info-api")]
use tivaio_hal::diag::ModuleId;
use tivaio_hal::diag::{DiagnosticSink, ErrorKind, ServiceId};
use tivaio_hal::registers::{
    GpioBank, PortRegisters, Register, MUX_FIELD_BITS, MUX_FIELD_MASK, PINS_PER_PORT,
};

use crate::config::{Direction, PinConfig, PinIndex, PinMode, Resistor};
use crate::det::Guard;
use crate::dio::Dio;
use crate::state::ModuleState;
#[cfg(feature = "version-info-api")]
use crate::version::VersionInfo;

#[cfg(feature = "defmt")]
use defmt::{debug, trace};

/// Pin configuration driver
pub struct PortDriver<'a, B: GpioBank, S: DiagnosticSink> {
    bank: B,
    sink: S,
    state: ModuleState<'a>,
}

impl<'a, B: GpioBank, S: DiagnosticSink> PortDriver<'a, B, S> {
    /// Create an uninitialized driver
    ///
    /// No register is touched until [`init`](Self::init).
    pub fn new(bank: B, sink: S) -> Self {
        Self {
            bank,
            sink,
            state: ModuleState::Uninitialized,
        }
    }

    /// Apply a pin table
    ///
    /// An empty table is rejected as [`ErrorKind::InvalidConfig`]. Applying a
    /// table again re-runs the same writes and leaves the registers in the
    /// same final state. Records naming a port or bit the bank does not have
    /// are skipped.
    pub fn init(&mut self, table: &'a [PinConfig]) {
        let mut guard = Guard::new(&self.sink, ServiceId::PortInit);
        guard.require(!table.is_empty(), ErrorKind::InvalidConfig);
        if !guard.passed() {
            return;
        }

        for record in table {
            self.configure_pin(record);
        }

        #[cfg(feature = "defmt")]
        debug!("Port: {} pins configured", table.len());

        self.state = ModuleState::Initialized(table);
    }

    fn configure_pin(&self, record: &PinConfig) {
        let bit = record.bit;
        if B::is_reserved(record.port, bit) {
            #[cfg(feature = "defmt")]
            trace!("Port: skipping reserved pin {}.{}", record.port, bit);
            return;
        }
        if bit >= PINS_PER_PORT {
            return;
        }
        let Some(regs) = self.bank.port(record.port) else {
            return;
        };

        self.bank.enable_clock(record.port);

        if B::is_protected(record.port, bit) {
            regs.write(Register::Lock, B::UNLOCK_KEY);
            regs.set_bit(Register::Commit, bit);
        }

        match record.direction {
            Direction::Output => {
                regs.set_bit(Register::Dir, bit);
                let value = if record.initial_level.is_high() { record.mask() } else { 0 };
                regs.write_masked(record.mask(), value);
            }
            Direction::Input => {
                regs.clear_bit(Register::Dir, bit);
                apply_resistor(regs, bit, record.resistor);
            }
        }

        apply_mode(regs, bit, record.mode);
    }

    /// Check if a pin table has been applied
    pub fn is_initialized(&self) -> bool {
        self.state.is_initialized()
    }

    /// Change the direction of a configured pin
    ///
    /// Rejected for pins configured with a fixed direction and for reserved
    /// pins.
    #[cfg(feature = "set-pin-direction-api")]
    pub fn set_pin_direction(&self, pin: PinIndex, direction: Direction) {
        let mut guard = Guard::new(&self.sink, ServiceId::PortSetPinDirection);
        let record = self.checked_pin(&mut guard, pin);
        if let Some(record) = record {
            guard.require(
                record.direction_changeable && !B::is_reserved(record.port, record.bit),
                ErrorKind::DirectionNotChangeable,
            );
        }
        if !guard.passed() {
            return;
        }

        let Some((record, regs)) = record.and_then(|r| self.writable(r)) else {
            return;
        };
        regs.write_bit(Register::Dir, record.bit, direction == Direction::Output);
    }

    /// Change the function mode of a configured pin
    ///
    /// `code` is a numeric mode code as defined by [`PinMode::from_code`];
    /// 13 and codes above 14 are rejected as [`ErrorKind::InvalidMode`].
    #[cfg(feature = "set-pin-mode-api")]
    pub fn set_pin_mode(&self, pin: PinIndex, code: u8) {
        let mut guard = Guard::new(&self.sink, ServiceId::PortSetPinMode);
        let record = self.checked_pin(&mut guard, pin);
        let mode = PinMode::from_code(code);
        guard.require(mode.is_some(), ErrorKind::InvalidMode);
        if let Some(record) = record {
            guard.require(
                record.mode_changeable && !B::is_reserved(record.port, record.bit),
                ErrorKind::ModeNotChangeable,
            );
        }
        if !guard.passed() {
            return;
        }

        let (Some((record, regs)), Some(mode)) = (record.and_then(|r| self.writable(r)), mode)
        else {
            return;
        };
        apply_mode(regs, record.bit, mode);
    }

    /// Restore the configured direction of every pin
    pub fn refresh_port_direction(&self) {
        let mut guard = Guard::new(&self.sink, ServiceId::PortRefreshPortDirection);
        guard.require(self.state.is_initialized(), ErrorKind::Uninitialized);
        if !guard.passed() {
            return;
        }

        for record in self.state.table().unwrap_or_default() {
            if let Some((record, regs)) = self.writable(record) {
                regs.write_bit(
                    Register::Dir,
                    record.bit,
                    record.direction == Direction::Output,
                );
            }
        }
    }

    /// Get the Port module version
    #[cfg(feature = "version-info-api")]
    pub fn version_info(&self) -> VersionInfo {
        VersionInfo::new(ModuleId::Port)
    }

    /// Get the channel access view
    pub fn dio(&self) -> Dio<'_, 'a, B, S> {
        Dio::new(self)
    }

    /// Get the register bank
    pub fn bank(&self) -> &B {
        &self.bank
    }

    /// Get the diagnostic sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub(crate) fn state(&self) -> &ModuleState<'a> {
        &self.state
    }

    /// Look up a pin, checking init state and index
    ///
    /// The index can only be judged against an applied table, so an
    /// uninitialized driver reports just [`ErrorKind::Uninitialized`].
    pub(crate) fn checked_pin(
        &self,
        guard: &mut Guard<'_, S>,
        pin: PinIndex,
    ) -> Option<&'a PinConfig> {
        let initialized = self.state.is_initialized();
        guard.require(initialized, ErrorKind::Uninitialized);
        let record = self.state.pin(pin);
        if initialized {
            guard.require(record.is_some(), ErrorKind::InvalidPin);
        }
        record
    }

    /// Resolve a record to its register block
    ///
    /// `None` for reserved pins and records outside the bank, which are
    /// never written regardless of the guard configuration.
    pub(crate) fn writable<'r>(
        &self,
        record: &'r PinConfig,
    ) -> Option<(&'r PinConfig, &B::Port)> {
        if record.bit >= PINS_PER_PORT || B::is_reserved(record.port, record.bit) {
            return None;
        }
        self.bank.port(record.port).map(|regs| (record, regs))
    }
}

fn apply_resistor<P: PortRegisters>(regs: &P, bit: u8, resistor: Resistor) {
    match resistor {
        Resistor::PullUp => {
            regs.clear_bit(Register::PullDown, bit);
            regs.set_bit(Register::PullUp, bit);
        }
        Resistor::PullDown => {
            regs.clear_bit(Register::PullUp, bit);
            regs.set_bit(Register::PullDown, bit);
        }
        Resistor::Off => {
            regs.clear_bit(Register::PullUp, bit);
            regs.clear_bit(Register::PullDown, bit);
        }
    }
}

fn apply_mode<P: PortRegisters>(regs: &P, bit: u8, mode: PinMode) {
    let alternate = matches!(mode, PinMode::Alternate(_));
    regs.write_bit(Register::AfSel, bit, alternate);
    write_mux_field(regs, bit, mode.mux_code());
    regs.write_bit(Register::AnalogMode, bit, mode.is_analog());
    regs.write_bit(Register::DigitalEnable, bit, !mode.is_analog());
}

/// Replace one pin's 4-bit field in the port control register
fn write_mux_field<P: PortRegisters>(regs: &P, bit: u8, code: u8) {
    let shift = u32::from(bit) * u32::from(MUX_FIELD_BITS);
    regs.modify(Register::PortControl, |v| {
        (v & !(MUX_FIELD_MASK << shift)) | ((u32::from(code) & MUX_FIELD_MASK) << shift)
    });
}
