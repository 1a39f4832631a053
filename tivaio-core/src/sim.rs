//! Simulated register bank
//!
//! A host-side model of a six-port TM4C123-style GPIO bank for tests:
//!
//! - Masked data access only touches the masked bits
//! - The commit register gates writes to AFSEL, PUR, PDR and DEN
//! - Writing the unlock key to LOCK opens the commit register
//! - Clock enables and every register write are counted
//!
//! Input levels seen on the pins are driven with [`SimBank::drive`].

use core::cell::{Cell, RefCell};

use heapless::Vec;
use tivaio_hal::diag::{DiagnosticSink, ErrorKind, ModuleId, ServiceId};
use tivaio_hal::registers::{GpioBank, PortRegisters, Register};

/// Number of simulated ports (A-F)
pub const SIM_PORT_COUNT: u8 = 6;

/// Unlock key accepted by the simulated LOCK register
pub const SIM_UNLOCK_KEY: u32 = 0x4C4F_434B;

/// Capacity of a [`RecordingSink`]
pub const MAX_REPORTS: usize = 32;

const REGISTER_COUNT: usize = 10;

const fn slot(reg: Register) -> usize {
    match reg {
        Register::Data => 0,
        Register::Dir => 1,
        Register::AfSel => 2,
        Register::PullUp => 3,
        Register::PullDown => 4,
        Register::DigitalEnable => 5,
        Register::Lock => 6,
        Register::Commit => 7,
        Register::AnalogMode => 8,
        Register::PortControl => 9,
    }
}

const fn is_commit_gated(reg: Register) -> bool {
    matches!(
        reg,
        Register::AfSel | Register::PullUp | Register::PullDown | Register::DigitalEnable
    )
}

/// One simulated port
pub struct SimPort {
    regs: [Cell<u32>; REGISTER_COUNT],
    /// Levels applied externally to input pins
    pins: Cell<u8>,
    unlocked: Cell<bool>,
    writes: Cell<u32>,
}

impl SimPort {
    fn new(commit_reset: u8) -> Self {
        let port = Self {
            regs: Default::default(),
            pins: Cell::new(0),
            unlocked: Cell::new(false),
            writes: Cell::new(0),
        };
        port.regs[slot(Register::Commit)].set(u32::from(commit_reset));
        port
    }

    fn raw(&self, reg: Register) -> u32 {
        self.regs[slot(reg)].get()
    }

    fn store(&self, reg: Register, value: u32) {
        self.regs[slot(reg)].set(value);
    }

    /// Current data bits as seen by a read: outputs read back the data
    /// register, inputs read the driven levels
    fn sample(&self) -> u8 {
        let dir = self.raw(Register::Dir) as u8;
        let data = self.raw(Register::Data) as u8;
        (data & dir) | (self.pins.get() & !dir)
    }

    /// Register writes performed on this port
    pub fn writes(&self) -> u32 {
        self.writes.get()
    }
}

impl PortRegisters for SimPort {
    fn read(&self, reg: Register) -> u32 {
        match reg {
            Register::Data => u32::from(self.sample()),
            Register::Lock => u32::from(!self.unlocked.get()),
            _ => self.raw(reg),
        }
    }

    fn write(&self, reg: Register, value: u32) {
        self.writes.set(self.writes.get() + 1);
        match reg {
            Register::Lock => self.unlocked.set(value == SIM_UNLOCK_KEY),
            Register::Commit => {
                if self.unlocked.get() {
                    self.store(reg, value & 0xFF);
                }
            }
            Register::Data => self.store(reg, value & 0xFF),
            _ if is_commit_gated(reg) => {
                let commit = self.raw(Register::Commit);
                let old = self.raw(reg);
                self.store(reg, (old & !commit) | (value & commit));
            }
            _ => self.store(reg, value),
        }
    }

    fn read_masked(&self, mask: u8) -> u8 {
        self.sample() & mask
    }

    fn write_masked(&self, mask: u8, value: u8) {
        self.writes.set(self.writes.get() + 1);
        let old = self.raw(Register::Data) as u8;
        let new = (old & !mask) | (value & mask);
        self.store(Register::Data, u32::from(new));
    }
}

/// Simulated six-port GPIO bank
pub struct SimBank {
    ports: [SimPort; SIM_PORT_COUNT as usize],
    clocks: Cell<u8>,
    clock_writes: Cell<u32>,
}

impl SimBank {
    /// Create a bank in its reset state
    pub fn new() -> Self {
        Self {
            ports: [
                SimPort::new(0xFF),
                SimPort::new(0xFF),
                // PC0-3 (JTAG) are permanently uncommitted
                SimPort::new(0xF0),
                // PD7 protected
                SimPort::new(0x7F),
                SimPort::new(0xFF),
                // PF0 protected
                SimPort::new(0xFE),
            ],
            clocks: Cell::new(0),
            clock_writes: Cell::new(0),
        }
    }

    /// Read a register of a port, 0 for an unknown port
    pub fn reg(&self, port: u8, reg: Register) -> u32 {
        self.port(port).map_or(0, |p| p.read(reg))
    }

    /// Check a single register bit of a port
    pub fn bit(&self, port: u8, reg: Register, bit: u8) -> bool {
        self.reg(port, reg) & (1 << bit) != 0
    }

    /// Apply an external level to an input pin
    pub fn drive(&self, port: u8, bit: u8, high: bool) {
        if let Some(p) = self.port(port) {
            let mask = 1u8 << bit;
            let pins = p.pins.get();
            p.pins.set(if high { pins | mask } else { pins & !mask });
        }
    }

    /// Check if a port's clock has been enabled
    pub fn clock_enabled(&self, port: u8) -> bool {
        self.clocks.get() & (1 << port) != 0
    }

    /// Total register writes across the bank, clock gating included
    pub fn writes(&self) -> u32 {
        self.ports.iter().map(SimPort::writes).sum::<u32>() + self.clock_writes.get()
    }
}

impl Default for SimBank {
    fn default() -> Self {
        Self::new()
    }
}

impl GpioBank for SimBank {
    type Port = SimPort;

    const PORT_COUNT: u8 = SIM_PORT_COUNT;
    const UNLOCK_KEY: u32 = SIM_UNLOCK_KEY;

    fn port(&self, index: u8) -> Option<&SimPort> {
        self.ports.get(usize::from(index))
    }

    fn enable_clock(&self, index: u8) {
        if index < SIM_PORT_COUNT {
            self.clock_writes.set(self.clock_writes.get() + 1);
            self.clocks.set(self.clocks.get() | (1 << index));
        }
    }

    fn is_protected(port: u8, bit: u8) -> bool {
        matches!((port, bit), (3, 7) | (5, 0))
    }

    fn is_reserved(port: u8, bit: u8) -> bool {
        port == 2 && bit <= 3
    }
}

/// One captured diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub module: ModuleId,
    pub instance: u8,
    pub service: ServiceId,
    pub error: ErrorKind,
}

/// Sink that records reports for inspection
///
/// Reports beyond [`MAX_REPORTS`] are dropped.
#[derive(Default)]
pub struct RecordingSink {
    reports: RefCell<Vec<Report, MAX_REPORTS>>,
}

impl RecordingSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded reports
    pub fn len(&self) -> usize {
        self.reports.borrow().len()
    }

    /// True if nothing was reported
    pub fn is_empty(&self) -> bool {
        self.reports.borrow().is_empty()
    }

    /// Get a recorded report by position
    pub fn get(&self, index: usize) -> Option<Report> {
        self.reports.borrow().get(index).copied()
    }

    /// Check if `error` was reported for `service`
    pub fn contains(&self, service: ServiceId, error: ErrorKind) -> bool {
        self.reports
            .borrow()
            .iter()
            .any(|r| r.service == service && r.error == error)
    }

    /// Forget all recorded reports
    pub fn clear(&self) {
        self.reports.borrow_mut().clear();
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, module: ModuleId, instance: u8, service: ServiceId, error: ErrorKind) {
        let _ = self.reports.borrow_mut().push(Report {
            module,
            instance,
            service,
            error,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_write_isolated() {
        let bank = SimBank::new();
        let port = bank.port(0).unwrap();
        port.write(Register::Dir, 0xFF);
        port.write(Register::Data, 0b1010_0101);

        port.write_masked(0b0000_0010, 0xFF);
        assert_eq!(port.read(Register::Data), 0b1010_0111);
        assert_eq!(port.read_masked(0b0000_0110), 0b0000_0110);
    }

    #[test]
    fn test_inputs_read_driven_level() {
        let bank = SimBank::new();
        bank.drive(5, 4, true);
        assert!(bank.bit(5, Register::Data, 4));
        bank.drive(5, 4, false);
        assert!(!bank.bit(5, Register::Data, 4));
    }

    #[test]
    fn test_commit_gating() {
        let bank = SimBank::new();
        let port_f = bank.port(5).unwrap();

        port_f.write(Register::DigitalEnable, 0xFF);
        assert_eq!(port_f.read(Register::DigitalEnable), 0xFE);

        // Commit is read-only while locked
        port_f.write(Register::Commit, 0xFF);
        assert_eq!(port_f.read(Register::Commit), 0xFE);

        port_f.write(Register::Lock, SIM_UNLOCK_KEY);
        assert_eq!(port_f.read(Register::Lock), 0);
        port_f.write(Register::Commit, 0xFF);
        port_f.write(Register::DigitalEnable, 0xFF);
        assert_eq!(port_f.read(Register::DigitalEnable), 0xFF);
    }

    #[test]
    fn test_write_counter() {
        let bank = SimBank::new();
        assert_eq!(bank.writes(), 0);
        bank.enable_clock(1);
        bank.port(1).unwrap().write(Register::Dir, 1);
        assert_eq!(bank.writes(), 2);
        assert!(bank.clock_enabled(1));
        assert!(!bank.clock_enabled(0));
    }
}
