//! GPIO register surface
//!
//! Every port exposes the same set of 32-bit control/status words. They are
//! addressed by [`Register`] name rather than raw offsets; the chip HAL maps
//! names onto its memory layout.
//!
//! Data register access comes in two flavours:
//! - [`Register::Data`] reads/writes the whole port in one access.
//! - [`PortRegisters::read_masked`] / [`PortRegisters::write_masked`] go
//!   through the bit-aliased view, where a write touches only the bits in
//!   the mask. Single-pin writes through this path never need a
//!   read-modify-write and cannot disturb neighbouring pins.

/// Usable pins per port
pub const PINS_PER_PORT: u8 = 8;

/// Usable data bits of a port
pub const PORT_MASK: u32 = 0xFF;

/// Width of one pin's function-select field in [`Register::PortControl`]
pub const MUX_FIELD_BITS: u8 = 4;

/// Mask of one pin's function-select field before shifting
pub const MUX_FIELD_MASK: u32 = 0xF;

/// Port-wide registers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    /// Data, full-port view
    Data,
    /// Direction (1 = output)
    Dir,
    /// Alternate function enable
    AfSel,
    /// Pull-up resistor enable
    PullUp,
    /// Pull-down resistor enable
    PullDown,
    /// Digital enable
    DigitalEnable,
    /// Lock (write the unlock key to open the commit register)
    Lock,
    /// Commit (per-pin write permission for protected fields)
    Commit,
    /// Analog mode select
    AnalogMode,
    /// Port control: one 4-bit function-select code per pin
    PortControl,
}

/// Register block of a single GPIO port
///
/// Implementors perform one hardware access per `read`/`write`. The
/// provided bit helpers are read-modify-write sequences and are only as
/// atomic as the caller's execution context makes them.
pub trait PortRegisters {
    /// Read a port-wide register
    fn read(&self, reg: Register) -> u32;

    /// Write a port-wide register
    fn write(&self, reg: Register, value: u32);

    /// Read the data bits selected by `mask` through the bit-aliased view
    ///
    /// Bits outside `mask` read as zero.
    fn read_masked(&self, mask: u8) -> u8;

    /// Write the data bits selected by `mask` through the bit-aliased view
    ///
    /// Bits outside `mask` are left untouched by the hardware.
    fn write_masked(&self, mask: u8, value: u8);

    /// Read-modify-write a register
    fn modify<F>(&self, reg: Register, f: F)
    where
        F: FnOnce(u32) -> u32,
    {
        let value = self.read(reg);
        self.write(reg, f(value));
    }

    /// Set a single bit
    fn set_bit(&self, reg: Register, bit: u8) {
        self.modify(reg, |v| v | (1 << bit));
    }

    /// Clear a single bit
    fn clear_bit(&self, reg: Register, bit: u8) {
        self.modify(reg, |v| v & !(1 << bit));
    }

    /// Set or clear a single bit
    fn write_bit(&self, reg: Register, bit: u8, set: bool) {
        if set {
            self.set_bit(reg, bit);
        } else {
            self.clear_bit(reg, bit);
        }
    }

    /// Check a single bit
    fn bit_is_set(&self, reg: Register, bit: u8) -> bool {
        self.read(reg) & (1 << bit) != 0
    }
}

/// The set of GPIO ports of a chip
///
/// Ports are looked up by index in O(1). Chip-wide facts that the
/// configuration pass depends on (port count, protected and reserved pins,
/// the unlock key) are part of the bank description.
pub trait GpioBank {
    /// Register block type of one port
    type Port: PortRegisters;

    /// Number of ports, valid indices are `0..PORT_COUNT`
    const PORT_COUNT: u8;

    /// Value that opens the commit register when written to [`Register::Lock`]
    const UNLOCK_KEY: u32;

    /// Get the register block of a port
    fn port(&self, index: u8) -> Option<&Self::Port>;

    /// Enable the peripheral clock of a port
    ///
    /// Enabling an already running port is harmless.
    fn enable_clock(&self, index: u8);

    /// Pins whose configuration is write-protected until unlocked
    fn is_protected(port: u8, bit: u8) -> bool;

    /// Pins shared with the debug interface that must never be reconfigured
    fn is_reserved(port: u8, bit: u8) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct Block {
        dir: Cell<u32>,
        writes: Cell<u32>,
    }

    impl PortRegisters for Block {
        fn read(&self, _reg: Register) -> u32 {
            self.dir.get()
        }

        fn write(&self, _reg: Register, value: u32) {
            self.writes.set(self.writes.get() + 1);
            self.dir.set(value);
        }

        fn read_masked(&self, _mask: u8) -> u8 {
            0
        }

        fn write_masked(&self, _mask: u8, _value: u8) {}
    }

    #[test]
    fn test_bit_helpers() {
        let block = Block {
            dir: Cell::new(0b1000_0001),
            writes: Cell::new(0),
        };

        block.set_bit(Register::Dir, 3);
        assert_eq!(block.read(Register::Dir), 0b1000_1001);

        block.clear_bit(Register::Dir, 7);
        assert_eq!(block.read(Register::Dir), 0b0000_1001);

        block.write_bit(Register::Dir, 0, false);
        assert!(!block.bit_is_set(Register::Dir, 0));
        assert!(block.bit_is_set(Register::Dir, 3));

        assert_eq!(block.writes.get(), 3);
    }

    #[test]
    fn test_modify() {
        let block = Block {
            dir: Cell::new(0xFFFF_FFFF),
            writes: Cell::new(0),
        };

        block.modify(Register::PortControl, |v| {
            (v & !(MUX_FIELD_MASK << 8)) | (0x3 << 8)
        });
        assert_eq!(block.read(Register::PortControl), 0xFFFF_F3FF);
    }
}
