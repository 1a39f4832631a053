//! GPIO register blocks
//!
//! Ports A-F are accessed through the legacy APB aperture. Each port's data
//! register is bit-aliased over 256 words: address bits [9:2] form a mask,
//! and an access only sees or changes the data bits in that mask. The
//! full-port view is the last word (offset 0x3FC).

use core::sync::atomic::{AtomicBool, Ordering};

use tivaio_hal::registers::{GpioBank, PortRegisters, Register, PORT_MASK};
use volatile_register::RW;

/// Number of GPIO ports (A-F)
pub const PORT_COUNT: u8 = 6;

/// Base addresses of ports A-F (APB)
pub const PORT_BASES: [usize; PORT_COUNT as usize] = [
    0x4000_4000,
    0x4000_5000,
    0x4000_6000,
    0x4000_7000,
    0x4002_4000,
    0x4002_5000,
];

/// GPIO run mode clock gating control
pub const RCGCGPIO: usize = 0x400F_E608;

/// Value that opens GPIOCR for writing
pub const UNLOCK_KEY: u32 = 0x4C4F_434B;

const PORT_C: u8 = 2;
const PORT_D: u8 = 3;
const PORT_F: u8 = 5;

/// Register block of one GPIO port
#[repr(C)]
pub struct RegisterBlock {
    /// 0x000 - 0x3FC: bit-aliased data
    pub data: [RW<u32>; 256],
    /// 0x400: direction
    pub dir: RW<u32>,
    /// 0x404 - 0x41C: interrupt control (unused)
    _interrupt: [u32; 7],
    /// 0x420: alternate function select
    pub afsel: RW<u32>,
    _reserved0: [u32; 55],
    /// 0x500 - 0x50C: drive strength and open drain (unused)
    _drive: [u32; 4],
    /// 0x510: pull-up select
    pub pur: RW<u32>,
    /// 0x514: pull-down select
    pub pdr: RW<u32>,
    /// 0x518: slew rate control (unused)
    _slr: u32,
    /// 0x51C: digital enable
    pub den: RW<u32>,
    /// 0x520: lock
    pub lock: RW<u32>,
    /// 0x524: commit
    pub cr: RW<u32>,
    /// 0x528: analog mode select
    pub amsel: RW<u32>,
    /// 0x52C: port control
    pub pctl: RW<u32>,
}

const _: () = {
    assert!(core::mem::offset_of!(RegisterBlock, dir) == 0x400);
    assert!(core::mem::offset_of!(RegisterBlock, afsel) == 0x420);
    assert!(core::mem::offset_of!(RegisterBlock, pur) == 0x510);
    assert!(core::mem::offset_of!(RegisterBlock, den) == 0x51C);
    assert!(core::mem::offset_of!(RegisterBlock, pctl) == 0x52C);
};

impl RegisterBlock {
    fn register(&self, reg: Register) -> &RW<u32> {
        match reg {
            Register::Data => &self.data[PORT_MASK as usize],
            Register::Dir => &self.dir,
            Register::AfSel => &self.afsel,
            Register::PullUp => &self.pur,
            Register::PullDown => &self.pdr,
            Register::DigitalEnable => &self.den,
            Register::Lock => &self.lock,
            Register::Commit => &self.cr,
            Register::AnalogMode => &self.amsel,
            Register::PortControl => &self.pctl,
        }
    }
}

impl PortRegisters for RegisterBlock {
    fn read(&self, reg: Register) -> u32 {
        self.register(reg).read()
    }

    fn write(&self, reg: Register, value: u32) {
        // SAFETY: every named register is a plain read/write word of a
        // clocked GPIO port; no write has memory-safety side effects.
        unsafe { self.register(reg).write(value) }
    }

    fn read_masked(&self, mask: u8) -> u8 {
        self.data[usize::from(mask)].read() as u8
    }

    fn write_masked(&self, mask: u8, value: u8) {
        // SAFETY: as above; the aliased address restricts the write to `mask`.
        unsafe { self.data[usize::from(mask)].write(u32::from(value)) }
    }
}

static TAKEN: AtomicBool = AtomicBool::new(false);

/// The six GPIO ports of the TM4C123GH6PM
pub struct Tm4cGpio {
    _private: (),
}

impl Tm4cGpio {
    /// Take ownership of the GPIO bank
    ///
    /// Returns `None` if it has already been taken.
    pub fn take() -> Option<Self> {
        if TAKEN.swap(true, Ordering::AcqRel) {
            None
        } else {
            Some(Self { _private: () })
        }
    }

    fn rcgcgpio() -> &'static RW<u32> {
        // SAFETY: RCGCGPIO is a fixed, always-mapped system control register.
        unsafe { &*(RCGCGPIO as *const RW<u32>) }
    }
}

impl GpioBank for Tm4cGpio {
    type Port = RegisterBlock;

    const PORT_COUNT: u8 = PORT_COUNT;
    const UNLOCK_KEY: u32 = UNLOCK_KEY;

    fn port(&self, index: u8) -> Option<&RegisterBlock> {
        let base = *PORT_BASES.get(usize::from(index))?;
        // SAFETY: `base` is the start of a GPIO port's register aperture,
        // which matches the layout of `RegisterBlock` and lives forever.
        Some(unsafe { &*(base as *const RegisterBlock) })
    }

    fn enable_clock(&self, index: u8) {
        if index >= PORT_COUNT {
            return;
        }
        let rcgc = Self::rcgcgpio();
        // SAFETY: setting a clock gate bit only powers up the port.
        unsafe { rcgc.modify(|v| v | (1 << index)) };
        // The port needs a few cycles after gating before its registers
        // respond; the read-back provides them.
        let _ = rcgc.read();
    }

    fn is_protected(port: u8, bit: u8) -> bool {
        matches!((port, bit), (PORT_D, 7) | (PORT_F, 0))
    }

    fn is_reserved(port: u8, bit: u8) -> bool {
        port == PORT_C && bit <= 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_block_size() {
        assert_eq!(core::mem::size_of::<RegisterBlock>(), 0x530);
    }

    #[test]
    fn test_protected_and_reserved() {
        assert!(Tm4cGpio::is_protected(5, 0));
        assert!(Tm4cGpio::is_protected(3, 7));
        assert!(!Tm4cGpio::is_protected(5, 1));

        assert!((0..4).all(|bit| Tm4cGpio::is_reserved(2, bit)));
        assert!(!Tm4cGpio::is_reserved(2, 4));
        assert!(!Tm4cGpio::is_reserved(0, 0));
    }

    #[test]
    fn test_take_once() {
        let first = Tm4cGpio::take();
        assert!(first.is_some());
        assert!(Tm4cGpio::take().is_none());
    }
}
