//! # Register File
//!
//! The 6502 programmer-visible state: a 16-bit program counter, the
//! accumulator and two index registers, an 8-bit stack pointer, and six
//! architected status flags.
//!
//! The break bit is not a stored flag. It only exists in the status byte
//! pushed to the stack, where it records whether the push came from
//! software (BRK/PHP) or from a hardware interrupt.

/// Base address of the hardware stack page (0x0100-0x01FF).
pub const STACK_BASE: u16 = 0x0100;

/// Address of the IRQ/BRK vector (little-endian target at 0xFFFE/0xFFFF).
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Status byte bit masks (NV-BDIZC).
pub mod status {
    pub const CARRY: u8 = 0b0000_0001;
    pub const ZERO: u8 = 0b0000_0010;
    pub const INTERRUPT: u8 = 0b0000_0100;
    pub const DECIMAL: u8 = 0b0000_1000;
    pub const BREAK: u8 = 0b0001_0000;
    pub const UNUSED: u8 = 0b0010_0000;
    pub const OVERFLOW: u8 = 0b0100_0000;
    pub const NEGATIVE: u8 = 0b1000_0000;
}

/// The six architected status flags.
///
/// `i` and `d` are stored and round-tripped through the stack, but no
/// instruction consults them: there is no IRQ masking and no BCD mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags {
    /// Carry (or "no borrow" after SBC/compare)
    pub c: bool,
    /// Zero
    pub z: bool,
    /// Interrupt disable
    pub i: bool,
    /// Decimal mode
    pub d: bool,
    /// Signed overflow
    pub v: bool,
    /// Negative (bit 7 of the last result)
    pub n: bool,
}

impl Flags {
    /// Packs the flags into a status byte as it appears on the stack.
    ///
    /// Bit 5 is always set. Bit 4 is `brk`: 1 for BRK/PHP pushes, 0 for
    /// hardware interrupt pushes.
    ///
    /// # Examples
    ///
    /// ```
    /// use sim6502::Flags;
    ///
    /// let flags = Flags { c: true, n: true, ..Flags::default() };
    /// assert_eq!(flags.to_byte(false), 0b1010_0001);
    /// assert_eq!(flags.to_byte(true), 0b1011_0001);
    /// ```
    pub fn to_byte(self, brk: bool) -> u8 {
        let mut byte = status::UNUSED;

        if self.c {
            byte |= status::CARRY;
        }
        if self.z {
            byte |= status::ZERO;
        }
        if self.i {
            byte |= status::INTERRUPT;
        }
        if self.d {
            byte |= status::DECIMAL;
        }
        if brk {
            byte |= status::BREAK;
        }
        if self.v {
            byte |= status::OVERFLOW;
        }
        if self.n {
            byte |= status::NEGATIVE;
        }

        byte
    }

    /// Unpacks a status byte. The break bit and bit 5 are ignored.
    pub fn from_byte(byte: u8) -> Self {
        Self {
            c: byte & status::CARRY != 0,
            z: byte & status::ZERO != 0,
            i: byte & status::INTERRUPT != 0,
            d: byte & status::DECIMAL != 0,
            v: byte & status::OVERFLOW != 0,
            n: byte & status::NEGATIVE != 0,
        }
    }

    /// Sets Z and N from an 8-bit result.
    #[inline]
    pub fn set_nz(&mut self, value: u8) {
        self.z = value == 0;
        self.n = value & 0x80 != 0;
    }
}

/// 6502 register file.
///
/// Fields are public: hosts and tests poke registers directly between
/// instructions. A fresh register file is all zeroes, including SP and
/// every flag.
///
/// # Examples
///
/// ```
/// use sim6502::Registers;
///
/// let mut regs = Registers::new();
/// assert_eq!(regs.pc, 0);
/// assert_eq!(regs.sp, 0);
///
/// regs.sp = 0xFD;
/// assert_eq!(regs.stack_address(), 0x01FD);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Registers {
    /// Program counter (address of the next opcode)
    pub pc: u16,

    /// Accumulator
    pub a: u8,

    /// X index register
    pub x: u8,

    /// Y index register
    pub y: u8,

    /// Stack pointer (offset into page 1)
    pub sp: u8,

    /// Status flags
    pub flags: Flags,
}

impl Registers {
    /// Creates a zeroed register file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zeroes every register and flag.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Address the next push will write to.
    #[inline]
    pub fn stack_address(&self) -> u16 {
        STACK_BASE | self.sp as u16
    }

    /// Status byte as it would be pushed, with the given break bit.
    #[inline]
    pub fn status(&self, brk: bool) -> u8 {
        self.flags.to_byte(brk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registers_start_zeroed() {
        let regs = Registers::new();

        assert_eq!(regs.pc, 0);
        assert_eq!(regs.a, 0);
        assert_eq!(regs.x, 0);
        assert_eq!(regs.y, 0);
        assert_eq!(regs.sp, 0);
        assert_eq!(regs.flags, Flags::default());
    }

    #[test]
    fn test_status_byte_bit_positions() {
        let cases = [
            (Flags { c: true, ..Flags::default() }, 0x21),
            (Flags { z: true, ..Flags::default() }, 0x22),
            (Flags { i: true, ..Flags::default() }, 0x24),
            (Flags { d: true, ..Flags::default() }, 0x28),
            (Flags { v: true, ..Flags::default() }, 0x60),
            (Flags { n: true, ..Flags::default() }, 0xA0),
        ];

        for (flags, expected) in cases {
            assert_eq!(flags.to_byte(false), expected, "{:?}", flags);
            assert_eq!(flags.to_byte(true), expected | status::BREAK);
        }
    }

    #[test]
    fn test_from_byte_ignores_break_and_unused() {
        assert_eq!(Flags::from_byte(0x30), Flags::default());
        assert_eq!(Flags::from_byte(0xFF).to_byte(false), 0xEF);
    }

    #[test]
    fn test_reset_clears_state() {
        let mut regs = Registers {
            pc: 0x1234,
            a: 1,
            x: 2,
            y: 3,
            sp: 0xFD,
            flags: Flags::from_byte(0xFF),
        };

        regs.reset();
        assert_eq!(regs, Registers::new());
    }

    #[test]
    fn test_stack_address_stays_in_page_one() {
        let mut regs = Registers::new();
        for sp in 0..=255u8 {
            regs.sp = sp;
            assert_eq!(regs.stack_address() >> 8, 0x01);
        }
    }
}
