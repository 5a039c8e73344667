//! # Addressing Modes
//!
//! This module defines the 13 addressing modes supported by the 6502 and the
//! resolver that turns a mode plus the current register/bus state into an
//! operand.
//!
//! There are two accessors because the same mode resolves differently
//! depending on the caller: loads and arithmetic want the operand *value*
//! (`operand_value`), while stores and read-modify-write instructions want
//! the *location* (`effective_address`).
//!
//! Both are called with `regs.pc` still pointing at the opcode byte.

use crate::{MemoryBus, Registers};

/// 6502 addressing mode enumeration.
///
/// # Instruction Lengths (opcode included)
///
/// - **1 byte**: Implicit, Accumulator
/// - **2 bytes**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **3 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions, relative to the
    /// address after the branch.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

impl AddressingMode {
    /// Encoded instruction length in bytes, opcode included.
    pub const fn size_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 1,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 2,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 3,
        }
    }
}

/// Reads a pointer from zero page. Both bytes wrap within page 0, so a
/// pointer at $FF takes its high byte from $00.
#[inline]
fn read_zero_page_pointer<M: MemoryBus>(bus: &M, zp: u8) -> u16 {
    let lo = bus.read(zp as u16) as u16;
    let hi = bus.read(zp.wrapping_add(1) as u16) as u16;
    (hi << 8) | lo
}

/// Reads a pointer the way JMP ($xxxx) does on NMOS silicon: when the
/// pointer's low byte is $FF the high byte comes from the start of the
/// same page, not the next one.
#[inline]
fn read_indirect_pointer<M: MemoryBus>(bus: &M, ptr: u16) -> u16 {
    let lo = bus.read(ptr) as u16;
    let hi_addr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
    let hi = bus.read(hi_addr) as u16;
    (hi << 8) | lo
}

/// Computes the effective address for `mode`.
///
/// For `Immediate` this is the address of the operand byte itself; for
/// `Relative` it is the branch target.
///
/// # Panics
///
/// Panics for `Implicit` and `Accumulator`, which have no memory operand.
/// The opcode table never pairs those modes with an instruction that asks
/// for an address.
///
/// # Examples
///
/// ```
/// use sim6502::{effective_address, AddressingMode, Bus, Registers};
///
/// let mut bus = Bus::new();
/// let mut regs = Registers::new();
/// regs.pc = 0x0300;
/// regs.x = 0x20;
/// bus.load(0x0300, &[0x15, 0xF0]); // ORA $F0,X
///
/// assert_eq!(effective_address(&regs, &bus, AddressingMode::ZeroPageX), 0x0010);
/// ```
pub fn effective_address<M: MemoryBus>(regs: &Registers, bus: &M, mode: AddressingMode) -> u16 {
    let operand_addr = regs.pc.wrapping_add(1);

    match mode {
        AddressingMode::Immediate => operand_addr,
        AddressingMode::ZeroPage => bus.read(operand_addr) as u16,
        AddressingMode::ZeroPageX => bus.read(operand_addr).wrapping_add(regs.x) as u16,
        AddressingMode::ZeroPageY => bus.read(operand_addr).wrapping_add(regs.y) as u16,
        AddressingMode::Relative => {
            let offset = bus.read(operand_addr) as i8;
            regs.pc.wrapping_add(2).wrapping_add_signed(offset as i16)
        }
        AddressingMode::Absolute => bus.read16(operand_addr),
        AddressingMode::AbsoluteX => bus.read16(operand_addr).wrapping_add(regs.x as u16),
        AddressingMode::AbsoluteY => bus.read16(operand_addr).wrapping_add(regs.y as u16),
        AddressingMode::Indirect => read_indirect_pointer(bus, bus.read16(operand_addr)),
        AddressingMode::IndirectX => {
            let zp = bus.read(operand_addr).wrapping_add(regs.x);
            read_zero_page_pointer(bus, zp)
        }
        AddressingMode::IndirectY => {
            let base = read_zero_page_pointer(bus, bus.read(operand_addr));
            base.wrapping_add(regs.y as u16)
        }
        AddressingMode::Implicit | AddressingMode::Accumulator => {
            panic!("{:?} addressing has no effective address", mode)
        }
    }
}

/// Loads the operand value for `mode`.
///
/// `Accumulator` yields A without touching memory; every memory mode reads
/// through the bus exactly once at the effective address.
///
/// # Panics
///
/// Panics for `Implicit`, which has no operand.
pub fn operand_value<M: MemoryBus>(regs: &Registers, bus: &M, mode: AddressingMode) -> u8 {
    match mode {
        AddressingMode::Accumulator => regs.a,
        AddressingMode::Implicit => panic!("implied addressing has no operand"),
        _ => bus.read(effective_address(regs, bus, mode)),
    }
}
