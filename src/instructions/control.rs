//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump (absolute, or indirect with the NMOS page-wrap bug)
//! - JSR / RTS: subroutine call and return
//! - BRK / RTI: software interrupt and interrupt return
//! - NOP: No operation
//!
//! Return addresses follow the hardware conventions. JSR pushes the address
//! of its own last byte (PC + 2) and RTS adds one after pulling. BRK pushes
//! PC + 2 as well, but RTI uses the pulled address as-is, so execution
//! resumes one byte past the BRK's padding byte.

use super::fall_through;
use super::stack::{pull, pull16, push, push16};
use crate::{effective_address, AddressingMode, Flags, MemoryBus, Registers, IRQ_VECTOR};

/// Executes the JMP (Jump) instruction.
///
/// - Absolute (0x4C): PC = operand
/// - Indirect (0x6C): PC = word at operand, except that a pointer ending in
///   $FF takes its high byte from the start of the same page. JMP ($10FF)
///   reads $10FF and $1000, not $1100.
///
/// Flags affected: None
pub(crate) fn execute_jmp<M: MemoryBus>(
    regs: &mut Registers,
    bus: &mut M,
    mode: AddressingMode,
) -> u16 {
    effective_address(regs, bus, mode)
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes PC + 2 (high byte first), then jumps to the absolute operand.
pub(crate) fn execute_jsr<M: MemoryBus>(
    regs: &mut Registers,
    bus: &mut M,
    mode: AddressingMode,
) -> u16 {
    let target = effective_address(regs, bus, mode);
    let return_address = regs.pc.wrapping_add(2);
    push16(regs, bus, return_address);
    target
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pulls the return address (low byte first) and resumes one past it.
pub(crate) fn execute_rts<M: MemoryBus>(
    regs: &mut Registers,
    bus: &mut M,
    _mode: AddressingMode,
) -> u16 {
    pull16(regs, bus).wrapping_add(1)
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// 1. Pushes PC + 2 (high byte first)
/// 2. Pushes the status byte with the break bit set
/// 3. Loads PC from the vector at $FFFE/$FFFF
///
/// The I flag is left as-is: there is no IRQ line to mask.
pub(crate) fn execute_brk<M: MemoryBus>(
    regs: &mut Registers,
    bus: &mut M,
    _mode: AddressingMode,
) -> u16 {
    let return_address = regs.pc.wrapping_add(2);
    push16(regs, bus, return_address);

    let status = regs.status(true);
    push(regs, bus, status);

    bus.read16(IRQ_VECTOR)
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls the status byte (ignoring break and bit 5), then pulls PC with no
/// adjustment.
pub(crate) fn execute_rti<M: MemoryBus>(
    regs: &mut Registers,
    bus: &mut M,
    _mode: AddressingMode,
) -> u16 {
    regs.flags = Flags::from_byte(pull(regs, bus));
    pull16(regs, bus)
}

/// Executes the NOP (No Operation) instruction.
pub(crate) fn execute_nop(regs: &mut Registers, mode: AddressingMode) -> u16 {
    fall_through(regs, mode)
}
