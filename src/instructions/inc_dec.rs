//! # Increment and Decrement Instructions
//!
//! INC/DEC modify memory in place; INX/INY/DEX/DEY modify an index register.
//! All wrap modulo 256, set N and Z, and leave C alone.

use super::fall_through;
use crate::{effective_address, AddressingMode, MemoryBus, Registers};

/// Executes the INC (Increment Memory) instruction.
///
/// Flags affected: N, Z
pub(crate) fn execute_inc<M: MemoryBus>(
    regs: &mut Registers,
    bus: &mut M,
    mode: AddressingMode,
) -> u16 {
    let addr = effective_address(regs, bus, mode);
    let result = bus.read(addr).wrapping_add(1);
    bus.write(addr, result);
    regs.flags.set_nz(result);
    fall_through(regs, mode)
}

/// Executes the DEC (Decrement Memory) instruction.
///
/// Flags affected: N, Z
pub(crate) fn execute_dec<M: MemoryBus>(
    regs: &mut Registers,
    bus: &mut M,
    mode: AddressingMode,
) -> u16 {
    let addr = effective_address(regs, bus, mode);
    let result = bus.read(addr).wrapping_sub(1);
    bus.write(addr, result);
    regs.flags.set_nz(result);
    fall_through(regs, mode)
}

/// Executes the INX (Increment X) instruction.
pub(crate) fn execute_inx(regs: &mut Registers, mode: AddressingMode) -> u16 {
    regs.x = regs.x.wrapping_add(1);
    regs.flags.set_nz(regs.x);
    fall_through(regs, mode)
}

/// Executes the INY (Increment Y) instruction.
pub(crate) fn execute_iny(regs: &mut Registers, mode: AddressingMode) -> u16 {
    regs.y = regs.y.wrapping_add(1);
    regs.flags.set_nz(regs.y);
    fall_through(regs, mode)
}

/// Executes the DEX (Decrement X) instruction.
pub(crate) fn execute_dex(regs: &mut Registers, mode: AddressingMode) -> u16 {
    regs.x = regs.x.wrapping_sub(1);
    regs.flags.set_nz(regs.x);
    fall_through(regs, mode)
}

/// Executes the DEY (Decrement Y) instruction.
pub(crate) fn execute_dey(regs: &mut Registers, mode: AddressingMode) -> u16 {
    regs.y = regs.y.wrapping_sub(1);
    regs.flags.set_nz(regs.y);
    fall_through(regs, mode)
}
