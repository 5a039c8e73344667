//! # Load and Store Instructions
//!
//! - LDA, LDX, LDY: load a register, setting N and Z
//! - STA, STX, STY: store a register; no flags

use super::fall_through;
use crate::{effective_address, operand_value, AddressingMode, MemoryBus, Registers};

/// Executes the LDA (Load Accumulator) instruction.
///
/// Flags affected: N, Z
pub(crate) fn execute_lda<M: MemoryBus>(
    regs: &mut Registers,
    bus: &mut M,
    mode: AddressingMode,
) -> u16 {
    regs.a = operand_value(regs, bus, mode);
    regs.flags.set_nz(regs.a);
    fall_through(regs, mode)
}

/// Executes the LDX (Load X Register) instruction.
///
/// Flags affected: N, Z
pub(crate) fn execute_ldx<M: MemoryBus>(
    regs: &mut Registers,
    bus: &mut M,
    mode: AddressingMode,
) -> u16 {
    regs.x = operand_value(regs, bus, mode);
    regs.flags.set_nz(regs.x);
    fall_through(regs, mode)
}

/// Executes the LDY (Load Y Register) instruction.
///
/// Flags affected: N, Z
pub(crate) fn execute_ldy<M: MemoryBus>(
    regs: &mut Registers,
    bus: &mut M,
    mode: AddressingMode,
) -> u16 {
    regs.y = operand_value(regs, bus, mode);
    regs.flags.set_nz(regs.y);
    fall_through(regs, mode)
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn execute_sta<M: MemoryBus>(
    regs: &mut Registers,
    bus: &mut M,
    mode: AddressingMode,
) -> u16 {
    let addr = effective_address(regs, bus, mode);
    bus.write(addr, regs.a);
    fall_through(regs, mode)
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(
    regs: &mut Registers,
    bus: &mut M,
    mode: AddressingMode,
) -> u16 {
    let addr = effective_address(regs, bus, mode);
    bus.write(addr, regs.x);
    fall_through(regs, mode)
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(
    regs: &mut Registers,
    bus: &mut M,
    mode: AddressingMode,
) -> u16 {
    let addr = effective_address(regs, bus, mode);
    bus.write(addr, regs.y);
    fall_through(regs, mode)
}
