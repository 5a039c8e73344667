//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS.
//!
//! All branches use relative addressing with a signed 8-bit offset measured
//! from the address after the two-byte branch. A taken branch goes to
//! `PC + 2 + offset`; an untaken one falls through to `PC + 2`. No flags are
//! affected.

use super::fall_through;
use crate::{effective_address, AddressingMode, MemoryBus, Registers};

#[inline]
fn branch_if<M: MemoryBus>(
    regs: &Registers,
    bus: &M,
    mode: AddressingMode,
    condition: bool,
) -> u16 {
    if condition {
        effective_address(regs, bus, mode)
    } else {
        fall_through(regs, mode)
    }
}

/// Executes the BCC (Branch if Carry Clear) instruction.
pub(crate) fn execute_bcc<M: MemoryBus>(
    regs: &mut Registers,
    bus: &mut M,
    mode: AddressingMode,
) -> u16 {
    branch_if(regs, bus, mode, !regs.flags.c)
}

/// Executes the BCS (Branch if Carry Set) instruction.
pub(crate) fn execute_bcs<M: MemoryBus>(
    regs: &mut Registers,
    bus: &mut M,
    mode: AddressingMode,
) -> u16 {
    branch_if(regs, bus, mode, regs.flags.c)
}

/// Executes the BEQ (Branch if Equal) instruction.
pub(crate) fn execute_beq<M: MemoryBus>(
    regs: &mut Registers,
    bus: &mut M,
    mode: AddressingMode,
) -> u16 {
    branch_if(regs, bus, mode, regs.flags.z)
}

/// Executes the BNE (Branch if Not Equal) instruction.
pub(crate) fn execute_bne<M: MemoryBus>(
    regs: &mut Registers,
    bus: &mut M,
    mode: AddressingMode,
) -> u16 {
    branch_if(regs, bus, mode, !regs.flags.z)
}

/// Executes the BMI (Branch if Minus) instruction.
pub(crate) fn execute_bmi<M: MemoryBus>(
    regs: &mut Registers,
    bus: &mut M,
    mode: AddressingMode,
) -> u16 {
    branch_if(regs, bus, mode, regs.flags.n)
}

/// Executes the BPL (Branch if Positive) instruction.
pub(crate) fn execute_bpl<M: MemoryBus>(
    regs: &mut Registers,
    bus: &mut M,
    mode: AddressingMode,
) -> u16 {
    branch_if(regs, bus, mode, !regs.flags.n)
}

/// Executes the BVC (Branch if Overflow Clear) instruction.
pub(crate) fn execute_bvc<M: MemoryBus>(
    regs: &mut Registers,
    bus: &mut M,
    mode: AddressingMode,
) -> u16 {
    branch_if(regs, bus, mode, !regs.flags.v)
}

/// Executes the BVS (Branch if Overflow Set) instruction.
pub(crate) fn execute_bvs<M: MemoryBus>(
    regs: &mut Registers,
    bus: &mut M,
    mode: AddressingMode,
) -> u16 {
    branch_if(regs, bus, mode, regs.flags.v)
}
