//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! In Accumulator mode the operation works on A. Every other mode is a
//! read-modify-write on the byte at the effective address.

use super::fall_through;
use crate::{effective_address, AddressingMode, MemoryBus, Registers};

/// Applies `op` to the operand in place and sets C, Z, N.
///
/// `op` receives the old value and the old carry, and returns the new value
/// and the carry out.
fn read_modify_write<M, F>(regs: &mut Registers, bus: &mut M, mode: AddressingMode, op: F) -> u16
where
    M: MemoryBus,
    F: Fn(u8, bool) -> (u8, bool),
{
    let carry_in = regs.flags.c;

    let result = if mode == AddressingMode::Accumulator {
        let (result, carry_out) = op(regs.a, carry_in);
        regs.a = result;
        regs.flags.c = carry_out;
        result
    } else {
        let addr = effective_address(regs, bus, mode);
        let (result, carry_out) = op(bus.read(addr), carry_in);
        bus.write(addr, result);
        regs.flags.c = carry_out;
        result
    };

    regs.flags.set_nz(result);
    fall_through(regs, mode)
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 0 becomes 0; old bit 7 goes to carry.
///
/// Flags affected: N, Z, C
pub(crate) fn execute_asl<M: MemoryBus>(
    regs: &mut Registers,
    bus: &mut M,
    mode: AddressingMode,
) -> u16 {
    read_modify_write(regs, bus, mode, |value, _| (value << 1, value & 0x80 != 0))
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 7 becomes 0, so N is always cleared; old bit 0 goes to carry.
///
/// Flags affected: N, Z, C
pub(crate) fn execute_lsr<M: MemoryBus>(
    regs: &mut Registers,
    bus: &mut M,
    mode: AddressingMode,
) -> u16 {
    read_modify_write(regs, bus, mode, |value, _| (value >> 1, value & 0x01 != 0))
}

/// Executes the ROL (Rotate Left) instruction.
///
/// Old carry enters bit 0; old bit 7 goes to carry.
///
/// Flags affected: N, Z, C
pub(crate) fn execute_rol<M: MemoryBus>(
    regs: &mut Registers,
    bus: &mut M,
    mode: AddressingMode,
) -> u16 {
    read_modify_write(regs, bus, mode, |value, carry| {
        ((value << 1) | carry as u8, value & 0x80 != 0)
    })
}

/// Executes the ROR (Rotate Right) instruction.
///
/// Old carry enters bit 7; old bit 0 goes to carry.
///
/// Flags affected: N, Z, C
pub(crate) fn execute_ror<M: MemoryBus>(
    regs: &mut Registers,
    bus: &mut M,
    mode: AddressingMode,
) -> u16 {
    read_modify_write(regs, bus, mode, |value, carry| {
        ((value >> 1) | ((carry as u8) << 7), value & 0x01 != 0)
    })
}
