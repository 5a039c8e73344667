//! # Stack Instructions
//!
//! PHA, PHP, PLA, PLP, plus the push/pull primitives the control-flow
//! instructions share.
//!
//! The stack lives in page 1 and grows downward. A push writes at
//! `0x0100 | SP` then decrements SP; a pull increments SP then reads. SP
//! wraps modulo 256, so the stack never leaves page 1.
//!
//! 16-bit values go high byte first on push and come back low byte first on
//! pull, leaving the low byte at the lower address.

use super::fall_through;
use crate::{AddressingMode, Flags, MemoryBus, Registers};

pub(crate) fn push<M: MemoryBus>(regs: &mut Registers, bus: &mut M, value: u8) {
    bus.write(regs.stack_address(), value);
    regs.sp = regs.sp.wrapping_sub(1);
}

pub(crate) fn pull<M: MemoryBus>(regs: &mut Registers, bus: &mut M) -> u8 {
    regs.sp = regs.sp.wrapping_add(1);
    bus.read(regs.stack_address())
}

pub(crate) fn push16<M: MemoryBus>(regs: &mut Registers, bus: &mut M, value: u16) {
    push(regs, bus, (value >> 8) as u8);
    push(regs, bus, (value & 0xFF) as u8);
}

pub(crate) fn pull16<M: MemoryBus>(regs: &mut Registers, bus: &mut M) -> u16 {
    let lo = pull(regs, bus) as u16;
    let hi = pull(regs, bus) as u16;
    (hi << 8) | lo
}

/// Executes the PHA (Push Accumulator) instruction.
pub(crate) fn execute_pha<M: MemoryBus>(
    regs: &mut Registers,
    bus: &mut M,
    mode: AddressingMode,
) -> u16 {
    let a = regs.a;
    push(regs, bus, a);
    fall_through(regs, mode)
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed byte always has the break bit set, the same as BRK.
pub(crate) fn execute_php<M: MemoryBus>(
    regs: &mut Registers,
    bus: &mut M,
    mode: AddressingMode,
) -> u16 {
    let status = regs.status(true);
    push(regs, bus, status);
    fall_through(regs, mode)
}

/// Executes the PLA (Pull Accumulator) instruction.
///
/// Flags affected: N, Z
pub(crate) fn execute_pla<M: MemoryBus>(
    regs: &mut Registers,
    bus: &mut M,
    mode: AddressingMode,
) -> u16 {
    regs.a = pull(regs, bus);
    regs.flags.set_nz(regs.a);
    fall_through(regs, mode)
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// Restores C, Z, I, D, V, N. The break bit and bit 5 of the pulled byte
/// are ignored.
pub(crate) fn execute_plp<M: MemoryBus>(
    regs: &mut Registers,
    bus: &mut M,
    mode: AddressingMode,
) -> u16 {
    regs.flags = Flags::from_byte(pull(regs, bus));
    fall_through(regs, mode)
}
