//! # Register Transfer Instructions
//!
//! Copy one register into another. Every transfer sets N and Z from the
//! destination except TXS, which touches no flags.

use super::fall_through;
use crate::{AddressingMode, Registers};

/// Executes the TAX (Transfer A to X) instruction.
pub(crate) fn execute_tax(regs: &mut Registers, mode: AddressingMode) -> u16 {
    regs.x = regs.a;
    regs.flags.set_nz(regs.x);
    fall_through(regs, mode)
}

/// Executes the TAY (Transfer A to Y) instruction.
pub(crate) fn execute_tay(regs: &mut Registers, mode: AddressingMode) -> u16 {
    regs.y = regs.a;
    regs.flags.set_nz(regs.y);
    fall_through(regs, mode)
}

/// Executes the TXA (Transfer X to A) instruction.
pub(crate) fn execute_txa(regs: &mut Registers, mode: AddressingMode) -> u16 {
    regs.a = regs.x;
    regs.flags.set_nz(regs.a);
    fall_through(regs, mode)
}

/// Executes the TYA (Transfer Y to A) instruction.
pub(crate) fn execute_tya(regs: &mut Registers, mode: AddressingMode) -> u16 {
    regs.a = regs.y;
    regs.flags.set_nz(regs.a);
    fall_through(regs, mode)
}

/// Executes the TSX (Transfer SP to X) instruction.
pub(crate) fn execute_tsx(regs: &mut Registers, mode: AddressingMode) -> u16 {
    regs.x = regs.sp;
    regs.flags.set_nz(regs.x);
    fall_through(regs, mode)
}

/// Executes the TXS (Transfer X to SP) instruction.
///
/// Flags affected: none
pub(crate) fn execute_txs(regs: &mut Registers, mode: AddressingMode) -> u16 {
    regs.sp = regs.x;
    fall_through(regs, mode)
}
