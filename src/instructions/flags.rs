//! # Status Flag Instructions
//!
//! Each instruction sets or clears exactly one flag. I and D are stored
//! only; nothing else in the simulator reads them.

use super::fall_through;
use crate::{AddressingMode, Registers};

/// Executes the CLC (Clear Carry Flag) instruction.
pub(crate) fn execute_clc(regs: &mut Registers, mode: AddressingMode) -> u16 {
    regs.flags.c = false;
    fall_through(regs, mode)
}

/// Executes the SEC (Set Carry Flag) instruction.
pub(crate) fn execute_sec(regs: &mut Registers, mode: AddressingMode) -> u16 {
    regs.flags.c = true;
    fall_through(regs, mode)
}

/// Executes the CLI (Clear Interrupt Disable) instruction.
pub(crate) fn execute_cli(regs: &mut Registers, mode: AddressingMode) -> u16 {
    regs.flags.i = false;
    fall_through(regs, mode)
}

/// Executes the SEI (Set Interrupt Disable) instruction.
pub(crate) fn execute_sei(regs: &mut Registers, mode: AddressingMode) -> u16 {
    regs.flags.i = true;
    fall_through(regs, mode)
}

/// Executes the CLD (Clear Decimal Mode) instruction.
pub(crate) fn execute_cld(regs: &mut Registers, mode: AddressingMode) -> u16 {
    regs.flags.d = false;
    fall_through(regs, mode)
}

/// Executes the SED (Set Decimal Mode) instruction.
pub(crate) fn execute_sed(regs: &mut Registers, mode: AddressingMode) -> u16 {
    regs.flags.d = true;
    fall_through(regs, mode)
}

/// Executes the CLV (Clear Overflow Flag) instruction.
pub(crate) fn execute_clv(regs: &mut Registers, mode: AddressingMode) -> u16 {
    regs.flags.v = false;
    fall_through(regs, mode)
}
