//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ORA, AND, EOR: bitwise logic into the accumulator
//! - ADC, SBC: binary add/subtract with carry
//! - CMP, CPX, CPY: register comparisons
//! - BIT: bit test
//!
//! Decimal mode is stored but never consulted; ADC and SBC are always binary.

use super::fall_through;
use crate::{operand_value, AddressingMode, MemoryBus, Registers};

/// Executes the ORA (Logical Inclusive OR) instruction.
///
/// Flags affected: N, Z
pub(crate) fn execute_ora<M: MemoryBus>(
    regs: &mut Registers,
    bus: &mut M,
    mode: AddressingMode,
) -> u16 {
    let value = operand_value(regs, bus, mode);
    regs.a |= value;
    regs.flags.set_nz(regs.a);
    fall_through(regs, mode)
}

/// Executes the AND (Logical AND) instruction.
///
/// Flags affected: N, Z
pub(crate) fn execute_and<M: MemoryBus>(
    regs: &mut Registers,
    bus: &mut M,
    mode: AddressingMode,
) -> u16 {
    let value = operand_value(regs, bus, mode);
    regs.a &= value;
    regs.flags.set_nz(regs.a);
    fall_through(regs, mode)
}

/// Executes the EOR (Exclusive OR) instruction.
///
/// Flags affected: N, Z
pub(crate) fn execute_eor<M: MemoryBus>(
    regs: &mut Registers,
    bus: &mut M,
    mode: AddressingMode,
) -> u16 {
    let value = operand_value(regs, bus, mode);
    regs.a ^= value;
    regs.flags.set_nz(regs.a);
    fall_through(regs, mode)
}

/// Adds `value` and the carry flag into the accumulator.
///
/// Shared by ADC and SBC: SBC is an add of the one's complement.
fn add_with_carry(regs: &mut Registers, value: u8) {
    let a = regs.a;
    let carry_in = regs.flags.c as u16;

    let result16 = a as u16 + value as u16 + carry_in;
    let result = result16 as u8;

    regs.flags.c = result16 > 0xFF;

    // Overflow: both inputs share a sign and the result does not
    regs.flags.v = ((a ^ result) & (value ^ result) & 0x80) != 0;

    regs.flags.set_nz(result);
    regs.a = result;
}

/// Executes the ADC (Add with Carry) instruction.
///
/// A = A + M + C
///
/// Flags affected: N, V, Z, C
pub(crate) fn execute_adc<M: MemoryBus>(
    regs: &mut Registers,
    bus: &mut M,
    mode: AddressingMode,
) -> u16 {
    let value = operand_value(regs, bus, mode);
    add_with_carry(regs, value);
    fall_through(regs, mode)
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// A = A + !M + C. Carry means "no borrow": set C before a plain
/// subtraction.
///
/// Flags affected: N, V, Z, C
pub(crate) fn execute_sbc<M: MemoryBus>(
    regs: &mut Registers,
    bus: &mut M,
    mode: AddressingMode,
) -> u16 {
    let value = operand_value(regs, bus, mode);
    add_with_carry(regs, !value);
    fall_through(regs, mode)
}

/// Sets C, Z and N as if `register - value` had been computed.
fn compare(regs: &mut Registers, register: u8, value: u8) {
    regs.flags.c = register >= value;
    regs.flags.set_nz(register.wrapping_sub(value));
}

/// Executes the CMP (Compare Accumulator) instruction.
///
/// Flags affected: N, Z, C
pub(crate) fn execute_cmp<M: MemoryBus>(
    regs: &mut Registers,
    bus: &mut M,
    mode: AddressingMode,
) -> u16 {
    let value = operand_value(regs, bus, mode);
    let register = regs.a;
    compare(regs, register, value);
    fall_through(regs, mode)
}

/// Executes the CPX (Compare X Register) instruction.
///
/// Flags affected: N, Z, C
pub(crate) fn execute_cpx<M: MemoryBus>(
    regs: &mut Registers,
    bus: &mut M,
    mode: AddressingMode,
) -> u16 {
    let value = operand_value(regs, bus, mode);
    let register = regs.x;
    compare(regs, register, value);
    fall_through(regs, mode)
}

/// Executes the CPY (Compare Y Register) instruction.
///
/// Flags affected: N, Z, C
pub(crate) fn execute_cpy<M: MemoryBus>(
    regs: &mut Registers,
    bus: &mut M,
    mode: AddressingMode,
) -> u16 {
    let value = operand_value(regs, bus, mode);
    let register = regs.y;
    compare(regs, register, value);
    fall_through(regs, mode)
}

/// Executes the BIT (Bit Test) instruction.
///
/// Z comes from A & M; N and V are copied from bits 7 and 6 of M.
/// The accumulator is not modified.
///
/// Flags affected: N, V, Z
pub(crate) fn execute_bit<M: MemoryBus>(
    regs: &mut Registers,
    bus: &mut M,
    mode: AddressingMode,
) -> u16 {
    let value = operand_value(regs, bus, mode);
    regs.flags.z = regs.a & value == 0;
    regs.flags.n = value & 0x80 != 0;
    regs.flags.v = value & 0x40 != 0;
    fall_through(regs, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bus;

    fn immediate(a: u8, carry: bool) -> (Registers, Bus) {
        let mut regs = Registers::new();
        regs.pc = 0x0300;
        regs.a = a;
        regs.flags.c = carry;
        (regs, Bus::new())
    }

    #[test]
    fn test_add_with_carry_flag_table() {
        // (a, m, c_in) -> (result, c, v)
        let cases = [
            (0x50, 0x10, false, 0x60, false, false),
            (0x50, 0x50, false, 0xA0, false, true),
            (0x50, 0x90, false, 0xE0, false, false),
            (0x50, 0xD0, false, 0x20, true, false),
            (0xD0, 0x90, false, 0x60, true, true),
            (0xFF, 0x00, true, 0x00, true, false),
        ];

        for (a, m, c_in, result, c, v) in cases {
            let (mut regs, _) = immediate(a, c_in);
            add_with_carry(&mut regs, m);
            assert_eq!(regs.a, result, "{:02X}+{:02X}", a, m);
            assert_eq!(regs.flags.c, c, "carry for {:02X}+{:02X}", a, m);
            assert_eq!(regs.flags.v, v, "overflow for {:02X}+{:02X}", a, m);
        }
    }

    #[test]
    fn test_compare_negative_from_difference() {
        let (mut regs, _) = immediate(0x01, false);
        compare(&mut regs, 0x01, 0x02);
        assert!(!regs.flags.c);
        assert!(!regs.flags.z);
        assert!(regs.flags.n);
    }

    #[test]
    fn test_sbc_immediate_returns_next_pc() {
        let (mut regs, mut bus) = immediate(0x10, true);
        bus.load(0x0300, &[0xE9, 0x01]);
        let next = execute_sbc(&mut regs, &mut bus, AddressingMode::Immediate);
        assert_eq!(next, 0x0302);
        assert_eq!(regs.a, 0x0F);
        assert!(regs.flags.c);
    }
}
