//! Tests for operand resolution through the public resolver.

use sim6502::{effective_address, operand_value, AddressingMode, Bus, MemoryBus, Registers};

fn setup(program: &[u8]) -> (Registers, Bus) {
    let mut bus = Bus::new();
    bus.load(0x0300, program);
    let regs = Registers {
        pc: 0x0300,
        ..Registers::new()
    };
    (regs, bus)
}

#[test]
fn test_zero_page_indexed_wraps() {
    let (mut regs, bus) = setup(&[0x15, 0xF0]);
    regs.x = 0x20;
    regs.y = 0x20;

    assert_eq!(effective_address(&regs, &bus, AddressingMode::ZeroPageX), 0x0010);
    assert_eq!(effective_address(&regs, &bus, AddressingMode::ZeroPageY), 0x0010);
}

#[test]
fn test_absolute_indexed_wraps_address_space() {
    let (mut regs, bus) = setup(&[0xBD, 0xFF, 0xFF]);
    regs.x = 0x02;
    regs.y = 0x01;

    assert_eq!(effective_address(&regs, &bus, AddressingMode::AbsoluteX), 0x0001);
    assert_eq!(effective_address(&regs, &bus, AddressingMode::AbsoluteY), 0x0000);
}

#[test]
fn test_absolute_indexed_crosses_page() {
    let (mut regs, bus) = setup(&[0xBD, 0xF0, 0x12]);
    regs.x = 0x20;

    assert_eq!(effective_address(&regs, &bus, AddressingMode::AbsoluteX), 0x1310);
}

#[test]
fn test_indirect_x_adds_before_dereference() {
    let (mut regs, mut bus) = setup(&[0xA1, 0x20]);
    regs.x = 0x04;
    bus.write16(0x0024, 0x4321);

    assert_eq!(effective_address(&regs, &bus, AddressingMode::IndirectX), 0x4321);
}

#[test]
fn test_indirect_y_adds_after_dereference() {
    let (mut regs, mut bus) = setup(&[0xB1, 0x20]);
    regs.y = 0x10;
    bus.write16(0x0020, 0x43F8);

    assert_eq!(effective_address(&regs, &bus, AddressingMode::IndirectY), 0x4408);
}

#[test]
fn test_indirect_page_bug() {
    let (regs, mut bus) = setup(&[0x6C, 0xFF, 0x20]);
    bus.write(0x20FF, 0x34);
    bus.write(0x2000, 0x12);
    bus.write(0x2100, 0x56);

    assert_eq!(effective_address(&regs, &bus, AddressingMode::Indirect), 0x1234);
}

#[test]
fn test_relative_target() {
    let (regs, bus) = setup(&[0xD0, 0x80]);

    assert_eq!(effective_address(&regs, &bus, AddressingMode::Relative), 0x0282);
}

#[test]
fn test_operand_value_modes() {
    let (mut regs, mut bus) = setup(&[0xA5, 0x44]);
    regs.a = 0x9A;
    bus.write(0x0044, 0x3C);

    assert_eq!(operand_value(&regs, &bus, AddressingMode::ZeroPage), 0x3C);
    assert_eq!(operand_value(&regs, &bus, AddressingMode::Immediate), 0x44);
    assert_eq!(operand_value(&regs, &bus, AddressingMode::Accumulator), 0x9A);
}

#[test]
#[should_panic]
fn test_implicit_has_no_operand() {
    let (regs, bus) = setup(&[0xEA]);
    operand_value(&regs, &bus, AddressingMode::Implicit);
}
