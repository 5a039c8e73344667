//! Tests for PHA/PLA/PHP/PLP and stack pointer wrapping.

use sim6502::{Bus, MemoryBus, CPU};

fn setup_cpu(program: &[u8]) -> CPU<Bus> {
    let mut bus = Bus::new();
    bus.load(0x0300, program);
    let mut cpu = CPU::new(bus);
    cpu.registers_mut().pc = 0x0300;
    cpu.registers_mut().sp = 0xFF;
    cpu
}

#[test]
fn test_pha_pla_round_trip() {
    // PHA; LDA #$00; PLA
    let mut cpu = setup_cpu(&[0x48, 0xA9, 0x00, 0x68]);
    cpu.registers_mut().a = 0x9C;

    cpu.step().unwrap();
    assert_eq!(cpu.memory().read(0x01FF), 0x9C);
    assert_eq!(cpu.registers().sp, 0xFE);

    cpu.run(2).unwrap();
    assert_eq!(cpu.registers().a, 0x9C);
    assert!(cpu.registers().flags.n);
    assert!(!cpu.registers().flags.z);
    assert_eq!(cpu.registers().sp, 0xFF);
    assert_eq!(cpu.registers().pc, 0x0304);
}

#[test]
fn test_php_pushes_break_and_unused_bits() {
    // PHP
    let mut cpu = setup_cpu(&[0x08]);
    cpu.registers_mut().flags.c = true;
    cpu.registers_mut().flags.n = true;

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x01FF), 0xB1);
    assert_eq!(cpu.registers().sp, 0xFE);
    assert_eq!(cpu.registers().pc, 0x0301);
}

#[test]
fn test_plp_ignores_break_and_unused_bits() {
    // PLP
    let mut cpu = setup_cpu(&[0x28]);
    cpu.registers_mut().sp = 0xFE;
    cpu.memory_mut().write(0x01FF, 0x30 | 0x41);

    cpu.step().unwrap();

    let flags = cpu.registers().flags;
    assert!(flags.c);
    assert!(flags.v);
    assert!(!flags.z && !flags.i && !flags.d && !flags.n);
    assert_eq!(flags.to_byte(false), 0x61);
}

#[test]
fn test_pla_sets_zero() {
    // PLA
    let mut cpu = setup_cpu(&[0x68]);
    cpu.registers_mut().sp = 0xFE;
    cpu.registers_mut().a = 0x44;

    cpu.step().unwrap();

    assert_eq!(cpu.registers().a, 0x00);
    assert!(cpu.registers().flags.z);
}

#[test]
fn test_push_wraps_stack_pointer() {
    // PHA with SP at the bottom of the page
    let mut cpu = setup_cpu(&[0x48]);
    cpu.registers_mut().sp = 0x00;
    cpu.registers_mut().a = 0x5E;

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0100), 0x5E);
    assert_eq!(cpu.registers().sp, 0xFF);
}

#[test]
fn test_pull_wraps_stack_pointer() {
    // PLA with SP at the top of the page
    let mut cpu = setup_cpu(&[0x68]);
    cpu.memory_mut().write(0x0100, 0x21);

    cpu.step().unwrap();

    assert_eq!(cpu.registers().a, 0x21);
    assert_eq!(cpu.registers().sp, 0x00);
}
