//! Tests for ASL, LSR, ROL and ROR in accumulator and memory forms.

use sim6502::{Bus, MemoryBus, CPU};

fn setup_cpu(program: &[u8]) -> CPU<Bus> {
    let mut bus = Bus::new();
    bus.load(0x0300, program);
    let mut cpu = CPU::new(bus);
    cpu.registers_mut().pc = 0x0300;
    cpu
}

#[test]
fn test_asl_accumulator_shifts_into_carry() {
    // ASL A
    let mut cpu = setup_cpu(&[0x0A]);
    cpu.registers_mut().a = 0x81;

    cpu.step().unwrap();

    assert_eq!(cpu.registers().a, 0x02);
    assert!(cpu.registers().flags.c);
    assert!(!cpu.registers().flags.n);
    assert_eq!(cpu.registers().pc, 0x0301);
}

#[test]
fn test_asl_absolute_x_writes_memory() {
    // ASL $2000,X
    let mut cpu = setup_cpu(&[0x1E, 0x00, 0x20]);
    cpu.memory_mut().write(0x2003, 0x40);
    cpu.registers_mut().x = 0x03;
    cpu.registers_mut().a = 0x11;

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x2003), 0x80);
    assert!(cpu.registers().flags.n);
    assert!(!cpu.registers().flags.c);
    assert_eq!(cpu.registers().a, 0x11);
    assert_eq!(cpu.registers().pc, 0x0303);
}

#[test]
fn test_lsr_to_zero() {
    // LSR A
    let mut cpu = setup_cpu(&[0x4A]);
    cpu.registers_mut().a = 0x01;

    cpu.step().unwrap();

    assert_eq!(cpu.registers().a, 0x00);
    assert!(cpu.registers().flags.z);
    assert!(cpu.registers().flags.c);
}

#[test]
fn test_lsr_always_clears_negative() {
    // LSR A
    let mut cpu = setup_cpu(&[0x4A]);
    cpu.registers_mut().a = 0xFF;
    cpu.registers_mut().flags.n = true;

    cpu.step().unwrap();

    assert_eq!(cpu.registers().a, 0x7F);
    assert!(!cpu.registers().flags.n);
    assert!(cpu.registers().flags.c);
}

#[test]
fn test_rol_rotates_carry_in() {
    // ROL A
    let mut cpu = setup_cpu(&[0x2A]);
    cpu.registers_mut().a = 0x80;
    cpu.registers_mut().flags.c = true;

    cpu.step().unwrap();

    assert_eq!(cpu.registers().a, 0x01);
    assert!(cpu.registers().flags.c);
    assert!(!cpu.registers().flags.z);
}

#[test]
fn test_rol_zero_page_without_carry() {
    // ROL $40
    let mut cpu = setup_cpu(&[0x26, 0x40]);
    cpu.memory_mut().write(0x0040, 0x80);

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0040), 0x00);
    assert!(cpu.registers().flags.z);
    assert!(cpu.registers().flags.c);
}

#[test]
fn test_ror_zero_page_carry_into_bit_seven() {
    // ROR $40
    let mut cpu = setup_cpu(&[0x66, 0x40]);
    cpu.memory_mut().write(0x0040, 0x01);
    cpu.registers_mut().flags.c = true;

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0040), 0x80);
    assert!(cpu.registers().flags.c);
    assert!(cpu.registers().flags.n);
    assert_eq!(cpu.registers().pc, 0x0302);
}

#[test]
fn test_ror_accumulator_without_carry() {
    // ROR A
    let mut cpu = setup_cpu(&[0x6A]);
    cpu.registers_mut().a = 0x02;

    cpu.step().unwrap();

    assert_eq!(cpu.registers().a, 0x01);
    assert!(!cpu.registers().flags.c);
    assert!(!cpu.registers().flags.n);
}
