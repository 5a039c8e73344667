//! Fuzz target for single-instruction execution.
//!
//! Builds an arbitrary register file and memory image, executes one
//! instruction and checks the dispatcher's contract.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sim6502::{decode, run_instr, Bus, Flags, MemoryBus, Registers, IRQ_VECTOR};

#[derive(Debug, Arbitrary)]
struct FuzzRegisters {
    pc: u16,
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
}

#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Opcode and operand bytes at PC
    instruction_bytes: [u8; 3],
    zero_page: [u8; 256],
    stack_page: [u8; 256],
    /// Landing area for absolute operands
    main_memory: [u8; 256],
    irq_vector: u16,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    regs: FuzzRegisters,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let mut bus = Bus::new();
    bus.load(0x0000, &input.memory.zero_page);
    bus.load(0x0100, &input.memory.stack_page);
    bus.load(0x4000, &input.memory.main_memory);
    bus.write16(IRQ_VECTOR, input.memory.irq_vector);
    bus.load(input.regs.pc, &input.memory.instruction_bytes);

    let mut regs = Registers {
        pc: input.regs.pc,
        a: input.regs.a,
        x: input.regs.x,
        y: input.regs.y,
        sp: input.regs.sp,
        flags: Flags::from_byte(input.regs.status),
    };
    let before = regs;
    let opcode = bus.read(regs.pc);

    match run_instr(&mut regs, &mut bus) {
        Ok(()) => assert!(decode(opcode).is_some()),
        Err(_) => {
            assert!(decode(opcode).is_none());
            assert_eq!(regs, before);
        }
    }
});
