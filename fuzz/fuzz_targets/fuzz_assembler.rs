//! Fuzz target for the assembler.
//!
//! Assembles arbitrary (mnemonic, mode, operand) triples and checks that
//! whatever encodes decodes back to the same instruction.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sim6502::{assemble_instr, decode, AddressingMode, Instruction, Mnemonic};

const MODES: [AddressingMode; 13] = [
    AddressingMode::Implicit,
    AddressingMode::Accumulator,
    AddressingMode::Immediate,
    AddressingMode::ZeroPage,
    AddressingMode::ZeroPageX,
    AddressingMode::ZeroPageY,
    AddressingMode::Relative,
    AddressingMode::Absolute,
    AddressingMode::AbsoluteX,
    AddressingMode::AbsoluteY,
    AddressingMode::Indirect,
    AddressingMode::IndirectX,
    AddressingMode::IndirectY,
];

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    mnemonic: u8,
    mode: u8,
    operand: u16,
    buffer_len: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mnemonic = Mnemonic::ALL[input.mnemonic as usize % Mnemonic::ALL.len()];
    let mode = MODES[input.mode as usize % MODES.len()];
    let mut buf = vec![0u8; input.buffer_len as usize % 4];

    let Ok(len) = assemble_instr(mnemonic, mode, input.operand, &mut buf) else {
        return;
    };
    assert_eq!(len, mode.size_bytes() as usize);

    let opcode = decode(buf[0]).expect("assembled byte must decode");
    assert_eq!((opcode.mnemonic, opcode.mode), (mnemonic, mode));

    let instr = Instruction::decode(&buf, 0);
    let expected_operand = match len {
        2 => input.operand & 0xFF,
        3 => input.operand,
        _ => 0,
    };
    assert_eq!(instr.operand, expected_operand);
});
