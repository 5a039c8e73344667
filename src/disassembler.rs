//! 6502 Disassembler
//!
//! Renders machine code back into assembly text. It works over a plain
//! memory image (usually `Bus::ram()`), so disassembling never reads a
//! device register.

use std::fmt;

use crate::{decode, AddressingMode, Opcode};

/// A single decoded instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// Address of the opcode byte
    pub address: u16,

    /// Raw opcode byte
    pub byte: u8,

    /// Decoded opcode, `None` for undocumented bytes
    pub opcode: Option<Opcode>,

    /// Operand bytes as a little-endian value (0 if there are none)
    pub operand: u16,
}

impl Instruction {
    /// Decodes the instruction at `address` in `memory`.
    ///
    /// Bytes past the end of `memory` read as zero.
    pub fn decode(memory: &[u8], address: u16) -> Self {
        let fetch = |offset: u16| {
            memory
                .get(address.wrapping_add(offset) as usize)
                .copied()
                .unwrap_or(0)
        };

        let byte = fetch(0);
        let opcode = decode(byte);
        let operand = match opcode.map(|op| op.size_bytes()) {
            Some(2) => fetch(1) as u16,
            Some(3) => u16::from_le_bytes([fetch(1), fetch(2)]),
            _ => 0,
        };

        Self {
            address,
            byte,
            opcode,
            operand,
        }
    }

    /// Size in bytes. Undocumented bytes count as one.
    pub fn size_bytes(&self) -> usize {
        self.opcode.map_or(1, |op| op.size_bytes() as usize)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use AddressingMode::*;

        let Some(opcode) = self.opcode else {
            return write!(f, ".byte ${:02X}", self.byte);
        };

        let m = opcode.mnemonic;
        let v = self.operand;
        match opcode.mode {
            Implicit => write!(f, "{}", m),
            Accumulator => write!(f, "{} A", m),
            Immediate => write!(f, "{} #${:02X}", m, v),
            ZeroPage => write!(f, "{} ${:02X}", m, v),
            ZeroPageX => write!(f, "{} ${:02X},X", m, v),
            ZeroPageY => write!(f, "{} ${:02X},Y", m, v),
            Relative => {
                let target = self
                    .address
                    .wrapping_add(2)
                    .wrapping_add_signed(v as u8 as i8 as i16);
                write!(f, "{} ${:04X}", m, target)
            }
            Absolute => write!(f, "{} ${:04X}", m, v),
            AbsoluteX => write!(f, "{} ${:04X},X", m, v),
            AbsoluteY => write!(f, "{} ${:04X},Y", m, v),
            Indirect => write!(f, "{} (${:04X})", m, v),
            IndirectX => write!(f, "{} (${:02X},X)", m, v),
            IndirectY => write!(f, "{} (${:02X}),Y", m, v),
        }
    }
}

/// Disassembles one instruction, returning its text and size in bytes.
///
/// # Examples
///
/// ```
/// use sim6502::{disassemble, Bus};
///
/// let mut bus = Bus::new();
/// bus.load(0x0300, &[0x6C, 0xFF, 0x20]);
///
/// assert_eq!(disassemble(bus.ram(), 0x0300), ("JMP ($20FF)".to_string(), 3));
/// ```
pub fn disassemble(memory: &[u8], address: u16) -> (String, usize) {
    let instr = Instruction::decode(memory, address);
    (instr.to_string(), instr.size_bytes())
}

/// Disassembles `count` consecutive instructions starting at `start`.
pub fn disassemble_range(memory: &[u8], start: u16, count: usize) -> Vec<Instruction> {
    let mut address = start;
    let mut listing = Vec::with_capacity(count);

    for _ in 0..count {
        let instr = Instruction::decode(memory, address);
        address = address.wrapping_add(instr.size_bytes() as u16);
        listing.push(instr);
    }

    listing
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(bytes: &[u8]) -> String {
        let mut memory = vec![0u8; 0x10000];
        memory[0x0300..0x0300 + bytes.len()].copy_from_slice(bytes);
        disassemble(&memory, 0x0300).0
    }

    #[test]
    fn test_operand_formats() {
        assert_eq!(text(&[0xEA]), "NOP");
        assert_eq!(text(&[0x0A]), "ASL A");
        assert_eq!(text(&[0xA9, 0x10]), "LDA #$10");
        assert_eq!(text(&[0x15, 0xF0]), "ORA $F0,X");
        assert_eq!(text(&[0xB6, 0x80]), "LDX $80,Y");
        assert_eq!(text(&[0x9D, 0x34, 0x12]), "STA $1234,X");
        assert_eq!(text(&[0xA1, 0x40]), "LDA ($40,X)");
        assert_eq!(text(&[0xB1, 0x40]), "LDA ($40),Y");
    }

    #[test]
    fn test_branch_target_is_resolved() {
        assert_eq!(text(&[0xD0, 0x0E]), "BNE $0310");
        assert_eq!(text(&[0xF0, 0xFE]), "BEQ $0300");
    }

    #[test]
    fn test_undocumented_byte() {
        assert_eq!(text(&[0x02]), ".byte $02");
    }

    #[test]
    fn test_range_walks_instruction_sizes() {
        let mut memory = vec![0u8; 0x10000];
        memory[0x0300..0x0306].copy_from_slice(&[0xA2, 0x05, 0xCA, 0xD0, 0xFD, 0x00]);

        let listing: Vec<(u16, String)> = disassemble_range(&memory, 0x0300, 4)
            .iter()
            .map(|instr| (instr.address, instr.to_string()))
            .collect();

        assert_eq!(
            listing,
            vec![
                (0x0300, "LDX #$05".to_string()),
                (0x0302, "DEX".to_string()),
                (0x0303, "BNE $0302".to_string()),
                (0x0305, "BRK".to_string()),
            ]
        );
    }
}
