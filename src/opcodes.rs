//! # Opcode Table
//!
//! The 151 documented NMOS 6502 opcodes, indexed two ways:
//!
//! - **By byte** (`OPCODE_TABLE`): a 256-entry array consulted once per
//!   executed instruction. Bytes with no documented instruction hold `None`.
//! - **By (mnemonic, mode)** (`encode`): a hash map used by the assembler.
//!   Built on first use; it is never touched while executing.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::addressing::AddressingMode;

macro_rules! mnemonics {
    ($($name:ident),* $(,)?) => {
        /// Instruction mnemonic.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Mnemonic {
            $($name,)*
        }

        impl Mnemonic {
            /// Every documented mnemonic, in alphabetical order.
            pub const ALL: &'static [Mnemonic] = &[$(Mnemonic::$name,)*];

            /// Upper-case three-letter name.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Mnemonic::$name => stringify!($name),)*
                }
            }
        }
    };
}

mnemonics! {
    ADC, AND, ASL, BCC, BCS, BEQ, BIT, BMI, BNE, BPL, BRK, BVC, BVS, CLC,
    CLD, CLI, CLV, CMP, CPX, CPY, DEC, DEX, DEY, EOR, INC, INX, INY, JMP,
    JSR, LDA, LDX, LDY, LSR, NOP, ORA, PHA, PHP, PLA, PLP, ROL, ROR, RTI,
    RTS, SBC, SEC, SED, SEI, STA, STX, STY, TAX, TAY, TSX, TXA, TXS, TYA,
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a documented mnemonic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMnemonicError(pub String);

impl fmt::Display for ParseMnemonicError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown mnemonic '{}'", self.0)
    }
}

impl std::error::Error for ParseMnemonicError {}

impl FromStr for Mnemonic {
    type Err = ParseMnemonicError;

    /// Parses a mnemonic, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mnemonic::ALL
            .iter()
            .copied()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseMnemonicError(s.to_string()))
    }
}

/// One documented opcode: the byte and the (mnemonic, mode) pair it encodes.
///
/// # Examples
///
/// ```
/// use sim6502::{decode, AddressingMode, Mnemonic};
///
/// let lda_imm = decode(0xA9).unwrap();
/// assert_eq!(lda_imm.mnemonic, Mnemonic::LDA);
/// assert_eq!(lda_imm.mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.size_bytes(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    /// Instruction mnemonic
    pub mnemonic: Mnemonic,

    /// Encoded byte value
    pub byte: u8,

    /// Addressing mode
    pub mode: AddressingMode,
}

impl Opcode {
    /// Total instruction size in bytes (opcode + operands).
    pub const fn size_bytes(&self) -> u8 {
        self.mode.size_bytes()
    }
}

const fn op(mnemonic: Mnemonic, byte: u8, mode: AddressingMode) -> Opcode {
    Opcode {
        mnemonic,
        byte,
        mode,
    }
}

use crate::addressing::AddressingMode::{
    Absolute as ABS, AbsoluteX as ABX, AbsoluteY as ABY, Accumulator as ACC, Immediate as IMM,
    Implicit as IMP, Indirect as IND, IndirectX as IZX, IndirectY as IZY, Relative as REL,
    ZeroPage as ZP, ZeroPageX as ZPX, ZeroPageY as ZPY,
};
use self::Mnemonic::*;

/// Every documented NMOS 6502 opcode.
#[rustfmt::skip]
pub const DOCUMENTED_OPCODES: [Opcode; 151] = [
    // Logic and arithmetic
    op(ORA, 0x09, IMM), op(ORA, 0x05, ZP), op(ORA, 0x15, ZPX), op(ORA, 0x0D, ABS),
    op(ORA, 0x1D, ABX), op(ORA, 0x19, ABY), op(ORA, 0x01, IZX), op(ORA, 0x11, IZY),
    op(AND, 0x29, IMM), op(AND, 0x25, ZP), op(AND, 0x35, ZPX), op(AND, 0x2D, ABS),
    op(AND, 0x3D, ABX), op(AND, 0x39, ABY), op(AND, 0x21, IZX), op(AND, 0x31, IZY),
    op(EOR, 0x49, IMM), op(EOR, 0x45, ZP), op(EOR, 0x55, ZPX), op(EOR, 0x4D, ABS),
    op(EOR, 0x5D, ABX), op(EOR, 0x59, ABY), op(EOR, 0x41, IZX), op(EOR, 0x51, IZY),
    op(ADC, 0x69, IMM), op(ADC, 0x65, ZP), op(ADC, 0x75, ZPX), op(ADC, 0x6D, ABS),
    op(ADC, 0x7D, ABX), op(ADC, 0x79, ABY), op(ADC, 0x61, IZX), op(ADC, 0x71, IZY),
    op(SBC, 0xE9, IMM), op(SBC, 0xE5, ZP), op(SBC, 0xF5, ZPX), op(SBC, 0xED, ABS),
    op(SBC, 0xFD, ABX), op(SBC, 0xF9, ABY), op(SBC, 0xE1, IZX), op(SBC, 0xF1, IZY),
    op(CMP, 0xC9, IMM), op(CMP, 0xC5, ZP), op(CMP, 0xD5, ZPX), op(CMP, 0xCD, ABS),
    op(CMP, 0xDD, ABX), op(CMP, 0xD9, ABY), op(CMP, 0xC1, IZX), op(CMP, 0xD1, IZY),
    op(CPX, 0xE0, IMM), op(CPX, 0xE4, ZP), op(CPX, 0xEC, ABS),
    op(CPY, 0xC0, IMM), op(CPY, 0xC4, ZP), op(CPY, 0xCC, ABS),
    op(BIT, 0x24, ZP), op(BIT, 0x2C, ABS),
    // Shifts and rotates
    op(ASL, 0x0A, ACC), op(ASL, 0x06, ZP), op(ASL, 0x16, ZPX), op(ASL, 0x0E, ABS), op(ASL, 0x1E, ABX),
    op(LSR, 0x4A, ACC), op(LSR, 0x46, ZP), op(LSR, 0x56, ZPX), op(LSR, 0x4E, ABS), op(LSR, 0x5E, ABX),
    op(ROL, 0x2A, ACC), op(ROL, 0x26, ZP), op(ROL, 0x36, ZPX), op(ROL, 0x2E, ABS), op(ROL, 0x3E, ABX),
    op(ROR, 0x6A, ACC), op(ROR, 0x66, ZP), op(ROR, 0x76, ZPX), op(ROR, 0x6E, ABS), op(ROR, 0x7E, ABX),
    // Loads and stores
    op(LDA, 0xA9, IMM), op(LDA, 0xA5, ZP), op(LDA, 0xB5, ZPX), op(LDA, 0xAD, ABS),
    op(LDA, 0xBD, ABX), op(LDA, 0xB9, ABY), op(LDA, 0xA1, IZX), op(LDA, 0xB1, IZY),
    op(LDX, 0xA2, IMM), op(LDX, 0xA6, ZP), op(LDX, 0xB6, ZPY), op(LDX, 0xAE, ABS), op(LDX, 0xBE, ABY),
    op(LDY, 0xA0, IMM), op(LDY, 0xA4, ZP), op(LDY, 0xB4, ZPX), op(LDY, 0xAC, ABS), op(LDY, 0xBC, ABX),
    op(STA, 0x85, ZP), op(STA, 0x95, ZPX), op(STA, 0x8D, ABS), op(STA, 0x9D, ABX),
    op(STA, 0x99, ABY), op(STA, 0x81, IZX), op(STA, 0x91, IZY),
    op(STX, 0x86, ZP), op(STX, 0x96, ZPY), op(STX, 0x8E, ABS),
    op(STY, 0x84, ZP), op(STY, 0x94, ZPX), op(STY, 0x8C, ABS),
    // Increments and decrements
    op(INC, 0xE6, ZP), op(INC, 0xF6, ZPX), op(INC, 0xEE, ABS), op(INC, 0xFE, ABX),
    op(DEC, 0xC6, ZP), op(DEC, 0xD6, ZPX), op(DEC, 0xCE, ABS), op(DEC, 0xDE, ABX),
    op(INX, 0xE8, IMP), op(INY, 0xC8, IMP), op(DEX, 0xCA, IMP), op(DEY, 0x88, IMP),
    // Flags
    op(CLC, 0x18, IMP), op(SEC, 0x38, IMP), op(CLI, 0x58, IMP), op(SEI, 0x78, IMP),
    op(CLV, 0xB8, IMP), op(CLD, 0xD8, IMP), op(SED, 0xF8, IMP),
    // Transfers
    op(TAX, 0xAA, IMP), op(TAY, 0xA8, IMP), op(TXA, 0x8A, IMP), op(TYA, 0x98, IMP),
    op(TSX, 0xBA, IMP), op(TXS, 0x9A, IMP),
    // Stack
    op(PHA, 0x48, IMP), op(PHP, 0x08, IMP), op(PLA, 0x68, IMP), op(PLP, 0x28, IMP),
    // Branches
    op(BPL, 0x10, REL), op(BMI, 0x30, REL), op(BVC, 0x50, REL), op(BVS, 0x70, REL),
    op(BCC, 0x90, REL), op(BCS, 0xB0, REL), op(BNE, 0xD0, REL), op(BEQ, 0xF0, REL),
    // Control flow
    op(BRK, 0x00, IMP), op(JSR, 0x20, ABS), op(RTI, 0x40, IMP), op(RTS, 0x60, IMP),
    op(JMP, 0x4C, ABS), op(JMP, 0x6C, IND), op(NOP, 0xEA, IMP),
];

const fn build_opcode_table() -> [Option<Opcode>; 256] {
    let mut table = [None; 256];
    let mut i = 0;
    while i < DOCUMENTED_OPCODES.len() {
        let opcode = DOCUMENTED_OPCODES[i];
        table[opcode.byte as usize] = Some(opcode);
        i += 1;
    }
    table
}

/// 256-entry opcode table indexed by opcode byte value.
///
/// Undocumented bytes are `None`.
///
/// # Examples
///
/// ```
/// use sim6502::{Mnemonic, OPCODE_TABLE};
///
/// assert_eq!(OPCODE_TABLE[0x00].unwrap().mnemonic, Mnemonic::BRK);
/// assert!(OPCODE_TABLE[0x02].is_none());
/// ```
pub static OPCODE_TABLE: [Option<Opcode>; 256] = build_opcode_table();

/// Looks up the opcode for a byte.
#[inline]
pub fn decode(byte: u8) -> Option<Opcode> {
    OPCODE_TABLE[byte as usize]
}

fn encoding_map() -> &'static HashMap<(Mnemonic, AddressingMode), u8> {
    static MAP: OnceLock<HashMap<(Mnemonic, AddressingMode), u8>> = OnceLock::new();
    MAP.get_or_init(|| {
        DOCUMENTED_OPCODES
            .iter()
            .map(|opcode| ((opcode.mnemonic, opcode.mode), opcode.byte))
            .collect()
    })
}

/// Looks up the byte encoding a (mnemonic, mode) pair.
///
/// Returns `None` for combinations the 6502 does not have, such as
/// `STA #imm` or `JMP $zp`.
///
/// # Examples
///
/// ```
/// use sim6502::{encode, AddressingMode, Mnemonic};
///
/// assert_eq!(encode(Mnemonic::JMP, AddressingMode::Indirect), Some(0x6C));
/// assert_eq!(encode(Mnemonic::STA, AddressingMode::Immediate), None);
/// ```
pub fn encode(mnemonic: Mnemonic, mode: AddressingMode) -> Option<u8> {
    encoding_map().get(&(mnemonic, mode)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_entries_match_their_index() {
        for (byte, entry) in OPCODE_TABLE.iter().enumerate() {
            if let Some(opcode) = entry {
                assert_eq!(opcode.byte as usize, byte);
            }
        }
    }

    #[test]
    fn test_documented_count() {
        assert_eq!(OPCODE_TABLE.iter().flatten().count(), 151);
        assert_eq!(Mnemonic::ALL.len(), 56);
    }

    #[test]
    fn test_no_duplicate_bytes() {
        let mut seen = [false; 256];
        for opcode in DOCUMENTED_OPCODES.iter() {
            assert!(!seen[opcode.byte as usize], "duplicate 0x{:02X}", opcode.byte);
            seen[opcode.byte as usize] = true;
        }
    }

    #[test]
    fn test_encode_inverts_decode() {
        for opcode in OPCODE_TABLE.iter().flatten() {
            assert_eq!(encode(opcode.mnemonic, opcode.mode), Some(opcode.byte));
        }
    }

    #[test]
    fn test_mnemonic_parse() {
        assert_eq!("lda".parse::<Mnemonic>(), Ok(Mnemonic::LDA));
        assert_eq!("TXS".parse::<Mnemonic>(), Ok(Mnemonic::TXS));
        assert!("XYZ".parse::<Mnemonic>().is_err());
        assert_eq!(Mnemonic::SBC.to_string(), "SBC");
    }
}
