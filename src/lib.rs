//! # 6502 Instruction-Level Simulator
//!
//! An instruction-level simulator of the NMOS 6502: fetch an opcode from a
//! 64KB bus, decode it, resolve its addressing mode, execute it with
//! bit-exact flag semantics, and advance the program counter.
//!
//! ## Quick Start
//!
//! ```rust
//! use sim6502::{run_instr, Bus, Registers};
//!
//! let mut bus = Bus::new();
//! let mut regs = Registers::new();
//!
//! // LDA #$7F; ADC #$01
//! bus.load(0x0300, &[0xA9, 0x7F, 0x69, 0x01]);
//! regs.pc = 0x0300;
//!
//! run_instr(&mut regs, &mut bus).unwrap();
//! run_instr(&mut regs, &mut bus).unwrap();
//!
//! assert_eq!(regs.a, 0x80);
//! assert!(regs.flags.v);
//! assert!(regs.flags.n);
//! assert_eq!(regs.pc, 0x0304);
//! ```
//!
//! ## Architecture
//!
//! - **Registers**: PC, A, X, Y, SP and six status flags
//! - **Bus**: flat RAM with per-page overrides for memory-mapped `Device`s
//! - **Addressing**: operand value / effective address for all 13 modes
//! - **Opcodes**: 256-entry byte-indexed decode table plus the reverse lookup
//! - **Instructions**: one routine per mnemonic, each owning its flag effects
//! - **Dispatcher**: `run_instr` ties them together, one instruction per call
//!
//! Not modelled: cycle timing, interrupt lines, decimal-mode arithmetic, and
//! undocumented opcodes. The I and D flags are stored but never consulted.
//!
//! ## Modules
//!
//! - `registers` - Register file and status byte encoding
//! - `memory` - MemoryBus trait, Device trait, paged Bus
//! - `addressing` - Addressing modes and operand resolution
//! - `opcodes` - Opcode table
//! - `cpu` - Dispatcher and the owning CPU wrapper
//! - `assembler` - Programmatic assembler for building test programs
//! - `disassembler` - Instruction text rendering

pub mod addressing;
pub mod assembler;
pub mod cpu;
pub mod disassembler;
pub mod memory;
pub mod opcodes;
pub mod registers;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::{effective_address, operand_value, AddressingMode};
pub use assembler::{assemble_instr, Assembler, AssemblerError};
pub use cpu::{run_instr, CPU};
pub use disassembler::{disassemble, disassemble_range, Instruction};
pub use memory::{Bus, Device, DeviceHandle, MemoryBus, PAGE_SIZE};
pub use opcodes::{decode, encode, Mnemonic, Opcode, ParseMnemonicError, OPCODE_TABLE};
pub use registers::{Flags, Registers, IRQ_VECTOR, STACK_BASE};

/// Errors that can occur during execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// The byte at PC is not a documented opcode.
    ///
    /// Not recoverable: the program has run into data or relies on an
    /// undocumented instruction.
    UnknownOpcode {
        /// The offending byte
        opcode: u8,
        /// Where it was fetched from
        pc: u16,
    },

    /// A bounded run used up its instruction budget.
    InstructionLimit {
        /// The budget that was exhausted
        limit: u64,
    },
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::UnknownOpcode { opcode, pc } => {
                write!(f, "Unknown opcode 0x{:02X} at 0x{:04X}", opcode, pc)
            }
            ExecutionError::InstructionLimit { limit } => {
                write!(f, "Instruction limit of {} reached", limit)
            }
        }
    }
}

impl std::error::Error for ExecutionError {}
