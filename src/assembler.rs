//! 6502 Assembler
//!
//! A small programmatic assembler for building test programs and fixtures.
//! There is no source text: instructions are emitted as (mnemonic, mode,
//! operand) triples.
//!
//! - `assemble_instr` encodes one instruction into a byte buffer.
//! - `Assembler` writes a program straight into a `Bus`, tracking the
//!   current origin and resolving labels for jumps and branches.
//!
//! The assembler writes through the bus's raw accessor, so assembling over
//! a device-mapped page seeds RAM without calling the device.
//!
//! # Example
//!
//! ```
//! use sim6502::{Assembler, AddressingMode::*, Bus, CPU, Mnemonic::*};
//!
//! let mut bus = Bus::new();
//! let mut asm = Assembler::new(&mut bus);
//! asm.org(0x0300)
//!     .emit(LDX, Immediate, 5).unwrap()
//!     .label("loop").unwrap()
//!     .emit(DEX, Implicit, 0).unwrap()
//!     .emit_to(BNE, Relative, "loop").unwrap()
//!     .emit(BRK, Implicit, 0).unwrap();
//! asm.finish().unwrap();
//!
//! let mut cpu = CPU::new(bus);
//! cpu.registers_mut().pc = 0x0300;
//! cpu.run_until_brk(100).unwrap();
//! assert_eq!(cpu.registers().x, 0);
//! ```

use std::collections::HashMap;
use std::fmt;

use crate::{encode, AddressingMode, Bus, Mnemonic};

/// Errors produced while assembling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssemblerError {
    /// The 6502 has no opcode for this (mnemonic, mode) pair.
    InvalidInstruction {
        mnemonic: Mnemonic,
        mode: AddressingMode,
    },

    /// The destination buffer cannot hold the encoded instruction.
    BufferTooSmall { needed: usize, available: usize },

    /// A label was referenced but never defined.
    UndefinedLabel(String),

    /// A label was defined twice.
    DuplicateLabel(String),

    /// A branch target is more than -128/+127 bytes from the next instruction.
    BranchOutOfRange { label: String, from: u16, to: u16 },

    /// Labels can only stand in for Absolute, Indirect and Relative operands.
    UnsupportedLabelMode {
        mnemonic: Mnemonic,
        mode: AddressingMode,
    },
}

impl fmt::Display for AssemblerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AssemblerError::InvalidInstruction { mnemonic, mode } => {
                write!(f, "{} has no {:?} addressing mode", mnemonic, mode)
            }
            AssemblerError::BufferTooSmall { needed, available } => {
                write!(
                    f,
                    "instruction needs {} bytes but only {} are available",
                    needed, available
                )
            }
            AssemblerError::UndefinedLabel(name) => write!(f, "undefined label '{}'", name),
            AssemblerError::DuplicateLabel(name) => write!(f, "duplicate label '{}'", name),
            AssemblerError::BranchOutOfRange { label, from, to } => {
                write!(
                    f,
                    "branch to '{}' at ${:04X} is out of range from ${:04X}",
                    label, to, from
                )
            }
            AssemblerError::UnsupportedLabelMode { mnemonic, mode } => {
                write!(f, "{} {:?} cannot take a label operand", mnemonic, mode)
            }
        }
    }
}

impl std::error::Error for AssemblerError {}

/// Encodes one instruction into `dest` and returns its length.
///
/// The operand is written little-endian: one byte for two-byte modes, two
/// for three-byte modes. For `Relative` the low byte of `operand` is the
/// signed displacement.
///
/// # Examples
///
/// ```
/// use sim6502::{assemble_instr, AddressingMode, Mnemonic};
///
/// let mut buf = [0u8; 3];
/// let len = assemble_instr(Mnemonic::JSR, AddressingMode::Absolute, 0x1234, &mut buf).unwrap();
/// assert_eq!(&buf[..len], &[0x20, 0x34, 0x12]);
/// ```
pub fn assemble_instr(
    mnemonic: Mnemonic,
    mode: AddressingMode,
    operand: u16,
    dest: &mut [u8],
) -> Result<usize, AssemblerError> {
    let byte =
        encode(mnemonic, mode).ok_or(AssemblerError::InvalidInstruction { mnemonic, mode })?;
    let len = mode.size_bytes() as usize;

    if dest.len() < len {
        return Err(AssemblerError::BufferTooSmall {
            needed: len,
            available: dest.len(),
        });
    }

    let [lo, hi] = operand.to_le_bytes();
    dest[0] = byte;
    if len > 1 {
        dest[1] = lo;
    }
    if len > 2 {
        dest[2] = hi;
    }

    Ok(len)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FixupKind {
    /// Two-byte absolute address at `at`
    Word,
    /// One-byte displacement at `at`, relative to `at + 1`
    Relative,
}

#[derive(Debug, Clone)]
struct Fixup {
    at: u16,
    label: String,
    kind: FixupKind,
}

/// Program builder that assembles directly into a `Bus`.
pub struct Assembler<'a> {
    bus: &'a mut Bus,
    origin: u16,
    labels: HashMap<String, u16>,
    pending: Vec<Fixup>,
}

impl<'a> Assembler<'a> {
    /// Creates an assembler writing at origin 0.
    pub fn new(bus: &'a mut Bus) -> Self {
        Self {
            bus,
            origin: 0,
            labels: HashMap::new(),
            pending: Vec::new(),
        }
    }

    /// Moves the origin.
    pub fn org(&mut self, address: u16) -> &mut Self {
        self.origin = address;
        self
    }

    /// Address the next byte will be written to.
    pub fn origin(&self) -> u16 {
        self.origin
    }

    /// Address of a defined label.
    pub fn label_address(&self, name: &str) -> Option<u16> {
        self.labels.get(name).copied()
    }

    /// Defines `name` at the current origin.
    pub fn label(&mut self, name: &str) -> Result<&mut Self, AssemblerError> {
        if self.labels.contains_key(name) {
            return Err(AssemblerError::DuplicateLabel(name.to_string()));
        }
        self.labels.insert(name.to_string(), self.origin);
        Ok(self)
    }

    /// Emits one instruction with a literal operand.
    pub fn emit(
        &mut self,
        mnemonic: Mnemonic,
        mode: AddressingMode,
        operand: u16,
    ) -> Result<&mut Self, AssemblerError> {
        let mut buf = [0u8; 3];
        let len = assemble_instr(mnemonic, mode, operand, &mut buf)?;
        self.bus.load(self.origin, &buf[..len]);
        self.origin = self.origin.wrapping_add(len as u16);
        Ok(self)
    }

    /// Emits one instruction whose operand is the address of `label`.
    ///
    /// `Absolute` and `Indirect` take the label's address; `Relative`
    /// takes the displacement to it. The label may be defined later; any
    /// forward reference is patched by `finish`.
    pub fn emit_to(
        &mut self,
        mnemonic: Mnemonic,
        mode: AddressingMode,
        label: &str,
    ) -> Result<&mut Self, AssemblerError> {
        let kind = match mode {
            AddressingMode::Absolute | AddressingMode::Indirect => FixupKind::Word,
            AddressingMode::Relative => FixupKind::Relative,
            _ => return Err(AssemblerError::UnsupportedLabelMode { mnemonic, mode }),
        };

        let fixup = Fixup {
            at: self.origin.wrapping_add(1),
            label: label.to_string(),
            kind,
        };
        self.emit(mnemonic, mode, 0)?;

        if self.labels.contains_key(label) {
            self.patch(&fixup)?;
        } else {
            self.pending.push(fixup);
        }
        Ok(self)
    }

    /// Emits a raw data byte.
    pub fn byte(&mut self, value: u8) -> &mut Self {
        self.bus[self.origin] = value;
        self.origin = self.origin.wrapping_add(1);
        self
    }

    /// Emits a raw little-endian data word.
    pub fn word(&mut self, value: u16) -> &mut Self {
        let [lo, hi] = value.to_le_bytes();
        self.byte(lo).byte(hi)
    }

    /// Resolves every forward reference.
    pub fn finish(&mut self) -> Result<(), AssemblerError> {
        let pending = std::mem::take(&mut self.pending);
        for fixup in &pending {
            self.patch(fixup)?;
        }
        Ok(())
    }

    fn patch(&mut self, fixup: &Fixup) -> Result<(), AssemblerError> {
        let target = self
            .label_address(&fixup.label)
            .ok_or_else(|| AssemblerError::UndefinedLabel(fixup.label.clone()))?;

        match fixup.kind {
            FixupKind::Word => self.bus.load(fixup.at, &target.to_le_bytes()),
            FixupKind::Relative => {
                let from = fixup.at.wrapping_add(1);
                let displacement = target.wrapping_sub(from) as i16;
                if !(-128..=127).contains(&displacement) {
                    return Err(AssemblerError::BranchOutOfRange {
                        label: fixup.label.clone(),
                        from,
                        to: target,
                    });
                }
                self.bus[fixup.at] = displacement as i8 as u8;
            }
        }
        Ok(())
    }
}
