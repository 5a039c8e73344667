//! # Dispatcher and CPU
//!
//! `run_instr` is the fetch-decode-execute step: it reads the opcode at PC,
//! decodes it through the byte-indexed `OPCODE_TABLE`, runs the mnemonic's
//! routine, and stores the returned next PC. Each call is atomic from the
//! caller's point of view.
//!
//! Every routine owns its complete flag contract; the dispatcher does no
//! flag post-processing.
//!
//! `CPU` is a convenience owner bundling a register file with a bus, for
//! hosts that would rather not thread the two around separately.

use crate::instructions;
use crate::{decode, ExecutionError, MemoryBus, Mnemonic, Opcode, Registers};

/// Executes exactly one instruction.
///
/// On an opcode byte with no documented instruction, returns
/// `ExecutionError::UnknownOpcode` and leaves both the registers and the bus
/// untouched. That condition means the program strayed into data or uses
/// an undocumented opcode; there is no way to continue past it.
///
/// # Examples
///
/// ```
/// use sim6502::{run_instr, Bus, Registers};
///
/// let mut bus = Bus::new();
/// let mut regs = Registers::new();
/// regs.pc = 0x0300;
/// bus.load(0x0300, &[0xA9, 0x42]); // LDA #$42
///
/// run_instr(&mut regs, &mut bus).unwrap();
/// assert_eq!(regs.a, 0x42);
/// assert_eq!(regs.pc, 0x0302);
/// ```
pub fn run_instr<M: MemoryBus>(regs: &mut Registers, bus: &mut M) -> Result<(), ExecutionError> {
    let opcode = fetch(regs, bus)?;
    execute(opcode, regs, bus);
    Ok(())
}

/// Reads and decodes the opcode at PC, with exactly one bus read.
fn fetch<M: MemoryBus>(regs: &Registers, bus: &M) -> Result<Opcode, ExecutionError> {
    let pc = regs.pc;
    let byte = bus.read(pc);

    decode(byte).ok_or_else(|| {
        log::error!("unknown opcode ${:02X} at ${:04X}", byte, pc);
        ExecutionError::UnknownOpcode { opcode: byte, pc }
    })
}

fn execute<M: MemoryBus>(opcode: Opcode, regs: &mut Registers, bus: &mut M) {
    log::trace!(
        "{:04X}  {} {:?}  {:?}",
        regs.pc,
        opcode.mnemonic,
        opcode.mode,
        regs
    );

    regs.pc = instructions::execute(opcode, regs, bus);
}

/// 6502 register file plus the bus it executes against.
///
/// # Examples
///
/// ```
/// use sim6502::{Bus, CPU};
///
/// let mut bus = Bus::new();
/// bus.load(0x0300, &[0xE8, 0xE8, 0x00]); // INX; INX; BRK
///
/// let mut cpu = CPU::new(bus);
/// cpu.registers_mut().pc = 0x0300;
///
/// assert_eq!(cpu.run_until_brk(10).unwrap(), 2);
/// assert_eq!(cpu.registers().x, 2);
/// assert_eq!(cpu.registers().pc, 0x0302);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Register file
    pub(crate) regs: Registers,

    /// Memory bus implementation
    pub(crate) memory: M,

    /// Instructions retired since creation
    pub(crate) instructions: u64,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a CPU with a zeroed register file.
    pub fn new(memory: M) -> Self {
        Self {
            regs: Registers::new(),
            memory,
            instructions: 0,
        }
    }

    /// Executes one instruction.
    pub fn step(&mut self) -> Result<(), ExecutionError> {
        run_instr(&mut self.regs, &mut self.memory)?;
        self.instructions += 1;
        Ok(())
    }

    /// Executes up to `limit` instructions and returns how many ran.
    ///
    /// Stops early only on error.
    pub fn run(&mut self, limit: u64) -> Result<u64, ExecutionError> {
        for _ in 0..limit {
            self.step()?;
        }
        Ok(limit)
    }

    /// Executes until the next opcode is BRK, without executing it.
    ///
    /// Returns the number of instructions run. Fails with
    /// `ExecutionError::InstructionLimit` if no BRK is reached within
    /// `limit` instructions, which guards against programs that loop
    /// forever.
    pub fn run_until_brk(&mut self, limit: u64) -> Result<u64, ExecutionError> {
        let mut executed = 0;

        while executed < limit {
            let opcode = fetch(&self.regs, &self.memory)?;
            if opcode.mnemonic == Mnemonic::BRK {
                return Ok(executed);
            }
            execute(opcode, &mut self.regs, &mut self.memory);
            self.instructions += 1;
            executed += 1;
        }

        log::warn!(
            "no BRK reached after {} instructions, PC=${:04X}",
            limit,
            self.regs.pc
        );
        Err(ExecutionError::InstructionLimit { limit })
    }

    /// Returns the register file.
    pub fn registers(&self) -> &Registers {
        &self.regs
    }

    /// Returns the register file for modification.
    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.regs
    }

    /// Returns the bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns the bus for modification.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and returns its bus.
    pub fn into_memory(self) -> M {
        self.memory
    }

    /// Number of instructions executed since creation.
    pub fn instructions(&self) -> u64 {
        self.instructions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bus;

    fn setup_cpu(program: &[u8]) -> CPU<Bus> {
        let mut bus = Bus::new();
        bus.load(0x0300, program);
        let mut cpu = CPU::new(bus);
        cpu.registers_mut().pc = 0x0300;
        cpu
    }

    #[test]
    fn test_unknown_opcode_leaves_state_untouched() {
        let mut cpu = setup_cpu(&[0x02]);
        let before = *cpu.registers();

        assert_eq!(
            cpu.step(),
            Err(ExecutionError::UnknownOpcode {
                opcode: 0x02,
                pc: 0x0300
            })
        );
        assert_eq!(*cpu.registers(), before);
        assert_eq!(cpu.instructions(), 0);
    }

    #[test]
    fn test_run_counts_instructions() {
        let mut cpu = setup_cpu(&[0xEA, 0xEA, 0xEA]);

        assert_eq!(cpu.run(3), Ok(3));
        assert_eq!(cpu.instructions(), 3);
        assert_eq!(cpu.registers().pc, 0x0303);
    }

    #[test]
    fn test_run_until_brk_respects_limit() {
        // JMP $0300 forever
        let mut cpu = setup_cpu(&[0x4C, 0x00, 0x03]);

        assert_eq!(
            cpu.run_until_brk(50),
            Err(ExecutionError::InstructionLimit { limit: 50 })
        );
        assert_eq!(cpu.instructions(), 50);
    }
}
