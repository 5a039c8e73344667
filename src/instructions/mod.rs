//! # 6502 Instruction Implementations
//!
//! One routine per mnemonic, organized by category. Every routine has the
//! same shape: it takes the register file, the bus, and the addressing mode,
//! performs the whole effect of the instruction (flags included), and
//! returns the next program counter. Routines never assign `regs.pc`
//! themselves; the dispatcher does that with the returned value.
//!
//! ## Categories
//!
//! - **alu**: ORA, AND, EOR, ADC, SBC, CMP, CPX, CPY, BIT
//! - **shifts**: ASL, LSR, ROL, ROR
//! - **load_store**: LDA, LDX, LDY, STA, STX, STY
//! - **inc_dec**: INC, DEC, INX, INY, DEX, DEY
//! - **flags**: CLC, SEC, CLI, SEI, CLD, SED, CLV
//! - **transfer**: TAX, TAY, TXA, TYA, TSX, TXS
//! - **stack**: PHA, PHP, PLA, PLP
//! - **branches**: BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS
//! - **control**: JMP, JSR, RTS, BRK, RTI, NOP

pub(crate) mod alu;
pub(crate) mod branches;
pub(crate) mod control;
pub(crate) mod flags;
pub(crate) mod inc_dec;
pub(crate) mod load_store;
pub(crate) mod shifts;
pub(crate) mod stack;
pub(crate) mod transfer;

use crate::{AddressingMode, MemoryBus, Mnemonic, Opcode, Registers};

/// Address of the instruction following the current one.
#[inline]
pub(crate) fn fall_through(regs: &Registers, mode: AddressingMode) -> u16 {
    regs.pc.wrapping_add(mode.size_bytes() as u16)
}

/// Runs the semantic routine for `opcode` and returns the next PC.
pub(crate) fn execute<M: MemoryBus>(opcode: Opcode, regs: &mut Registers, bus: &mut M) -> u16 {
    let mode = opcode.mode;

    match opcode.mnemonic {
        Mnemonic::ORA => alu::execute_ora(regs, bus, mode),
        Mnemonic::AND => alu::execute_and(regs, bus, mode),
        Mnemonic::EOR => alu::execute_eor(regs, bus, mode),
        Mnemonic::ADC => alu::execute_adc(regs, bus, mode),
        Mnemonic::SBC => alu::execute_sbc(regs, bus, mode),
        Mnemonic::CMP => alu::execute_cmp(regs, bus, mode),
        Mnemonic::CPX => alu::execute_cpx(regs, bus, mode),
        Mnemonic::CPY => alu::execute_cpy(regs, bus, mode),
        Mnemonic::BIT => alu::execute_bit(regs, bus, mode),

        Mnemonic::ASL => shifts::execute_asl(regs, bus, mode),
        Mnemonic::LSR => shifts::execute_lsr(regs, bus, mode),
        Mnemonic::ROL => shifts::execute_rol(regs, bus, mode),
        Mnemonic::ROR => shifts::execute_ror(regs, bus, mode),

        Mnemonic::LDA => load_store::execute_lda(regs, bus, mode),
        Mnemonic::LDX => load_store::execute_ldx(regs, bus, mode),
        Mnemonic::LDY => load_store::execute_ldy(regs, bus, mode),
        Mnemonic::STA => load_store::execute_sta(regs, bus, mode),
        Mnemonic::STX => load_store::execute_stx(regs, bus, mode),
        Mnemonic::STY => load_store::execute_sty(regs, bus, mode),

        Mnemonic::INC => inc_dec::execute_inc(regs, bus, mode),
        Mnemonic::DEC => inc_dec::execute_dec(regs, bus, mode),
        Mnemonic::INX => inc_dec::execute_inx(regs, mode),
        Mnemonic::INY => inc_dec::execute_iny(regs, mode),
        Mnemonic::DEX => inc_dec::execute_dex(regs, mode),
        Mnemonic::DEY => inc_dec::execute_dey(regs, mode),

        Mnemonic::CLC => flags::execute_clc(regs, mode),
        Mnemonic::SEC => flags::execute_sec(regs, mode),
        Mnemonic::CLI => flags::execute_cli(regs, mode),
        Mnemonic::SEI => flags::execute_sei(regs, mode),
        Mnemonic::CLD => flags::execute_cld(regs, mode),
        Mnemonic::SED => flags::execute_sed(regs, mode),
        Mnemonic::CLV => flags::execute_clv(regs, mode),

        Mnemonic::TAX => transfer::execute_tax(regs, mode),
        Mnemonic::TAY => transfer::execute_tay(regs, mode),
        Mnemonic::TXA => transfer::execute_txa(regs, mode),
        Mnemonic::TYA => transfer::execute_tya(regs, mode),
        Mnemonic::TSX => transfer::execute_tsx(regs, mode),
        Mnemonic::TXS => transfer::execute_txs(regs, mode),

        Mnemonic::PHA => stack::execute_pha(regs, bus, mode),
        Mnemonic::PHP => stack::execute_php(regs, bus, mode),
        Mnemonic::PLA => stack::execute_pla(regs, bus, mode),
        Mnemonic::PLP => stack::execute_plp(regs, bus, mode),

        Mnemonic::BCC => branches::execute_bcc(regs, bus, mode),
        Mnemonic::BCS => branches::execute_bcs(regs, bus, mode),
        Mnemonic::BEQ => branches::execute_beq(regs, bus, mode),
        Mnemonic::BNE => branches::execute_bne(regs, bus, mode),
        Mnemonic::BMI => branches::execute_bmi(regs, bus, mode),
        Mnemonic::BPL => branches::execute_bpl(regs, bus, mode),
        Mnemonic::BVC => branches::execute_bvc(regs, bus, mode),
        Mnemonic::BVS => branches::execute_bvs(regs, bus, mode),

        Mnemonic::JMP => control::execute_jmp(regs, bus, mode),
        Mnemonic::JSR => control::execute_jsr(regs, bus, mode),
        Mnemonic::RTS => control::execute_rts(regs, bus, mode),
        Mnemonic::BRK => control::execute_brk(regs, bus, mode),
        Mnemonic::RTI => control::execute_rti(regs, bus, mode),
        Mnemonic::NOP => control::execute_nop(regs, mode),
    }
}
