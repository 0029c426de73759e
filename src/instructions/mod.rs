//! # Instruction Implementations
//!
//! This module contains the implementations of all 6502 and 65C02
//! instructions, organized by category. Each instruction is implemented as a
//! standalone function that takes a mutable reference to the CPU and the
//! already-resolved operand.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **arith**: Pure flag-engine functions used by the handlers
//! - **bits**: 65C02 bit manipulation (TSB, TRB, RMBn, SMBn)
//! - **branches**: Branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS, BRA)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY, STZ)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP, WAI)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP, PHX, PHY, PLX, PLY)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub(crate) mod alu;
pub(crate) mod arith;
pub(crate) mod bits;
pub(crate) mod branches;
pub(crate) mod control;
pub(crate) mod flags;
pub(crate) mod inc_dec;
pub(crate) mod load_store;
pub(crate) mod shifts;
pub(crate) mod stack;
pub(crate) mod transfer;

use crate::{MemoryBus, OpcodeMetadata, Operation, Status, CPU};

/// Resolves the operand for `metadata` and runs its handler.
///
/// PC must point just past the opcode byte; base cycles have already been
/// charged. The indexed page-crossing penalty is applied here, branch
/// penalties inside the branch handler.
pub(crate) fn execute<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata) {
    let operand = cpu.resolve_operand(metadata.addressing_mode);
    if metadata.page_penalty && operand.page_crossed() {
        cpu.regs.cycles = cpu.regs.cycles.wrapping_add(1);
    }

    let regs = cpu.regs;
    let p = regs.p;
    match metadata.operation {
        Operation::Adc => alu::execute_adc(cpu, operand),
        Operation::Sbc => alu::execute_sbc(cpu, operand),
        Operation::And => alu::execute_and(cpu, operand),
        Operation::Ora => alu::execute_ora(cpu, operand),
        Operation::Eor => alu::execute_eor(cpu, operand),
        Operation::Cmp => alu::execute_compare(cpu, regs.a, operand),
        Operation::Cpx => alu::execute_compare(cpu, regs.x, operand),
        Operation::Cpy => alu::execute_compare(cpu, regs.y, operand),
        Operation::Bit => alu::execute_bit(cpu, operand),

        Operation::Asl => shifts::execute_asl(cpu, operand),
        Operation::Lsr => shifts::execute_lsr(cpu, operand),
        Operation::Rol => shifts::execute_rol(cpu, operand),
        Operation::Ror => shifts::execute_ror(cpu, operand),

        Operation::Bcc => branches::execute_branch(cpu, !p.contains(Status::CARRY), operand),
        Operation::Bcs => branches::execute_branch(cpu, p.contains(Status::CARRY), operand),
        Operation::Bne => branches::execute_branch(cpu, !p.contains(Status::ZERO), operand),
        Operation::Beq => branches::execute_branch(cpu, p.contains(Status::ZERO), operand),
        Operation::Bpl => branches::execute_branch(cpu, !p.contains(Status::NEGATIVE), operand),
        Operation::Bmi => branches::execute_branch(cpu, p.contains(Status::NEGATIVE), operand),
        Operation::Bvc => branches::execute_branch(cpu, !p.contains(Status::OVERFLOW), operand),
        Operation::Bvs => branches::execute_branch(cpu, p.contains(Status::OVERFLOW), operand),
        Operation::Bra => branches::execute_branch(cpu, true, operand),

        Operation::Clc => flags::execute_set_flag(cpu, Status::CARRY, false),
        Operation::Sec => flags::execute_set_flag(cpu, Status::CARRY, true),
        Operation::Cli => flags::execute_set_flag(cpu, Status::INTERRUPT, false),
        Operation::Sei => flags::execute_set_flag(cpu, Status::INTERRUPT, true),
        Operation::Cld => flags::execute_set_flag(cpu, Status::DECIMAL, false),
        Operation::Sed => flags::execute_set_flag(cpu, Status::DECIMAL, true),
        Operation::Clv => flags::execute_set_flag(cpu, Status::OVERFLOW, false),

        Operation::Inc => inc_dec::execute_inc(cpu, operand),
        Operation::Dec => inc_dec::execute_dec(cpu, operand),
        Operation::Inx => inc_dec::execute_inx(cpu),
        Operation::Iny => inc_dec::execute_iny(cpu),
        Operation::Dex => inc_dec::execute_dex(cpu),
        Operation::Dey => inc_dec::execute_dey(cpu),

        Operation::Lda => load_store::execute_lda(cpu, operand),
        Operation::Ldx => load_store::execute_ldx(cpu, operand),
        Operation::Ldy => load_store::execute_ldy(cpu, operand),
        Operation::Sta => load_store::execute_store(cpu, regs.a, operand),
        Operation::Stx => load_store::execute_store(cpu, regs.x, operand),
        Operation::Sty => load_store::execute_store(cpu, regs.y, operand),
        Operation::Stz => load_store::execute_store(cpu, 0, operand),

        Operation::Pha => stack::execute_push(cpu, regs.a),
        Operation::Phx => stack::execute_push(cpu, regs.x),
        Operation::Phy => stack::execute_push(cpu, regs.y),
        Operation::Php => stack::execute_php(cpu),
        Operation::Pla => stack::execute_pla(cpu),
        Operation::Plx => stack::execute_plx(cpu),
        Operation::Ply => stack::execute_ply(cpu),
        Operation::Plp => stack::execute_plp(cpu),

        Operation::Tax => transfer::execute_tax(cpu),
        Operation::Tay => transfer::execute_tay(cpu),
        Operation::Txa => transfer::execute_txa(cpu),
        Operation::Tya => transfer::execute_tya(cpu),
        Operation::Tsx => transfer::execute_tsx(cpu),
        Operation::Txs => transfer::execute_txs(cpu),

        Operation::Tsb => bits::execute_tsb(cpu, operand),
        Operation::Trb => bits::execute_trb(cpu, operand),
        Operation::Rmb(bit) => bits::execute_modify_bit(cpu, bit, false, operand),
        Operation::Smb(bit) => bits::execute_modify_bit(cpu, bit, true, operand),

        Operation::Brk => control::execute_brk(cpu),
        Operation::Jmp => control::execute_jmp(cpu, operand),
        Operation::Jsr => control::execute_jsr(cpu, operand),
        Operation::Rts => control::execute_rts(cpu),
        Operation::Rti => control::execute_rti(cpu),
        Operation::Wai => control::execute_wai(cpu),

        Operation::Nop | Operation::Unassigned => {}
    }
}
