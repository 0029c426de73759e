//! # Load and Store Instructions
//!
//! This module implements data movement between registers and memory:
//! - LDA, LDX, LDY: Load register (sets N and Z)
//! - STA, STX, STY: Store register (no flags affected)
//! - STZ: Store zero (65C02, no flags affected)

use crate::cpu::Operand;
use crate::{MemoryBus, CPU};

/// Executes the LDA (Load Accumulator) instruction.
///
/// Flags affected: N, Z
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.regs.a = cpu.read_operand(operand);
    cpu.regs.p.set_zn(cpu.regs.a);
}

/// Executes the LDX (Load X Register) instruction.
///
/// Flags affected: N, Z
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.regs.x = cpu.read_operand(operand);
    cpu.regs.p.set_zn(cpu.regs.x);
}

/// Executes the LDY (Load Y Register) instruction.
///
/// Flags affected: N, Z
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.regs.y = cpu.read_operand(operand);
    cpu.regs.p.set_zn(cpu.regs.y);
}

/// Executes STA, STX, STY or STZ with the value to store.
///
/// Stores never touch the status register.
pub(crate) fn execute_store<M: MemoryBus>(cpu: &mut CPU<M>, value: u8, operand: Operand) {
    cpu.write_operand(operand, value);
}
