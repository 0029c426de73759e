//! # Increment and Decrement Instructions
//!
//! - INC / DEC: memory read-modify-write, or the accumulator on the 65C02
//! - INX / INY / DEX / DEY: index registers
//!
//! All wrap at 8 bits. Flags affected: N, Z

use crate::cpu::Operand;
use crate::{MemoryBus, CPU};

/// Executes INC (memory or, on the 65C02, `INC A`).
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let result = cpu.read_operand(operand).wrapping_add(1);
    cpu.regs.p.set_zn(result);
    cpu.write_operand(operand, result);
}

/// Executes DEC (memory or, on the 65C02, `DEC A`).
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let result = cpu.read_operand(operand).wrapping_sub(1);
    cpu.regs.p.set_zn(result);
    cpu.write_operand(operand, result);
}

pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.x = cpu.regs.x.wrapping_add(1);
    cpu.regs.p.set_zn(cpu.regs.x);
}

pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.y = cpu.regs.y.wrapping_add(1);
    cpu.regs.p.set_zn(cpu.regs.y);
}

pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.x = cpu.regs.x.wrapping_sub(1);
    cpu.regs.p.set_zn(cpu.regs.x);
}

pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.y = cpu.regs.y.wrapping_sub(1);
    cpu.regs.p.set_zn(cpu.regs.y);
}
