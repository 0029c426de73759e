//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC / SBC: Add and subtract with carry, binary or decimal per the D flag
//! - AND / ORA / EOR: Bitwise logic into the accumulator
//! - CMP / CPX / CPY: Register compares
//! - BIT: Bit test (the 65C02 immediate form only updates Z)

use super::arith;
use crate::cpu::Operand;
use crate::{MemoryBus, Status, CPU};

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the operand plus the carry flag to the accumulator. With the
/// Decimal flag set both inputs are treated as packed BCD.
///
/// Flags affected: N, V, Z, C
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `operand` - Resolved operand
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let (result, p) = if cpu.regs.p.contains(Status::DECIMAL) {
        arith::add_decimal(cpu.regs.a, value, cpu.regs.p)
    } else {
        arith::add_binary(cpu.regs.a, value, cpu.regs.p)
    };
    cpu.regs.a = result;
    cpu.regs.p = p;
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Computes `A - operand - (1 - C)`. Carry clear after the subtraction
/// means a borrow occurred.
///
/// Flags affected: N, V, Z, C
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `operand` - Resolved operand
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let (result, p) = if cpu.regs.p.contains(Status::DECIMAL) {
        arith::subtract_decimal(cpu.regs.a, value, cpu.regs.p)
    } else {
        arith::subtract_binary(cpu.regs.a, value, cpu.regs.p)
    };
    cpu.regs.a = result;
    cpu.regs.p = p;
}

/// Executes the AND (Logical AND) instruction.
///
/// Flags affected: N, Z
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.regs.a &= value;
    cpu.regs.p.set_zn(cpu.regs.a);
}

/// Executes the ORA (Logical Inclusive OR) instruction.
///
/// Flags affected: N, Z
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.regs.a |= value;
    cpu.regs.p.set_zn(cpu.regs.a);
}

/// Executes the EOR (Exclusive OR) instruction.
///
/// Flags affected: N, Z
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.regs.a ^= value;
    cpu.regs.p.set_zn(cpu.regs.a);
}

/// Executes CMP, CPX or CPY against the given register value.
///
/// Flags affected: N, Z, C
pub(crate) fn execute_compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.regs.p = arith::compare(register, value, cpu.regs.p);
}

/// Executes the BIT (Bit Test) instruction.
///
/// Z is set when `A & operand` is zero. For memory operands N and V are
/// copied from bits 7 and 6 of the operand; the 65C02 immediate form leaves
/// them alone.
///
/// Flags affected: Z, and N, V unless immediate
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.regs.p.set(Status::ZERO, cpu.regs.a & value == 0);

    if !matches!(operand, Operand::Immediate(_)) {
        cpu.regs.p.set(Status::NEGATIVE, value & 0x80 != 0);
        cpu.regs.p.set(Status::OVERFLOW, value & 0x40 != 0);
    }
}
