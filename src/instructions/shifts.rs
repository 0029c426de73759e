//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each works on the accumulator or as a read-modify-write on memory.
//! Flags affected: N, Z, C

use super::arith;
use crate::cpu::Operand;
use crate::{MemoryBus, Status, CPU};

fn modify<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand, op: fn(u8, Status) -> (u8, Status)) {
    let value = cpu.read_operand(operand);
    let (result, p) = op(value, cpu.regs.p);
    cpu.regs.p = p;
    cpu.write_operand(operand, result);
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 0 is set to 0 and bit 7 is placed in the carry flag.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    modify(cpu, operand, arith::shift_left);
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 7 is set to 0 and bit 0 is placed in the carry flag.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    modify(cpu, operand, arith::shift_right);
}

/// Executes the ROL (Rotate Left) instruction.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    modify(cpu, operand, arith::rotate_left);
}

/// Executes the ROR (Rotate Right) instruction.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    modify(cpu, operand, arith::rotate_right);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    #[test]
    fn test_asl_memory_writes_back() {
        let mut cpu = CPU::new(FlatMemory::new());
        cpu.memory.write(0x0044, 0x81);
        let operand = Operand::Address {
            addr: 0x0044,
            page_crossed: false,
        };

        execute_asl(&mut cpu, operand);
        assert_eq!(cpu.memory.read(0x0044), 0x02);
        assert!(cpu.regs.p.contains(Status::CARRY));
        assert_eq!(cpu.regs.a, 0x00);
    }

    #[test]
    fn test_ror_accumulator() {
        let mut cpu = CPU::new(FlatMemory::new());
        cpu.regs.a = 0x02;
        cpu.regs.p.insert(Status::CARRY);

        execute_ror(&mut cpu, Operand::Accumulator);
        assert_eq!(cpu.regs.a, 0x81);
        assert!(!cpu.regs.p.contains(Status::CARRY));
        assert!(cpu.regs.p.contains(Status::NEGATIVE));
    }
}
