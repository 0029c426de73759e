//! # Bit Manipulation Instructions (65C02)
//!
//! - TSB: Test and Set Bits; memory |= A
//! - TRB: Test and Reset Bits; memory &= !A
//! - RMBn / SMBn: clear or set bit n of a zero-page byte
//!
//! TSB and TRB set Z from `memory & A` before modification. RMB/SMB affect
//! no flags.

use crate::cpu::Operand;
use crate::{MemoryBus, Status, CPU};

/// Executes the TSB (Test and Set Bits) instruction.
pub(crate) fn execute_tsb<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.regs.p.set(Status::ZERO, value & cpu.regs.a == 0);
    cpu.write_operand(operand, value | cpu.regs.a);
}

/// Executes the TRB (Test and Reset Bits) instruction.
pub(crate) fn execute_trb<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.regs.p.set(Status::ZERO, value & cpu.regs.a == 0);
    cpu.write_operand(operand, value & !cpu.regs.a);
}

/// Executes RMBn (`set == false`) or SMBn (`set == true`).
pub(crate) fn execute_modify_bit<M: MemoryBus>(
    cpu: &mut CPU<M>,
    bit: u8,
    set: bool,
    operand: Operand,
) {
    let mask = 1u8 << (bit & 0x07);
    let value = cpu.read_operand(operand);
    let result = if set { value | mask } else { value & !mask };
    cpu.write_operand(operand, result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    const ZP: Operand = Operand::Address {
        addr: 0x00BB,
        page_crossed: false,
    };

    #[test]
    fn test_tsb_sets_bits_and_z() {
        let mut cpu = CPU::new(FlatMemory::new());
        cpu.memory.write(0x00BB, 0xE0);
        cpu.regs.a = 0x70;

        execute_tsb(&mut cpu, ZP);
        assert_eq!(cpu.memory.read(0x00BB), 0xF0);
        assert!(!cpu.regs.p.contains(Status::ZERO));

        cpu.memory.write(0x00BB, 0x80);
        cpu.regs.a = 0x70;
        execute_tsb(&mut cpu, ZP);
        assert!(cpu.regs.p.contains(Status::ZERO));
    }

    #[test]
    fn test_trb_clears_bits() {
        let mut cpu = CPU::new(FlatMemory::new());
        cpu.memory.write(0x00BB, 0xE0);
        cpu.regs.a = 0x70;

        execute_trb(&mut cpu, ZP);
        assert_eq!(cpu.memory.read(0x00BB), 0x80);
        assert!(!cpu.regs.p.contains(Status::ZERO));
    }

    #[test]
    fn test_rmb_smb_flip_one_bit() {
        let mut cpu = CPU::new(FlatMemory::new());
        cpu.memory.write(0x00BB, 0xFF);
        execute_modify_bit(&mut cpu, 3, false, ZP);
        assert_eq!(cpu.memory.read(0x00BB), 0xF7);

        execute_modify_bit(&mut cpu, 3, true, ZP);
        assert_eq!(cpu.memory.read(0x00BB), 0xFF);
    }
}
