//! # Branch Instructions
//!
//! This module implements conditional branch operations (BCC, BCS, BEQ, BNE,
//! BMI, BPL, BVC, BVS) and the 65C02's unconditional BRA.
//!
//! All branch instructions use relative addressing with a signed 8-bit offset.
//! Cycle timing varies based on whether the branch is taken and whether a page
//! boundary is crossed.

use crate::cpu::Operand;
use crate::{MemoryBus, CPU};

/// Branches to the resolved target when `condition` holds.
///
/// Cycle timing on top of the base cost:
/// - +0 if branch not taken
/// - +1 if branch taken to the same page
/// - +2 if branch taken to a different page than the next instruction
///
/// No flags are affected.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `condition` - Whether the branch is taken
/// * `operand` - Resolved branch target
pub(crate) fn execute_branch<M: MemoryBus>(cpu: &mut CPU<M>, condition: bool, operand: Operand) {
    if !condition {
        return;
    }

    cpu.regs.cycles = cpu.regs.cycles.wrapping_add(1);
    if operand.page_crossed() {
        cpu.regs.cycles = cpu.regs.cycles.wrapping_add(1);
    }
    cpu.regs.pc = operand.address();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    #[test]
    fn test_not_taken_costs_nothing_extra() {
        let mut cpu = CPU::new(FlatMemory::new());
        cpu.regs.pc = 0x0002;
        execute_branch(
            &mut cpu,
            false,
            Operand::Address {
                addr: 0x0010,
                page_crossed: false,
            },
        );
        assert_eq!(cpu.regs.pc, 0x0002);
        assert_eq!(cpu.regs.cycles, 0);
    }

    #[test]
    fn test_taken_across_page() {
        let mut cpu = CPU::new(FlatMemory::new());
        execute_branch(
            &mut cpu,
            true,
            Operand::Address {
                addr: 0x01F6,
                page_crossed: true,
            },
        );
        assert_eq!(cpu.regs.pc, 0x01F6);
        assert_eq!(cpu.regs.cycles, 2);
    }
}
