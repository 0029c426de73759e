//! # Register Transfer Instructions
//!
//! - TAX, TAY, TXA, TYA, TSX: copy a register and set N and Z from it
//! - TXS: copy X into SP; flags are not affected

use crate::{MemoryBus, CPU};

/// Executes the TAX (Transfer Accumulator to X) instruction.
pub(crate) fn execute_tax<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.x = cpu.regs.a;
    cpu.regs.p.set_zn(cpu.regs.x);
}

/// Executes the TAY (Transfer Accumulator to Y) instruction.
pub(crate) fn execute_tay<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.y = cpu.regs.a;
    cpu.regs.p.set_zn(cpu.regs.y);
}

/// Executes the TXA (Transfer X to Accumulator) instruction.
pub(crate) fn execute_txa<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.a = cpu.regs.x;
    cpu.regs.p.set_zn(cpu.regs.a);
}

/// Executes the TYA (Transfer Y to Accumulator) instruction.
pub(crate) fn execute_tya<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.a = cpu.regs.y;
    cpu.regs.p.set_zn(cpu.regs.a);
}

/// Executes the TSX (Transfer Stack Pointer to X) instruction.
pub(crate) fn execute_tsx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.x = cpu.regs.sp;
    cpu.regs.p.set_zn(cpu.regs.x);
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction.
///
/// The only transfer that leaves the flags alone.
pub(crate) fn execute_txs<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.sp = cpu.regs.x;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FlatMemory, Status};

    #[test]
    fn test_txs_does_not_set_flags() {
        let mut cpu = CPU::new(FlatMemory::new());
        cpu.regs.x = 0x00;
        let p = cpu.regs.p;
        execute_txs(&mut cpu);
        assert_eq!(cpu.regs.sp, 0x00);
        assert_eq!(cpu.regs.p, p);
    }

    #[test]
    fn test_tsx_sets_negative() {
        let mut cpu = CPU::new(FlatMemory::new());
        execute_tsx(&mut cpu);
        assert_eq!(cpu.regs.x, 0xFF);
        assert!(cpu.regs.p.contains(Status::NEGATIVE));
    }
}
