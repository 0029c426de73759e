//! # Status Flag Instructions
//!
//! CLC, SEC, CLI, SEI, CLD, SED and CLV each set or clear a single flag and
//! nothing else.

use crate::{MemoryBus, Status, CPU};

/// Sets (`SEC`, `SEI`, `SED`) or clears (`CLC`, `CLI`, `CLD`, `CLV`) one flag.
pub(crate) fn execute_set_flag<M: MemoryBus>(cpu: &mut CPU<M>, flag: Status, value: bool) {
    cpu.regs.p.set(flag, value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    #[test]
    fn test_only_named_flag_changes() {
        let mut cpu = CPU::new(FlatMemory::new());
        cpu.regs.p = Status::all();

        execute_set_flag(&mut cpu, Status::OVERFLOW, false);
        assert_eq!(cpu.regs.p, Status::all() - Status::OVERFLOW);

        execute_set_flag(&mut cpu, Status::OVERFLOW, true);
        assert_eq!(cpu.regs.p, Status::all());
    }
}
