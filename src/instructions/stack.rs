//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA, PHX, PHY: Push a register
//! - PLA, PLX, PLY: Pull a register (sets N and Z)
//! - PHP: Push status with BREAK and bit 5 set
//! - PLP: Pull status; BREAK and bit 5 are forced high in P
//!
//! PHX, PHY, PLX and PLY exist only on the 65C02.

use crate::{MemoryBus, Status, CPU};

/// Pushes a register value (PHA, PHX, PHY).
pub(crate) fn execute_push<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    cpu.push(value);
}

/// Executes the PHP (Push Processor Status) instruction.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.regs.p | Status::BREAK | Status::UNUSED;
    cpu.push(status.bits());
}

/// Executes the PLA (Pull Accumulator) instruction.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.a = cpu.pull();
    cpu.regs.p.set_zn(cpu.regs.a);
}

/// Executes the PLX (Pull X) instruction.
pub(crate) fn execute_plx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.x = cpu.pull();
    cpu.regs.p.set_zn(cpu.regs.x);
}

/// Executes the PLY (Pull Y) instruction.
pub(crate) fn execute_ply<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.y = cpu.pull();
    cpu.regs.p.set_zn(cpu.regs.y);
}

/// Executes the PLP (Pull Processor Status) instruction.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>) {
    let pulled = cpu.pull();
    cpu.regs.p = Status::from_bits_retain(pulled) | Status::BREAK | Status::UNUSED;
}
