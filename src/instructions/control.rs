//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - BRK: Force Interrupt
//! - JMP: Jump (absolute, indirect, and the 65C02's indexed indirect)
//! - JSR / RTS: Subroutine call and return
//! - RTI: Return from interrupt
//! - NOP: No operation
//! - WAI: Wait for interrupt (65C02)
//!
//! BRK is a software interrupt that:
//! 1. Pushes PC+2 to the stack (high byte first, then low byte)
//! 2. Pushes processor status to stack with B flag set
//! 3. Sets the I (interrupt disable) flag, and on the 65C02 clears D
//! 4. Loads PC from IRQ vector at $FFFE/F

use crate::cpu::{Operand, IRQ_VECTOR};
use crate::{MemoryBus, Status, CPU};
use log::debug;

/// Executes the BRK (Force Interrupt) instruction.
///
/// The return address skips the padding byte after the opcode. BREAK is
/// set both in the pushed status byte and in the live register.
///
/// Cycle timing: 7 cycles (fixed)
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU; PC points just past the opcode
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>) {
    let return_address = cpu.regs.pc.wrapping_add(1);
    cpu.regs.p.insert(Status::BREAK);
    let pushed = cpu.regs.p | Status::UNUSED;
    cpu.enter_interrupt(return_address, pushed, IRQ_VECTOR);
}

/// Executes JMP in any of its addressing modes.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.regs.pc = operand.address();
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of the JSR instruction, which RTS
/// later increments.
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let return_address = cpu.regs.pc.wrapping_sub(1);
    cpu.push_word(return_address);
    cpu.regs.pc = operand.address();
}

/// Executes the RTS (Return from Subroutine) instruction.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.pc = cpu.pull_word().wrapping_add(1);
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls P (BREAK and bit 5 forced high), then PC.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>) {
    let pulled = cpu.pull();
    cpu.regs.p = Status::from_bits_retain(pulled) | Status::BREAK | Status::UNUSED;
    cpu.regs.pc = cpu.pull_word();
}

/// Executes the WAI (Wait for Interrupt) instruction.
///
/// The CPU idles until `irq()` or `nmi()` is called.
pub(crate) fn execute_wai<M: MemoryBus>(cpu: &mut CPU<M>) {
    debug!("WAI at PC=${:04X}", cpu.regs.pc.wrapping_sub(1));
    cpu.waiting = true;
}
