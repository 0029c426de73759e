//! # Reset and Interrupt Sequencing
//!
//! Reset, IRQ and NMI entry. `BRK` shares the entry path from the
//! instruction handlers.
//!
//! ## Interrupt Sequence
//!
//! 1. Push PC (high byte, then low byte)
//! 2. Push P with UNUSED set; BREAK set only for `BRK`
//! 3. Set the Interrupt Disable flag (and clear DECIMAL on the 65C02)
//! 4. Load PC from the vector
//! 5. 7 cycles elapse

use super::CPU;
use crate::{MemoryBus, Status};
use log::debug;

/// NMI vector address ($FFFA-$FFFB).
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Reset vector address ($FFFC-$FFFD).
pub const RESET_VECTOR: u16 = 0xFFFC;

/// IRQ/BRK vector address ($FFFE-$FFFF).
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Cycles taken to enter an IRQ or NMI handler.
const INTERRUPT_CYCLES: u64 = 7;

impl<M: MemoryBus> CPU<M> {
    /// Resets the processor.
    ///
    /// SP becomes 0xFF, A/X/Y are cleared, P becomes BREAK|UNUSED, the cycle
    /// counter restarts at zero, and PC comes from the configured start
    /// address or else the reset vector. Memory is untouched. Resetting twice
    /// in a row leaves the same state as resetting once.
    ///
    /// # Examples
    ///
    /// ```
    /// use mpu65::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0xCD);
    /// mem.write(0xFFFD, 0xAB);
    ///
    /// let mut cpu = CPU::new(mem);
    /// cpu.set_a(0x99);
    /// cpu.set_flag_d(true);
    /// cpu.reset();
    ///
    /// assert_eq!(cpu.pc(), 0xABCD);
    /// assert_eq!(cpu.a(), 0x00);
    /// assert_eq!(cpu.status(), 0x30);
    /// ```
    pub fn reset(&mut self) {
        self.regs.pc = match self.start_pc {
            Some(pc) => pc,
            None => self.memory.read_word(RESET_VECTOR),
        };
        self.regs.sp = 0xFF;
        self.regs.a = 0;
        self.regs.x = 0;
        self.regs.y = 0;
        self.regs.p = Status::BREAK | Status::UNUSED;
        self.regs.cycles = 0;
        self.waiting = false;

        debug!("{} reset, PC=${:04X}", self.variant.name, self.regs.pc);
    }

    /// Requests a maskable interrupt.
    ///
    /// Wakes a CPU halted by `WAI`. The request is ignored while the
    /// Interrupt Disable flag is set; otherwise the interrupt sequence runs
    /// with BREAK cleared. Returns whether the interrupt was taken.
    ///
    /// # Examples
    ///
    /// ```
    /// use mpu65::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFE, 0x00);
    /// mem.write(0xFFFF, 0x90);
    ///
    /// let mut cpu = CPU::new(mem);
    /// assert!(cpu.irq());
    /// assert_eq!(cpu.pc(), 0x9000);
    /// assert!(cpu.flag_i());
    ///
    /// // Masked now
    /// assert!(!cpu.irq());
    /// ```
    pub fn irq(&mut self) -> bool {
        self.waiting = false;

        if self.regs.p.contains(Status::INTERRUPT) {
            debug!("IRQ masked at PC=${:04X}", self.regs.pc);
            return false;
        }

        debug!("IRQ at PC=${:04X}", self.regs.pc);
        self.regs.p.remove(Status::BREAK);
        let pushed = self.regs.p | Status::UNUSED;
        self.enter_interrupt(self.regs.pc, pushed, IRQ_VECTOR);
        self.regs.cycles = self.regs.cycles.wrapping_add(INTERRUPT_CYCLES);
        true
    }

    /// Signals a non-maskable interrupt.
    ///
    /// Always taken, regardless of the Interrupt Disable flag.
    pub fn nmi(&mut self) {
        self.waiting = false;

        debug!("NMI at PC=${:04X}", self.regs.pc);
        self.regs.p.remove(Status::BREAK);
        let pushed = self.regs.p | Status::UNUSED;
        self.enter_interrupt(self.regs.pc, pushed, NMI_VECTOR);
        self.regs.cycles = self.regs.cycles.wrapping_add(INTERRUPT_CYCLES);
    }

    /// Pushes the return address and status, masks IRQs and jumps through
    /// `vector`. Cycle accounting is left to the caller.
    pub(crate) fn enter_interrupt(&mut self, return_pc: u16, pushed: Status, vector: u16) {
        self.push_word(return_pc);
        self.push(pushed.bits());
        self.regs.p.insert(Status::INTERRUPT);
        if self.variant.clears_decimal_on_interrupt {
            self.regs.p.remove(Status::DECIMAL);
        }
        self.regs.pc = self.memory.read_word(vector);
    }
}
