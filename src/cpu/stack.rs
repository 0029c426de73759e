//! Hardware stack on page one.
//!
//! Push writes to `$0100 + SP` and then decrements SP; pull increments SP and
//! then reads. SP wraps within the page in both directions.

use super::CPU;
use crate::MemoryBus;

/// Base address of the stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Address of the stack slot for a stack pointer value.
///
/// # Examples
///
/// ```
/// use mpu65::cpu::stack_address;
///
/// assert_eq!(stack_address(0xFF), 0x01FF);
/// assert_eq!(stack_address(0x00), 0x0100);
/// ```
pub const fn stack_address(sp: u8) -> u16 {
    STACK_BASE | sp as u16
}

impl<M: MemoryBus> CPU<M> {
    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(stack_address(self.regs.sp), value);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
    }

    pub(crate) fn pull(&mut self) -> u8 {
        self.regs.sp = self.regs.sp.wrapping_add(1);
        self.memory.read(stack_address(self.regs.sp))
    }

    /// Pushes high byte first so the word sits little-endian in memory.
    pub(crate) fn push_word(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push(value as u8);
    }

    pub(crate) fn pull_word(&mut self) -> u16 {
        let lo = self.pull() as u16;
        let hi = self.pull() as u16;
        (hi << 8) | lo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    #[test]
    fn test_push_pull_word_layout() {
        let mut cpu = CPU::new(FlatMemory::new());
        cpu.push_word(0xABCD);

        assert_eq!(cpu.regs.sp, 0xFD);
        assert_eq!(cpu.memory.read(0x01FF), 0xAB);
        assert_eq!(cpu.memory.read(0x01FE), 0xCD);
        assert_eq!(cpu.pull_word(), 0xABCD);
        assert_eq!(cpu.regs.sp, 0xFF);
    }

    #[test]
    fn test_stack_pointer_wraps() {
        let mut cpu = CPU::new(FlatMemory::new());
        cpu.regs.sp = 0x00;
        cpu.push(0x42);
        assert_eq!(cpu.memory.read(0x0100), 0x42);
        assert_eq!(cpu.regs.sp, 0xFF);

        assert_eq!(cpu.pull(), 0x42);
        assert_eq!(cpu.regs.sp, 0x00);
    }
}
