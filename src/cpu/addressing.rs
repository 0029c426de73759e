//! # Operand Resolution
//!
//! Turns an addressing mode plus the operand bytes at PC into either a value
//! or an effective address. PC is left pointing at the next instruction.
//!
//! Zero-page vectors used by `($nn,X)` and `($nn),Y` wrap within the zero
//! page on both variants. The NMOS `JMP ($xxFF)` bug is applied only when the
//! variant asks for it.

use super::CPU;
use crate::{AddressingMode, MemoryBus};

/// Result of resolving an addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operand {
    /// No operand (implied instructions).
    None,

    /// The accumulator is the operand.
    Accumulator,

    /// Literal value following the opcode.
    Immediate(u8),

    /// Effective address. `page_crossed` is set when indexing (or a branch
    /// target) lands on a different page than the unindexed base.
    Address { addr: u16, page_crossed: bool },
}

impl Operand {
    fn at(addr: u16) -> Self {
        Operand::Address {
            addr,
            page_crossed: false,
        }
    }

    fn indexed(base: u16, index: u8) -> Self {
        let addr = base.wrapping_add(index as u16);
        Operand::Address {
            addr,
            page_crossed: pages_differ(base, addr),
        }
    }

    /// Whether resolution crossed a page boundary.
    pub(crate) fn page_crossed(self) -> bool {
        matches!(
            self,
            Operand::Address {
                page_crossed: true,
                ..
            }
        )
    }

    /// Effective address, or 0 for operands that have none.
    pub(crate) fn address(self) -> u16 {
        match self {
            Operand::Address { addr, .. } => addr,
            _ => 0,
        }
    }
}

/// True when `a` and `b` lie on different 256-byte pages.
pub(crate) fn pages_differ(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

impl<M: MemoryBus> CPU<M> {
    /// Consumes the operand bytes for `mode` and resolves them.
    pub(crate) fn resolve_operand(&mut self, mode: AddressingMode) -> Operand {
        match mode {
            AddressingMode::Implied => Operand::None,
            AddressingMode::Accumulator => Operand::Accumulator,
            AddressingMode::Immediate => Operand::Immediate(self.fetch_byte()),
            AddressingMode::ZeroPage => Operand::at(self.fetch_byte() as u16),
            AddressingMode::ZeroPageX => {
                let base = self.fetch_byte();
                Operand::at(base.wrapping_add(self.regs.x) as u16)
            }
            AddressingMode::ZeroPageY => {
                let base = self.fetch_byte();
                Operand::at(base.wrapping_add(self.regs.y) as u16)
            }
            AddressingMode::Relative => {
                let offset = self.fetch_byte() as i8;
                let next = self.regs.pc;
                let target = next.wrapping_add(offset as u16);
                Operand::Address {
                    addr: target,
                    page_crossed: pages_differ(next, target),
                }
            }
            AddressingMode::Absolute => Operand::at(self.fetch_word()),
            AddressingMode::AbsoluteX => {
                let base = self.fetch_word();
                Operand::indexed(base, self.regs.x)
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch_word();
                Operand::indexed(base, self.regs.y)
            }
            AddressingMode::Indirect => {
                let pointer = self.fetch_word();
                Operand::at(self.read_jump_vector(pointer))
            }
            AddressingMode::IndirectX => {
                let pointer = self.fetch_byte().wrapping_add(self.regs.x);
                Operand::at(self.read_zero_page_word(pointer))
            }
            AddressingMode::IndirectY => {
                let pointer = self.fetch_byte();
                let base = self.read_zero_page_word(pointer);
                Operand::indexed(base, self.regs.y)
            }
            AddressingMode::ZeroPageIndirect => {
                let pointer = self.fetch_byte();
                Operand::at(self.memory.read_word(pointer as u16))
            }
            AddressingMode::IndirectAbsoluteX => {
                let pointer = self.fetch_word().wrapping_add(self.regs.x as u16);
                Operand::at(self.memory.read_word(pointer))
            }
        }
    }

    /// Reads a vector stored in the zero page; the high byte wraps to $00.
    pub(crate) fn read_zero_page_word(&self, pointer: u8) -> u16 {
        let lo = self.memory.read(pointer as u16) as u16;
        let hi = self.memory.read(pointer.wrapping_add(1) as u16) as u16;
        (hi << 8) | lo
    }

    /// Reads the target of `JMP (pointer)`.
    ///
    /// With the NMOS page-wrap quirk the high byte comes from the start of
    /// the pointer's page when the pointer's low byte is $FF.
    fn read_jump_vector(&self, pointer: u16) -> u16 {
        if self.variant.indirect_jump_page_wrap {
            let hi_addr = (pointer & 0xFF00) | (pointer.wrapping_add(1) & 0x00FF);
            let lo = self.memory.read(pointer) as u16;
            let hi = self.memory.read(hi_addr) as u16;
            (hi << 8) | lo
        } else {
            self.memory.read_word(pointer)
        }
    }

    /// Reads the byte an operand designates.
    pub(crate) fn read_operand(&self, operand: Operand) -> u8 {
        match operand {
            Operand::Immediate(value) => value,
            Operand::Accumulator => self.regs.a,
            Operand::Address { addr, .. } => self.memory.read(addr),
            Operand::None => 0,
        }
    }

    /// Stores a byte to the location an operand designates.
    pub(crate) fn write_operand(&mut self, operand: Operand, value: u8) {
        match operand {
            Operand::Accumulator => self.regs.a = value,
            Operand::Address { addr, .. } => self.memory.write(addr, value),
            Operand::Immediate(_) | Operand::None => {}
        }
    }
}
