//! # Register File
//!
//! Plain value type holding every piece of architectural CPU state except
//! memory. Being `Copy + Eq`, a snapshot can be taken before an instruction
//! and compared after it.

use crate::Status;

/// 6502 register file.
///
/// All fields are fixed-width integers, so every mutation is implicitly masked
/// to its register width; arithmetic on them uses wrapping operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Registers {
    /// Accumulator
    pub a: u8,

    /// X index register
    pub x: u8,

    /// Y index register
    pub y: u8,

    /// Program counter (address of next instruction)
    pub pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub sp: u8,

    /// Status register
    pub p: Status,

    /// Total CPU cycles executed
    pub cycles: u64,
}

impl Default for Registers {
    fn default() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            sp: 0,
            p: Status::UNUSED,
            cycles: 0,
        }
    }
}
