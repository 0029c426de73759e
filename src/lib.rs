//! # mpu65
//!
//! An instruction-level emulator of the NMOS 6502 and the CMOS 65C02
//! microprocessors, designed for clarity, testability and WebAssembly
//! portability.
//!
//! The crate provides the register file, the opcode tables of both variants,
//! a trait-based memory bus with an observable decorator for memory-mapped
//! I/O, interrupt sequencing, and a disassembler that reads the same tables
//! the CPU executes from.
//!
//! ## Quick Start
//!
//! ```rust
//! use mpu65::{CPU, FlatMemory, MemoryBus};
//!
//! // Create 64KB flat memory
//! let mut memory = FlatMemory::new();
//!
//! // Set reset vector to point to program start at 0x8000
//! memory.write(0xFFFC, 0x00); // Low byte
//! memory.write(0xFFFD, 0x80); // High byte
//!
//! // LDA #$42
//! memory.write(0x8000, 0xA9);
//! memory.write(0x8001, 0x42);
//!
//! // Initialize CPU - it will load PC from the reset vector
//! let mut cpu = CPU::new(memory);
//! assert_eq!(cpu.pc(), 0x8000);
//! assert_eq!(cpu.sp(), 0xFF);
//!
//! let cycles = cpu.step();
//! assert_eq!(cycles, 2);
//! assert_eq!(cpu.a(), 0x42);
//! ```
//!
//! ## Choosing a variant
//!
//! ```rust
//! use mpu65::{CpuConfig, CPU, FlatMemory, Variant};
//!
//! let variant: Variant = "65c02".parse().unwrap();
//! let config = CpuConfig::default().with_variant(variant).with_start_pc(0x0200);
//! let cpu = CPU::with_config(FlatMemory::new(), config);
//! assert_eq!(cpu.variant().name, "65C02");
//! assert_eq!(cpu.pc(), 0x0200);
//! ```
//!
//! ## Modules
//!
//! - `cpu` - CPU state, execution loop, interrupt sequencing
//! - `memory` - MemoryBus trait and flat memory
//! - `observable` - read/write subscriber decorator for any bus
//! - `opcodes` - Opcode metadata tables for both variants
//! - `variant` - per-variant capabilities and configuration
//! - `addressing` - Addressing mode enumeration
//! - `disassembler` - Table-driven disassembler

pub mod addressing;
pub mod cpu;
pub mod disassembler;
pub mod memory;
pub mod observable;
pub mod opcodes;
pub mod registers;
pub mod status;
pub mod variant;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::AddressingMode;
pub use cpu::CPU;
pub use disassembler::{
    decode_instruction, disassemble, disassemble_at, format_instruction, format_listing,
    DisassemblyOptions, Instruction,
};
pub use memory::{FlatMemory, MemoryBus, MAX_ADDRESS_WIDTH};
pub use observable::{ObservableMemory, ReadSubscriber, WriteSubscriber};
pub use opcodes::{
    opcode_for, OpcodeMetadata, OpcodeTable, Operation, CMOS_OPCODES, NMOS_OPCODES,
};
pub use registers::Registers;
pub use status::Status;
pub use variant::{CpuConfig, Variant};

/// Errors raised while configuring memory or a CPU.
///
/// Execution itself never fails: every opcode byte has a defined behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Address width outside `1..=16` bits.
    InvalidAddressWidth(u32),

    /// No processor variant with this name.
    UnknownVariant(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConfigError::InvalidAddressWidth(width) => write!(
                f,
                "Address width {} is not supported (expected 1 to {} bits)",
                width, MAX_ADDRESS_WIDTH
            ),
            ConfigError::UnknownVariant(name) => {
                write!(f, "Unknown processor variant '{}'", name)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
