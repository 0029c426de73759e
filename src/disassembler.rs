//! 6502/65C02 Disassembler Module
//!
//! Converts binary machine code into human-readable assembly mnemonics. The
//! decoder reads the same opcode table the CPU executes from, so a listing
//! always agrees with what `step()` would do for the chosen variant.
//!
//! ```
//! use mpu65::{disassemble_at, FlatMemory, MemoryBus, Variant};
//!
//! let mut mem = FlatMemory::new();
//! mem.load(0xC000, &[0xF0, 0xFC]);
//!
//! let (length, text) = disassemble_at(&mem, Variant::NMOS_6502.opcodes, 0xC000);
//! assert_eq!(length, 2);
//! assert_eq!(text, "BEQ $bffe");
//! ```

pub mod decoder;
pub mod formatter;

pub use decoder::decode_instruction;
pub use formatter::{format_instruction, format_listing};

use crate::addressing::AddressingMode;
use crate::{MemoryBus, OpcodeTable};

/// A single disassembled instruction with full metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    /// Memory address where this instruction starts
    pub address: u16,

    /// The opcode byte value (0x00-0xFF)
    pub opcode: u8,

    /// Instruction mnemonic (e.g., "LDA", "RMB0", "???")
    pub mnemonic: &'static str,

    /// Addressing mode used by this instruction
    pub addressing_mode: AddressingMode,

    /// Operand bytes (0-2 bytes depending on addressing mode)
    pub operand_bytes: Vec<u8>,

    /// Total size in bytes (1-3 bytes: opcode + operands)
    pub size_bytes: u8,

    /// Base cycle cost (excluding page-crossing penalties)
    pub base_cycles: u8,
}

/// Options controlling disassembly output
#[derive(Debug, Clone, Copy)]
pub struct DisassemblyOptions {
    /// Starting address for disassembly (affects address display)
    pub start_address: u16,

    /// Whether listings include the raw instruction bytes
    pub hex_dump: bool,

    /// Whether listings include the instruction address
    pub show_addresses: bool,
}

impl Default for DisassemblyOptions {
    fn default() -> Self {
        Self {
            start_address: 0x0000,
            hex_dump: false,
            show_addresses: true,
        }
    }
}

/// Disassemble a byte slice into a vector of instructions
///
/// # Arguments
///
/// * `table` - Opcode table of the variant to decode for
/// * `bytes` - The machine code to disassemble
/// * `options` - Disassembly options controlling output format
///
/// # Returns
///
/// A vector of `Instruction` structs, one for each decoded instruction.
/// Once an instruction's operands run past the end of `bytes`, that byte and
/// every byte after it become `.byte` entries.
///
/// # Examples
///
/// ```
/// use mpu65::{disassemble, format_instruction, DisassemblyOptions, CMOS_OPCODES};
///
/// let listing = disassemble(&CMOS_OPCODES, &[0x64, 0x12, 0x80, 0xFE], DisassemblyOptions::default());
/// let text: Vec<String> = listing.iter().map(format_instruction).collect();
/// assert_eq!(text, vec!["STZ $12", "BRA $0002"]);
/// ```
pub fn disassemble(
    table: &OpcodeTable,
    bytes: &[u8],
    options: DisassemblyOptions,
) -> Vec<Instruction> {
    let mut instructions = Vec::new();
    let mut pc = 0;
    let mut address = options.start_address;

    while pc < bytes.len() {
        match decoder::decode_instruction(table, &bytes[pc..], address) {
            Some(instr) => {
                pc += instr.size_bytes as usize;
                address = address.wrapping_add(instr.size_bytes as u16);
                instructions.push(instr);
            }
            None => {
                // Operands run past the end of the input; the rest is data
                for &byte in &bytes[pc..] {
                    instructions.push(Instruction {
                        address,
                        opcode: byte,
                        mnemonic: ".byte",
                        addressing_mode: AddressingMode::Implied,
                        operand_bytes: vec![byte],
                        size_bytes: 1,
                        base_cycles: 0,
                    });
                    address = address.wrapping_add(1);
                }
                break;
            }
        }
    }

    instructions
}

/// Disassembles the instruction at `address` on a memory bus.
///
/// Operand bytes are fetched with 16-bit wrap-around, so an instruction at
/// $FFFF takes its operands from $0000 onward.
///
/// # Returns
///
/// The instruction length in bytes and its text.
pub fn disassemble_at<M: MemoryBus + ?Sized>(
    bus: &M,
    table: &OpcodeTable,
    address: u16,
) -> (u8, String) {
    let opcode = bus.read(address);
    let size = table[opcode as usize].size_bytes;
    let bytes: Vec<u8> = (0..size as u16)
        .map(|offset| bus.read(address.wrapping_add(offset)))
        .collect();

    match decoder::decode_instruction(table, &bytes, address) {
        Some(instr) => (instr.size_bytes, format_instruction(&instr)),
        None => (1, "???".to_string()),
    }
}
