//! Formatting functions for disassembled instructions

use crate::addressing::AddressingMode;
use crate::disassembler::{DisassemblyOptions, Instruction};
use std::fmt::Write;

/// Format a single instruction as assembly text
///
/// # Arguments
///
/// * `instr` - The instruction to format
///
/// # Returns
///
/// A string containing the formatted assembly instruction
pub fn format_instruction(instr: &Instruction) -> String {
    let operand = format_operand(instr);

    if operand.is_empty() {
        instr.mnemonic.to_string()
    } else {
        format!("{} {}", instr.mnemonic, operand)
    }
}

/// Format a listing, one instruction per line.
///
/// Each line is `$addr  bytes  text`, with the address and raw-byte columns
/// controlled by `options`.
///
/// # Examples
///
/// ```
/// use mpu65::{disassemble, format_listing, DisassemblyOptions, NMOS_OPCODES};
///
/// let options = DisassemblyOptions {
///     start_address: 0xC000,
///     hex_dump: true,
///     show_addresses: true,
/// };
/// let listing = disassemble(&NMOS_OPCODES, &[0xA9, 0x01, 0x60], options);
/// assert_eq!(
///     format_listing(&listing, &options),
///     "$c000  a9 01     LDA #$01\n$c002  60        RTS\n"
/// );
/// ```
pub fn format_listing(instructions: &[Instruction], options: &DisassemblyOptions) -> String {
    let mut out = String::new();

    for instr in instructions {
        if options.show_addresses {
            let _ = write!(out, "${:04x}  ", instr.address);
        }
        if options.hex_dump {
            let mut raw = format!("{:02x}", instr.opcode);
            if instr.mnemonic != ".byte" {
                for byte in &instr.operand_bytes {
                    let _ = write!(raw, " {:02x}", byte);
                }
            }
            let _ = write!(out, "{:<10}", raw);
        }
        out.push_str(&format_instruction(instr));
        out.push('\n');
    }

    out
}

fn byte_operand(instr: &Instruction) -> Option<u8> {
    instr.operand_bytes.first().copied()
}

fn word_operand(instr: &Instruction) -> Option<u16> {
    match instr.operand_bytes.as_slice() {
        [lo, hi, ..] => Some(u16::from_le_bytes([*lo, *hi])),
        _ => None,
    }
}

/// Format the operand based on addressing mode
fn format_operand(instr: &Instruction) -> String {
    use AddressingMode::*;

    if instr.mnemonic == ".byte" {
        return format!("${:02x}", instr.opcode);
    }

    let byte = byte_operand(instr);
    let word = word_operand(instr);

    match (instr.addressing_mode, byte, word) {
        (Implied, _, _) => String::new(),
        (Accumulator, _, _) => "A".to_string(),
        (Immediate, Some(b), _) => format!("#${:02x}", b),
        (ZeroPage, Some(b), _) => format!("${:02x}", b),
        (ZeroPageX, Some(b), _) => format!("${:02x},X", b),
        (ZeroPageY, Some(b), _) => format!("${:02x},Y", b),
        (IndirectX, Some(b), _) => format!("(${:02x},X)", b),
        (IndirectY, Some(b), _) => format!("(${:02x}),Y", b),
        (ZeroPageIndirect, Some(b), _) => format!("(${:02x})", b),
        (Relative, Some(b), _) => {
            // Target is relative to the instruction that follows
            let target = instr
                .address
                .wrapping_add(2)
                .wrapping_add(b as i8 as u16);
            format!("${:04x}", target)
        }
        (Absolute, _, Some(w)) => format!("${:04x}", w),
        (AbsoluteX, _, Some(w)) => format!("${:04x},X", w),
        (AbsoluteY, _, Some(w)) => format!("${:04x},Y", w),
        (Indirect, _, Some(w)) => format!("(${:04x})", w),
        (IndirectAbsoluteX, _, Some(w)) => format!("(${:04x},X)", w),
        // Hand-built instruction without enough operand bytes
        _ => "?".to_string(),
    }
}
