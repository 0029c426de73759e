//! Instruction decoder for the disassembler

use crate::disassembler::Instruction;
use crate::opcodes::OpcodeTable;

/// Decode a single instruction from a byte slice
///
/// # Arguments
///
/// * `table` - Opcode table of the variant to decode for
/// * `bytes` - The byte slice starting at the instruction to decode
/// * `address` - The memory address of this instruction
///
/// # Returns
///
/// `Some(Instruction)` unless `bytes` is empty or too short for the operands.
/// Unassigned opcodes decode as a one-byte `???`.
pub fn decode_instruction(table: &OpcodeTable, bytes: &[u8], address: u16) -> Option<Instruction> {
    let (&opcode, rest) = bytes.split_first()?;
    let metadata = &table[opcode as usize];

    let operand_count = (metadata.size_bytes - 1) as usize;
    let operand_bytes = rest.get(..operand_count)?.to_vec();

    Some(Instruction {
        address,
        opcode,
        mnemonic: metadata.mnemonic,
        addressing_mode: metadata.addressing_mode,
        operand_bytes,
        size_bytes: metadata.size_bytes,
        base_cycles: metadata.base_cycles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addressing::AddressingMode;
    use crate::{CMOS_OPCODES, NMOS_OPCODES};

    #[test]
    fn test_decode_lda_immediate() {
        let bytes = &[0xA9, 0x42];
        let instr = decode_instruction(&NMOS_OPCODES, bytes, 0x8000).unwrap();

        assert_eq!(instr.address, 0x8000);
        assert_eq!(instr.opcode, 0xA9);
        assert_eq!(instr.mnemonic, "LDA");
        assert_eq!(instr.addressing_mode, AddressingMode::Immediate);
        assert_eq!(instr.operand_bytes, vec![0x42]);
        assert_eq!(instr.size_bytes, 2);
    }

    #[test]
    fn test_decode_sta_absolute() {
        let bytes = &[0x8D, 0x00, 0x80];
        let instr = decode_instruction(&NMOS_OPCODES, bytes, 0x0000).unwrap();

        assert_eq!(instr.mnemonic, "STA");
        assert_eq!(instr.addressing_mode, AddressingMode::Absolute);
        assert_eq!(instr.operand_bytes, vec![0x00, 0x80]);
        assert_eq!(instr.size_bytes, 3);
    }

    #[test]
    fn test_decode_unassigned_is_one_byte() {
        let instr = decode_instruction(&NMOS_OPCODES, &[0x92, 0x12], 0x0000).unwrap();
        assert_eq!(instr.mnemonic, "???");
        assert_eq!(instr.size_bytes, 1);
        assert!(instr.operand_bytes.is_empty());
    }

    #[test]
    fn test_decode_cmos_zero_page_indirect() {
        let instr = decode_instruction(&CMOS_OPCODES, &[0x92, 0x12], 0x0000).unwrap();
        assert_eq!(instr.mnemonic, "STA");
        assert_eq!(instr.addressing_mode, AddressingMode::ZeroPageIndirect);
    }

    #[test]
    fn test_decode_truncated() {
        assert!(decode_instruction(&NMOS_OPCODES, &[], 0x0000).is_none());
        assert!(decode_instruction(&NMOS_OPCODES, &[0x4C, 0x00], 0x0000).is_none());
    }
}
