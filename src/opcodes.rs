//! # Opcode Metadata Tables
//!
//! This module contains the 256-entry opcode tables that serve as the single
//! source of truth for instruction decoding, one per supported variant.
//!
//! - **`NMOS_OPCODES`**: the 151 documented NMOS 6502 opcodes; the other 105
//!   entries are unassigned and marked with the "???" mnemonic.
//! - **`CMOS_OPCODES`**: the NMOS table with a sparse override list applied:
//!   new 65C02 instructions, the new addressing modes, and the corrected
//!   `JMP ($nnnn)` timing.
//!
//! Each opcode entry includes:
//! - Mnemonic (instruction name)
//! - Operation (the handler the CPU dispatches to)
//! - Addressing mode
//! - Base cycle cost (excluding page-crossing and branch penalties)
//! - Instruction size in bytes
//! - Whether indexed page crossing costs an extra cycle

use crate::addressing::AddressingMode;

/// The operation an opcode performs, independent of its addressing mode.
///
/// The CPU dispatches on this tag; `Rmb`/`Smb` carry the bit number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Bra,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Phx,
    Phy,
    Pla,
    Plp,
    Plx,
    Ply,
    Rmb(u8),
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Smb(u8),
    Sta,
    Stx,
    Sty,
    Stz,
    Tax,
    Tay,
    Trb,
    Tsb,
    Tsx,
    Txa,
    Txs,
    Tya,
    Wai,
    /// No instruction assigned; executes as a 1-byte NOP.
    Unassigned,
}

/// Metadata for a single opcode.
///
/// # Examples
///
/// ```
/// use mpu65::{AddressingMode, Operation, NMOS_OPCODES};
///
/// let lda_imm = &NMOS_OPCODES[0xA9];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.operation, Operation::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic (e.g., "LDA", "RMB3", "???" for unassigned opcodes).
    pub mnemonic: &'static str,

    /// Operation dispatched by the CPU.
    pub operation: Operation,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost (before page crossing and branch penalties).
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands), 1-3.
    pub size_bytes: u8,

    /// Whether an indexed access that crosses a page costs one extra cycle.
    pub page_penalty: bool,
}

impl OpcodeMetadata {
    const fn new(
        mnemonic: &'static str,
        operation: Operation,
        addressing_mode: AddressingMode,
        base_cycles: u8,
    ) -> Self {
        Self {
            mnemonic,
            operation,
            addressing_mode,
            base_cycles,
            size_bytes: 1 + addressing_mode.operand_bytes(),
            page_penalty: false,
        }
    }

    const fn penalized(self) -> Self {
        Self {
            page_penalty: true,
            ..self
        }
    }

    /// Whether the opcode has no assigned instruction.
    pub const fn is_unassigned(&self) -> bool {
        matches!(self.operation, Operation::Unassigned)
    }
}

/// A full 256-entry opcode table, indexed by opcode byte.
pub type OpcodeTable = [OpcodeMetadata; 256];

/// Entry used for every opcode without an assigned instruction.
///
/// Unassigned opcodes consume only the opcode byte and cost 2 cycles, the
/// same as `NOP`.
pub const UNASSIGNED: OpcodeMetadata =
    OpcodeMetadata::new("???", Operation::Unassigned, AddressingMode::Implied, 2);

const fn nmos_table() -> OpcodeTable {
    use AddressingMode::*;
    use Operation::*;
    const fn op(m: &'static str, o: Operation, mode: AddressingMode, c: u8) -> OpcodeMetadata {
        OpcodeMetadata::new(m, o, mode, c)
    }

    let mut t = [UNASSIGNED; 256];

    // ADC
    t[0x69] = op("ADC", Adc, Immediate, 2);
    t[0x65] = op("ADC", Adc, ZeroPage, 3);
    t[0x75] = op("ADC", Adc, ZeroPageX, 4);
    t[0x6D] = op("ADC", Adc, Absolute, 4);
    t[0x7D] = op("ADC", Adc, AbsoluteX, 4).penalized();
    t[0x79] = op("ADC", Adc, AbsoluteY, 4).penalized();
    t[0x61] = op("ADC", Adc, IndirectX, 6);
    t[0x71] = op("ADC", Adc, IndirectY, 5).penalized();

    // AND
    t[0x29] = op("AND", And, Immediate, 2);
    t[0x25] = op("AND", And, ZeroPage, 3);
    t[0x35] = op("AND", And, ZeroPageX, 4);
    t[0x2D] = op("AND", And, Absolute, 4);
    t[0x3D] = op("AND", And, AbsoluteX, 4).penalized();
    t[0x39] = op("AND", And, AbsoluteY, 4).penalized();
    t[0x21] = op("AND", And, IndirectX, 6);
    t[0x31] = op("AND", And, IndirectY, 5).penalized();

    // ASL
    t[0x0A] = op("ASL", Asl, Accumulator, 2);
    t[0x06] = op("ASL", Asl, ZeroPage, 5);
    t[0x16] = op("ASL", Asl, ZeroPageX, 6);
    t[0x0E] = op("ASL", Asl, Absolute, 6);
    t[0x1E] = op("ASL", Asl, AbsoluteX, 7);

    // Branches
    t[0x90] = op("BCC", Bcc, Relative, 2);
    t[0xB0] = op("BCS", Bcs, Relative, 2);
    t[0xF0] = op("BEQ", Beq, Relative, 2);
    t[0x30] = op("BMI", Bmi, Relative, 2);
    t[0xD0] = op("BNE", Bne, Relative, 2);
    t[0x10] = op("BPL", Bpl, Relative, 2);
    t[0x50] = op("BVC", Bvc, Relative, 2);
    t[0x70] = op("BVS", Bvs, Relative, 2);

    // BIT
    t[0x24] = op("BIT", Bit, ZeroPage, 3);
    t[0x2C] = op("BIT", Bit, Absolute, 4);

    t[0x00] = op("BRK", Brk, Implied, 7);

    // Flag operations
    t[0x18] = op("CLC", Clc, Implied, 2);
    t[0xD8] = op("CLD", Cld, Implied, 2);
    t[0x58] = op("CLI", Cli, Implied, 2);
    t[0xB8] = op("CLV", Clv, Implied, 2);
    t[0x38] = op("SEC", Sec, Implied, 2);
    t[0xF8] = op("SED", Sed, Implied, 2);
    t[0x78] = op("SEI", Sei, Implied, 2);

    // CMP
    t[0xC9] = op("CMP", Cmp, Immediate, 2);
    t[0xC5] = op("CMP", Cmp, ZeroPage, 3);
    t[0xD5] = op("CMP", Cmp, ZeroPageX, 4);
    t[0xCD] = op("CMP", Cmp, Absolute, 4);
    t[0xDD] = op("CMP", Cmp, AbsoluteX, 4).penalized();
    t[0xD9] = op("CMP", Cmp, AbsoluteY, 4).penalized();
    t[0xC1] = op("CMP", Cmp, IndirectX, 6);
    t[0xD1] = op("CMP", Cmp, IndirectY, 5).penalized();

    // CPX / CPY
    t[0xE0] = op("CPX", Cpx, Immediate, 2);
    t[0xE4] = op("CPX", Cpx, ZeroPage, 3);
    t[0xEC] = op("CPX", Cpx, Absolute, 4);
    t[0xC0] = op("CPY", Cpy, Immediate, 2);
    t[0xC4] = op("CPY", Cpy, ZeroPage, 3);
    t[0xCC] = op("CPY", Cpy, Absolute, 4);

    // DEC
    t[0xC6] = op("DEC", Dec, ZeroPage, 5);
    t[0xD6] = op("DEC", Dec, ZeroPageX, 6);
    t[0xCE] = op("DEC", Dec, Absolute, 6);
    t[0xDE] = op("DEC", Dec, AbsoluteX, 7);
    t[0xCA] = op("DEX", Dex, Implied, 2);
    t[0x88] = op("DEY", Dey, Implied, 2);

    // EOR
    t[0x49] = op("EOR", Eor, Immediate, 2);
    t[0x45] = op("EOR", Eor, ZeroPage, 3);
    t[0x55] = op("EOR", Eor, ZeroPageX, 4);
    t[0x4D] = op("EOR", Eor, Absolute, 4);
    t[0x5D] = op("EOR", Eor, AbsoluteX, 4).penalized();
    t[0x59] = op("EOR", Eor, AbsoluteY, 4).penalized();
    t[0x41] = op("EOR", Eor, IndirectX, 6);
    t[0x51] = op("EOR", Eor, IndirectY, 5).penalized();

    // INC
    t[0xE6] = op("INC", Inc, ZeroPage, 5);
    t[0xF6] = op("INC", Inc, ZeroPageX, 6);
    t[0xEE] = op("INC", Inc, Absolute, 6);
    t[0xFE] = op("INC", Inc, AbsoluteX, 7);
    t[0xE8] = op("INX", Inx, Implied, 2);
    t[0xC8] = op("INY", Iny, Implied, 2);

    // Jumps and subroutines
    t[0x4C] = op("JMP", Jmp, Absolute, 3);
    t[0x6C] = op("JMP", Jmp, Indirect, 5);
    t[0x20] = op("JSR", Jsr, Absolute, 6);
    t[0x40] = op("RTI", Rti, Implied, 6);
    t[0x60] = op("RTS", Rts, Implied, 6);

    // LDA
    t[0xA9] = op("LDA", Lda, Immediate, 2);
    t[0xA5] = op("LDA", Lda, ZeroPage, 3);
    t[0xB5] = op("LDA", Lda, ZeroPageX, 4);
    t[0xAD] = op("LDA", Lda, Absolute, 4);
    t[0xBD] = op("LDA", Lda, AbsoluteX, 4).penalized();
    t[0xB9] = op("LDA", Lda, AbsoluteY, 4).penalized();
    t[0xA1] = op("LDA", Lda, IndirectX, 6);
    t[0xB1] = op("LDA", Lda, IndirectY, 5).penalized();

    // LDX
    t[0xA2] = op("LDX", Ldx, Immediate, 2);
    t[0xA6] = op("LDX", Ldx, ZeroPage, 3);
    t[0xB6] = op("LDX", Ldx, ZeroPageY, 4);
    t[0xAE] = op("LDX", Ldx, Absolute, 4);
    t[0xBE] = op("LDX", Ldx, AbsoluteY, 4).penalized();

    // LDY
    t[0xA0] = op("LDY", Ldy, Immediate, 2);
    t[0xA4] = op("LDY", Ldy, ZeroPage, 3);
    t[0xB4] = op("LDY", Ldy, ZeroPageX, 4);
    t[0xAC] = op("LDY", Ldy, Absolute, 4);
    t[0xBC] = op("LDY", Ldy, AbsoluteX, 4).penalized();

    // LSR
    t[0x4A] = op("LSR", Lsr, Accumulator, 2);
    t[0x46] = op("LSR", Lsr, ZeroPage, 5);
    t[0x56] = op("LSR", Lsr, ZeroPageX, 6);
    t[0x4E] = op("LSR", Lsr, Absolute, 6);
    t[0x5E] = op("LSR", Lsr, AbsoluteX, 7);

    t[0xEA] = op("NOP", Nop, Implied, 2);

    // ORA
    t[0x09] = op("ORA", Ora, Immediate, 2);
    t[0x05] = op("ORA", Ora, ZeroPage, 3);
    t[0x15] = op("ORA", Ora, ZeroPageX, 4);
    t[0x0D] = op("ORA", Ora, Absolute, 4);
    t[0x1D] = op("ORA", Ora, AbsoluteX, 4).penalized();
    t[0x19] = op("ORA", Ora, AbsoluteY, 4).penalized();
    t[0x01] = op("ORA", Ora, IndirectX, 6);
    t[0x11] = op("ORA", Ora, IndirectY, 5).penalized();

    // Stack
    t[0x48] = op("PHA", Pha, Implied, 3);
    t[0x08] = op("PHP", Php, Implied, 3);
    t[0x68] = op("PLA", Pla, Implied, 4);
    t[0x28] = op("PLP", Plp, Implied, 4);

    // ROL / ROR
    t[0x2A] = op("ROL", Rol, Accumulator, 2);
    t[0x26] = op("ROL", Rol, ZeroPage, 5);
    t[0x36] = op("ROL", Rol, ZeroPageX, 6);
    t[0x2E] = op("ROL", Rol, Absolute, 6);
    t[0x3E] = op("ROL", Rol, AbsoluteX, 7);
    t[0x6A] = op("ROR", Ror, Accumulator, 2);
    t[0x66] = op("ROR", Ror, ZeroPage, 5);
    t[0x76] = op("ROR", Ror, ZeroPageX, 6);
    t[0x6E] = op("ROR", Ror, Absolute, 6);
    t[0x7E] = op("ROR", Ror, AbsoluteX, 7);

    // SBC
    t[0xE9] = op("SBC", Sbc, Immediate, 2);
    t[0xE5] = op("SBC", Sbc, ZeroPage, 3);
    t[0xF5] = op("SBC", Sbc, ZeroPageX, 4);
    t[0xED] = op("SBC", Sbc, Absolute, 4);
    t[0xFD] = op("SBC", Sbc, AbsoluteX, 4).penalized();
    t[0xF9] = op("SBC", Sbc, AbsoluteY, 4).penalized();
    t[0xE1] = op("SBC", Sbc, IndirectX, 6);
    t[0xF1] = op("SBC", Sbc, IndirectY, 5).penalized();

    // STA
    t[0x85] = op("STA", Sta, ZeroPage, 3);
    t[0x95] = op("STA", Sta, ZeroPageX, 4);
    t[0x8D] = op("STA", Sta, Absolute, 4);
    t[0x9D] = op("STA", Sta, AbsoluteX, 5);
    t[0x99] = op("STA", Sta, AbsoluteY, 5);
    t[0x81] = op("STA", Sta, IndirectX, 6);
    t[0x91] = op("STA", Sta, IndirectY, 6);

    // STX / STY
    t[0x86] = op("STX", Stx, ZeroPage, 3);
    t[0x96] = op("STX", Stx, ZeroPageY, 4);
    t[0x8E] = op("STX", Stx, Absolute, 4);
    t[0x84] = op("STY", Sty, ZeroPage, 3);
    t[0x94] = op("STY", Sty, ZeroPageX, 4);
    t[0x8C] = op("STY", Sty, Absolute, 4);

    // Transfers
    t[0xAA] = op("TAX", Tax, Implied, 2);
    t[0xA8] = op("TAY", Tay, Implied, 2);
    t[0xBA] = op("TSX", Tsx, Implied, 2);
    t[0x8A] = op("TXA", Txa, Implied, 2);
    t[0x9A] = op("TXS", Txs, Implied, 2);
    t[0x98] = op("TYA", Tya, Implied, 2);

    t
}

/// Opcodes the 65C02 adds to or changes in the NMOS table.
const CMOS_OVERRIDES: [(u8, OpcodeMetadata); 29] = {
    use AddressingMode::*;
    use Operation::*;
    const fn op(m: &'static str, o: Operation, mode: AddressingMode, c: u8) -> OpcodeMetadata {
        OpcodeMetadata::new(m, o, mode, c)
    }

    [
        // (zp) addressing
        (0x12, op("ORA", Ora, ZeroPageIndirect, 5)),
        (0x32, op("AND", And, ZeroPageIndirect, 5)),
        (0x52, op("EOR", Eor, ZeroPageIndirect, 5)),
        (0x72, op("ADC", Adc, ZeroPageIndirect, 5)),
        (0x92, op("STA", Sta, ZeroPageIndirect, 5)),
        (0xB2, op("LDA", Lda, ZeroPageIndirect, 5)),
        (0xD2, op("CMP", Cmp, ZeroPageIndirect, 5)),
        (0xF2, op("SBC", Sbc, ZeroPageIndirect, 5)),
        // BIT gains immediate and indexed modes
        (0x89, op("BIT", Bit, Immediate, 2)),
        (0x34, op("BIT", Bit, ZeroPageX, 4)),
        (0x3C, op("BIT", Bit, AbsoluteX, 4).penalized()),
        // Jumps: page wrap fixed at the cost of a cycle, plus (abs,X)
        (0x6C, op("JMP", Jmp, Indirect, 6)),
        (0x7C, op("JMP", Jmp, IndirectAbsoluteX, 6)),
        // BRA takes its taken/page-cross cycles from the branch logic
        (0x80, op("BRA", Bra, Relative, 1)),
        // Index register stack operations
        (0xDA, op("PHX", Phx, Implied, 3)),
        (0x5A, op("PHY", Phy, Implied, 3)),
        (0xFA, op("PLX", Plx, Implied, 4)),
        (0x7A, op("PLY", Ply, Implied, 4)),
        // STZ
        (0x64, op("STZ", Stz, ZeroPage, 3)),
        (0x74, op("STZ", Stz, ZeroPageX, 4)),
        (0x9C, op("STZ", Stz, Absolute, 4)),
        (0x9E, op("STZ", Stz, AbsoluteX, 5)),
        // TSB / TRB
        (0x04, op("TSB", Tsb, ZeroPage, 5)),
        (0x0C, op("TSB", Tsb, Absolute, 6)),
        (0x14, op("TRB", Trb, ZeroPage, 5)),
        (0x1C, op("TRB", Trb, Absolute, 6)),
        // Accumulator INC/DEC
        (0x1A, op("INC", Inc, Accumulator, 2)),
        (0x3A, op("DEC", Dec, Accumulator, 2)),
        (0xCB, op("WAI", Wai, Implied, 3)),
    ]
};

const RMB_MNEMONICS: [&str; 8] = [
    "RMB0", "RMB1", "RMB2", "RMB3", "RMB4", "RMB5", "RMB6", "RMB7",
];
const SMB_MNEMONICS: [&str; 8] = [
    "SMB0", "SMB1", "SMB2", "SMB3", "SMB4", "SMB5", "SMB6", "SMB7",
];

const fn cmos_table() -> OpcodeTable {
    let mut t = nmos_table();

    let mut i = 0;
    while i < CMOS_OVERRIDES.len() {
        let (opcode, metadata) = CMOS_OVERRIDES[i];
        t[opcode as usize] = metadata;
        i += 1;
    }

    // RMBn at $n7, SMBn at $(n+8)7
    let mut bit = 0;
    while bit < 8 {
        t[(bit << 4) | 0x07] = OpcodeMetadata::new(
            RMB_MNEMONICS[bit],
            Operation::Rmb(bit as u8),
            AddressingMode::ZeroPage,
            5,
        );
        t[((bit + 8) << 4) | 0x07] = OpcodeMetadata::new(
            SMB_MNEMONICS[bit],
            Operation::Smb(bit as u8),
            AddressingMode::ZeroPage,
            5,
        );
        bit += 1;
    }

    t
}

/// NMOS 6502 opcode table.
///
/// # Examples
///
/// ```
/// use mpu65::NMOS_OPCODES;
///
/// let brk = &NMOS_OPCODES[0x00];
/// assert_eq!(brk.mnemonic, "BRK");
/// assert_eq!(brk.base_cycles, 7);
///
/// // 0x89 has no instruction on the NMOS part
/// assert_eq!(NMOS_OPCODES[0x89].mnemonic, "???");
/// ```
pub const NMOS_OPCODES: OpcodeTable = nmos_table();

/// CMOS 65C02 opcode table.
///
/// # Examples
///
/// ```
/// use mpu65::{AddressingMode, CMOS_OPCODES};
///
/// assert_eq!(CMOS_OPCODES[0x89].mnemonic, "BIT");
/// assert_eq!(CMOS_OPCODES[0x89].addressing_mode, AddressingMode::Immediate);
/// assert_eq!(CMOS_OPCODES[0x6C].base_cycles, 6);
/// ```
pub const CMOS_OPCODES: OpcodeTable = cmos_table();

/// Finds the opcode for a mnemonic/addressing-mode pair, as an assembler would.
///
/// # Examples
///
/// ```
/// use mpu65::{opcode_for, AddressingMode, CMOS_OPCODES, NMOS_OPCODES};
///
/// assert_eq!(opcode_for(&NMOS_OPCODES, "LDA", AddressingMode::Immediate), Some(0xA9));
/// assert_eq!(opcode_for(&NMOS_OPCODES, "STZ", AddressingMode::ZeroPage), None);
/// assert_eq!(opcode_for(&CMOS_OPCODES, "STZ", AddressingMode::ZeroPage), Some(0x64));
/// ```
pub fn opcode_for(table: &OpcodeTable, mnemonic: &str, mode: AddressingMode) -> Option<u8> {
    table
        .iter()
        .position(|m| {
            !m.is_unassigned()
                && m.addressing_mode == mode
                && m.mnemonic.eq_ignore_ascii_case(mnemonic)
        })
        .map(|index| index as u8)
}
