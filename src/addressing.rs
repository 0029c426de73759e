//! # Addressing Modes
//!
//! This module defines the addressing modes understood by the 6502 family.
//! The NMOS 6502 uses thirteen of them; the CMOS 65C02 adds zero page
//! indirect `($nn)` and absolute indexed indirect `($nnnn,X)`.

/// 6502/65C02 addressing mode enumeration.
///
/// The addressing mode determines how the CPU interprets the operand bytes
/// that follow an opcode and how it calculates the effective memory address
/// for the operation.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX,
///   IndirectY, ZeroPageIndirect
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect, IndirectAbsoluteX
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implied,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, INC A (65C02)
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X, wrapping within the zero page.
    ///
    /// Example: LDA $80,X with X=0xFF reads 0x007F
    ZeroPageX,

    /// Zero page address indexed by Y, wrapping within the zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register, full 16-bit carry.
    ///
    /// May incur +1 cycle penalty if a page boundary is crossed.
    AbsoluteX,

    /// 16-bit address indexed by Y register, full 16-bit carry.
    ///
    /// May incur +1 cycle penalty if a page boundary is crossed.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer (JMP only).
    ///
    /// On the NMOS part a pointer ending in 0xFF fetches its high byte from
    /// the start of the same page.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    IndirectY,

    /// Zero page indirect without index (65C02 only).
    ///
    /// Example: LDA ($40)
    ZeroPageIndirect,

    /// Absolute indexed indirect (65C02 `JMP ($1234,X)` only).
    IndirectAbsoluteX,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        use AddressingMode::*;
        match self {
            Implied | Accumulator => 0,
            Immediate | ZeroPage | ZeroPageX | ZeroPageY | Relative | IndirectX | IndirectY
            | ZeroPageIndirect => 1,
            Absolute | AbsoluteX | AbsoluteY | Indirect | IndirectAbsoluteX => 2,
        }
    }

    /// Whether this mode exists only on the CMOS 65C02.
    pub const fn is_cmos_only(self) -> bool {
        matches!(
            self,
            AddressingMode::ZeroPageIndirect | AddressingMode::IndirectAbsoluteX
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operand_widths() {
        assert_eq!(AddressingMode::Implied.operand_bytes(), 0);
        assert_eq!(AddressingMode::Accumulator.operand_bytes(), 0);
        assert_eq!(AddressingMode::ZeroPageIndirect.operand_bytes(), 1);
        assert_eq!(AddressingMode::Relative.operand_bytes(), 1);
        assert_eq!(AddressingMode::Indirect.operand_bytes(), 2);
        assert_eq!(AddressingMode::IndirectAbsoluteX.operand_bytes(), 2);
    }

    #[test]
    fn test_cmos_only_modes() {
        assert!(AddressingMode::ZeroPageIndirect.is_cmos_only());
        assert!(AddressingMode::IndirectAbsoluteX.is_cmos_only());
        assert!(!AddressingMode::IndirectY.is_cmos_only());
    }
}
