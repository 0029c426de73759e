//! # Processor Variants
//!
//! The NMOS 6502 and the CMOS 65C02 share one execution engine. Everything
//! that differs between them is captured in a `Variant` value: the opcode
//! table plus a few behavioral switches the sequencer and addressing
//! resolver consult.

use crate::opcodes::{OpcodeTable, CMOS_OPCODES, NMOS_OPCODES};
use crate::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Capabilities of one processor variant.
///
/// # Examples
///
/// ```
/// use mpu65::Variant;
///
/// assert!(Variant::NMOS_6502.indirect_jump_page_wrap);
/// assert!(!Variant::CMOS_65C02.indirect_jump_page_wrap);
/// assert_eq!(Variant::CMOS_65C02.opcodes[0x80].mnemonic, "BRA");
/// ```
#[derive(Clone, Copy)]
pub struct Variant {
    /// Display name ("6502" or "65C02").
    pub name: &'static str,

    /// 256-entry decode table.
    pub opcodes: &'static OpcodeTable,

    /// BRK, IRQ and NMI clear the DECIMAL flag.
    pub clears_decimal_on_interrupt: bool,

    /// `JMP ($xxFF)` fetches the high byte from `$xx00`.
    pub indirect_jump_page_wrap: bool,
}

impl Variant {
    /// The NMOS 6502.
    pub const NMOS_6502: Variant = Variant {
        name: "6502",
        opcodes: &NMOS_OPCODES,
        clears_decimal_on_interrupt: false,
        indirect_jump_page_wrap: true,
    };

    /// The CMOS 65C02.
    pub const CMOS_65C02: Variant = Variant {
        name: "65C02",
        opcodes: &CMOS_OPCODES,
        clears_decimal_on_interrupt: true,
        indirect_jump_page_wrap: false,
    };

    /// Every supported variant.
    pub fn all() -> [Variant; 2] {
        [Self::NMOS_6502, Self::CMOS_65C02]
    }
}

impl PartialEq for Variant {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Variant {}

impl fmt::Debug for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Variant")
            .field("name", &self.name)
            .field("clears_decimal_on_interrupt", &self.clears_decimal_on_interrupt)
            .field("indirect_jump_page_wrap", &self.indirect_jump_page_wrap)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl Default for Variant {
    fn default() -> Self {
        Self::NMOS_6502
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    /// Looks a variant up by name, ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// use mpu65::{ConfigError, Variant};
    ///
    /// assert_eq!("6502".parse::<Variant>(), Ok(Variant::NMOS_6502));
    /// assert_eq!("65c02".parse::<Variant>(), Ok(Variant::CMOS_65C02));
    /// assert_eq!(
    ///     "z80".parse::<Variant>(),
    ///     Err(ConfigError::UnknownVariant("z80".to_string()))
    /// );
    /// ```
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|variant| variant.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| ConfigError::UnknownVariant(name.to_string()))
    }
}

/// CPU construction options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CpuConfig {
    /// Processor variant to emulate.
    pub variant: Variant,

    /// Program counter after reset; `None` reads the reset vector.
    pub start_pc: Option<u16>,
}

impl CpuConfig {
    /// Selects the variant.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Forces the program counter used on every reset.
    pub fn with_start_pc(mut self, start_pc: u16) -> Self {
        self.start_pc = Some(start_pc);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!("65C02".parse::<Variant>(), Ok(Variant::CMOS_65C02));
        assert_eq!(" 65c02 ".parse::<Variant>(), Ok(Variant::CMOS_65C02));
    }

    #[test]
    fn test_unknown_variant() {
        let err = "65816".parse::<Variant>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown processor variant '65816'");
    }

    #[test]
    fn test_default_config() {
        let config = CpuConfig::default();
        assert_eq!(config.variant, Variant::NMOS_6502);
        assert_eq!(config.start_pc, None);
    }
}
