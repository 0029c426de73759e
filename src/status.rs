//! # Processor Status Register
//!
//! The status register P is kept as a single byte so that it round-trips
//! bit-for-bit through PHP/PLP, BRK/RTI and interrupt sequencing.
//!
//! Bit layout (NV-BDIZC):
//! - Bit 7: N (Negative)
//! - Bit 6: V (Overflow)
//! - Bit 5: (unused, always reads as 1)
//! - Bit 4: B (Break)
//! - Bit 3: D (Decimal)
//! - Bit 2: I (Interrupt Disable)
//! - Bit 1: Z (Zero)
//! - Bit 0: C (Carry)

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Processor status flags.
    ///
    /// # Examples
    ///
    /// ```
    /// use mpu65::Status;
    ///
    /// let p = Status::BREAK | Status::UNUSED;
    /// assert_eq!(p.bits(), 0x30);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Status: u8 {
        const NEGATIVE = 0b1000_0000;
        const OVERFLOW = 0b0100_0000;
        const UNUSED = 0b0010_0000;
        const BREAK = 0b0001_0000;
        const DECIMAL = 0b0000_1000;
        const INTERRUPT = 0b0000_0100;
        const ZERO = 0b0000_0010;
        const CARRY = 0b0000_0001;
    }
}

impl Status {
    /// Updates Z and N from an 8-bit result, leaving every other bit alone.
    pub fn set_zn(&mut self, value: u8) {
        self.set(Status::ZERO, value == 0);
        self.set(Status::NEGATIVE, value & 0x80 != 0);
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::UNUSED
    }
}

impl fmt::Display for Status {
    /// Renders the flags as a binary string in NV-BDIZC order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08b}", self.bits())
    }
}
