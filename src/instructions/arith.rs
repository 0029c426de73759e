//! # Flag Engine
//!
//! Pure arithmetic and shift functions shared by the instruction handlers.
//! Each takes the incoming status and returns the result together with the
//! updated status; only the flags the operation defines are touched.
//!
//! ## Decimal mode
//!
//! Decimal add and subtract correct each nibble separately. N and Z follow
//! the uncorrected binary sum, V is computed from the binary sum as for a
//! binary add, and C is the decimal carry out of the high nibble.

use crate::Status;

/// Binary add with carry.
///
/// V is set when both inputs share a sign and the result does not.
pub(crate) fn add_binary(a: u8, operand: u8, p: Status) -> (u8, Status) {
    let carry_in = p.contains(Status::CARRY) as u16;
    let sum = a as u16 + operand as u16 + carry_in;
    let result = sum as u8;

    let mut p = p;
    p.set(Status::CARRY, sum > 0xFF);
    p.set(Status::OVERFLOW, (!(a ^ operand) & (a ^ result) & 0x80) != 0);
    p.set_zn(result);
    (result, p)
}

/// Binary subtract with borrow: `a - operand - !C`.
pub(crate) fn subtract_binary(a: u8, operand: u8, p: Status) -> (u8, Status) {
    add_binary(a, !operand, p)
}

/// BCD add with carry.
pub(crate) fn add_decimal(a: u8, operand: u8, p: Status) -> (u8, Status) {
    let carry_in = p.contains(Status::CARRY) as u16;

    let mut half_carry = 0;
    let mut low_adjust = 0;
    let mut decimal_carry = false;
    let mut high_adjust = 0;

    let low = (operand as u16 & 0x0F) + (a as u16 & 0x0F) + carry_in;
    if low > 9 {
        low_adjust = 6;
        half_carry = 1;
    }
    let high = (operand as u16 >> 4) + (a as u16 >> 4) + half_carry;
    if high > 9 {
        high_adjust = 6;
        decimal_carry = true;
    }

    let binary = (((high & 0x0F) << 4) | (low & 0x0F)) as u8;
    let result = ((((high + high_adjust) & 0x0F) << 4) | ((low + low_adjust) & 0x0F)) as u8;

    let mut p = p;
    p.set(Status::CARRY, decimal_carry);
    p.set(Status::OVERFLOW, (!(a ^ operand) & (a ^ binary) & 0x80) != 0);
    p.set_zn(binary);
    (result, p)
}

/// BCD subtract with borrow.
pub(crate) fn subtract_decimal(a: u8, operand: u8, p: Status) -> (u8, Status) {
    let carry_in = p.contains(Status::CARRY) as u16;
    let inverted = !operand as u16;

    let mut half_carry = 1;
    let mut low_adjust = 0;
    let mut high_adjust = 0;

    let low = (a as u16 & 0x0F) + (inverted & 0x0F) + carry_in;
    if low <= 0x0F {
        half_carry = 0;
        low_adjust = 10;
    }
    let high = (a as u16 >> 4) + ((inverted >> 4) & 0x0F) + half_carry;
    if high <= 0x0F {
        high_adjust = 0xA0;
    }

    let sum = a as u16 + (inverted & 0xFF) + carry_in;
    let decimal_carry = sum > 0xFF;
    let binary = sum & 0xFF;

    let result = ((((binary + high_adjust) >> 4) & 0x0F) << 4) | ((binary + low_adjust) & 0x0F);
    let binary = binary as u8;

    let mut p = p;
    p.set(Status::CARRY, decimal_carry);
    p.set(Status::OVERFLOW, ((a ^ operand) & (a ^ binary) & 0x80) != 0);
    p.set_zn(binary);
    (result as u8, p)
}

/// Compare: C = register >= operand, Z = equal, N = bit 7 of the difference.
pub(crate) fn compare(register: u8, operand: u8, p: Status) -> Status {
    let mut p = p;
    p.set(Status::CARRY, register >= operand);
    p.set_zn(register.wrapping_sub(operand));
    p
}

pub(crate) fn shift_left(value: u8, p: Status) -> (u8, Status) {
    let result = value << 1;
    let mut p = p;
    p.set(Status::CARRY, value & 0x80 != 0);
    p.set_zn(result);
    (result, p)
}

pub(crate) fn shift_right(value: u8, p: Status) -> (u8, Status) {
    let result = value >> 1;
    let mut p = p;
    p.set(Status::CARRY, value & 0x01 != 0);
    p.set_zn(result);
    (result, p)
}

pub(crate) fn rotate_left(value: u8, p: Status) -> (u8, Status) {
    let result = (value << 1) | p.contains(Status::CARRY) as u8;
    let mut p = p;
    p.set(Status::CARRY, value & 0x80 != 0);
    p.set_zn(result);
    (result, p)
}

pub(crate) fn rotate_right(value: u8, p: Status) -> (u8, Status) {
    let result = (value >> 1) | ((p.contains(Status::CARRY) as u8) << 7);
    let mut p = p;
    p.set(Status::CARRY, value & 0x01 != 0);
    p.set_zn(result);
    (result, p)
}
