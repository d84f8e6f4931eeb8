//! Checked arithmetic over non-negative token amounts.
//!
//! Every monetary computation in the sale goes through these helpers so that
//! overflow, underflow and division by zero surface as errors instead of
//! wrapping or trapping.

#![no_std]

/// Unsigned amount in the smallest unit of an asset.
pub type Amount = u128;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MathError {
    Overflow,
    Underflow,
    DivisionByZero,
}

pub fn add(a: Amount, b: Amount) -> Result<Amount, MathError> {
    a.checked_add(b).ok_or(MathError::Overflow)
}

pub fn sub(a: Amount, b: Amount) -> Result<Amount, MathError> {
    a.checked_sub(b).ok_or(MathError::Underflow)
}

pub fn mul(a: Amount, b: Amount) -> Result<Amount, MathError> {
    a.checked_mul(b).ok_or(MathError::Overflow)
}

/// Floor division.
pub fn div(a: Amount, b: Amount) -> Result<Amount, MathError> {
    if b == 0 {
        return Err(MathError::DivisionByZero);
    }
    Ok(a / b)
}

/// Narrows an amount to the signed representation used by token contracts.
pub fn to_i128(a: Amount) -> Result<i128, MathError> {
    i128::try_from(a).map_err(|_| MathError::Overflow)
}
