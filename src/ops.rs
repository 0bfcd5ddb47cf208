//! Arithmetic operations
//!
//! Pure functions over pairs of double-precision numbers, deterministic and
//! free of side effects. Division is the only fallible operation: it reports
//! a zero divisor to the caller instead of producing an infinity.

use crate::errors::{CalcError, CalcResult};

/// Returns the sum of `a` and `b`.
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Returns the difference of `a` and `b`.
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Returns the product of `a` and `b`.
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Returns the quotient of `a` and `b`.
///
/// Fails with [`CalcError::DivisionByZero`] when `b` is zero (`-0.0`
/// included); recovery is the caller's job. Otherwise this is standard
/// IEEE-754 double division.
pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }

    Ok(a / b)
}
