//! # Errors
//!
//! Error types used in the library

use crate::constants::{DIVISION_BY_ZERO_MSG, INVALID_INPUT_MSG, INVALID_OPERATION_MSG};
use thiserror::Error;

/// Everything that can go wrong during one loop iteration
///
/// Each kind displays as the exact message shown to the user. All of them
/// are recovered inside the loop: the message is printed and the next
/// iteration starts. None of them ends the process.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    /// The operator selection is not one of `+`, `-`, `*`, `/`
    #[error("{}", INVALID_OPERATION_MSG)]
    InvalidOperator,
    /// An operand did not parse as a floating-point number
    #[error("{}", INVALID_INPUT_MSG)]
    InvalidNumericInput,
    /// Division was requested with a zero divisor
    #[error("{}", DIVISION_BY_ZERO_MSG)]
    DivisionByZero,
}

/// Result type for the calculator operations
pub type CalcResult<T> = Result<T, CalcError>;
