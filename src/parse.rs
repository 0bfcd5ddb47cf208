//! Parser for the user input
//!
//! The loop reads one value per line: an operator selection or a numeric
//! operand. Both conversions trim surrounding whitespace first and report
//! rejected input through [`CalcError`].

use crate::errors::{CalcError, CalcResult};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The four supported arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The symbol the user types to select this operator
    pub const fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    /// Accepts exactly one of `+`, `-`, `*` and `/`, surrounded by optional
    /// whitespace. Words like `add` are rejected; the menu asks for symbols.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            "*" => Ok(Operator::Multiply),
            "/" => Ok(Operator::Divide),
            _ => Err(CalcError::InvalidOperator),
        }
    }
}

/// Parses one operand line as a double-precision number.
///
/// Everything `f64` itself accepts is accepted here: plain digits, decimal
/// points, signs and scientific notation. Anything else, the exit keyword
/// included, is an [`CalcError::InvalidNumericInput`].
pub fn parse_operand(input: &str) -> CalcResult<f64> {
    input
        .trim()
        .parse()
        .map_err(|_| CalcError::InvalidNumericInput)
}
