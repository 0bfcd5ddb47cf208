//! REPL (Read-Eval-Print Loop)
//!
//! The main calculator loop.
//!
//! Takes user input, validates it and dispatches the computation to the
//! appropriate arithmetic operation, then prints the result or a recovery
//! message and starts over, until the user exits.
//!
//! # References
//!
//! - [REPL @ Wikipedia](https://en.wikipedia.org/wiki/Read%E2%80%93eval%E2%80%93print_loop)

use crate::constants::{
    EXIT_KEYWORD, EXIT_MSG, FIRST_NUMBER_PROMPT, MENU_MSG, OPERATION_PROMPT,
    SECOND_NUMBER_PROMPT, WELCOME_MSG,
};
use crate::errors::{CalcError, CalcResult};
use crate::ops;
use crate::parse::{Operator, parse_operand};
use log::debug;
use std::io::{self, BufRead, Write};

/// The state of the calculator loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplState {
    /// Reading and evaluating input
    Running,
    /// The exit keyword was received or the input stream ended
    Terminated,
}

/// The interactive calculator loop
///
/// Owns its input and output streams, so tests can drive the loop with
/// scripted input and capture everything it prints. The binary passes
/// locked stdin and stdout.
#[derive(Debug)]
pub struct Repl<R, W> {
    input: R,
    output: W,
    state: ReplState,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    /// Creates a loop in the [`ReplState::Running`] state over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            state: ReplState::Running,
        }
    }

    /// Runs the loop until the user exits or the input stream ends.
    ///
    /// Invalid selections, invalid operands and zero divisors are reported
    /// to the user and the loop continues; only stream failures end it early.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "{WELCOME_MSG}")?;

        while self.state == ReplState::Running {
            self.step()?;
        }

        Ok(())
    }

    /// One iteration: menu, operator selection, two operands, result.
    fn step(&mut self) -> io::Result<()> {
        writeln!(self.output, "{MENU_MSG}")?;

        let Some(selection) = self.read_line(OPERATION_PROMPT)? else {
            return Ok(());
        };

        if selection.eq_ignore_ascii_case(EXIT_KEYWORD) {
            debug!("exit requested");
            self.state = ReplState::Terminated;
            return writeln!(self.output, "{EXIT_MSG}");
        }

        let operator = match selection.parse::<Operator>() {
            Ok(operator) => operator,
            Err(error) => return self.report(error),
        };

        let Some(first) = self.read_line(FIRST_NUMBER_PROMPT)? else {
            return Ok(());
        };
        let a = match parse_operand(&first) {
            Ok(a) => a,
            Err(error) => return self.report(error),
        };

        let Some(second) = self.read_line(SECOND_NUMBER_PROMPT)? else {
            return Ok(());
        };
        let b = match parse_operand(&second) {
            Ok(b) => b,
            Err(error) => return self.report(error),
        };

        match evaluate(operator, a, b) {
            Ok(result) => writeln!(
                self.output,
                "The result of {} {} {} is: {}",
                render(a),
                operator,
                render(b),
                render(result)
            ),
            Err(error) => self.report(error),
        }
    }

    /// Prompts for and reads one trimmed line, or `None` once the input ends.
    ///
    /// End of input terminates the loop: there is nothing left to evaluate,
    /// and a finite scripted stream must not spin on zero-byte reads.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("input stream ended, terminating");
            self.state = ReplState::Terminated;
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    /// Reports a recoverable error to the user; the iteration is abandoned
    /// and the loop moves on.
    fn report(&mut self, error: CalcError) -> io::Result<()> {
        debug!("iteration aborted: {error:?}");
        writeln!(self.output, "{error}")
    }
}

/// Dispatches the computation to the operation matching `operator`.
fn evaluate(operator: Operator, a: f64, b: f64) -> CalcResult<f64> {
    match operator {
        Operator::Add => Ok(ops::add(a, b)),
        Operator::Subtract => Ok(ops::subtract(a, b)),
        Operator::Multiply => Ok(ops::multiply(a, b)),
        Operator::Divide => ops::divide(a, b),
    }
}

/// Formats a number for the result line.
///
/// Integral values keep a trailing `.0` (the operand `4` echoes back as
/// `4.0`), which is what the `{:?}` form of `f64` produces.
fn render(value: f64) -> String {
    format!("{value:?}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DIVISION_BY_ZERO_MSG, INVALID_INPUT_MSG, INVALID_OPERATION_MSG};
    use std::io::Cursor;

    /// Feeds the loop one scripted line per input and returns everything it
    /// printed, the way the user would see it.
    fn run_script(inputs: &[&str]) -> String {
        let script = inputs
            .iter()
            .map(|line| format!("{line}\n"))
            .collect::<String>();

        let mut output = Vec::new();
        let mut repl = Repl::new(Cursor::new(script), &mut output);
        repl.run().expect("scripted run failed");
        assert_eq!(ReplState::Terminated, repl.state);

        String::from_utf8(output).expect("output is not UTF-8")
    }

    #[test]
    fn addition_session() {
        let output = run_script(&["+", "4", "5", "exit"]);
        assert!(output.contains("The result of 4.0 + 5.0 is: 9.0"));
    }

    #[test]
    fn subtraction_session() {
        let output = run_script(&["-", "10", "3", "exit"]);
        assert!(output.contains("The result of 10.0 - 3.0 is: 7.0"));
    }

    #[test]
    fn multiplication_session() {
        let output = run_script(&["*", "6", "7", "exit"]);
        assert!(output.contains("The result of 6.0 * 7.0 is: 42.0"));
    }

    #[test]
    fn division_session() {
        let output = run_script(&["/", "8", "2", "exit"]);
        assert!(output.contains("The result of 8.0 / 2.0 is: 4.0"));
    }

    #[test]
    fn division_by_zero_session() {
        let output = run_script(&["/", "4", "0", "exit"]);
        assert!(output.contains(DIVISION_BY_ZERO_MSG));
        assert!(!output.contains("The result of"));
    }

    #[test]
    fn invalid_operation_session() {
        // 'add' is rejected before any numeric prompt; '8' and '2' are then
        // consumed as (equally invalid) operator selections.
        let output = run_script(&["add", "8", "2", "exit"]);
        assert!(output.contains(INVALID_OPERATION_MSG));
        assert!(!output.contains(FIRST_NUMBER_PROMPT));
        assert!(!output.contains("The result of"));
    }

    #[test]
    fn invalid_first_number_session() {
        let output = run_script(&["+", "a", "2", "exit"]);
        assert!(output.contains(INVALID_INPUT_MSG));
        assert!(!output.contains(SECOND_NUMBER_PROMPT));
    }

    #[test]
    fn invalid_second_number_session() {
        // Both operands are discarded; no result is printed for '2'.
        let output = run_script(&["+", "2", "b", "exit"]);
        assert!(output.contains(INVALID_INPUT_MSG));
        assert!(!output.contains("The result of"));
    }

    #[test]
    fn recovers_and_keeps_going() {
        let output = run_script(&["/", "4", "0", "+", "1", "2", "exit"]);
        assert!(output.contains(DIVISION_BY_ZERO_MSG));
        assert!(output.contains("The result of 1.0 + 2.0 is: 3.0"));
    }

    #[test]
    fn exit_is_case_insensitive() {
        let output = run_script(&["EXIT"]);
        assert!(output.contains(EXIT_MSG));
    }

    #[test]
    fn banner_and_ack_print_once() {
        let output = run_script(&["+", "4", "5", "exit"]);
        assert_eq!(1, output.matches(WELCOME_MSG).count());
        assert_eq!(1, output.matches(EXIT_MSG).count());
    }

    #[test]
    fn exit_not_recognized_at_number_prompt() {
        let output = run_script(&["+", "exit", "exit"]);
        assert!(output.contains(INVALID_INPUT_MSG));
        assert!(output.contains(EXIT_MSG));
    }

    #[test]
    fn empty_selection_is_invalid_operation() {
        let output = run_script(&["", "exit"]);
        assert!(output.contains(INVALID_OPERATION_MSG));
    }

    #[test]
    fn end_of_input_terminates() {
        let output = run_script(&[]);
        assert!(output.contains(WELCOME_MSG));
        assert!(!output.contains(EXIT_MSG));
    }

    #[test]
    fn end_of_input_after_result() {
        let output = run_script(&["*", "2", "3"]);
        assert!(output.contains("The result of 2.0 * 3.0 is: 6.0"));
        assert!(!output.contains(EXIT_MSG));
    }

    #[test]
    fn whitespace_is_trimmed() {
        let output = run_script(&["  +  ", " 4 ", "\t5", "exit"]);
        assert!(output.contains("The result of 4.0 + 5.0 is: 9.0"));
    }

    #[test]
    fn evaluate_dispatches() {
        assert_eq!(Ok(9.0), evaluate(Operator::Add, 4.0, 5.0));
        assert_eq!(Ok(7.0), evaluate(Operator::Subtract, 10.0, 3.0));
        assert_eq!(Ok(42.0), evaluate(Operator::Multiply, 6.0, 7.0));
        assert_eq!(Ok(4.0), evaluate(Operator::Divide, 8.0, 2.0));
        assert_eq!(
            Err(CalcError::DivisionByZero),
            evaluate(Operator::Divide, 4.0, 0.0)
        );
    }

    #[test]
    fn render_keeps_trailing_zero() {
        assert_eq!("4.0", render(4.0));
        assert_eq!("42.0", render(42.0));
        assert_eq!("2.15", render(2.15));
        assert_eq!("-0.5", render(-0.5));
    }
}
