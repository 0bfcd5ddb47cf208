//! # Constants
//!
//! Constants used throughout the application
//!
//! Every string the user can see lives here, so the REPL, the error types
//! and the tests agree on a single source of truth.

/// The keyword that leaves the calculator, matched case-insensitively
pub const EXIT_KEYWORD: &str = "exit";

/// Greeting printed once on startup
pub const WELCOME_MSG: &str = "Welcome to the Calculator REPL! Type 'exit' to quit.";

/// Operator menu printed before every selection
pub const MENU_MSG: &str = "Type '+' for addition, '-' for subtraction, '*' for multiplication, '/' for division, or 'exit' to quit.";

/// Prompt for the operator selection
pub const OPERATION_PROMPT: &str = "Enter operation: ";

/// Prompt for the first operand
pub const FIRST_NUMBER_PROMPT: &str = "Enter first number (use digits, e.g., 5 or 2.15): ";

/// Prompt for the second operand
pub const SECOND_NUMBER_PROMPT: &str = "Enter second number (use digits, e.g., 5 or 2.15): ";

/// Reported when the operator selection is not one of the four symbols
pub const INVALID_OPERATION_MSG: &str = "Invalid operation. Please try again.";

/// Reported when an operand does not parse as a number
pub const INVALID_INPUT_MSG: &str = "Invalid input. Please enter numeric values for the numbers.";

/// Reported when the divisor is zero
pub const DIVISION_BY_ZERO_MSG: &str = "Cannot divide by zero.";

/// Acknowledgement printed when the user exits
pub const EXIT_MSG: &str = "Exiting the app...";
