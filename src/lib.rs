//! An Interactive Calculator (REPL) Library

pub mod constants;
pub mod errors;
pub mod ops;
pub mod parse;
pub mod repl;
