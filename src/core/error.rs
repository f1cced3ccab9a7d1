//! Error kinds produced by the calculator core.

use thiserror::Error;

/// Failures that can occur while capturing an operand or evaluating.
///
/// None of these are fatal. The engine turns evaluation failures into the
/// error marker on the display and always returns to idle afterwards.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CalcError {
    /// The display text is not a finite number.
    #[error("Display '{text}' is not a number")]
    ParseFailure { text: String },

    #[error("Division by zero")]
    DivisionByZero,

    /// The arithmetic result left the finite range of `f64`.
    #[error("Result overflowed")]
    Overflow,

    #[error("No pending operation to evaluate")]
    NoPendingOperation,
}

/// Errors raised when a key label or value does not name a calculator input.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InputError {
    #[error("'{0}' is not a decimal digit")]
    InvalidDigit(String),

    #[error("Unknown button '{0}'")]
    UnknownButton(String),
}
