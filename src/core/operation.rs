//! The four binary operations the calculator can hold pending.

use super::error::{CalcError, InputError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A binary arithmetic operation.
///
/// The set is closed: an engine holds at most one pending `Operation`
/// and applies it when evaluated.
///
/// # Example
///
/// ```rust
/// use calc_engine::core::Operation;
///
/// let op: Operation = "*".parse().unwrap();
/// assert_eq!(op, Operation::Multiplication);
/// assert_eq!(op.symbol(), "×");
/// assert_eq!(op.apply(4.0, 2.5), Ok(10.0));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl Operation {
    /// Every operation, in keypad order.
    pub const ALL: [Operation; 4] = [
        Self::Addition,
        Self::Subtraction,
        Self::Multiplication,
        Self::Division,
    ];

    /// Symbol used when rendering history entries.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Addition => "+",
            Self::Subtraction => "−",
            Self::Multiplication => "×",
            Self::Division => "÷",
        }
    }

    /// ASCII keypad label for this operation.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Addition => "+",
            Self::Subtraction => "-",
            Self::Multiplication => "*",
            Self::Division => "/",
        }
    }

    /// Apply the operation to two operands.
    ///
    /// Division by zero is an error rather than an infinity, and any
    /// non-finite result is reported as [`CalcError::Overflow`].
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        let result = match self {
            Self::Addition => lhs + rhs,
            Self::Subtraction => lhs - rhs,
            Self::Multiplication => lhs * rhs,
            Self::Division => {
                if rhs == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                lhs / rhs
            }
        };

        if result.is_finite() {
            Ok(result)
        } else {
            Err(CalcError::Overflow)
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operation {
    type Err = InputError;

    /// Accepts both the ASCII keypad labels and the rendered symbols.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Addition),
            "-" | "−" => Ok(Self::Subtraction),
            "*" | "×" => Ok(Self::Multiplication),
            "/" | "÷" => Ok(Self::Division),
            other => Err(InputError::UnknownButton(other.to_string())),
        }
    }
}
