//! Typed keypad input.
//!
//! A presentation layer forwards button labels; this module turns them into
//! [`Input`] values the engine can dispatch on.

use super::error::InputError;
use super::operation::Operation;
use std::fmt;
use std::str::FromStr;

/// Button labels of the keypad, row by row.
pub const KEYPAD: [[&str; 4]; 4] = [
    ["7", "8", "9", "/"],
    ["4", "5", "6", "*"],
    ["1", "2", "3", "-"],
    ["0", "C", "=", "+"],
];

/// A single decimal digit, `0` through `9`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Result<Self, InputError> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(InputError::InvalidDigit(value.to_string()))
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<char> for Digit {
    type Error = InputError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .map(|d| Self(d as u8))
            .ok_or_else(|| InputError::InvalidDigit(c.to_string()))
    }
}

impl FromStr for Digit {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(InputError::InvalidDigit(s.to_string())),
        }
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One keypad press, classified by input class.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Input {
    Digit(Digit),
    Operator(Operation),
    Clear,
    Evaluate,
}

impl Input {
    /// Canonical keypad label for this input.
    pub fn label(&self) -> String {
        match self {
            Self::Digit(digit) => digit.to_string(),
            Self::Operator(op) => op.label().to_string(),
            Self::Clear => "C".to_string(),
            Self::Evaluate => "=".to_string(),
        }
    }
}

impl From<Digit> for Input {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl From<Operation> for Input {
    fn from(op: Operation) -> Self {
        Self::Operator(op)
    }
}

impl FromStr for Input {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" => Ok(Self::Clear),
            "=" => Ok(Self::Evaluate),
            _ => s
                .parse::<Operation>()
                .map(Self::Operator)
                .or_else(|_| s.parse::<Digit>().map(Self::Digit))
                .map_err(|_| InputError::UnknownButton(s.to_string())),
        }
    }
}
