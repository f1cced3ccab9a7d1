//! The on-screen value and canonical number formatting.

use super::input::Digit;
use serde::Serialize;

/// Error marker shown when no configuration overrides it.
pub const DEFAULT_ERROR_MARKER: &str = "Error";

/// The calculator's current on-screen token.
///
/// Either a decimal numeral or the error marker. The marker text is owned by
/// the engine's configuration, so it is not stored here.
///
/// # Example
///
/// ```rust
/// use calc_engine::core::{Digit, DisplayValue};
///
/// let mut display = DisplayValue::zero();
/// display.push_digit(Digit::new(0).unwrap());
/// display.push_digit(Digit::new(4).unwrap());
/// display.push_digit(Digit::new(2).unwrap());
/// assert_eq!(display.text("Error"), "42");
/// assert_eq!(display.value(), Some(42.0));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum DisplayValue {
    Numeral(String),
    Error,
}

impl Default for DisplayValue {
    fn default() -> Self {
        Self::zero()
    }
}

impl DisplayValue {
    pub fn zero() -> Self {
        Self::Numeral("0".to_string())
    }

    /// Display holding a computed result in canonical form.
    pub fn from_result(value: f64) -> Self {
        Self::Numeral(format_number(value))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Enter a digit.
    ///
    /// A lone `"0"` or the error marker is replaced; anything else gets the
    /// digit appended.
    pub fn push_digit(&mut self, digit: Digit) {
        match self {
            Self::Numeral(text) if text != "0" => text.push(digit.as_char()),
            _ => *self = Self::Numeral(digit.as_char().to_string()),
        }
    }

    /// Numeric value of the display, if it holds a finite number.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Numeral(text) => text.parse::<f64>().ok().filter(|v| v.is_finite()),
            Self::Error => None,
        }
    }

    /// Text to render, substituting `error_marker` for the error state.
    pub fn text<'a>(&'a self, error_marker: &'a str) -> &'a str {
        match self {
            Self::Numeral(text) => text,
            Self::Error => error_marker,
        }
    }
}

/// Render a number in the calculator's canonical text form.
///
/// Shortest round-trip representation, always with a fractional part or an
/// exponent (`8.0`, `2.5`, `1e16`). Negative zero renders as `0.0`.
pub fn format_number(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:?}")
}
