//! Core calculator types and logic.
//!
//! Everything in this module is a plain value with pure methods:
//! - Operations and their arithmetic
//! - The display value and canonical number formatting
//! - Typed keypad input
//! - The append-only computation history
//!
//! The stateful engine that ties these together lives in [`crate::engine`].

mod display;
mod error;
mod history;
pub mod input;
mod operation;
mod state;

pub use display::{format_number, DisplayValue, DEFAULT_ERROR_MARKER};
pub use error::{CalcError, InputError};
pub use history::{History, HistoryEntry};
pub use input::{Digit, Input, KEYPAD};
pub use operation::Operation;
pub use state::{PendingOperation, Phase};
