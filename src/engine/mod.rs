//! The stateful shell around the pure core.
//!
//! [`Calculator`] owns the display, the pending operation and the history,
//! and exposes one entry point per input class:
//!
//! - **Digits** extend or replace the display
//! - **Operators** capture the display as the left operand
//! - **Clear** drops the pending operation, keeping history
//! - **Evaluate** completes the pending operation and records it
//!
//! [`Calculator::apply`] and [`Calculator::press`] dispatch typed inputs or
//! keypad labels to those entry points and report an [`Outcome`].

mod calculator;
mod outcome;

pub use calculator::Calculator;
pub use outcome::Outcome;
