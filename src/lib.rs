//! calc-engine: an immediate-execution calculator state machine
//!
//! The engine accepts keypad input one token at a time, holds at most one
//! pending binary operation, and produces a display value plus an
//! append-only history of completed computations. There is no operator
//! precedence: each operator press captures the display as the left operand
//! and evaluation applies exactly that one operation.
//!
//! # Core Concepts
//!
//! - **Operation**: the closed set of four arithmetic operations
//! - **Display**: a numeral or the error marker, never empty
//! - **Phase**: `Idle` or `OperatorPending`
//! - **History**: chronological record of successful computations
//!
//! Failures never panic. Evaluation errors show the error marker and return
//! the engine to idle; an operator pressed on an unparseable display is
//! ignored.
//!
//! # Example
//!
//! ```rust
//! use calc_engine::Calculator;
//!
//! let mut calc = Calculator::new();
//! for label in ["7", "/", "0", "="] {
//!     calc.press(label).unwrap();
//! }
//! assert_eq!(calc.display(), "Error");
//! assert!(calc.history().is_empty());
//!
//! for label in ["4", "*", "+", "2", "="] {
//!     calc.press(label).unwrap();
//! }
//! assert_eq!(calc.display(), "6.0");
//! assert_eq!(calc.history().lines(), vec!["4.0 + 2.0 = 6.0"]);
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use builder::{BuildError, CalculatorBuilder, CalculatorConfig};
pub use self::core::{CalcError, Digit, History, HistoryEntry, Input, InputError, Operation, Phase};
pub use engine::{Calculator, Outcome};
