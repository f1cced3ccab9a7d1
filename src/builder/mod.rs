//! Builder API for configuring calculators.
//!
//! Configuration is validated up front, collecting every violated rule so a
//! caller sees all problems in one pass.
//!
//! # Example
//!
//! ```rust
//! use calc_engine::builder::{BuildError, CalculatorBuilder};
//!
//! let calc = CalculatorBuilder::new().error_marker("E").build().unwrap();
//! assert_eq!(calc.display(), "0");
//!
//! let err = CalculatorBuilder::new().error_marker("").build();
//! assert!(matches!(err, Err(BuildError::InvalidConfig(_))));
//! ```

pub mod calculator;
pub mod config;
pub mod error;

pub use calculator::CalculatorBuilder;
pub use config::CalculatorConfig;
pub use error::{BuildError, ConfigViolation};
