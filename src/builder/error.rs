//! Errors for calculator configuration and construction.

use thiserror::Error;

/// A single rule a configuration broke.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("Error marker must not be blank")]
    EmptyErrorMarker,

    #[error("Error marker '{marker}' parses as a number")]
    NumericErrorMarker { marker: String },

    #[error("Error marker '{marker}' has surrounding whitespace")]
    PaddedErrorMarker { marker: String },
}

/// Errors that can occur when building a calculator.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Every violated rule, not just the first.
    #[error("Invalid calculator configuration: {}", join_violations(.0))]
    InvalidConfig(Vec<ConfigViolation>),

    #[error("Configuration could not be parsed: {0}")]
    Malformed(String),
}

fn join_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
