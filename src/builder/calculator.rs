//! Builder for constructing calculators.

use crate::builder::config::CalculatorConfig;
use crate::builder::error::BuildError;
use crate::engine::Calculator;
use stillwater::validation::Validation;
use tracing::debug;

/// Builder for constructing calculators with a fluent API.
pub struct CalculatorBuilder {
    config: CalculatorConfig,
}

impl CalculatorBuilder {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: CalculatorConfig::default(),
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: CalculatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the text shown after a failed evaluation.
    pub fn error_marker(mut self, marker: impl Into<String>) -> Self {
        self.config.error_marker = marker.into();
        self
    }

    /// Build the calculator.
    /// Returns every configuration violation if validation fails.
    pub fn build(self) -> Result<Calculator, BuildError> {
        match self.config.validate() {
            Validation::Success(_) => {
                debug!(error_marker = %self.config.error_marker, "calculator built");
                Ok(Calculator::with_config(self.config))
            }
            Validation::Failure(errors) => Err(BuildError::InvalidConfig(
                errors.iter().cloned().collect(),
            )),
        }
    }
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
