//! Calculator configuration and its validation.

use crate::builder::error::{BuildError, ConfigViolation};
use crate::core::DEFAULT_ERROR_MARKER;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Presentation settings for a calculator.
///
/// Missing fields fall back to their defaults when deserialized.
///
/// # Example
///
/// ```rust
/// use calc_engine::builder::CalculatorConfig;
///
/// let config = CalculatorConfig::from_json(r#"{ "error_marker": "E" }"#).unwrap();
/// assert_eq!(config.error_marker, "E");
///
/// let config = CalculatorConfig::from_json("{}").unwrap();
/// assert_eq!(config.error_marker, "Error");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Text shown on the display after a failed evaluation
    pub error_marker: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            error_marker: DEFAULT_ERROR_MARKER.to_string(),
        }
    }
}

impl CalculatorConfig {
    /// Parse a configuration from JSON. The result is not yet validated.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        serde_json::from_str(json).map_err(|e| BuildError::Malformed(e.to_string()))
    }

    /// Check every rule, accumulating ALL violations.
    ///
    /// The error marker has to stay distinguishable from a numeral: it may
    /// not be blank, padded, or parseable as a number.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let marker = &self.error_marker;
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        let check = if marker.trim().is_empty() {
            Validation::fail(ConfigViolation::EmptyErrorMarker)
        } else {
            Validation::success(())
        };
        checks.push(check);

        let check = if marker.parse::<f64>().is_ok() {
            Validation::fail(ConfigViolation::NumericErrorMarker {
                marker: marker.clone(),
            })
        } else {
            Validation::success(())
        };
        checks.push(check);

        let check = if !marker.is_empty() && marker.trim() != marker {
            Validation::fail(ConfigViolation::PaddedErrorMarker {
                marker: marker.clone(),
            })
        } else {
            Validation::success(())
        };
        checks.push(check);

        Validation::all_vec(checks).map(|_| ())
    }
}
