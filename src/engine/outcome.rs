//! Result of dispatching a single input.

use crate::core::{CalcError, Digit, HistoryEntry, Operation};

/// What a single input did to the calculator.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Digit entered on the display
    DigitEntered(Digit),

    /// Operand captured and operator now pending
    OperatorSelected(Operation),

    /// Display did not parse; state left unchanged
    OperatorIgnored { operator: Operation, error: CalcError },

    /// Display reset and pending operation dropped
    Cleared,

    /// Computation completed and recorded in history
    Evaluated(HistoryEntry),

    /// Evaluation failed; display shows the error marker
    EvaluationFailed(CalcError),
}

impl Outcome {
    /// The error behind this outcome, if any.
    pub fn error(&self) -> Option<&CalcError> {
        match self {
            Self::OperatorIgnored { error, .. } | Self::EvaluationFailed(error) => Some(error),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_failures_carry_errors() {
        assert!(!Outcome::Cleared.is_error());
        assert!(!Outcome::OperatorSelected(Operation::Addition).is_error());

        let ignored = Outcome::OperatorIgnored {
            operator: Operation::Addition,
            error: CalcError::ParseFailure {
                text: "Error".to_string(),
            },
        };
        assert!(ignored.is_error());

        let failed = Outcome::EvaluationFailed(CalcError::DivisionByZero);
        assert_eq!(failed.error(), Some(&CalcError::DivisionByZero));
    }
}
