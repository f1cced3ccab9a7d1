//! Phase of the evaluation state machine and the pending operation.

use super::error::CalcError;
use super::operation::Operation;
use serde::Serialize;

/// Where the engine is in its input cycle.
///
/// There is no terminal phase: evaluation, success or failure, always
/// lands back in `Idle`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub enum Phase {
    /// No operator selected since the last clear or evaluation.
    Idle,
    /// Left operand and operator captured, awaiting the right operand.
    OperatorPending,
}

impl Phase {
    /// Name for display/logging.
    pub fn name(&self) -> &str {
        match self {
            Self::Idle => "Idle",
            Self::OperatorPending => "OperatorPending",
        }
    }
}

/// Left operand and operator, captured together when an operator is pressed.
#[derive(Clone, Copy, PartialEq, Debug, Serialize)]
pub struct PendingOperation {
    pub operand: f64,
    pub operator: Operation,
}

impl PendingOperation {
    /// Complete the operation with its right operand.
    pub fn complete(&self, rhs: f64) -> Result<f64, CalcError> {
        self.operator.apply(self.operand, rhs)
    }
}
