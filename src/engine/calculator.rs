//! The calculator engine: an immediate-execution evaluation state machine.

use crate::builder::{CalculatorBuilder, CalculatorConfig};
use crate::core::{
    CalcError, Digit, DisplayValue, History, HistoryEntry, Input, InputError, Operation,
    PendingOperation, Phase,
};
use crate::engine::outcome::Outcome;
use tracing::{debug, trace};

/// Four-function calculator holding one pending operation at a time.
///
/// The caller owns the engine and drives it through one method per input
/// class. Display and history are exposed read-only for rendering.
///
/// # Example
///
/// ```rust
/// use calc_engine::core::{Digit, Operation};
/// use calc_engine::engine::Calculator;
///
/// let mut calc = Calculator::new();
/// calc.submit_digit(Digit::new(5).unwrap());
/// calc.submit_operator(Operation::Addition).unwrap();
/// calc.submit_digit(Digit::new(3).unwrap());
/// calc.evaluate().unwrap();
///
/// assert_eq!(calc.display(), "8.0");
/// assert_eq!(calc.history().lines(), vec!["5.0 + 3.0 = 8.0"]);
/// ```
#[derive(Clone, Debug)]
pub struct Calculator {
    config: CalculatorConfig,
    display: DisplayValue,
    pending: Option<PendingOperation>,
    /// Set when an operator is captured, cleared by the next digit.
    awaiting_rhs: bool,
    history: History,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator with the default configuration.
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Start building a calculator with custom configuration.
    pub fn builder() -> CalculatorBuilder {
        CalculatorBuilder::new()
    }

    /// Caller must have validated `config`.
    pub(crate) fn with_config(config: CalculatorConfig) -> Self {
        Self {
            config,
            display: DisplayValue::zero(),
            pending: None,
            awaiting_rhs: false,
            history: History::new(),
        }
    }

    /// Text currently on the display.
    pub fn display(&self) -> &str {
        self.display.text(&self.config.error_marker)
    }

    pub fn display_value(&self) -> &DisplayValue {
        &self.display
    }

    pub fn is_error(&self) -> bool {
        self.display.is_error()
    }

    pub fn pending(&self) -> Option<&PendingOperation> {
        self.pending.as_ref()
    }

    pub fn pending_operand(&self) -> Option<f64> {
        self.pending.map(|p| p.operand)
    }

    pub fn pending_operator(&self) -> Option<Operation> {
        self.pending.map(|p| p.operator)
    }

    pub fn phase(&self) -> Phase {
        if self.pending.is_some() {
            Phase::OperatorPending
        } else {
            Phase::Idle
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Enter a digit. Replaces a lone `"0"` or the error marker, appends
    /// otherwise.
    pub fn submit_digit(&mut self, digit: Digit) {
        self.display.push_digit(digit);
        self.awaiting_rhs = false;
        trace!(digit = %digit, display = self.display(), "digit entered");
    }

    /// Capture the display as the left operand and make `operator` pending.
    ///
    /// If the display does not parse, nothing changes and the parse failure
    /// is returned for the caller to inspect. A second operator before
    /// evaluating replaces the pending pair; if no digit was entered since
    /// the first one, only the operator is swapped and the operand is kept.
    pub fn submit_operator(&mut self, operator: Operation) -> Result<(), CalcError> {
        if self.awaiting_rhs {
            if let Some(pending) = self.pending.as_mut() {
                debug!(from = %pending.operator, to = %operator, "pending operator replaced");
                pending.operator = operator;
                return Ok(());
            }
        }

        let operand = match self.read_display() {
            Ok(operand) => operand,
            Err(err) => {
                debug!(%operator, error = %err, "operator ignored");
                return Err(err);
            }
        };

        self.pending = Some(PendingOperation { operand, operator });
        self.awaiting_rhs = true;
        self.display = DisplayValue::zero();
        debug!(operand, %operator, "operator pending");
        Ok(())
    }

    /// Reset the display and drop any pending operation. History is kept.
    pub fn clear(&mut self) {
        self.display = DisplayValue::zero();
        self.pending = None;
        self.awaiting_rhs = false;
        debug!(history_len = self.history.len(), "cleared");
    }

    /// Complete the pending operation using the display as right operand.
    ///
    /// On success the result is displayed and recorded in history. On any
    /// failure the display shows the error marker and history is untouched.
    /// Either way no operation is pending afterwards.
    pub fn evaluate(&mut self) -> Result<HistoryEntry, CalcError> {
        let pending = self.pending.take();
        self.awaiting_rhs = false;

        let computed = pending
            .ok_or(CalcError::NoPendingOperation)
            .and_then(|pending| {
                let rhs = self.read_display()?;
                let value = pending.complete(rhs)?;
                Ok((pending, rhs, value))
            });

        match computed {
            Ok((pending, rhs, value)) => {
                let display = DisplayValue::from_result(value);
                let result = display.text(&self.config.error_marker).to_string();
                let entry = HistoryEntry::new(pending.operand, pending.operator, rhs, result);

                debug!(entry = %entry, "evaluated");
                self.display = display;
                self.history.record(entry.clone());
                Ok(entry)
            }
            Err(err) => {
                debug!(error = %err, "evaluation failed");
                self.display = DisplayValue::Error;
                Err(err)
            }
        }
    }

    /// Route an input to the matching operation.
    pub fn apply(&mut self, input: Input) -> Outcome {
        match input {
            Input::Digit(digit) => {
                self.submit_digit(digit);
                Outcome::DigitEntered(digit)
            }
            Input::Operator(operator) => match self.submit_operator(operator) {
                Ok(()) => Outcome::OperatorSelected(operator),
                Err(error) => Outcome::OperatorIgnored { operator, error },
            },
            Input::Clear => {
                self.clear();
                Outcome::Cleared
            }
            Input::Evaluate => match self.evaluate() {
                Ok(entry) => Outcome::Evaluated(entry),
                Err(error) => Outcome::EvaluationFailed(error),
            },
        }
    }

    /// Apply a keypad label such as `"7"`, `"*"`, `"C"` or `"="`.
    ///
    /// Unknown labels are rejected without touching state.
    pub fn press(&mut self, label: &str) -> Result<Outcome, InputError> {
        let input = label.parse::<Input>()?;
        Ok(self.apply(input))
    }

    fn read_display(&self) -> Result<f64, CalcError> {
        self.display.value().ok_or_else(|| CalcError::ParseFailure {
            text: self.display().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(d: u8) -> Digit {
        Digit::new(d).unwrap()
    }

    fn press_all(calc: &mut Calculator, labels: &[&str]) -> Vec<Outcome> {
        labels.iter().map(|l| calc.press(l).unwrap()).collect()
    }

    #[test]
    fn initial_state() {
        let calc = Calculator::new();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.phase(), Phase::Idle);
        assert!(calc.pending_operand().is_none());
        assert!(calc.pending_operator().is_none());
        assert!(calc.history().is_empty());
    }

    #[test]
    fn digits_accumulate_without_leading_zero() {
        let mut calc = Calculator::new();
        calc.submit_digit(digit(0));
        calc.submit_digit(digit(0));
        assert_eq!(calc.display(), "0");

        calc.submit_digit(digit(4));
        calc.submit_digit(digit(0));
        assert_eq!(calc.display(), "40");
        assert_eq!(calc.phase(), Phase::Idle);
    }

    #[test]
    fn operator_captures_operand() {
        let mut calc = Calculator::new();
        calc.submit_digit(digit(1));
        calc.submit_digit(digit(2));

        assert_eq!(calc.submit_operator(Operation::Multiplication), Ok(()));
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.pending_operand(), Some(12.0));
        assert_eq!(calc.pending_operator(), Some(Operation::Multiplication));
        assert_eq!(calc.phase(), Phase::OperatorPending);
    }

    #[test]
    fn addition_scenario() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["5", "+", "3"]);

        let entry = calc.evaluate().unwrap();
        assert_eq!(calc.display(), "8.0");
        assert_eq!(entry.lhs, 5.0);
        assert_eq!(entry.operator_symbol(), "+");
        assert_eq!(entry.rhs, 3.0);
        assert_eq!(entry.result, "8.0");
        assert_eq!(calc.history().len(), 1);
        assert_eq!(calc.history().lines(), vec!["5.0 + 3.0 = 8.0"]);
        assert_eq!(calc.phase(), Phase::Idle);
    }

    #[test]
    fn division_by_zero_shows_error() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["7", "/", "0"]);

        assert_eq!(calc.evaluate(), Err(CalcError::DivisionByZero));
        assert_eq!(calc.display(), "Error");
        assert!(calc.is_error());
        assert!(calc.history().is_empty());
        assert!(calc.pending().is_none());
    }

    #[test]
    fn second_operator_overwrites_first() {
        let mut calc = Calculator::new();
        let outcomes = press_all(&mut calc, &["4", "*", "+", "2", "="]);

        assert_eq!(calc.display(), "6.0");
        assert_eq!(outcomes[2], Outcome::OperatorSelected(Operation::Addition));
        let entry = calc.history().last().unwrap();
        assert_eq!(entry.lhs, 4.0);
        assert_eq!(entry.operator, Operation::Addition);
    }

    #[test]
    fn operator_swap_keeps_operand() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["4", "*"]);
        calc.submit_operator(Operation::Subtraction).unwrap();

        assert_eq!(calc.pending_operand(), Some(4.0));
        assert_eq!(calc.pending_operator(), Some(Operation::Subtraction));
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn operator_after_new_digits_replaces_pair() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["4", "*", "7", "+"]);

        assert_eq!(calc.pending_operand(), Some(7.0));
        assert_eq!(calc.pending_operator(), Some(Operation::Addition));

        press_all(&mut calc, &["1", "="]);
        assert_eq!(calc.display(), "8.0");
    }

    #[test]
    fn explicit_zero_after_operator_is_captured() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["4", "*", "0", "+"]);
        assert_eq!(calc.pending_operand(), Some(0.0));
    }

    #[test]
    fn clear_on_fresh_engine() {
        let mut calc = Calculator::new();
        calc.clear();
        assert_eq!(calc.display(), "0");
        assert!(calc.pending().is_none());
        assert_eq!(calc.phase(), Phase::Idle);
    }

    #[test]
    fn clear_keeps_history() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["2", "+", "2", "=", "9", "*"]);
        assert_eq!(calc.history().len(), 1);

        calc.clear();
        assert_eq!(calc.history().len(), 1);
        assert_eq!(calc.display(), "0");
        assert!(calc.pending_operator().is_none());
    }

    #[test]
    fn operator_on_error_is_a_no_op() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["7", "/", "0", "="]);
        assert_eq!(calc.display(), "Error");

        let result = calc.submit_operator(Operation::Addition);
        assert_eq!(
            result,
            Err(CalcError::ParseFailure {
                text: "Error".to_string()
            })
        );
        assert_eq!(calc.display(), "Error");
        assert!(calc.pending().is_none());
        assert!(calc.history().is_empty());
    }

    #[test]
    fn digit_after_error_starts_fresh() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["7", "/", "0", "=", "3"]);
        assert_eq!(calc.display(), "3");
        assert!(!calc.is_error());
    }

    #[test]
    fn evaluate_without_pending_operation_fails() {
        let mut calc = Calculator::new();
        calc.submit_digit(digit(9));

        assert_eq!(calc.evaluate(), Err(CalcError::NoPendingOperation));
        assert_eq!(calc.display(), "Error");
        assert!(calc.history().is_empty());
    }

    #[test]
    fn evaluate_with_unparseable_rhs_clears_pending() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["2", "+"]);
        for _ in 0..400 {
            calc.submit_digit(digit(9));
        }

        assert!(matches!(
            calc.evaluate(),
            Err(CalcError::ParseFailure { .. })
        ));
        assert_eq!(calc.display(), "Error");
        assert!(calc.pending().is_none());
    }

    #[test]
    fn overflow_routes_to_error_marker() {
        let mut calc = Calculator::new();
        for _ in 0..200 {
            calc.submit_digit(digit(9));
        }
        calc.submit_operator(Operation::Multiplication).unwrap();
        for _ in 0..200 {
            calc.submit_digit(digit(9));
        }

        assert_eq!(calc.evaluate(), Err(CalcError::Overflow));
        assert_eq!(calc.display(), "Error");
        assert!(calc.history().is_empty());
    }

    #[test]
    fn result_can_be_chained_as_operand() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["9", "/", "2", "=", "*", "4", "="]);

        assert_eq!(calc.display(), "18.0");
        assert_eq!(
            calc.history().lines(),
            vec!["9.0 ÷ 2.0 = 4.5", "4.5 × 4.0 = 18.0"]
        );
    }

    #[test]
    fn digit_after_result_appends() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["5", "+", "3", "=", "1"]);
        assert_eq!(calc.display(), "8.01");
    }

    #[test]
    fn subtraction_can_go_negative() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["3", "-", "8", "="]);
        assert_eq!(calc.display(), "-5.0");
        assert_eq!(calc.history().lines(), vec!["3.0 − 8.0 = -5.0"]);
    }

    #[test]
    fn press_rejects_unknown_label_without_change() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["6", "-"]);

        assert_eq!(
            calc.press("%"),
            Err(InputError::UnknownButton("%".to_string()))
        );
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.pending_operator(), Some(Operation::Subtraction));
    }

    #[test]
    fn apply_reports_outcomes() {
        let mut calc = Calculator::new();

        assert_eq!(
            calc.apply(Input::Digit(digit(6))),
            Outcome::DigitEntered(digit(6))
        );
        assert_eq!(
            calc.apply(Input::Operator(Operation::Division)),
            Outcome::OperatorSelected(Operation::Division)
        );
        assert_eq!(
            calc.apply(Input::Evaluate),
            Outcome::EvaluationFailed(CalcError::DivisionByZero)
        );
        assert!(matches!(
            calc.apply(Input::Operator(Operation::Addition)),
            Outcome::OperatorIgnored {
                operator: Operation::Addition,
                error: CalcError::ParseFailure { .. }
            }
        ));
        assert_eq!(calc.apply(Input::Clear), Outcome::Cleared);
        assert_eq!(calc.display(), "0");
    }
}
