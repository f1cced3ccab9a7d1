//! Append-only log of completed computations.

use super::display::format_number;
use super::operation::Operation;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Record of one completed computation.
///
/// Entries are immutable values; the log only ever appends them.
///
/// # Example
///
/// ```rust
/// use calc_engine::core::{HistoryEntry, Operation};
///
/// let entry = HistoryEntry::new(5.0, Operation::Addition, 3.0, "8.0".to_string());
/// assert_eq!(entry.to_string(), "5.0 + 3.0 = 8.0");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HistoryEntry {
    /// Left operand
    pub lhs: f64,
    pub operator: Operation,
    /// Right operand
    pub rhs: f64,
    /// Result in canonical text form, exactly as it was displayed
    pub result: String,
    /// When the computation completed
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(lhs: f64, operator: Operation, rhs: f64, result: String) -> Self {
        Self {
            lhs,
            operator,
            rhs,
            result,
            timestamp: Utc::now(),
        }
    }

    pub fn operator_symbol(&self) -> &'static str {
        self.operator.symbol()
    }

    pub fn lhs_text(&self) -> String {
        format_number(self.lhs)
    }

    pub fn rhs_text(&self) -> String {
        format_number(self.rhs)
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.lhs_text(),
            self.operator_symbol(),
            self.rhs_text(),
            self.result
        )
    }
}

/// Ordered history of completed computations, oldest first.
#[derive(Clone, Debug, Default, Serialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry. Only the engine records; callers get read access.
    pub(crate) fn record(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent entry.
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    /// Every entry rendered as text, in chronological order.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
