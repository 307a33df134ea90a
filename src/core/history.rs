//! Rolling history of completed operations.
//!
//! History is immutable: `record` returns a new history with the entry
//! prepended, so the newest entry is always first and the oldest falls off
//! once the capacity is exceeded.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of entries kept by [`History::new`].
pub const HISTORY_CAPACITY: usize = 10;

/// Record of a single completed operation.
///
/// # Example
///
/// ```rust
/// use lambdacalc::core::HistoryEntry;
///
/// let entry = HistoryEntry::new("2 + 3", "5");
/// assert_eq!(entry.label, "2 + 3");
/// assert_eq!(entry.result, "5");
/// assert!(!entry.is_error());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Stable identifier, usable as a row key by a display adapter
    pub id: Uuid,
    /// What was computed, e.g. `"2 + 3"` or `"sqrt(9)"`
    pub label: String,
    /// The result as it was displayed
    pub result: String,
    /// When the operation completed
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Label used for failed remote operations.
    pub const ERROR_LABEL: &'static str = "Error";

    pub fn new(label: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            result: result.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.label == Self::ERROR_LABEL
    }
}

/// Bounded, newest-first sequence of history entries.
///
/// # Example
///
/// ```rust
/// use lambdacalc::core::{History, HistoryEntry};
///
/// let history = History::new();
/// let history = history.record(HistoryEntry::new("1 + 1", "2"));
/// let history = history.record(HistoryEntry::new("2 * 3", "6"));
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.latest().unwrap().label, "2 * 3");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Create an empty history holding at most [`HISTORY_CAPACITY`] entries.
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    /// Create an empty history with a custom bound.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Record an entry, returning a new history.
    ///
    /// The entry is placed first; anything beyond the capacity is dropped
    /// from the old end.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lambdacalc::core::{History, HistoryEntry};
    ///
    /// let history = History::with_capacity(2);
    /// let history = history
    ///     .record(HistoryEntry::new("a", "1"))
    ///     .record(HistoryEntry::new("b", "2"))
    ///     .record(HistoryEntry::new("c", "3"));
    ///
    /// let labels: Vec<_> = history.entries().iter().map(|e| e.label.as_str()).collect();
    /// assert_eq!(labels, ["c", "b"]);
    /// ```
    pub fn record(&self, entry: HistoryEntry) -> Self {
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.push(entry);
        entries.extend(self.entries.iter().cloned());
        entries.truncate(self.capacity);
        Self {
            entries,
            capacity: self.capacity,
        }
    }

    /// All entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(history: &History) -> Vec<String> {
        history.entries().iter().map(|e| e.label.clone()).collect()
    }

    #[test]
    fn new_history_is_empty() {
        let history = History::new();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
        assert_eq!(history.capacity(), HISTORY_CAPACITY);
    }

    #[test]
    fn record_prepends_entry() {
        let history = History::new()
            .record(HistoryEntry::new("first", "1"))
            .record(HistoryEntry::new("second", "2"));

        assert_eq!(labels(&history), ["second", "first"]);
    }

    #[test]
    fn record_is_immutable() {
        let history = History::new();
        let new_history = history.record(HistoryEntry::new("1 + 1", "2"));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn eleventh_entry_evicts_oldest() {
        let mut history = History::new();
        for i in 0..11 {
            history = history.record(HistoryEntry::new(format!("op {}", i), i.to_string()));
        }

        assert_eq!(history.len(), 10);
        assert_eq!(history.latest().unwrap().label, "op 10");
        assert!(history.entries().iter().all(|e| e.label != "op 0"));
        assert_eq!(history.entries().last().unwrap().label, "op 1");
    }

    #[test]
    fn entries_get_distinct_ids() {
        let a = HistoryEntry::new("x", "1");
        let b = HistoryEntry::new("x", "1");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn error_entries_are_flagged() {
        let entry = HistoryEntry::new(HistoryEntry::ERROR_LABEL, "Matrix operation error: boom");
        assert!(entry.is_error());
    }

    #[test]
    fn history_serializes_correctly() {
        let history = History::new().record(HistoryEntry::new("2 + 3", "5"));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: History = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.entries(), history.entries());
        assert_eq!(deserialized.capacity(), history.capacity());
    }
}
