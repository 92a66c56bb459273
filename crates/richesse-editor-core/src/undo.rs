//! Undo/redo history for editor content.
//!
//! Provides:
//! - `UndoManager` trait for abstracting undo implementations
//! - `HtmlHistory` - a bounded linear log of sanitized HTML snapshots

use crate::config::DEFAULT_HISTORY_LIMIT;

/// Trait for managing undo/redo operations.
pub trait UndoManager {
    /// Check if undo is available.
    fn can_undo(&self) -> bool;

    /// Check if redo is available.
    fn can_redo(&self) -> bool;

    /// Perform undo. Returns true if successful.
    fn undo(&mut self) -> bool;

    /// Perform redo. Returns true if successful.
    fn redo(&mut self) -> bool;

    /// Clear all undo/redo history.
    fn clear_history(&mut self);
}

/// Linear snapshot history.
///
/// `index` always points at a valid entry: the one matching the committed
/// content. Recording after an undo discards everything past `index`, so
/// the history is a log, never a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlHistory {
    entries: Vec<String>,
    index: usize,
    max_entries: usize,
}

impl Default for HtmlHistory {
    fn default() -> Self {
        Self::new(String::new(), DEFAULT_HISTORY_LIMIT)
    }
}

impl HtmlHistory {
    /// Create a history whose first entry is `initial`.
    pub fn new(initial: impl Into<String>, max_entries: usize) -> Self {
        Self {
            entries: vec![initial.into()],
            index: 0,
            max_entries: max_entries.max(1),
        }
    }

    /// Append a snapshot after the current entry.
    pub fn record(&mut self, html: String) {
        self.entries.truncate(self.index + 1);
        self.entries.push(html);

        // Trim if over max
        if self.entries.len() > self.max_entries {
            let excess = self.entries.len() - self.max_entries;
            self.entries.drain(..excess);
        }

        self.index = self.entries.len() - 1;
    }

    /// The entry the index points at.
    pub fn current(&self) -> &str {
        &self.entries[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl UndoManager for HtmlHistory {
    fn can_undo(&self) -> bool {
        self.index > 0
    }

    fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.index -= 1;
        true
    }

    fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.index += 1;
        true
    }

    fn clear_history(&mut self) {
        let current = self.entries.swap_remove(self.index);
        self.entries = vec![current];
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_undo_redo() {
        let mut history = HtmlHistory::new("<p>a</p>", 50);
        assert!(!history.can_undo());

        history.record("<p>ab</p>".to_string());
        assert_eq!(history.current(), "<p>ab</p>");
        assert!(history.can_undo());

        // Undo
        assert!(history.undo());
        assert_eq!(history.current(), "<p>a</p>");
        assert!(!history.can_undo());
        assert!(history.can_redo());

        // Redo
        assert!(history.redo());
        assert_eq!(history.current(), "<p>ab</p>");
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_at_start_is_noop() {
        let mut history = HtmlHistory::new("<p>a</p>", 50);
        let before = history.clone();
        assert!(!history.undo());
        assert_eq!(history, before);
    }

    #[test]
    fn test_redo_at_tail_is_noop() {
        let mut history = HtmlHistory::new("", 50);
        history.record("x".to_string());
        let before = history.clone();
        assert!(!history.redo());
        assert_eq!(history, before);
    }

    #[test]
    fn test_new_record_truncates_redo() {
        let mut history = HtmlHistory::new("", 50);
        history.record("a".to_string());
        history.record("ab".to_string());
        assert!(history.undo());
        assert!(history.can_redo());

        // New edit should clear redo
        history.record("ax".to_string());
        assert!(!history.can_redo());
        assert_eq!(history.entries(), ["", "a", "ax"]);
    }

    #[test]
    fn test_max_entries() {
        let mut history = HtmlHistory::new("0", 3);
        history.record("1".to_string());
        history.record("2".to_string());
        history.record("3".to_string()); // should evict "0"

        assert_eq!(history.entries(), ["1", "2", "3"]);
        assert_eq!(history.index(), 2);

        assert!(history.undo());
        assert!(history.undo());
        assert!(!history.undo());
        assert_eq!(history.current(), "1");
    }

    #[test]
    fn test_default_limit_is_fifty() {
        let mut history = HtmlHistory::default();
        for i in 0..80 {
            history.record(i.to_string());
        }
        assert_eq!(history.len(), 50);
        assert_eq!(history.current(), "79");
        assert_eq!(history.entries()[0], "30");
    }

    #[test]
    fn test_clear_history_keeps_current() {
        let mut history = HtmlHistory::new("a", 50);
        history.record("b".to_string());
        history.record("c".to_string());
        assert!(history.undo());

        history.clear_history();
        assert_eq!(history.entries(), ["b"]);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
