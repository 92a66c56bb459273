//! Bookkeeping for copyable code blocks.
//!
//! Code blocks carry no script. Their copy buttons point at the block with
//! `data-target`, and each editor keeps its own registry of the blocks it
//! knows about. A click is honoured only when the target is registered.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use web_time::Instant;

static COPY_TARGET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"data-target="(code-block-[A-Za-z0-9_-]+)""#).unwrap());

/// Prefix of every generated code block id.
pub const CODE_BLOCK_ID_PREFIX: &str = "code-block-";

/// Generate a fresh, document-unique code block id.
pub fn new_code_block_id() -> String {
    format!("{CODE_BLOCK_ID_PREFIX}{}", uuid::Uuid::new_v4().simple())
}

/// Code blocks whose copy button this editor instance handles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyRegistry {
    ids: HashSet<String>,
}

impl CopyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: impl Into<String>) {
        self.ids.insert(id.into());
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn forget(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Re-sync with committed content.
    ///
    /// Blocks that came back through undo, or were loaded with the initial
    /// content, become known; deleted blocks are forgotten.
    pub fn scan(&mut self, html: &str) {
        self.ids = COPY_TARGET
            .captures_iter(html)
            .map(|caps| caps[1].to_string())
            .collect();
    }
}

/// Tracks copy buttons currently showing the "copied" label.
///
/// Each click pushes the deadline back; the label is restored by whichever
/// timer fires after the last deadline.
#[derive(Debug, Clone)]
pub struct CopyFeedback {
    duration: Duration,
    active: HashMap<String, Instant>,
}

impl CopyFeedback {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            duration: Duration::from_millis(u64::from(duration_ms)),
            active: HashMap::new(),
        }
    }

    /// Record a copy. Returns true if the button wasn't already showing
    /// feedback, meaning its current label is the original one.
    pub fn start(&mut self, id: &str, now: Instant) -> bool {
        self.active
            .insert(id.to_string(), now + self.duration)
            .is_none()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.contains_key(id)
    }

    /// Called when a feedback timer fires. Returns true if the label should
    /// be restored now.
    pub fn expire(&mut self, id: &str, now: Instant) -> bool {
        match self.active.get(id) {
            Some(deadline) if now >= *deadline => {
                self.active.remove(id);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::create_code_block;

    #[test]
    fn test_new_ids_are_unique() {
        let a = new_code_block_id();
        let b = new_code_block_id();
        assert!(a.starts_with(CODE_BLOCK_ID_PREFIX));
        assert_ne!(a, b);
    }

    #[test]
    fn test_scan_finds_copy_targets() {
        let html = format!(
            "<p>x</p>{}{}",
            create_code_block("code-block-a1", "rust", "", "Code", "Copier"),
            create_code_block("code-block-b2", "", "", "Code", "Copier"),
        );
        let mut registry = CopyRegistry::new();
        registry.register("code-block-gone");
        registry.scan(&html);

        assert!(registry.contains("code-block-a1"));
        assert!(registry.contains("code-block-b2"));
        assert!(!registry.contains("code-block-gone"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_scan_ignores_foreign_targets() {
        let mut registry = CopyRegistry::new();
        registry.scan(r#"<button data-target="main-nav">x</button>"#);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_feedback_start_and_expire() {
        let mut feedback = CopyFeedback::new(2000);
        let t0 = Instant::now();

        assert!(feedback.start("code-block-a", t0));
        assert!(feedback.is_active("code-block-a"));
        assert!(!feedback.expire("code-block-a", t0 + Duration::from_millis(1000)));
        assert!(feedback.expire("code-block-a", t0 + Duration::from_millis(2000)));
        assert!(!feedback.is_active("code-block-a"));
    }

    #[test]
    fn test_repeated_click_extends_feedback() {
        let mut feedback = CopyFeedback::new(2000);
        let t0 = Instant::now();

        assert!(feedback.start("code-block-a", t0));
        // Second click: the label already says "copied", don't capture it.
        assert!(!feedback.start("code-block-a", t0 + Duration::from_millis(1500)));

        // First timer fires before the extended deadline.
        assert!(!feedback.expire("code-block-a", t0 + Duration::from_millis(2000)));
        assert!(feedback.expire("code-block-a", t0 + Duration::from_millis(3500)));
    }
}
