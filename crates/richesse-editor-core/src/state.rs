//! Canonical editor state: sanitized content plus its history.

use crate::config::EditorConfig;
use crate::markup::placeholder_markup;
use crate::platform::ContentView;
use crate::sanitize::Sanitizer;
use crate::undo::{HtmlHistory, UndoManager};

/// Sanitized content of one mounted editor.
///
/// The editable region is only a view: the state reads it when an edit is
/// committed and writes to it when seeding and replaying history.
pub struct EditorState {
    sanitizer: Sanitizer,
    history: HtmlHistory,
    content: String,
    replaying: bool,
    placeholder: String,
}

impl EditorState {
    /// Create the state for a freshly mounted editor.
    ///
    /// The initial content is sanitized and becomes history entry 0.
    pub fn new(initial: &str, config: &EditorConfig) -> Self {
        let sanitizer = Sanitizer::from_config(config);
        let content = sanitizer.sanitize(initial);
        Self {
            history: HtmlHistory::new(content.clone(), config.history_limit),
            content,
            sanitizer,
            replaying: false,
            placeholder: placeholder_markup(&config.placeholder),
        }
    }

    /// Last committed (sanitized) content.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn history(&self) -> &HtmlHistory {
        &self.history
    }

    /// True while history is being written back into the view.
    pub fn is_replaying(&self) -> bool {
        self.replaying
    }

    /// Markup shown in an empty editor.
    pub fn placeholder_markup(&self) -> &str {
        &self.placeholder
    }

    pub fn sanitizer(&self) -> &Sanitizer {
        &self.sanitizer
    }

    /// Seed an empty view with the initial content, or the placeholder when
    /// there is none. Returns true if the view was written.
    pub fn seed<V: ContentView + ?Sized>(&self, view: &mut V) -> bool {
        let live = view.html();
        if !live.is_empty() && live != "<br>" {
            return false;
        }

        if self.content.is_empty() {
            view.set_html(&self.placeholder);
        } else {
            view.set_html(&self.content);
        }
        true
    }

    /// Sanitize `raw` and make it the current content.
    ///
    /// Outside of replay the result is also appended to history.
    pub fn commit(&mut self, raw: &str) -> &str {
        let sanitized = self.sanitizer.sanitize(raw);
        if !self.replaying && sanitized != self.history.current() {
            self.history.record(sanitized.clone());
        }
        tracing::debug!(
            len = sanitized.len(),
            index = self.history.index(),
            replaying = self.replaying,
            "committed editor content"
        );
        self.content = sanitized;
        &self.content
    }

    /// Commit whatever the view currently shows.
    ///
    /// The placeholder is dropped from the view first, so it never reaches
    /// the committed content.
    pub fn handle_change<V: ContentView + ?Sized>(&mut self, view: &mut V) -> &str {
        let mut raw = view.html();
        if raw.contains(&self.placeholder) {
            raw = raw.replace(&self.placeholder, "");
            view.set_html(&raw);
        }
        self.commit(&raw)
    }

    /// Step back one entry and show it. No-op at the first entry.
    pub fn undo<V: ContentView + ?Sized>(&mut self, view: &mut V) -> bool {
        if !self.history.undo() {
            return false;
        }
        self.replay(view);
        true
    }

    /// Step forward one entry and show it. No-op at the last entry.
    pub fn redo<V: ContentView + ?Sized>(&mut self, view: &mut V) -> bool {
        if !self.history.redo() {
            return false;
        }
        self.replay(view);
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Forget every entry but the current one.
    pub fn clear_history(&mut self) {
        self.history.clear_history();
    }

    fn replay<V: ContentView + ?Sized>(&mut self, view: &mut V) {
        self.replaying = true;
        self.content = self.history.current().to_string();
        view.set_html(&self.content);
        self.replaying = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockView {
        html: String,
        writes: usize,
    }

    impl ContentView for MockView {
        fn html(&self) -> String {
            self.html.clone()
        }

        fn set_html(&mut self, html: &str) {
            self.html = html.to_string();
            self.writes += 1;
        }
    }

    fn state(initial: &str) -> EditorState {
        EditorState::new(initial, &EditorConfig::default())
    }

    #[test]
    fn test_initial_content_is_sanitized_entry_zero() {
        let state = state("<p>a</p><script>x</script>");
        assert_eq!(state.content(), "<p>a</p>");
        assert_eq!(state.history().entries(), ["<p>a</p>"]);
        assert!(!state.can_undo());
    }

    #[test]
    fn test_seed_empty_view_with_content() {
        let state = state("<p>hello</p>");
        let mut view = MockView::default();
        assert!(state.seed(&mut view));
        assert_eq!(view.html, "<p>hello</p>");
    }

    #[test]
    fn test_seed_br_view_with_placeholder() {
        let state = state("");
        let mut view = MockView {
            html: "<br>".to_string(),
            writes: 0,
        };
        assert!(state.seed(&mut view));
        assert_eq!(
            view.html,
            r#"<div class="text-gray-400">Commencez à écrire ici...</div>"#
        );
    }

    #[test]
    fn test_seed_leaves_existing_content() {
        let state = state("<p>hello</p>");
        let mut view = MockView {
            html: "<p>already</p>".to_string(),
            writes: 0,
        };
        assert!(!state.seed(&mut view));
        assert_eq!(view.html, "<p>already</p>");
        assert_eq!(view.writes, 0);
    }

    #[test]
    fn test_commit_records_history() {
        let mut state = state("");
        assert_eq!(state.commit("<p>a</p>"), "<p>a</p>");
        assert_eq!(state.commit("<p>ab</p><iframe></iframe>"), "<p>ab</p>");
        assert_eq!(state.history().len(), 3);
        assert!(state.can_undo());
    }

    #[test]
    fn test_unchanged_commit_is_not_recorded() {
        let mut state = state("<p>a</p>");
        state.commit("<p>a</p>");
        state.commit("<p>a</p><!-- c -->");
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn test_handle_change_drops_placeholder() {
        let mut state = state("");
        let mut view = MockView::default();
        state.seed(&mut view);
        view.html.push_str("<p>typed</p>");

        assert_eq!(state.handle_change(&mut view), "<p>typed</p>");
        assert_eq!(view.html, "<p>typed</p>");
        assert!(!state.content().contains("text-gray-400"));
    }

    #[test]
    fn test_commit_undo_redo_round_trip() {
        let mut state = state("");
        let mut view = MockView::default();
        let mut snapshots = Vec::new();
        for i in 0..49 {
            let html = format!("<p>{i}</p>");
            snapshots.push(state.commit(&html).to_string());
        }

        for expected in snapshots.iter().rev().skip(1) {
            assert!(state.undo(&mut view));
            assert_eq!(&view.html, expected);
            assert_eq!(state.content(), expected);
        }
        assert!(state.undo(&mut view));
        assert_eq!(state.content(), "");
        assert!(!state.undo(&mut view));

        for expected in &snapshots {
            assert!(state.redo(&mut view));
            assert_eq!(state.content(), expected);
        }
        assert!(!state.redo(&mut view));
        assert_eq!(state.history().len(), 50);
    }

    #[test]
    fn test_undo_at_start_leaves_state_unchanged() {
        let mut state = state("<p>a</p>");
        let mut view = MockView::default();
        assert!(!state.undo(&mut view));
        assert_eq!(state.content(), "<p>a</p>");
        assert_eq!(view.writes, 0);
    }

    #[test]
    fn test_replay_does_not_record() {
        let mut state = state("");
        let mut view = MockView::default();
        state.commit("<p>a</p>");
        state.commit("<p>b</p>");

        assert!(state.undo(&mut view));
        assert!(!state.is_replaying());
        assert_eq!(state.history().len(), 3);
        assert!(state.can_redo());
    }

    #[test]
    fn test_edit_after_undo_truncates() {
        let mut state = state("");
        let mut view = MockView::default();
        state.commit("<p>a</p>");
        state.commit("<p>b</p>");
        state.undo(&mut view);

        state.commit("<p>c</p>");
        assert!(!state.can_redo());
        assert_eq!(state.history().entries(), ["", "<p>a</p>", "<p>c</p>"]);
    }
}
