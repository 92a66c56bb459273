//! Platform abstraction traits for editor operations.
//!
//! These traits define the interface between the editor logic and the
//! hosting environment (browser DOM, test doubles). The core never touches a
//! document directly: it reads and writes HTML through a [`ContentView`],
//! applies formatting through a [`CommandPlatform`], and surfaces
//! user-facing messages through a [`Notifier`].

/// Error type for platform operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformError(pub String);

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for PlatformError {}

impl From<&str> for PlatformError {
    fn from(s: &str) -> Self {
        PlatformError(s.to_string())
    }
}

impl From<String> for PlatformError {
    fn from(s: String) -> Self {
        PlatformError(s)
    }
}

/// The editable region, seen as a view over the editor state.
///
/// The core reads the live HTML when committing an edit and writes to the
/// view only when seeding it at mount time or replaying history.
pub trait ContentView {
    /// Current raw HTML of the editable region.
    fn html(&self) -> String;

    /// Replace the editable region's HTML.
    fn set_html(&mut self, html: &str);
}

/// Native selection-based command execution.
///
/// The browser implementation forwards to `document.execCommand`, which
/// applies the command to the current selection inside the editable region.
pub trait CommandPlatform {
    /// Execute a native command. `Ok(false)` means the platform declined it.
    fn exec_command(&self, name: &str, value: &str) -> Result<bool, PlatformError>;
}

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// User-facing notifications.
pub trait Notifier {
    /// Blocking alert, used for rejected commands.
    fn alert(&self, message: &str);

    /// Transient notification (toast), used for upload outcomes.
    fn notify(&self, level: NoticeLevel, message: &str);
}

/// Clipboard write access.
pub trait ClipboardPlatform {
    /// Write plain text to the system clipboard.
    fn write_text(&self, text: &str);
}
