//! richesse-editor-core: Rich-text HTML editor logic without DOM dependencies.
//!
//! This crate provides:
//! - `Sanitizer` - the HTML sanitization pipeline applied on every commit
//! - `EditorState` - sanitized content with a bounded undo/redo history
//! - `CommandExecutor` - validated toolbar commands and generated markup
//! - `ImageResizeController` - pointer-driven image resizing
//! - Platform traits the browser layer implements

pub mod actions;
pub mod clipboard;
pub mod color;
pub mod config;
pub mod error;
pub mod execute;
pub mod markup;
pub mod menus;
pub mod platform;
pub mod resize;
pub mod sanitize;
pub mod state;
pub mod undo;
pub mod upload;
pub mod validate;

pub use actions::{Alignment, BlockFormat, EditorCommand};
pub use clipboard::{CopyFeedback, CopyRegistry};
pub use config::{EditorConfig, Messages};
pub use error::CommandError;
pub use execute::{CommandExecutor, NativeCall};
pub use menus::{ToolbarMenu, ToolbarMenuState};
pub use platform::{
    ClipboardPlatform, CommandPlatform, ContentView, NoticeLevel, Notifier, PlatformError,
};
pub use resize::{ImageResizeController, ImageSize, ResizeOutcome, ResizeSession};
pub use sanitize::Sanitizer;
pub use smol_str::SmolStr;
pub use state::EditorState;
pub use undo::{HtmlHistory, UndoManager};
pub use upload::{Attachment, UploadError, UploadTicket, UploadTracker};
pub use validate::{extract_youtube_id, validate_url};
