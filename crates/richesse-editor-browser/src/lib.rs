//! Browser DOM layer for the richesse editor.
//!
//! This crate implements the core platform traits with web-sys and wires a
//! contenteditable element to the core state. It assumes a
//! `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `content`: the editable element as a `ContentView`
//! - `commands`: `document.execCommand` as a `CommandPlatform`
//! - `notify`: alerts and toast events
//! - `clipboard`: Clipboard API and code block copy buttons
//! - `resize`: resize handle hit-testing and image sizing
//! - `upload`: multipart image upload
//! - `surface`: `EditorSurface`, the composition root
//!
//! # Re-exports
//!
//! This crate re-exports `richesse-editor-core` for convenience, so consumers
//! only need to depend on `richesse-editor-browser`.

// Re-export core crate
pub use richesse_editor_core;
pub use richesse_editor_core::*;

pub mod clipboard;
pub mod commands;
pub mod content;
pub mod notify;
pub mod resize;
pub mod surface;
pub mod upload;

pub use clipboard::{BrowserClipboard, CopyClick};
pub use commands::BrowserCommands;
pub use content::BrowserContentView;
pub use notify::{BrowserNotifier, NOTIFY_EVENT};
pub use surface::{ChangeCallback, DRAG_OVER_CLASS, EditorSurface, ImagePlacement};
