//! EditorCommand conversion for JavaScript.

use richesse_editor_core::{Alignment, BlockFormat, EditorCommand};
use serde::{Deserialize, Serialize};
use tsify_next::Tsify;
use wasm_bindgen::prelude::*;

/// JavaScript-friendly editor command.
///
/// Mirrors EditorCommand from core with a `type` tag.
#[derive(Debug, Clone, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum JsEditorCommand {
    // Inline formatting
    Bold,
    Italic,
    Underline,
    StrikeThrough,

    // Blocks
    UnorderedList,
    OrderedList,
    Heading,
    Quote,
    Code,
    AlignLeft,
    AlignCenter,
    AlignRight,

    // Colors
    TextColor { color: String },
    BackgroundColor { color: String },
    RemoveBackground,

    // Insertion
    Link { url: String },
    Html { html: String },
    Table { rows: String, cols: String },
    CodeBlock {
        #[serde(default)]
        language: String,
    },
    YouTube { url: String },
    Image {
        url: String,
        #[serde(default)]
        alt: String,
    },

    // Anything else goes to execCommand as is.
    Native {
        name: String,
        #[serde(default)]
        value: String,
    },
}

impl From<JsEditorCommand> for EditorCommand {
    fn from(command: JsEditorCommand) -> Self {
        match command {
            JsEditorCommand::Bold => Self::Bold,
            JsEditorCommand::Italic => Self::Italic,
            JsEditorCommand::Underline => Self::Underline,
            JsEditorCommand::StrikeThrough => Self::Strikethrough,
            JsEditorCommand::UnorderedList => Self::UnorderedList,
            JsEditorCommand::OrderedList => Self::OrderedList,
            JsEditorCommand::Heading => Self::FormatBlock(BlockFormat::Heading),
            JsEditorCommand::Quote => Self::FormatBlock(BlockFormat::Quote),
            JsEditorCommand::Code => Self::FormatBlock(BlockFormat::Preformatted),
            JsEditorCommand::AlignLeft => Self::Justify(Alignment::Left),
            JsEditorCommand::AlignCenter => Self::Justify(Alignment::Center),
            JsEditorCommand::AlignRight => Self::Justify(Alignment::Right),
            JsEditorCommand::TextColor { color } => Self::ForeColor(color.into()),
            JsEditorCommand::BackgroundColor { color } => Self::HiliteColor(color.into()),
            JsEditorCommand::RemoveBackground => Self::RemoveBackground,
            JsEditorCommand::Link { url } => Self::CreateLink(url),
            JsEditorCommand::Html { html } => Self::InsertHtml(html),
            JsEditorCommand::Table { rows, cols } => Self::InsertTable { rows, cols },
            JsEditorCommand::CodeBlock { language } => Self::InsertCodeBlock { language },
            JsEditorCommand::YouTube { url } => Self::InsertYouTube(url),
            JsEditorCommand::Image { url, alt } => Self::InsertImage { url, alt },
            JsEditorCommand::Native { name, value } => Self::Native {
                name: name.into(),
                value,
            },
        }
    }
}

/// Parse a command from a plain JS object.
pub fn parse_command(value: JsValue) -> Result<JsEditorCommand, JsError> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsError::new(&format!("Invalid command: {}", e)))
}
