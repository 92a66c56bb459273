//! Editor commands.
//!
//! Platform-agnostic definitions of what the toolbar can ask the editor to
//! do. `EditorCommand` is the typed form; hosts that only have a command name
//! and a value string (as `document.execCommand` does) go through
//! [`EditorCommand::from_name`].

use smol_str::SmolStr;

/// Block formats offered by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockFormat {
    /// `<h2>`
    Heading,
    /// `<blockquote>`
    Quote,
    /// `<pre>`
    Preformatted,
}

impl BlockFormat {
    /// Value passed to the native `formatBlock` command.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Heading => "h2",
            Self::Quote => "blockquote",
            Self::Preformatted => "pre",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim().trim_start_matches('<').trim_end_matches('>');
        match tag.to_ascii_lowercase().as_str() {
            "h2" => Some(Self::Heading),
            "blockquote" => Some(Self::Quote),
            "pre" => Some(Self::Preformatted),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    pub fn command_name(self) -> &'static str {
        match self {
            Self::Left => "justifyLeft",
            Self::Center => "justifyCenter",
            Self::Right => "justifyRight",
        }
    }
}

/// All commands the editor understands.
///
/// Anything else is carried as [`EditorCommand::Native`] and handed to the
/// platform unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorCommand {
    // === Inline formatting ===
    Bold,
    Italic,
    Underline,
    Strikethrough,

    // === Blocks ===
    UnorderedList,
    OrderedList,
    FormatBlock(BlockFormat),
    Justify(Alignment),

    // === Colors ===
    /// Text color. Must be a hex, `rgb()` or `rgba()` color.
    ForeColor(SmolStr),
    /// Highlight color. Also accepts `transparent`.
    HiliteColor(SmolStr),
    /// Clear the highlight color.
    RemoveBackground,

    // === Insertion ===
    /// Wrap the selection in a link. The URL is validated first.
    CreateLink(String),
    /// Insert raw HTML at the caret. Sanitized on the next commit.
    InsertHtml(String),
    /// Insert a `rows` x `cols` table, both as typed by the user.
    InsertTable { rows: String, cols: String },
    /// Insert a copyable code block.
    InsertCodeBlock { language: String },
    /// Insert a YouTube player from a watch or short URL.
    InsertYouTube(String),
    /// Insert an uploaded image.
    InsertImage { url: String, alt: String },
    /// Insert an uploaded image wrapped with a resize handle.
    InsertResizableImage { url: String, alt: String },

    /// Any other native command, passed through.
    Native { name: SmolStr, value: String },
}

impl EditorCommand {
    /// Build a command from an `execCommand`-style name and value.
    ///
    /// Table sizes are given as `"rows,cols"` or `"rowsxcols"`.
    pub fn from_name(name: &str, value: &str) -> Self {
        match name {
            "bold" => Self::Bold,
            "italic" => Self::Italic,
            "underline" => Self::Underline,
            "strikeThrough" => Self::Strikethrough,
            "insertUnorderedList" => Self::UnorderedList,
            "insertOrderedList" => Self::OrderedList,
            "formatBlock" => match BlockFormat::from_tag(value) {
                Some(format) => Self::FormatBlock(format),
                None => Self::native(name, value),
            },
            "justifyLeft" => Self::Justify(Alignment::Left),
            "justifyCenter" => Self::Justify(Alignment::Center),
            "justifyRight" => Self::Justify(Alignment::Right),
            "foreColor" => Self::ForeColor(value.into()),
            "hiliteColor" | "backColor" if value == "transparent" => Self::RemoveBackground,
            "hiliteColor" | "backColor" => Self::HiliteColor(value.into()),
            "removeBackground" => Self::RemoveBackground,
            "createLink" => Self::CreateLink(value.to_string()),
            "insertHTML" => Self::InsertHtml(value.to_string()),
            "insertTable" => {
                let (rows, cols) = value
                    .split_once([',', 'x', 'X'])
                    .unwrap_or((value, ""));
                Self::InsertTable {
                    rows: rows.to_string(),
                    cols: cols.to_string(),
                }
            }
            "insertCodeBlock" => Self::InsertCodeBlock {
                language: value.to_string(),
            },
            "insertYouTube" => Self::InsertYouTube(value.to_string()),
            "insertImage" => Self::InsertImage {
                url: value.to_string(),
                alt: String::new(),
            },
            _ => Self::native(name, value),
        }
    }

    fn native(name: &str, value: &str) -> Self {
        Self::Native {
            name: name.into(),
            value: value.to_string(),
        }
    }

    /// Name used in diagnostics and for native pass-through.
    pub fn name(&self) -> &str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::Strikethrough => "strikeThrough",
            Self::UnorderedList => "insertUnorderedList",
            Self::OrderedList => "insertOrderedList",
            Self::FormatBlock(_) => "formatBlock",
            Self::Justify(alignment) => alignment.command_name(),
            Self::ForeColor(_) => "foreColor",
            Self::HiliteColor(_) | Self::RemoveBackground => "hiliteColor",
            Self::CreateLink(_) => "createLink",
            Self::InsertHtml(_) => "insertHTML",
            Self::InsertTable { .. } => "insertTable",
            Self::InsertCodeBlock { .. } => "insertCodeBlock",
            Self::InsertYouTube(_) => "insertYouTube",
            Self::InsertImage { .. } | Self::InsertResizableImage { .. } => "insertImage",
            Self::Native { name, .. } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_formatting() {
        assert_eq!(EditorCommand::from_name("bold", ""), EditorCommand::Bold);
        assert_eq!(
            EditorCommand::from_name("strikeThrough", ""),
            EditorCommand::Strikethrough
        );
        assert_eq!(
            EditorCommand::from_name("formatBlock", "<h2>"),
            EditorCommand::FormatBlock(BlockFormat::Heading)
        );
        assert_eq!(
            EditorCommand::from_name("justifyCenter", ""),
            EditorCommand::Justify(Alignment::Center)
        );
    }

    #[test]
    fn test_from_name_colors() {
        assert_eq!(
            EditorCommand::from_name("foreColor", "#ff0000"),
            EditorCommand::ForeColor("#ff0000".into())
        );
        assert_eq!(
            EditorCommand::from_name("hiliteColor", "transparent"),
            EditorCommand::RemoveBackground
        );
    }

    #[test]
    fn test_from_name_table() {
        assert_eq!(
            EditorCommand::from_name("insertTable", "2,3"),
            EditorCommand::InsertTable {
                rows: "2".to_string(),
                cols: "3".to_string()
            }
        );
        assert_eq!(
            EditorCommand::from_name("insertTable", "4x5"),
            EditorCommand::InsertTable {
                rows: "4".to_string(),
                cols: "5".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_names_pass_through() {
        let command = EditorCommand::from_name("insertHorizontalRule", "");
        assert_eq!(
            command,
            EditorCommand::Native {
                name: "insertHorizontalRule".into(),
                value: String::new()
            }
        );
        assert_eq!(command.name(), "insertHorizontalRule");

        // Unsupported block formats too.
        assert!(matches!(
            EditorCommand::from_name("formatBlock", "h5"),
            EditorCommand::Native { .. }
        ));
    }

    #[test]
    fn test_block_format_tags() {
        for format in [
            BlockFormat::Heading,
            BlockFormat::Quote,
            BlockFormat::Preformatted,
        ] {
            assert_eq!(BlockFormat::from_tag(format.tag()), Some(format));
        }
    }
}
