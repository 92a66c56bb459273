//! Command execution.
//!
//! [`CommandExecutor`] validates an [`EditorCommand`], generates any markup
//! it inserts, and hands a single native call to the [`CommandPlatform`].
//! Rejected commands never reach the platform, and platform failures are
//! logged rather than propagated.

use crate::actions::EditorCommand;
use crate::clipboard::{CopyRegistry, new_code_block_id};
use crate::color::is_css_color;
use crate::config::{EditorConfig, Messages};
use crate::error::CommandError;
use crate::markup::{
    create_code_block, create_table, image_markup, parse_table_dimensions,
    resizable_image_markup, youtube_embed,
};
use crate::platform::{CommandPlatform, Notifier};
use crate::validate::{extract_youtube_id, validate_url};

/// A validated native command, ready for the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeCall {
    pub name: String,
    pub value: String,
    /// Code block inserted by this call, registered once the call succeeds.
    pub code_block: Option<String>,
}

impl NativeCall {
    fn new(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
            code_block: None,
        }
    }

    fn insert_html(html: String) -> Self {
        Self::new("insertHTML", html)
    }
}

/// Applies editor commands to the selection of one editor instance.
pub struct CommandExecutor {
    copy_registry: CopyRegistry,
    code_placeholder: String,
    max_table_size: usize,
    messages: Messages,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

impl CommandExecutor {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            copy_registry: CopyRegistry::new(),
            code_placeholder: config.code_placeholder.clone(),
            max_table_size: config.max_table_size,
            messages: config.messages.clone(),
        }
    }

    /// Code blocks inserted by (or committed into) this editor.
    pub fn copy_registry(&self) -> &CopyRegistry {
        &self.copy_registry
    }

    pub fn copy_registry_mut(&mut self) -> &mut CopyRegistry {
        &mut self.copy_registry
    }

    /// Validate a command and build the native call for it.
    pub fn prepare(&self, command: &EditorCommand) -> Result<NativeCall, CommandError> {
        let call = match command {
            EditorCommand::Bold
            | EditorCommand::Italic
            | EditorCommand::Underline
            | EditorCommand::Strikethrough
            | EditorCommand::UnorderedList
            | EditorCommand::OrderedList
            | EditorCommand::Justify(_) => NativeCall::new(command.name(), ""),
            EditorCommand::FormatBlock(format) => NativeCall::new("formatBlock", format.tag()),
            EditorCommand::ForeColor(color) => {
                if !is_css_color(color) {
                    return Err(CommandError::InvalidColor(color.to_string()));
                }
                NativeCall::new("foreColor", color.as_str())
            }
            EditorCommand::HiliteColor(color) => {
                if color != "transparent" && !is_css_color(color) {
                    return Err(CommandError::InvalidColor(color.to_string()));
                }
                NativeCall::new("hiliteColor", color.as_str())
            }
            EditorCommand::RemoveBackground => NativeCall::new("hiliteColor", "transparent"),
            EditorCommand::CreateLink(url) => {
                let url = validate_url(url.trim())
                    .ok_or_else(|| CommandError::InvalidUrl(url.clone()))?;
                NativeCall::new("createLink", url)
            }
            EditorCommand::InsertHtml(html) => NativeCall::insert_html(html.clone()),
            EditorCommand::InsertTable { rows, cols } => {
                let (r, c) = parse_table_dimensions(rows, cols, self.max_table_size)
                    .ok_or_else(|| CommandError::InvalidTableSize {
                        rows: rows.clone(),
                        cols: cols.clone(),
                    })?;
                NativeCall::insert_html(create_table(r, c))
            }
            EditorCommand::InsertCodeBlock { language } => {
                let id = new_code_block_id();
                let html = create_code_block(
                    &id,
                    language.trim(),
                    &self.code_placeholder,
                    &self.messages.code_label,
                    &self.messages.copy_label,
                );
                NativeCall {
                    code_block: Some(id),
                    ..NativeCall::insert_html(html)
                }
            }
            EditorCommand::InsertYouTube(url) => {
                let id = extract_youtube_id(url)
                    .ok_or_else(|| CommandError::InvalidVideoUrl(url.clone()))?;
                NativeCall::insert_html(youtube_embed(&id))
            }
            EditorCommand::InsertImage { url, alt } => {
                NativeCall::insert_html(image_markup(url, alt))
            }
            EditorCommand::InsertResizableImage { url, alt } => {
                NativeCall::insert_html(resizable_image_markup(url, alt))
            }
            EditorCommand::Native { name, value } => NativeCall::new(name, value.as_str()),
        };
        Ok(call)
    }

    /// Execute a command, reporting why it failed.
    ///
    /// `Ok(false)` means the platform declined the command.
    pub fn try_execute<P: CommandPlatform + ?Sized>(
        &mut self,
        platform: &P,
        command: &EditorCommand,
    ) -> Result<bool, CommandError> {
        let call = self.prepare(command)?;
        let applied = platform.exec_command(&call.name, &call.value)?;
        if applied {
            if let Some(id) = call.code_block {
                self.copy_registry.register(id);
            }
        } else {
            tracing::debug!(command = %call.name, "platform declined command");
        }
        Ok(applied)
    }

    /// Execute a command. Returns true if the document was changed.
    ///
    /// Failures are logged; an unusable YouTube URL also alerts the user.
    pub fn execute<P, N>(&mut self, platform: &P, notifier: &N, command: &EditorCommand) -> bool
    where
        P: CommandPlatform + ?Sized,
        N: Notifier + ?Sized,
    {
        match self.try_execute(platform, command) {
            Ok(applied) => applied,
            Err(CommandError::Platform(e)) => {
                tracing::error!(command = command.name(), error = %e, "native command failed");
                if matches!(command, EditorCommand::InsertYouTube(_)) {
                    notifier.alert(&self.messages.video_insert_failed);
                }
                false
            }
            Err(e @ CommandError::InvalidVideoUrl(_)) => {
                tracing::warn!(error = %e, "rejected command");
                notifier.alert(&self.messages.invalid_video_url);
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "rejected command");
                false
            }
        }
    }

    /// Execute a command given as an `execCommand`-style name and value.
    pub fn execute_named<P, N>(&mut self, platform: &P, notifier: &N, name: &str, value: &str) -> bool
    where
        P: CommandPlatform + ?Sized,
        N: Notifier + ?Sized,
    {
        self.execute(platform, notifier, &EditorCommand::from_name(name, value))
    }
}
