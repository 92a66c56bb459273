//! Native command execution through `document.execCommand`.

use richesse_editor_core::{CommandPlatform, PlatformError};
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// Runs commands against the current selection of the page.
#[derive(Debug, Clone)]
pub struct BrowserCommands {
    document: HtmlDocument,
}

impl BrowserCommands {
    pub fn new() -> Result<Self, PlatformError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("no document")?
            .dyn_into::<HtmlDocument>()
            .map_err(|_| "document is not an HTML document")?;
        Ok(Self { document })
    }
}

impl CommandPlatform for BrowserCommands {
    fn exec_command(&self, name: &str, value: &str) -> Result<bool, PlatformError> {
        tracing::debug!(command = name, "execCommand");
        self.document
            .exec_command_with_show_ui_and_value(name, false, value)
            .map_err(|e| PlatformError(format!("{e:?}")))
    }
}
