//! Browser clipboard implementation and code block copy buttons.
//!
//! Implements `ClipboardPlatform` with the async Clipboard API. Copy buttons
//! inside code blocks are resolved here: the click target is walked up to
//! the button, and its `data-target` names the block whose code is copied.

use richesse_editor_core::ClipboardPlatform;
use richesse_editor_core::markup::{CODE_BLOCK_CONTENT_CLASS, COPY_BUTTON_CLASS};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, HtmlElement};

/// Clipboard writes through `navigator.clipboard`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClipboard;

impl ClipboardPlatform for BrowserClipboard {
    fn write_text(&self, text: &str) {
        let text = text.to_string();
        wasm_bindgen_futures::spawn_local(async move {
            match write_text_to_clipboard(&text).await {
                Ok(()) => tracing::debug!("Wrote {} bytes to clipboard", text.len()),
                Err(e) => tracing::error!("Clipboard write failed: {:?}", e),
            }
        });
    }
}

/// Write plain text using the async Clipboard API.
pub async fn write_text_to_clipboard(text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let promise = window.navigator().clipboard().write_text(text);
    wasm_bindgen_futures::JsFuture::from(promise).await?;
    Ok(())
}

/// A click on a code block's copy button.
#[derive(Debug, Clone)]
pub struct CopyClick {
    pub button: Element,
    /// Id of the code block, from `data-target`.
    pub target: String,
}

impl CopyClick {
    /// Resolve a click event to a copy button, if it hit one.
    pub fn from_event(evt: &Event) -> Option<Self> {
        let element = evt.target()?.dyn_into::<Element>().ok()?;
        let button = element
            .closest(&format!(".{COPY_BUTTON_CLASS}"))
            .ok()
            .flatten()?;
        let target = button.get_attribute("data-target")?;
        Some(Self { button, target })
    }

    /// Code of the target block, looked up inside `editor` only.
    pub fn code(&self, editor: &HtmlElement) -> Option<String> {
        let selector = format!("#{} .{CODE_BLOCK_CONTENT_CLASS}", self.target);
        editor
            .query_selector(&selector)
            .ok()
            .flatten()
            .and_then(|content| content.text_content())
    }

    /// Replace the text of the button's label span.
    pub fn set_label(&self, label: &str) {
        match self.button.query_selector("span") {
            Ok(Some(span)) => span.set_text_content(Some(label)),
            _ => tracing::debug!(block = %self.target, "copy button has no label"),
        }
    }
}
