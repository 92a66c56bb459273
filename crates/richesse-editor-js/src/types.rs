//! Types exposed to JavaScript via wasm-bindgen.

use richesse_editor_core::{Attachment, ToolbarMenu};
use serde::{Deserialize, Serialize};
use tsify_next::Tsify;
use wasm_bindgen::prelude::*;

/// Toolbar popover.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub enum JsToolbarMenu {
    TextColor,
    BackgroundColor,
    ImageDropzone,
}

impl From<JsToolbarMenu> for ToolbarMenu {
    fn from(menu: JsToolbarMenu) -> Self {
        match menu {
            JsToolbarMenu::TextColor => Self::TextColor,
            JsToolbarMenu::BackgroundColor => Self::BackgroundColor,
            JsToolbarMenu::ImageDropzone => Self::ImageDropzone,
        }
    }
}

/// An uploaded image.
#[derive(Debug, Clone, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct JsAttachment {
    pub name: String,
    pub url: String,
}

impl From<Attachment> for JsAttachment {
    fn from(attachment: Attachment) -> Self {
        Self {
            name: attachment.name,
            url: attachment.url,
        }
    }
}

/// Open state of the toolbar popovers.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct JsMenuState {
    pub text_color: bool,
    pub background_color: bool,
    pub image_dropzone: bool,
}
