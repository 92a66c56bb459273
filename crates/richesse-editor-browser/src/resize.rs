//! DOM side of image resizing.

use richesse_editor_core::ImageSize;
use richesse_editor_core::markup::RESIZE_HANDLE_CLASS;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlImageElement, MouseEvent};

/// Pointer-down on a resize handle inside the editor.
#[derive(Debug, Clone)]
pub struct HandleGrab {
    pub image: HtmlImageElement,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl HandleGrab {
    /// Resolve a `mousedown` to the image next to the handle it hit.
    ///
    /// Handles outside `editor` are ignored, so several editors can share a
    /// page.
    pub fn from_event(evt: &MouseEvent, editor: &HtmlElement) -> Option<Self> {
        let handle = evt.target()?.dyn_into::<Element>().ok()?;
        if !handle.class_list().contains(RESIZE_HANDLE_CLASS) || !editor.contains(Some(&*handle)) {
            return None;
        }

        let image = handle
            .parent_element()?
            .query_selector("img")
            .ok()
            .flatten()?
            .dyn_into::<HtmlImageElement>()
            .ok()?;

        Some(Self {
            x: evt.client_x(),
            y: evt.client_y(),
            width: image.client_width(),
            height: image.client_height(),
            image,
        })
    }
}

/// Set the image's inline width and height.
pub fn apply_size(image: &HtmlImageElement, size: ImageSize) {
    let style = image.style();
    let result = style
        .set_property("width", &format!("{}px", size.width))
        .and_then(|()| style.set_property("height", &format!("{}px", size.height)));
    if let Err(e) = result {
        tracing::warn!("Failed to resize image: {:?}", e);
    }
}
