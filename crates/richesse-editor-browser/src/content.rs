//! The editable region as a [`ContentView`].

use richesse_editor_core::ContentView;
use web_sys::HtmlElement;

/// Reads and writes the `innerHTML` of the contenteditable element.
#[derive(Debug, Clone)]
pub struct BrowserContentView {
    element: HtmlElement,
}

impl BrowserContentView {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }

    /// Make the element editable if the host didn't.
    pub fn make_editable(&self) {
        if !self.element.is_content_editable() {
            self.element.set_content_editable("true");
        }
    }
}

impl ContentView for BrowserContentView {
    fn html(&self) -> String {
        self.element.inner_html()
    }

    fn set_html(&mut self, html: &str) {
        self.element.set_inner_html(html);
    }
}
