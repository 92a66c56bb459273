//! JsEditor - the main editor wrapper for JavaScript.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileList, HtmlElement};

use richesse_editor_browser::upload::files_of;
use richesse_editor_browser::{EditorSurface, ImagePlacement};
use richesse_editor_core::color::{EDITOR_COLORS, PRESET_COLORS};
use richesse_editor_core::{EditorCommand, EditorConfig};

use crate::actions::{JsEditorCommand, parse_command};
use crate::types::{JsAttachment, JsMenuState, JsToolbarMenu};

/// Class of the contenteditable element created on mount.
const CONTENT_CLASS: &str = "richesse-editor-content";

/// The main editor instance exposed to JavaScript.
///
/// Wraps an `EditorSurface` with WASM bindings for browser use.
#[wasm_bindgen]
pub struct JsEditor {
    config: EditorConfig,
    surface: Option<EditorSurface>,
}

#[wasm_bindgen]
impl JsEditor {
    /// Create an editor. `config` is an optional, possibly partial,
    /// `EditorConfig` object.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<JsEditor, JsError> {
        let config = if config.is_undefined() || config.is_null() {
            EditorConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsError::new(&format!("Invalid config: {}", e)))?
        };
        Ok(Self {
            config,
            surface: None,
        })
    }

    /// The effective configuration, defaults filled in.
    #[wasm_bindgen(js_name = getConfig)]
    pub fn get_config(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.config)
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    // === Mounting ===

    /// Mount the editor into a container element.
    ///
    /// Creates a contenteditable div inside the container, seeded with
    /// `content`. `onChange` receives the sanitized HTML after each commit.
    #[wasm_bindgen]
    pub fn mount(
        &mut self,
        container: &HtmlElement,
        content: &str,
        on_change: Option<js_sys::Function>,
    ) -> Result<(), JsError> {
        if self.surface.is_some() {
            return Err(JsError::new("Editor is already mounted"));
        }

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsError::new("No document"))?;
        let editor_el = document
            .create_element("div")
            .map_err(|e| JsError::new(&format!("Failed to create element: {:?}", e)))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| JsError::new("Created element is not an HtmlElement"))?;
        editor_el.set_class_name(CONTENT_CLASS);
        container
            .append_child(&editor_el)
            .map_err(|e| JsError::new(&format!("Failed to append child: {:?}", e)))?;

        let surface = EditorSurface::mount(editor_el, content, self.config.clone())
            .map_err(|e| JsError::new(&format!("Failed to mount editor: {}", e)))?;

        if let Some(callback) = on_change {
            surface.set_on_change(move |html| {
                if let Err(e) = callback.call1(&JsValue::NULL, &JsValue::from_str(html)) {
                    tracing::error!("onChange callback failed: {:?}", e);
                }
            });
        }

        self.surface = Some(surface);
        Ok(())
    }

    /// Check if the editor is mounted.
    #[wasm_bindgen(js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    /// Unmount the editor, removing its element and listeners.
    #[wasm_bindgen]
    pub fn unmount(&mut self) {
        if let Some(surface) = self.surface.take() {
            surface.element().remove();
            surface.unmount();
        }
    }

    /// Focus the editor.
    #[wasm_bindgen]
    pub fn focus(&self) {
        if let Some(surface) = &self.surface {
            if let Err(e) = surface.element().focus() {
                tracing::debug!("focus failed: {:?}", e);
            }
        }
    }

    // === Content ===

    /// Last committed (sanitized) HTML.
    #[wasm_bindgen(js_name = getContent)]
    pub fn get_content(&self) -> String {
        self.surface
            .as_ref()
            .map(EditorSurface::content)
            .unwrap_or_default()
    }

    /// Commit whatever the editable region currently shows.
    #[wasm_bindgen]
    pub fn commit(&self) -> Option<String> {
        self.surface.as_ref()?.handle_editor_change()
    }

    // === Commands ===

    /// Run an `execCommand`-style command. Returns true if the content changed.
    #[wasm_bindgen]
    pub fn execute(&self, name: &str, value: Option<String>) -> bool {
        let Some(surface) = &self.surface else {
            return false;
        };
        surface.execute_named(name, value.as_deref().unwrap_or_default())
    }

    /// Run a typed command.
    #[wasm_bindgen(js_name = executeCommand)]
    pub fn execute_command(&self, command: JsEditorCommand) -> bool {
        self.run(command.into())
    }

    /// Run a command given as a plain `{ type, ... }` object.
    #[wasm_bindgen(js_name = executeObject)]
    pub fn execute_object(&self, command: JsValue) -> Result<bool, JsError> {
        Ok(self.run(parse_command(command)?.into()))
    }

    /// Insert a table from user-entered sizes.
    #[wasm_bindgen(js_name = insertTable)]
    pub fn insert_table(&self, rows: &str, cols: &str) -> bool {
        self.run(EditorCommand::InsertTable {
            rows: rows.to_string(),
            cols: cols.to_string(),
        })
    }

    #[wasm_bindgen(js_name = insertCodeBlock)]
    pub fn insert_code_block(&self, language: Option<String>) -> bool {
        self.run(EditorCommand::InsertCodeBlock {
            language: language.unwrap_or_default(),
        })
    }

    #[wasm_bindgen(js_name = insertYouTube)]
    pub fn insert_youtube(&self, url: &str) -> bool {
        self.run(EditorCommand::InsertYouTube(url.to_string()))
    }

    #[wasm_bindgen(js_name = createLink)]
    pub fn create_link(&self, url: &str) -> bool {
        self.run(EditorCommand::CreateLink(url.to_string()))
    }

    // === History ===

    #[wasm_bindgen]
    pub fn undo(&self) -> bool {
        self.surface.as_ref().is_some_and(EditorSurface::undo)
    }

    #[wasm_bindgen]
    pub fn redo(&self) -> bool {
        self.surface.as_ref().is_some_and(EditorSurface::redo)
    }

    #[wasm_bindgen(js_name = canUndo)]
    pub fn can_undo(&self) -> bool {
        self.surface.as_ref().is_some_and(EditorSurface::can_undo)
    }

    #[wasm_bindgen(js_name = canRedo)]
    pub fn can_redo(&self) -> bool {
        self.surface.as_ref().is_some_and(EditorSurface::can_redo)
    }

    // === Toolbar menus ===

    /// Toggle a popover. Returns whether it is now open.
    #[wasm_bindgen(js_name = toggleMenu)]
    pub fn toggle_menu(&self, menu: JsToolbarMenu) -> bool {
        self.surface
            .as_ref()
            .is_some_and(|surface| surface.toggle_menu(menu.into()))
    }

    #[wasm_bindgen(js_name = getMenus)]
    pub fn get_menus(&self) -> JsMenuState {
        let Some(surface) = &self.surface else {
            return JsMenuState::default();
        };
        let menus = surface.menus();
        JsMenuState {
            text_color: menus.text_color,
            background_color: menus.background_color,
            image_dropzone: menus.image_dropzone,
        }
    }

    /// Apply a color picked in a color menu and close that menu.
    #[wasm_bindgen(js_name = applyColor)]
    pub fn apply_color(&self, menu: JsToolbarMenu, color: &str) -> bool {
        self.surface
            .as_ref()
            .is_some_and(|surface| surface.apply_color(menu.into(), color))
    }

    // === Uploads ===

    #[wasm_bindgen(js_name = isUploading)]
    pub fn is_uploading(&self) -> bool {
        self.surface.as_ref().is_some_and(EditorSurface::is_uploading)
    }

    /// Upload images from a file input and insert them with resize handles.
    ///
    /// Resolves to the uploaded attachments.
    #[wasm_bindgen(js_name = uploadFiles)]
    pub fn upload_files(&self, files: &FileList) -> Result<js_sys::Promise, JsError> {
        self.upload(files_of(files), ImagePlacement::Resizable)
    }

    /// Upload one image from the toolbar dropzone and insert it inline.
    #[wasm_bindgen(js_name = uploadImage)]
    pub fn upload_image(&self, file: File) -> Result<js_sys::Promise, JsError> {
        self.upload(vec![file], ImagePlacement::Inline)
    }
}

impl JsEditor {
    fn run(&self, command: EditorCommand) -> bool {
        self.surface
            .as_ref()
            .is_some_and(|surface| surface.execute(&command))
    }

    fn upload(
        &self,
        files: Vec<File>,
        placement: ImagePlacement,
    ) -> Result<js_sys::Promise, JsError> {
        let surface = self
            .surface
            .as_ref()
            .ok_or_else(|| JsError::new("Editor is not mounted"))?;
        let task = surface.upload_files(files, placement);

        Ok(wasm_bindgen_futures::future_to_promise(async move {
            let attachments = task
                .await
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
            let attachments: Vec<JsAttachment> =
                attachments.into_iter().map(JsAttachment::from).collect();
            serde_wasm_bindgen::to_value(&attachments).map_err(JsValue::from)
        }))
    }
}

impl Drop for JsEditor {
    fn drop(&mut self) {
        self.unmount();
    }
}

// === Palettes ===

/// Named colors for the toolbar palette.
#[wasm_bindgen(js_name = editorColors)]
pub fn editor_colors() -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(&EDITOR_COLORS)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Preset swatches for the color picker.
#[wasm_bindgen(js_name = presetColors)]
pub fn preset_colors() -> Vec<String> {
    PRESET_COLORS.iter().map(|c| c.to_string()).collect()
}
