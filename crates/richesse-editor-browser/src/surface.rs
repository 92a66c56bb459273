//! `EditorSurface`: one mounted editor.
//!
//! Wires the editable element, the document-level resize listeners, drag
//! and drop uploads and copy buttons to the core state. Every path that
//! changes the content funnels into [`EditorSurface::handle_editor_change`].
//!
//! State lives in an `Rc<RefCell<_>>`. `execCommand` dispatches `input`
//! synchronously, so listeners can fire while a borrow is held; such nested
//! events are dropped and the outer call commits instead.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Timeout;
use richesse_editor_core::{
    Attachment, ClipboardPlatform, CommandExecutor, CopyFeedback, EditorCommand, EditorConfig,
    EditorState, ImageResizeController, NoticeLevel, Notifier, PlatformError, ToolbarMenu,
    ToolbarMenuState, UploadError, UploadTracker,
};
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, File, HtmlElement, HtmlImageElement, MouseEvent};
use web_time::Instant;

use crate::clipboard::{BrowserClipboard, CopyClick};
use crate::commands::BrowserCommands;
use crate::content::BrowserContentView;
use crate::notify::BrowserNotifier;
use crate::resize::{HandleGrab, apply_size};
use crate::upload::{files_of, partition_images, upload_image};

/// CSS class set on the editor while files are dragged over it.
pub const DRAG_OVER_CLASS: &str = "drag-over";

/// Called with the sanitized content after every commit.
pub type ChangeCallback = Box<dyn FnMut(&str)>;

/// How uploaded images are inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImagePlacement {
    /// Wrapped with a resize handle, alt text is the file name.
    Resizable,
    /// Plain image with the configured alt text.
    Inline,
}

struct SurfaceInner {
    config: EditorConfig,
    view: BrowserContentView,
    state: EditorState,
    executor: CommandExecutor,
    commands: BrowserCommands,
    notifier: BrowserNotifier,
    resize: ImageResizeController<HtmlImageElement>,
    menus: ToolbarMenuState,
    feedback: CopyFeedback,
    on_change: Option<ChangeCallback>,
}

struct Shared {
    element: HtmlElement,
    inner: RefCell<SurfaceInner>,
    uploads: UploadTracker,
}

/// A mounted editor. Dropping it (or calling [`unmount`](Self::unmount))
/// removes every listener it registered.
pub struct EditorSurface {
    shared: Rc<Shared>,
    _listeners: Vec<EventListener>,
}

impl EditorSurface {
    /// Mount an editor on `element` with `initial` content.
    pub fn mount(
        element: HtmlElement,
        initial: &str,
        config: EditorConfig,
    ) -> Result<Self, PlatformError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("no document")?;

        let mut view = BrowserContentView::new(element.clone());
        view.make_editable();
        let state = EditorState::new(initial, &config);
        state.seed(&mut view);

        let mut executor = CommandExecutor::new(&config);
        executor.copy_registry_mut().scan(state.content());

        let inner = SurfaceInner {
            view,
            executor,
            commands: BrowserCommands::new()?,
            notifier: BrowserNotifier::new(element.clone()),
            resize: ImageResizeController::new(config.min_image_size),
            menus: ToolbarMenuState::default(),
            feedback: CopyFeedback::new(config.copy_feedback_ms),
            on_change: None,
            state,
            config,
        };
        let shared = Rc::new(Shared {
            element: element.clone(),
            inner: RefCell::new(inner),
            uploads: UploadTracker::new(),
        });

        let listeners = register_listeners(&shared, &element, &document);
        tracing::debug!(listeners = listeners.len(), "editor mounted");

        Ok(Self {
            shared,
            _listeners: listeners,
        })
    }

    /// Remove listeners and release the editor state.
    pub fn unmount(self) {
        if let Ok(mut inner) = self.shared.inner.try_borrow_mut() {
            inner.resize.cancel();
        }
        tracing::debug!("editor unmounted");
    }

    pub fn element(&self) -> &HtmlElement {
        &self.shared.element
    }

    pub fn set_on_change(&self, callback: impl FnMut(&str) + 'static) {
        match self.shared.inner.try_borrow_mut() {
            Ok(mut inner) => inner.on_change = Some(Box::new(callback)),
            Err(_) => tracing::warn!("editor busy, change callback not set"),
        }
    }

    /// Commit the live content and notify the owning form.
    pub fn handle_editor_change(&self) -> Option<String> {
        self.shared.handle_editor_change()
    }

    /// Last committed content.
    pub fn content(&self) -> String {
        self.shared
            .inner
            .try_borrow()
            .map(|inner| inner.state.content().to_string())
            .unwrap_or_default()
    }

    pub fn execute(&self, command: &EditorCommand) -> bool {
        self.shared.execute(command)
    }

    pub fn execute_named(&self, name: &str, value: &str) -> bool {
        self.shared.execute(&EditorCommand::from_name(name, value))
    }

    pub fn undo(&self) -> bool {
        self.shared.step_history(true)
    }

    pub fn redo(&self) -> bool {
        self.shared.step_history(false)
    }

    pub fn can_undo(&self) -> bool {
        self.shared.read(|inner| inner.state.can_undo())
    }

    pub fn can_redo(&self) -> bool {
        self.shared.read(|inner| inner.state.can_redo())
    }

    pub fn toggle_menu(&self, menu: ToolbarMenu) -> bool {
        match self.shared.inner.try_borrow_mut() {
            Ok(mut inner) => inner.menus.toggle(menu),
            Err(_) => false,
        }
    }

    pub fn is_menu_open(&self, menu: ToolbarMenu) -> bool {
        self.shared.read(|inner| inner.menus.is_open(menu))
    }

    pub fn menus(&self) -> ToolbarMenuState {
        self.shared.read(|inner| inner.menus)
    }

    /// Apply a color from a color menu and close that menu.
    pub fn apply_color(&self, menu: ToolbarMenu, color: &str) -> bool {
        let command = match menu {
            ToolbarMenu::TextColor => EditorCommand::ForeColor(color.into()),
            ToolbarMenu::BackgroundColor if color == "transparent" => {
                EditorCommand::RemoveBackground
            }
            ToolbarMenu::BackgroundColor => EditorCommand::HiliteColor(color.into()),
            ToolbarMenu::ImageDropzone => return false,
        };
        let applied = self.shared.execute(&command);
        if let Ok(mut inner) = self.shared.inner.try_borrow_mut() {
            inner.menus.close(menu);
        }
        applied
    }

    pub fn is_uploading(&self) -> bool {
        self.shared.uploads.is_uploading()
    }

    /// Upload files and insert them at the caret, committing once when the
    /// batch is done.
    ///
    /// The returned future doesn't borrow the surface; if the surface is
    /// unmounted meanwhile, the upload still completes.
    pub fn upload_files(
        &self,
        files: Vec<File>,
        placement: ImagePlacement,
    ) -> impl Future<Output = Result<Vec<Attachment>, UploadError>> + 'static {
        self.shared.clone().upload_files(files, placement)
    }
}

impl Shared {
    fn read<T>(&self, f: impl FnOnce(&SurfaceInner) -> T) -> T
    where
        T: Default,
    {
        self.inner.try_borrow().map(|inner| f(&inner)).unwrap_or_default()
    }

    fn handle_editor_change(&self) -> Option<String> {
        let Ok(mut inner) = self.inner.try_borrow_mut() else {
            // The nested `input` fired by execCommand; the outer call commits.
            tracing::debug!("change event while editor busy, dropped");
            return None;
        };
        let SurfaceInner {
            state,
            view,
            executor,
            ..
        } = &mut *inner;
        let content = state.handle_change(view).to_string();
        executor.copy_registry_mut().scan(&content);
        drop(inner);

        self.emit_change(&content);
        Some(content)
    }

    /// Run the owning form's callback outside of any borrow.
    fn emit_change(&self, content: &str) {
        let callback = match self.inner.try_borrow_mut() {
            Ok(mut inner) => inner.on_change.take(),
            Err(_) => None,
        };
        let Some(mut callback) = callback else {
            return;
        };
        callback(content);
        if let Ok(mut inner) = self.inner.try_borrow_mut() {
            inner.on_change.get_or_insert(callback);
        }
    }

    fn execute(&self, command: &EditorCommand) -> bool {
        let applied = {
            let Ok(mut inner) = self.inner.try_borrow_mut() else {
                tracing::warn!(command = command.name(), "editor busy, command dropped");
                return false;
            };
            let SurfaceInner {
                executor,
                commands,
                notifier,
                ..
            } = &mut *inner;
            executor.execute(commands, notifier, command)
        };
        if applied {
            self.handle_editor_change();
        }
        applied
    }

    fn step_history(&self, back: bool) -> bool {
        let content = {
            let Ok(mut inner) = self.inner.try_borrow_mut() else {
                tracing::warn!("editor busy, history step dropped");
                return false;
            };
            let SurfaceInner {
                state,
                view,
                executor,
                ..
            } = &mut *inner;
            let moved = if back {
                state.undo(view)
            } else {
                state.redo(view)
            };
            if !moved {
                return false;
            }
            executor.copy_registry_mut().scan(state.content());
            state.content().to_string()
        };
        self.emit_change(&content);
        true
    }

    fn notify(&self, level: NoticeLevel, message: impl FnOnce(&EditorConfig) -> String) {
        if let Ok(inner) = self.inner.try_borrow() {
            inner.notifier.notify(level, &message(&inner.config));
        }
    }

    async fn upload_files(
        self: Rc<Self>,
        files: Vec<File>,
        placement: ImagePlacement,
    ) -> Result<Vec<Attachment>, UploadError> {
        let result = self.upload_batch(files, placement).await;
        match &result {
            Ok(attachments) if attachments.is_empty() => {}
            Ok(_) => self.notify(NoticeLevel::Success, |c| c.messages.upload_succeeded.clone()),
            Err(UploadError::Busy) => tracing::warn!("upload already in progress"),
            Err(e) => {
                tracing::error!(error = %e, "image upload failed");
                self.notify(NoticeLevel::Error, |c| c.messages.upload_failed.clone());
            }
        }
        result
    }

    async fn upload_batch(
        &self,
        files: Vec<File>,
        placement: ImagePlacement,
    ) -> Result<Vec<Attachment>, UploadError> {
        let _ticket = self.uploads.begin()?;
        let (endpoint, inline_alt) = {
            let inner = self.inner.try_borrow().map_err(|_| UploadError::Busy)?;
            (
                inner.config.upload_endpoint.clone(),
                inner.config.messages.uploaded_image_alt.clone(),
            )
        };

        let mut attachments = Vec::with_capacity(files.len());
        for file in &files {
            let attachment = upload_image(&endpoint, file).await?;
            let command = match placement {
                ImagePlacement::Resizable => attachment.resizable_command(),
                ImagePlacement::Inline => attachment.inline_command(&inline_alt),
            };
            self.insert_without_commit(&command);
            attachments.push(attachment);
        }

        if !attachments.is_empty() {
            if let Ok(mut inner) = self.inner.try_borrow_mut() {
                inner.menus.close(ToolbarMenu::ImageDropzone);
            }
            self.handle_editor_change();
        }
        Ok(attachments)
    }

    fn insert_without_commit(&self, command: &EditorCommand) {
        match self.inner.try_borrow_mut() {
            Ok(mut inner) => {
                let SurfaceInner {
                    executor,
                    commands,
                    notifier,
                    ..
                } = &mut *inner;
                executor.execute(commands, notifier, command);
            }
            Err(_) => tracing::warn!("editor busy, uploaded image not inserted"),
        }
    }

    // === Event handlers ===

    fn on_drag_over(&self, evt: &Event) {
        evt.prevent_default();
        evt.stop_propagation();
        if let Err(e) = self.element.class_list().add_1(DRAG_OVER_CLASS) {
            tracing::debug!("Failed to add drag class: {:?}", e);
        }
    }

    fn on_drag_leave(&self, evt: &Event) {
        evt.prevent_default();
        evt.stop_propagation();
        if let Err(e) = self.element.class_list().remove_1(DRAG_OVER_CLASS) {
            tracing::debug!("Failed to remove drag class: {:?}", e);
        }
    }

    fn on_drop(self: Rc<Self>, evt: &Event) {
        self.on_drag_leave(evt);

        let Some(files) = evt
            .dyn_ref::<DragEvent>()
            .and_then(|e| e.data_transfer())
            .and_then(|dt| dt.files())
            .map(|list| files_of(&list))
        else {
            return;
        };
        if files.is_empty() {
            return;
        }

        let (images, rejected) = partition_images(files);
        if !rejected.is_empty() {
            tracing::debug!(rejected = rejected.len(), "non-image files dropped");
        }
        if images.is_empty() {
            self.notify(NoticeLevel::Error, |c| c.messages.images_only.clone());
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            let _ = self.upload_files(images, ImagePlacement::Resizable).await;
        });
    }

    fn on_click(self: Rc<Self>, evt: &Event) {
        let Some(click) = CopyClick::from_event(evt) else {
            return;
        };
        evt.prevent_default();

        let (code, copied_label, copy_label, delay) = {
            let Ok(mut inner) = self.inner.try_borrow_mut() else {
                return;
            };
            if !inner.executor.copy_registry().contains(&click.target) {
                tracing::debug!(block = %click.target, "copy button for unknown block");
                return;
            }
            let Some(code) = click.code(&self.element) else {
                return;
            };
            inner.feedback.start(&click.target, Instant::now());
            (
                code,
                inner.config.messages.copied_label.clone(),
                inner.config.messages.copy_label.clone(),
                inner.config.copy_feedback_ms,
            )
        };

        BrowserClipboard.write_text(&code);
        click.set_label(&copied_label);

        let shared = Rc::downgrade(&self);
        Timeout::new(delay, move || {
            let Some(shared) = shared.upgrade() else {
                return;
            };
            let restore = match shared.inner.try_borrow_mut() {
                Ok(mut inner) => inner.feedback.expire(&click.target, Instant::now()),
                Err(_) => true,
            };
            if restore {
                click.set_label(&copy_label);
            }
        })
        .forget();
    }

    fn on_mouse_down(&self, evt: &MouseEvent) {
        let Some(grab) = HandleGrab::from_event(evt, &self.element) else {
            return;
        };
        let Ok(mut inner) = self.inner.try_borrow_mut() else {
            return;
        };
        if inner
            .resize
            .pointer_down(grab.image, grab.x, grab.y, grab.width, grab.height)
        {
            evt.prevent_default();
        }
    }

    fn on_mouse_move(&self, evt: &MouseEvent) {
        let Ok(mut inner) = self.inner.try_borrow_mut() else {
            return;
        };
        if let Some(size) = inner.resize.pointer_move(evt.client_x(), evt.client_y()) {
            if let Some(image) = inner.resize.image() {
                apply_size(image, size);
            }
        }
    }

    fn on_mouse_up(&self) {
        let outcome = match self.inner.try_borrow_mut() {
            Ok(mut inner) => inner.resize.pointer_up(),
            Err(_) => return,
        };
        if let Some(outcome) = outcome {
            tracing::debug!(
                width = outcome.size.width,
                height = outcome.size.height,
                "image resized"
            );
            self.handle_editor_change();
        }
    }
}

fn register_listeners(
    shared: &Rc<Shared>,
    element: &HtmlElement,
    document: &web_sys::Document,
) -> Vec<EventListener> {
    let mut listeners = Vec::new();

    for event in ["input", "blur"] {
        let weak = Rc::downgrade(shared);
        listeners.push(EventListener::new(element, event, move |_| {
            if let Some(shared) = weak.upgrade() {
                shared.handle_editor_change();
            }
        }));
    }

    let active = EventListenerOptions::enable_prevent_default();

    let weak = Rc::downgrade(shared);
    listeners.push(EventListener::new_with_options(
        element,
        "dragover",
        active,
        move |evt| with_shared(&weak, |s| s.on_drag_over(evt)),
    ));

    let weak = Rc::downgrade(shared);
    listeners.push(EventListener::new_with_options(
        element,
        "dragleave",
        active,
        move |evt| with_shared(&weak, |s| s.on_drag_leave(evt)),
    ));

    let weak = Rc::downgrade(shared);
    listeners.push(EventListener::new_with_options(
        element,
        "drop",
        active,
        move |evt| with_shared(&weak, |s| s.clone().on_drop(evt)),
    ));

    let weak = Rc::downgrade(shared);
    listeners.push(EventListener::new_with_options(
        element,
        "click",
        active,
        move |evt| with_shared(&weak, |s| s.clone().on_click(evt)),
    ));

    // Resizing follows the pointer outside the editor, so these live on the
    // document.
    let weak = Rc::downgrade(shared);
    listeners.push(EventListener::new_with_options(
        document,
        "mousedown",
        active,
        move |evt| {
            if let Some(evt) = evt.dyn_ref::<MouseEvent>() {
                with_shared(&weak, |s| s.on_mouse_down(evt));
            }
        },
    ));

    let weak = Rc::downgrade(shared);
    listeners.push(EventListener::new(document, "mousemove", move |evt| {
        if let Some(evt) = evt.dyn_ref::<MouseEvent>() {
            with_shared(&weak, |s| s.on_mouse_move(evt));
        }
    }));

    let weak = Rc::downgrade(shared);
    listeners.push(EventListener::new(document, "mouseup", move |_| {
        with_shared(&weak, |s| s.on_mouse_up());
    }));

    listeners
}

fn with_shared(weak: &Weak<Shared>, f: impl FnOnce(&Rc<Shared>)) {
    if let Some(shared) = weak.upgrade() {
        f(&shared);
    }
}
