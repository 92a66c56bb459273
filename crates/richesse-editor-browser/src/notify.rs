//! User-facing notifications.
//!
//! Alerts use `window.alert`. Toasts are left to the host page: the editor
//! dispatches a bubbling [`NOTIFY_EVENT`] on its element with
//! `{ level, message }` as the event detail.

use js_sys::{Object, Reflect};
use richesse_editor_core::{NoticeLevel, Notifier};
use wasm_bindgen::JsValue;
use web_sys::{CustomEvent, CustomEventInit, HtmlElement};

/// Name of the event carrying toast notifications.
pub const NOTIFY_EVENT: &str = "richesse-notify";

#[derive(Debug, Clone)]
pub struct BrowserNotifier {
    target: HtmlElement,
}

impl BrowserNotifier {
    pub fn new(target: HtmlElement) -> Self {
        Self { target }
    }

    fn dispatch(&self, level: NoticeLevel, message: &str) -> Result<(), JsValue> {
        let detail = Object::new();
        let level = match level {
            NoticeLevel::Success => "success",
            NoticeLevel::Error => "error",
        };
        Reflect::set(&detail, &"level".into(), &level.into())?;
        Reflect::set(&detail, &"message".into(), &message.into())?;

        let init = CustomEventInit::new();
        init.set_bubbles(true);
        init.set_detail(&detail);
        let event = CustomEvent::new_with_event_init_dict(NOTIFY_EVENT, &init)?;
        self.target.dispatch_event(&event)?;
        Ok(())
    }
}

impl Notifier for BrowserNotifier {
    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            tracing::warn!(alert = message, "no window for alert");
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            tracing::warn!("alert failed: {:?}", e);
        }
    }

    fn notify(&self, level: NoticeLevel, message: &str) {
        match level {
            NoticeLevel::Success => tracing::info!(notice = message, "notification"),
            NoticeLevel::Error => tracing::error!(notice = message, "notification"),
        }
        if let Err(e) = self.dispatch(level, message) {
            tracing::warn!("notification dispatch failed: {:?}", e);
        }
    }
}
