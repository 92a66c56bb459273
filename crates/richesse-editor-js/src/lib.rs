//! WASM bindings for the richesse rich-text editor.
//!
//! Provides an embeddable `JsEditor` for JavaScript/TypeScript apps. The
//! host owns the toolbar markup and calls into the editor for commands,
//! history, color menus and image uploads.

mod actions;
mod editor;
mod types;

pub use actions::*;
pub use editor::*;
pub use types::*;

use wasm_bindgen::prelude::*;

/// Install the panic hook and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    #[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
    {
        use tracing::Level;
        use tracing::subscriber::set_global_default;
        use tracing_subscriber::Registry;
        use tracing_subscriber::layer::SubscriberExt;

        let console_level = if cfg!(debug_assertions) {
            Level::DEBUG
        } else {
            Level::INFO
        };

        let wasm_layer = tracing_wasm::WASMLayer::new(
            tracing_wasm::WASMLayerConfigBuilder::new()
                .set_max_level(console_level)
                .build(),
        );

        // A host bundling several wasm modules may have set one already.
        let _ = set_global_default(Registry::default().with(wasm_layer));
    }
}
