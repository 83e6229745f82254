//! Browser backends and JavaScript bindings (`hydrate` feature).
//!
//! SYSTEM CONTEXT
//! ==============
//! `LocalStorage` and `DocumentPage` are thin `web_sys` adapters for the
//! `PreferenceStore` and `PageSurface` seams; `bindings` exposes the service
//! to page scripts. Nothing in here decides behavior.

pub mod bindings;
pub mod document;
pub mod local_storage;

pub use document::DocumentPage;
pub use local_storage::LocalStorage;

use wasm_bindgen::JsValue;

/// Best-effort human-readable message for a thrown JS value.
pub(crate) fn js_message(err: &JsValue) -> String {
    if let Some(message) = err.as_string() {
        return message;
    }
    match js_sys::Reflect::get(err, &JsValue::from_str("message")) {
        Ok(message) => message.as_string().unwrap_or_else(|| format!("{err:?}")),
        Err(_) => format!("{err:?}"),
    }
}
