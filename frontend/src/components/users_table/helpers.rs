//! Devtools debug surface for the users table.
//!
//! The loaded record set is meant to be poked at from the browser console,
//! outside the normal UI flow. All writes to the global go through
//! [`publish_debug_data`] so the window access stays in one place.

use gloo_console::log;
use js_sys::{Reflect, JSON};
use wasm_bindgen::JsValue;

use common::model::record::RecordSet;

/// Attaches the current record set to `window.data` and logs the same
/// object, so it can be inspected and expanded in the devtools console.
///
/// Called after every non-empty load. The records are serialized and parsed
/// back through `js_sys::JSON` so the console receives a plain JavaScript
/// object rather than an opaque wasm handle. Serialization of a `Value`
/// tree cannot fail, so the fallible steps are only window lookup and the
/// `Reflect` write.
pub fn publish_debug_data(records: &RecordSet) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(json) = serde_json::to_string(records) else {
        return;
    };
    let Ok(data) = JSON::parse(&json) else {
        return;
    };
    if Reflect::set(&window, &JsValue::from_str("data"), &data).is_ok() {
        log!("📦 window.data gesetzt:", data);
    }
}
