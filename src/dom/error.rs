//! Errors from the DOM binding layer

use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, thiserror::Error)]
pub enum TiltError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("selector `{selector}` failed: {reason}")]
    Query { selector: &'static str, reason: String },
    #[error("setting `{property}` failed: {reason}")]
    Style { property: &'static str, reason: String },
    #[error("dispatching `{event}` failed: {reason}")]
    Dispatch { event: &'static str, reason: String },
    #[error("matched node is not an HTML element")]
    NotHtmlElement,
}

/// Fold a thrown JS value into a readable reason
pub(crate) fn reason(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{value:?}")
}
