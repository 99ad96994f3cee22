//! Error type shared by every enhancement component.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is shown to the user. Mount failures skip the affected
//! component and runtime failures leave the page as the server rendered it;
//! both are logged to the browser console by the caller.

use wasm_bindgen::{JsCast, JsValue};

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum EnhanceError {
    #[error("element #{id} is missing attribute `{attr}`")]
    MissingAttribute { id: String, attr: String },

    #[error("element #{id} is not a <{expected}>")]
    WrongElementType { id: String, expected: &'static str },

    #[error("2d drawing context unavailable on #{id}")]
    ContextUnavailable { id: String },

    #[error("dom call failed: {0}")]
    Dom(String),

    #[error("request failed: {0}")]
    Http(String),

    #[error("{endpoint} answered with status {status}")]
    Status { endpoint: String, status: u16 },

    #[error("invalid config: {0}")]
    Config(String),
}

impl From<JsValue> for EnhanceError {
    fn from(value: JsValue) -> Self {
        Self::Dom(describe_js(&value))
    }
}

impl From<gloo_net::Error> for EnhanceError {
    fn from(err: gloo_net::Error) -> Self {
        Self::Http(err.to_string())
    }
}

impl From<serde_json::Error> for EnhanceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Best-effort text for a thrown JS value: the `Error` message when it is
/// one, the string itself when it is a string.
fn describe_js(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
