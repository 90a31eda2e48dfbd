//! Startup and configuration errors
//!
//! Nothing in the per-tick path fails: unbound keys, zero directions and
//! out-of-bounds actors are handled by ignoring or clamping. What remains
//! are fatal startup conditions and bad settings.

use thiserror::Error;

/// Errors surfaced to the host
#[derive(Debug, Error)]
pub enum ShmupError {
    #[error("no global `window` available")]
    MissingWindow,

    #[error("window has no document")]
    MissingDocument,

    #[error("window has no `performance` clock")]
    MissingClock,

    #[error("no element with id `{0}`")]
    MissingCanvas(String),

    #[error("element `{0}` is not a canvas")]
    NotACanvas(String),

    #[error("2D drawing context unavailable")]
    ContextUnavailable,

    #[error("JavaScript error: {0}")]
    Js(String),

    #[error("logger setup failed: {0}")]
    Logger(String),

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("settings could not be parsed: {0}")]
    SettingsFormat(#[from] serde_json::Error),

    #[error("settings file error: {0}")]
    SettingsIo(#[from] std::io::Error),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for ShmupError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        use wasm_bindgen::JsCast;

        // Thrown DOM/JS errors carry their text in `message`
        let text = match value.dyn_ref::<js_sys::Error>() {
            Some(err) => String::from(err.message()),
            None => value.as_string().unwrap_or_else(|| format!("{:?}", value)),
        };
        ShmupError::Js(text)
    }
}
