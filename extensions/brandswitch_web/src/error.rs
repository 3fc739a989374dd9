//! Browser backend error types

use brandswitch_theme::{ConfigError, StoreError};
use thiserror::Error;

/// Failures while wiring the theme switcher into a page.
///
/// All of these mean the page skeleton is broken; the entry point surfaces
/// them as a thrown JS error.
#[derive(Error, Debug)]
pub enum WebError {
    /// No global `window` (not running in a browser)
    #[error("no window object")]
    MissingWindow,

    /// `window.document` is absent
    #[error("no document on window")]
    MissingDocument,

    /// The document has no root element
    #[error("document has no root element")]
    MissingRootElement,

    /// A required element (selection control) is absent or of the wrong kind
    #[error("required element #{0} not found")]
    MissingElement(String),

    /// Embedded configuration was rejected
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A DOM call threw
    #[error("JS error: {0}")]
    Js(String),
}

/// Result type for browser backend operations
pub type Result<T> = std::result::Result<T, WebError>;

#[cfg(target_arch = "wasm32")]
impl WebError {
    /// Wrap a thrown JS value
    pub fn from_js(value: wasm_bindgen::JsValue) -> Self {
        WebError::Js(describe_js(&value))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<WebError> for wasm_bindgen::JsValue {
    fn from(err: WebError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Best human-readable rendering of a thrown JS value
#[cfg(target_arch = "wasm32")]
pub(crate) fn describe_js(value: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return format!("{}: {}", String::from(error.name()), String::from(error.message()));
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Map a failed `localStorage` call to a [`StoreError`] by the thrown
/// error's name. Firefox reports a full store under its own legacy name.
pub fn storage_error(name: Option<&str>, detail: String) -> StoreError {
    match name {
        Some("QuotaExceededError" | "NS_ERROR_DOM_QUOTA_REACHED") => {
            StoreError::QuotaExceeded(detail)
        }
        Some("SecurityError") => StoreError::Unavailable(detail),
        _ => StoreError::Backend(detail),
    }
}
