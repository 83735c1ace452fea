use thiserror::Error;

/// Failures from browser glue. Domain actions never fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UiError {
    #[error("browser window is not available")]
    WindowUnavailable,
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    #[error("clipboard write failed: {0}")]
    Clipboard(String),
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    #[error("viewport media query failed: {0}")]
    MediaQuery(String),
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn describe_js(value: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
