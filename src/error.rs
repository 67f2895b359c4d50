//! Errors raised while wiring behaviors onto the page.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced by behavior installation and config loading.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BehaviorError {
    /// No global `window` (not running in a browser).
    #[error("browser window unavailable")]
    MissingWindow,

    /// The window has no document.
    #[error("document unavailable")]
    MissingDocument,

    /// The document has no `<body>` yet.
    #[error("document body unavailable")]
    MissingBody,

    /// A browser API call was rejected.
    #[error("{op} failed: {detail}")]
    Dom { op: &'static str, detail: String },

    /// The config island could not be parsed.
    #[error("config parse failed: {0}")]
    Config(String),
}

impl BehaviorError {
    /// Wrap a rejected browser call, keeping the JS error text when present.
    #[cfg(feature = "csr")]
    pub(crate) fn dom(op: &'static str) -> impl FnOnce(wasm_bindgen::JsValue) -> Self {
        move |err| Self::Dom { op, detail: err.as_string().unwrap_or_else(|| format!("{err:?}")) }
    }
}

impl From<serde_json::Error> for BehaviorError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
