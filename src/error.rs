//! Error type shared by configuration loading and the browser adapter.

/// Errors raised while configuring or driving the page.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// The configuration JSON could not be parsed.
    #[error("config parse failed: {0}")]
    Config(#[from] serde_json::Error),

    /// A configuration field holds an unusable value.
    #[error("invalid config field {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// A browser DOM call threw or a required browser object was missing.
    #[error("dom operation failed: {0}")]
    Dom(String),
}

#[cfg(feature = "csr")]
impl From<wasm_bindgen::JsValue> for ThemeError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
