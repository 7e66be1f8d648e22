//! Error type for controller initialization and browser calls.
//!
//! DESIGN
//! ======
//! Nothing in the site surfaces an error to the visitor. Controllers return
//! `SiteError` from `init`, and the entry point decides the log level: a
//! missing element is routine on pages that lack the feature, anything else
//! is worth a warning.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("element not found: {0}")]
    MissingElement(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("platform capability unavailable: {0}")]
    Unsupported(&'static str),
}

impl SiteError {
    /// True when the error only means the current page lacks the feature.
    pub fn is_routine(&self) -> bool {
        matches!(self, Self::MissingElement(_) | Self::Unsupported(_))
    }
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(describe_js(&value))
    }
}

/// Best-effort human-readable rendering of a thrown JS value.
#[cfg(feature = "hydrate")]
pub fn describe_js(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Log a failed browser call at `warn` and turn the result into an `Option`.
#[cfg(feature = "hydrate")]
pub fn report<T>(result: Result<T, wasm_bindgen::JsValue>, context: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("{context}: {}", describe_js(&err));
            None
        }
    }
}
