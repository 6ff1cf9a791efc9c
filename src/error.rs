use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures of the browser APIs the site touches. None of these are fatal:
/// callers log them and fall back to a degraded behavior.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("local storage is not available")]
    StorageUnavailable,
    #[error("element #{0} not found")]
    MissingElement(String),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type SiteResult<T> = Result<T, SiteError>;
