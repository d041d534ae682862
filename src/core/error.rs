use thiserror::Error;
use wasm_bindgen::JsValue;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, BlobError>;

/// Everything that can go wrong outside the per-frame hot path.
///
/// The simulation step itself is infallible; errors only come from
/// configuration, viewport updates and the page binding.
#[derive(Debug, Error)]
pub enum BlobError {
    /// A configuration value failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Configuration JSON could not be parsed.
    #[error("config json: {0}")]
    Json(#[from] serde_json::Error),

    /// Viewport dimensions must be finite and positive.
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },

    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    /// Page binding failure (missing window/document/container, DOM call rejected).
    #[error("dom: {0}")]
    Dom(String),
}

impl From<BlobError> for JsValue {
    fn from(err: BlobError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_is_informative() {
        let e = BlobError::InvalidViewport { width: 0.0, height: 600.0 };
        let msg = e.to_string();
        assert!(msg.contains("invalid viewport"));
        assert!(msg.contains("600"));
    }

    #[test]
    fn json_errors_convert() {
        let err: BlobError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, BlobError::Json(_)));
    }
}
