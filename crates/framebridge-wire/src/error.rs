/// Errors that can occur while building wire messages.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// JSON serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// An envelope serialized to something other than a JSON object.
    #[error("envelope did not serialize to a JSON object")]
    NotAnObject,
}

pub type Result<T> = std::result::Result<T, WireError>;
