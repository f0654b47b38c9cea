use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageToolsError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Unknown element: {0}")]
    UnknownElement(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for PageToolsError {
    fn from(e: serde_json::Error) -> Self {
        PageToolsError::SerializationError(e.to_string())
    }
}
