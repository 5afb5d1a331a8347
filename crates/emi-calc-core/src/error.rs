use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmiCalcError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Render failure: {0}")]
    Render(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for EmiCalcError {
    fn from(e: serde_json::Error) -> Self {
        EmiCalcError::SerializationError(e.to_string())
    }
}
