use thiserror::Error;

use crate::domain::services::query_builder::ValidationError;

#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or missing user input. Detected before any network call and
    /// surfaced inline; never sent to the backend.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Network failure or non-success HTTP status from the backend. Never
    /// retried; the user sees one generic backend error either way.
    #[error("Backend error: {0}")]
    Transport(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_message_passes_through() {
        let err = AppError::from(ValidationError::MissingParty);
        assert_eq!(err.to_string(), "missing party/case identifier");
    }

    #[test]
    fn test_transport_error_is_generic() {
        let err = AppError::Transport("HTTP 502: Bad Gateway".to_string());
        assert_eq!(err.to_string(), "Backend error: HTTP 502: Bad Gateway");
    }
}
