//! Error types for the client.

use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur in client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// An argument failed validation before any request was issued.
    #[error("validation error: {0}")]
    Validation(String),

    /// The API answered with a non-success status.
    #[error("API request failed: status {status}: {message}")]
    Api { status: u16, message: String },

    /// HTTP error (connection, TLS, protocol).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Builds a `Validation` error from any displayable reason.
    pub fn validation(reason: impl Into<String>) -> Self {
        ClientError::Validation(reason.into())
    }

    /// Returns true if this error was raised by argument validation,
    /// i.e. before the transport was touched.
    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }
}
