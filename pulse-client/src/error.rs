//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (no response received)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Bad credentials (401)
    #[error("invalid credentials")]
    Unauthorized,

    /// Permission denied (403)
    #[error("access denied: {0}")]
    Forbidden(String),

    /// Validation failure (400), with the server message when one was sent
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found (404)
    #[error("not found: {0}")]
    NotFound(String),

    /// Any other non-success status
    #[error("server error {status}: {message}")]
    Status { status: u16, message: String },
}

impl ClientError {
    /// True for authorization failures. The audit-history and dashboard
    /// reads use this to keep "not authorized" apart from "no data".
    pub fn is_forbidden(&self) -> bool {
        matches!(self, ClientError::Forbidden(_))
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
