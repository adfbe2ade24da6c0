//! Client error types
//!
//! `Display` of every variant is the text shown to the admin user.

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Server unreachable, connection dropped or timed out
    #[error("Network error: could not reach the server. Please try again.")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status; `message` is the body's `error` field or the raw status line
    #[error("{message}")]
    Status { status: u16, message: String },

    /// `success: false` with a message
    #[error("{0}")]
    Application(String),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rejected before sending
    #[error("{0}")]
    Validation(String),

    /// No admin token configured
    #[error("Admin token is not configured")]
    MissingToken,
}

impl ClientError {
    /// HTTP status of a `Status` error
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether repeating the same request may succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::Transport(_) => true,
            ClientError::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

impl From<shared::validation::ValidationError> for ClientError {
    fn from(e: shared::validation::ValidationError) -> Self {
        ClientError::Validation(e.0)
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
