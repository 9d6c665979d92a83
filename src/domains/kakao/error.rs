//! Upstream call error types.

use thiserror::Error;

/// Result type for Kakao API calls.
pub type KakaoResult<T> = Result<T, KakaoError>;

/// Errors that can occur while calling the Kakao Local API.
#[derive(Debug, Error)]
pub enum KakaoError {
    /// The HTTP client or request could not be built.
    #[error("Failed to build request: {0}")]
    Client(String),

    /// The request did not reach the API or the connection broke.
    #[error("Request failed: {0}")]
    Transport(String),

    /// No response within the configured timeout.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// Non-success HTTP status.
    #[error("{status} {message}")]
    Status { status: u16, message: String },

    /// Body is not valid JSON.
    #[error("Invalid JSON response: {0}")]
    Decode(String),

    /// JSON does not match the document schema.
    #[error("Unexpected response shape: {0}")]
    Schema(String),
}

impl KakaoError {
    /// Create a client construction error.
    pub fn client(msg: impl Into<String>) -> Self {
        Self::Client(msg.into())
    }

    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a status error.
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Stable machine-readable name of the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Client(_) => "client",
            Self::Transport(_) => "transport",
            Self::Timeout(_) => "timeout",
            Self::Status { .. } => "status",
            Self::Decode(_) => "decode",
            Self::Schema(_) => "schema",
        }
    }
}
