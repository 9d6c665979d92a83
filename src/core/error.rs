//! Startup error type.
//!
//! Tool calls never fail with this type: upstream problems are reported in
//! the tool result and dispatch problems as `ToolError`.

use thiserror::Error;

/// A specialized Result type for server startup and shutdown.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that stop the server.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration that would make every tool call fail.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The transport session failed.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
