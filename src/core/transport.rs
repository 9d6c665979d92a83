//! Stdio transport.
//!
//! The server speaks newline-delimited JSON-RPC over stdin/stdout. Logging
//! must stay on stderr so it never interleaves with protocol frames.

use rmcp::ServiceExt;
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncWrite};
use tracing::info;

use super::server::McpServer;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors that end a transport session.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The MCP initialize handshake did not complete.
    #[error("Handshake failed: {0}")]
    Handshake(String),

    /// The session ended abnormally after initialization.
    #[error("Session failed: {0}")]
    Session(String),
}

/// Serve one MCP session on stdin/stdout until the client disconnects.
pub async fn serve_stdio(server: McpServer) -> TransportResult<()> {
    info!("Ready - communicating via stdin/stdout");
    serve_io(server, tokio::io::stdin(), tokio::io::stdout()).await
}

/// Serve one MCP session on an arbitrary byte stream pair.
pub async fn serve_io<R, W>(server: McpServer, reader: R, writer: W) -> TransportResult<()>
where
    R: AsyncRead + Send + Unpin + 'static,
    W: AsyncWrite + Send + Unpin + 'static,
{
    let session = server
        .serve((reader, writer))
        .await
        .map_err(|e| TransportError::Handshake(e.to_string()))?;

    let reason = session
        .waiting()
        .await
        .map_err(|e| TransportError::Session(e.to_string()))?;

    info!("Session closed: {:?}", reason);
    Ok(())
}
