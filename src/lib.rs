//! Kakao Maps MCP Server Library
//!
//! Exposes the Kakao Local API (geocoding, reverse geocoding, coordinate
//! transforms and place search) as Model Context Protocol tools.
//!
//! # Architecture
//!
//! - **core**: configuration, startup errors, the MCP server handler and the stdio transport
//! - **domains**: business logic organized by bounded contexts
//!   - **kakao**: HTTP client, typed documents and upstream error kinds
//!   - **tools**: one MCP tool per Kakao operation
//!
//! # Example
//!
//! ```rust,no_run
//! use kakao_maps_mcp_server::{Config, McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     config.validate()?;
//!     let server = McpServer::new(config);
//!     let result = server
//!         .call_tool("create_share_link", serde_json::json!({ "place_id": "12345" }))
//!         .await?;
//!     println!("{:?}", result.content);
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
