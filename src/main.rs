//! Kakao Maps MCP Server Entry Point
//!
//! Loads configuration, initializes logging and serves MCP on stdio.

use anyhow::Result;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use kakao_maps_mcp_server::core::{Config, Error, McpServer, serve_stdio};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment (.env first)
    let config = Config::from_env();

    init_logging(&config.logging.level);

    if config.credentials.kakao_api_key.is_none() {
        warn!("KAKAO_API_KEY is not set; Kakao API calls will be rejected");
    }
    config.validate()?;

    info!("Starting KAKAO Maps MCP server...");
    info!("{} v{}", config.server.name, config.server.version);

    serve_stdio(McpServer::new(config))
        .await
        .map_err(Error::from)?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout carries the stdio transport.
fn init_logging(level: &str) {
    fmt()
        .with_env_filter(log_filter(level))
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}

/// `RUST_LOG` wins when set; otherwise the configured level applies.
fn log_filter(level: &str) -> EnvFilter {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()))
}
