//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (and a `.env` file) or defaults.

use super::error::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Default Kakao Local API base URL.
pub const DEFAULT_KAKAO_BASE_URL: &str = "https://dapi.kakao.com/v2/local";

/// Default upstream request timeout.
pub const DEFAULT_KAKAO_TIMEOUT_SECS: u64 = 10;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// External API credentials configuration.
    pub credentials: CredentialsConfig,

    /// Kakao Local API endpoint settings.
    pub kakao: KakaoConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for external API credentials.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Kakao REST API key, sent as `Authorization: KakaoAK <key>`.
    #[serde(default, skip_serializing)]
    pub kakao_api_key: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field(
                "kakao_api_key",
                &self.kakao_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// Kakao Local API endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KakaoConfig {
    /// Base URL the endpoint paths are appended to.
    pub base_url: String,

    /// Upper bound on a single upstream request, in seconds.
    pub timeout_secs: u64,
}

impl Default for KakaoConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_KAKAO_BASE_URL.to_string(),
            timeout_secs: DEFAULT_KAKAO_TIMEOUT_SECS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "kakao-maps".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            credentials: CredentialsConfig::default(),
            kakao: KakaoConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, `MCP_KAKAO_BASE_URL`, ...). The API key is read from
    /// `MCP_KAKAO_API_KEY`, then `KAKAO_API_KEY`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.credentials.kakao_api_key = std::env::var("MCP_KAKAO_API_KEY")
            .or_else(|_| std::env::var("KAKAO_API_KEY"))
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        if let Ok(base_url) = std::env::var("MCP_KAKAO_BASE_URL") {
            config.kakao.base_url = base_url;
        }

        if let Ok(timeout) = std::env::var("MCP_KAKAO_TIMEOUT_SECS") {
            config.kakao.timeout_secs = timeout.parse().unwrap_or_else(|_| {
                warn!("Invalid MCP_KAKAO_TIMEOUT_SECS '{}', using default", timeout);
                DEFAULT_KAKAO_TIMEOUT_SECS
            });
        }

        config
    }

    /// Check settings that would make every tool call fail.
    pub fn validate(&self) -> Result<()> {
        if self.kakao.timeout_secs == 0 {
            return Err(Error::config("Kakao request timeout must be at least 1 second"));
        }

        let base_url = &self.kakao.base_url;
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(Error::config(format!(
                "Kakao base URL must be an http(s) URL, got '{base_url}'"
            )));
        }

        Ok(())
    }
}
