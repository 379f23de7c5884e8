//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated
//! from environment variables or defaults.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Environment variable holding the Hugging Face API token used by the
/// image generation tool.
pub const TOKEN_ENV_VAR: &str = "MCP_HF_TOKEN";

/// Fallback variable checked when [`TOKEN_ENV_VAR`] is unset, matching
/// the conventional Hugging Face CLI name.
pub const TOKEN_FALLBACK_ENV_VAR: &str = "HF_TOKEN";

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// External API credentials configuration.
    pub credentials: CredentialsConfig,
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
    /// Hugging Face API token for the image generation tool. When
    /// absent, every other tool and resource still works; only image
    /// generation reports a configuration error.
    pub hf_token: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("hf_token", &self.hf_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "toolbox-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            credentials: CredentialsConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are prefixed with `MCP_`, for example
    /// `MCP_SERVER_NAME` and `MCP_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
            config.credentials.hf_token = Some(token);
            info!("Hugging Face token loaded from {}", TOKEN_ENV_VAR);
        } else if let Ok(token) = std::env::var(TOKEN_FALLBACK_ENV_VAR) {
            config.credentials.hf_token = Some(token);
            info!("Hugging Face token loaded from {}", TOKEN_FALLBACK_ENV_VAR);
        } else {
            warn!(
                "{} not set. The generate_image tool will be unavailable \
                 until a Hugging Face token is configured.",
                TOKEN_ENV_VAR
            );
        }

        config
    }
}
