//! Application configuration settings
//!
//! Defines all configuration structures and loading logic

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Server configuration
    pub server: ServerConfig,
    /// Gemini API configuration
    pub gemini: GeminiConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen host
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Maximum request body size in bytes
    pub max_request_size: usize,
}

/// Gemini API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key, if one could be resolved at startup.
    ///
    /// Absence does not prevent the server from starting; requests fail
    /// with a 500 configuration error until a key is provided.
    pub api_key: Option<String>,
    /// API base URL
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout: u64,
    /// Model used when a request does not name one
    pub default_model: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
    /// Log format (text/json)
    pub format: String,
}

impl Settings {
    /// Create a new configuration instance
    pub fn new() -> Result<Self> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let settings = Self {
            server: ServerConfig {
                host: get_env_or_default("SERVER_HOST", "0.0.0.0"),
                port: get_env_or_default("SERVER_PORT", "8090")
                    .parse()
                    .context("Invalid port number")?,
                max_request_size: get_env_or_default("MAX_REQUEST_SIZE", "10485760")
                    .parse()
                    .context("Invalid maximum request size")?,
            },
            gemini: GeminiConfig {
                api_key: resolve_api_key(),
                base_url: get_env_or_default(
                    "GEMINI_BASE_URL",
                    "https://generativelanguage.googleapis.com",
                ),
                timeout: get_env_or_default("REQUEST_TIMEOUT", "60")
                    .parse()
                    .context("Invalid timeout value")?,
                default_model: get_env_or_default("GEMINI_DEFAULT_MODEL", "gemini-1.5-flash"),
            },
            logging: LoggingConfig {
                level: get_env_or_default("RUST_LOG", "info"),
                format: get_env_or_default("LOG_FORMAT", "text"),
            },
        };

        // Validate configuration
        settings.validate()?;

        Ok(settings)
    }

    /// Validate configuration validity
    fn validate(&self) -> Result<()> {
        // Validate port range
        if self.server.port == 0 {
            anyhow::bail!("Port number cannot be 0");
        }

        // Validate request size limit
        if self.server.max_request_size == 0 {
            anyhow::bail!("Maximum request size cannot be 0");
        }

        // A missing key is tolerated at startup; requests fail fast instead
        match &self.gemini.api_key {
            None => {
                warn!("No Gemini API key configured; analysis requests will fail with 500");
            }
            Some(key) => {
                if key.contains(char::is_whitespace) {
                    anyhow::bail!("Gemini API key cannot contain whitespace characters");
                }
                if key.len() < 8 {
                    anyhow::bail!("Gemini API key must be at least 8 characters long");
                }
            }
        }

        // Validate URL format
        if !self.gemini.base_url.starts_with("http") {
            anyhow::bail!("Invalid Gemini base URL format, should start with 'http'");
        }

        // Validate timeout value
        if self.gemini.timeout == 0 {
            anyhow::bail!("Timeout value cannot be 0");
        }

        if self.gemini.default_model.is_empty() {
            anyhow::bail!("Default model name cannot be empty");
        }

        // Validate log level
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            anyhow::bail!("Invalid log level: {}", self.logging.level);
        }

        // Validate log format
        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            anyhow::bail!("Invalid log format: {}", self.logging.format);
        }

        Ok(())
    }

    /// Whether a Gemini API key was resolved at startup
    pub fn has_api_key(&self) -> bool {
        self.gemini.api_key.is_some()
    }
}

/// Resolve the Gemini API key.
///
/// A local secret file (default `gemini.md`, overridable via
/// `GEMINI_KEY_FILE`) takes precedence; otherwise the `GEMINI_API_KEY`
/// environment variable is used. Returns `None` when neither is present.
fn resolve_api_key() -> Option<String> {
    let key_file = get_env_or_default("GEMINI_KEY_FILE", "gemini.md");

    if Path::new(&key_file).exists() {
        match std::fs::read_to_string(&key_file) {
            Ok(contents) => {
                let key = contents.trim().to_string();
                if !key.is_empty() {
                    return Some(key);
                }
                warn!("API key file {} is empty, falling back to environment", key_file);
            }
            Err(e) => {
                warn!("Failed to read API key file {}: {}", key_file, e);
            }
        }
    }

    std::env::var("GEMINI_API_KEY")
        .ok()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
}

/// Get environment variable or default value
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
