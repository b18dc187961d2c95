//! Configuration management for the sentiment API
//!
//! Configuration is loaded from environment variables.

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

/// Default model identifier sent to the completion endpoint
pub const DEFAULT_LLM_MODEL: &str = "telkom-ai-instruct";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// Credential sent as `x-api-key` to the completion endpoint
    pub llm_api_key: String,
    /// Completion endpoint URL
    pub llm_url: String,
    /// Model identifier
    pub llm_model: String,
    /// Overall timeout for one completion call
    pub llm_timeout: Duration,

    /// Log level (debug, info, warn, error)
    pub log_level: String,
    /// Log format: `json` or anything else for human-readable text
    pub log_format: String,

    /// Maximum accepted request body size in bytes
    pub max_body_bytes: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let var_or = |key: &str, default: &str| var(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            host: var_or("SERVER_HOST", "localhost"),
            port: var_or("SERVER_PORT", "8080")
                .parse()
                .context("Invalid SERVER_PORT")?,

            llm_api_key: var("LLM_API_KEY").context("LLM_API_KEY environment variable is required")?,
            llm_url: var("URL_CHAT_LLM_LLM").context("URL_CHAT_LLM_LLM environment variable is required")?,
            llm_model: var_or("LLM_MODEL", DEFAULT_LLM_MODEL),
            llm_timeout: Duration::from_secs(
                var_or("LLM_TIMEOUT_SECONDS", "60")
                    .parse()
                    .context("Invalid LLM_TIMEOUT_SECONDS")?,
            ),

            log_level: var_or("LOG_LEVEL", "info"),
            log_format: var_or("LOG_FORMAT", "json"),

            max_body_bytes: var_or("MAX_BODY_BYTES", "65536")
                .parse()
                .context("Invalid MAX_BODY_BYTES")?,
        })
    }

    /// Whether logs should be emitted as JSON
    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}
