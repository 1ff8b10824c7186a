//! Configuration management.
//!
//! This module handles:
//! - Environment variable loading
//! - Configuration validation
//! - Default value handling
//! - Secure API key storage via [`SecretString`]
//!
//! # Example
//!
//! ```
//! use lol_wrapped::config::{Config, SecretString, DEFAULT_REGION};
//!
//! // Create a config directly (use Config::from_env() in production)
//! let config = Config {
//!     api_key: SecretString::new("RGAPI-example-key"),
//!     default_region: DEFAULT_REGION.to_string(),
//!     log_level: "info".to_string(),
//!     request_timeout_ms: 10_000,
//!     max_retries: 2,
//! };
//!
//! // API key is protected from accidental logging
//! let debug = format!("{:?}", config);
//! assert!(debug.contains("<REDACTED>"));
//! assert!(!debug.contains("RGAPI-example-key"));
//! ```

mod secret;
mod validation;

pub use secret::SecretString;
pub use validation::{validate_config, MAX_RETRIES, MAX_TIMEOUT_MS, MIN_TIMEOUT_MS};

use crate::error::ConfigError;

/// Default platform region.
pub const DEFAULT_REGION: &str = "euw1";

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default request timeout in milliseconds.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Default retry attempts after the initial request (3 attempts total).
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Application configuration.
///
/// This struct holds all configuration values for the Wrapped server.
/// Use [`Config::from_env`] to load configuration from environment variables.
///
/// The `api_key` field uses [`SecretString`] to prevent accidental logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Riot API key (protected from logging via [`SecretString`]).
    pub api_key: SecretString,
    /// Platform region used when a tool call does not supply one.
    pub default_region: String,
    /// Log level (error, warn, info, debug, trace).
    pub log_level: String,
    /// Request timeout in milliseconds.
    pub request_timeout_ms: u64,
    /// Retry attempts after the initial request.
    pub max_retries: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `RIOT_API_KEY`: Riot Games API key
    ///
    /// Optional environment variables (with defaults):
    /// - `DEFAULT_REGION`: Platform region (default: `euw1`)
    /// - `LOG_LEVEL`: Logging level (default: `info`)
    /// - `REQUEST_TIMEOUT_MS`: Request timeout (default: `10000`)
    /// - `MAX_RETRIES`: Retry attempts after the first request (default: `2`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - `RIOT_API_KEY` is missing
    /// - `REQUEST_TIMEOUT_MS` is not a valid positive integer
    /// - `MAX_RETRIES` is not a valid positive integer
    /// - Any value fails validation (see [`validate_config`])
    #[must_use = "configuration should be used"]
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors)
        let _ = dotenvy::dotenv();

        let api_key = std::env::var("RIOT_API_KEY").map_err(|_| ConfigError::MissingRequired {
            var: "RIOT_API_KEY".into(),
        })?;

        let default_region =
            std::env::var("DEFAULT_REGION").unwrap_or_else(|_| DEFAULT_REGION.into());

        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.into());

        let request_timeout_ms = parse_env_u64("REQUEST_TIMEOUT_MS", DEFAULT_REQUEST_TIMEOUT_MS)?;
        let max_retries = parse_env_u32("MAX_RETRIES", DEFAULT_MAX_RETRIES)?;

        let config = Self {
            api_key: SecretString::new(api_key),
            default_region,
            log_level,
            request_timeout_ms,
            max_retries,
        };

        validate_config(&config)?;
        Ok(config)
    }
}

/// Parse an environment variable as u64, using a default if not set.
fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    std::env::var(name).map_or(Ok(default), |val| {
        val.parse().map_err(|_| ConfigError::InvalidValue {
            var: name.into(),
            reason: "must be a positive integer".into(),
        })
    })
}

/// Parse an environment variable as u32, using a default if not set.
fn parse_env_u32(name: &str, default: u32) -> Result<u32, ConfigError> {
    std::env::var(name).map_or(Ok(default), |val| {
        val.parse().map_err(|_| ConfigError::InvalidValue {
            var: name.into(),
            reason: "must be a positive integer".into(),
        })
    })
}
