//! Error types for the Wrapped server.
//!
//! This module defines a hierarchical error system:
//! - [`AppError`]: Top-level application errors
//! - [`RiotError`]: Riot API specific errors
//! - [`McpError`]: MCP protocol errors
//! - [`ConfigError`]: Configuration errors
//! - [`PartialData`]: Marker for optional report sections that failed
//!
//! All errors implement `Send + Sync` for async compatibility.

use thiserror::Error;

/// Top-level application error.
///
/// This is the main error type returned by public API functions.
/// It wraps all subsystem errors for unified error handling.
#[derive(Debug, Error)]
pub enum AppError {
    /// Riot API error.
    #[error("Riot API error: {0}")]
    Riot(#[from] RiotError),

    /// MCP protocol error.
    #[error("MCP protocol error: {0}")]
    Mcp(#[from] McpError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Riot API errors.
///
/// These errors represent failures when communicating with the Riot Games API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RiotError {
    /// Request was rate limited by the upstream API (HTTP 429).
    #[error("Rate limited: retry after {retry_after_seconds}s")]
    Throttled {
        /// Seconds to wait before retrying, from the Retry-After header.
        retry_after_seconds: u64,
    },

    /// The requested resource does not exist (HTTP 404).
    #[error("Not found: {resource}")]
    NotFound {
        /// Description of the missing resource.
        resource: String,
    },

    /// Any other non-success HTTP status.
    #[error("Upstream error {status}: {message}")]
    Upstream {
        /// The HTTP status code.
        status: u16,
        /// Response body or status description.
        message: String,
    },

    /// Network or connection failure before a response was received.
    #[error("Transport error: {message}")]
    Transport {
        /// Description of the transport failure.
        message: String,
    },

    /// Response body could not be decoded into the expected shape.
    #[error("Unexpected response: {message}")]
    UnexpectedResponse {
        /// Description of what was unexpected.
        message: String,
    },

    /// The supplied region is not a known platform.
    #[error("Invalid region: {region}")]
    InvalidRegion {
        /// The region string that failed validation.
        region: String,
    },
}

impl RiotError {
    /// Returns true if this error is retryable.
    ///
    /// Only rate limiting (429) is retried. Not-found, other upstream
    /// statuses, and transport failures surface immediately.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Throttled { .. })
    }
}

/// A failed optional section of a report.
///
/// Carries the section name and the underlying Riot error so callers can
/// log what was dropped while still returning the rest of the report.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Partial data: {section} unavailable: {source}")]
pub struct PartialData {
    /// The report section that could not be populated.
    pub section: String,
    /// The error that made the section unavailable.
    pub source: RiotError,
}

/// MCP protocol errors.
///
/// These errors represent failures in MCP JSON-RPC communication.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum McpError {
    /// Invalid parameters for a tool.
    #[error("Invalid parameters for {tool}: {message}")]
    InvalidParameters {
        /// The tool name.
        tool: String,
        /// Description of what's invalid.
        message: String,
    },

    /// Internal server error.
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

/// Configuration errors.
///
/// These errors represent failures in configuration loading and validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Required configuration is missing.
    #[error("Missing required: {var}")]
    MissingRequired {
        /// The missing variable name.
        var: String,
    },

    /// Configuration value is invalid.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue {
        /// The variable name.
        var: String,
        /// Why the value is invalid.
        reason: String,
    },
}
