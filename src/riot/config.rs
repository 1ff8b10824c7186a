//! Riot client configuration.
//!
//! This module provides:
//! - Client configuration with defaults
//! - Rate-limit budgets for the dual sliding windows

#![allow(clippy::missing_const_for_fn)]

use std::time::Duration;

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
/// Default retries after the initial attempt (3 attempts total).
pub const DEFAULT_MAX_RETRIES: u32 = 2;
/// Default wait in seconds when a 429 carries no Retry-After header.
pub const DEFAULT_RETRY_AFTER_SECS: u64 = 2;

/// Requests allowed in the short window (development key budget, minus one
/// for headroom).
pub const SHORT_WINDOW_LIMIT: usize = 19;
/// Length of the short window.
pub const SHORT_WINDOW: Duration = Duration::from_secs(1);
/// Requests allowed in the long window.
pub const LONG_WINDOW_LIMIT: usize = 95;
/// Length of the long window.
pub const LONG_WINDOW: Duration = Duration::from_secs(120);

/// Budgets for the dual sliding-window rate limiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimits {
    /// Requests allowed per short window.
    pub short_limit: usize,
    /// Short window length.
    pub short_window: Duration,
    /// Requests allowed per long window.
    pub long_limit: usize,
    /// Long window length.
    pub long_window: Duration,
}

impl Default for RateLimits {
    fn default() -> Self {
        Self {
            short_limit: SHORT_WINDOW_LIMIT,
            short_window: SHORT_WINDOW,
            long_limit: LONG_WINDOW_LIMIT,
            long_window: LONG_WINDOW,
        }
    }
}

/// Client configuration for the Riot API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL override. When set, all requests go to this host instead of
    /// the per-region Riot hosts. Used for tests against a mock server.
    pub base_url: Option<String>,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Retries after the initial attempt.
    pub max_retries: u32,
    /// Wait in seconds for a 429 without a Retry-After header.
    pub retry_after_secs: u64,
    /// Rate-limit budgets.
    pub rate_limits: RateLimits,
}

impl ClientConfig {
    /// Create a new client configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Route all requests to a fixed base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set timeout in milliseconds.
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set retries after the initial attempt.
    #[must_use]
    pub const fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set the fallback Retry-After wait in seconds.
    #[must_use]
    pub const fn with_retry_after_secs(mut self, retry_after_secs: u64) -> Self {
        self.retry_after_secs = retry_after_secs;
        self
    }

    /// Set rate-limit budgets.
    #[must_use]
    pub const fn with_rate_limits(mut self, rate_limits: RateLimits) -> Self {
        self.rate_limits = rate_limits;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_after_secs: DEFAULT_RETRY_AFTER_SECS,
            rate_limits: RateLimits::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_defaults() {
        let config = ClientConfig::new();
        assert!(config.base_url.is_none());
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert_eq!(config.max_retries, DEFAULT_MAX_RETRIES);
        assert_eq!(config.retry_after_secs, DEFAULT_RETRY_AFTER_SECS);
        assert_eq!(config.rate_limits, RateLimits::default());
    }

    #[test]
    fn test_rate_limits_defaults() {
        let limits = RateLimits::default();
        assert_eq!(limits.short_limit, 19);
        assert_eq!(limits.short_window, Duration::from_secs(1));
        assert_eq!(limits.long_limit, 95);
        assert_eq!(limits.long_window, Duration::from_secs(120));
    }

    #[test]
    fn test_client_config_with_base_url() {
        let config = ClientConfig::new().with_base_url("http://localhost:8080");
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:8080"));
    }

    #[test]
    fn test_client_config_builder_chain() {
        let limits = RateLimits {
            short_limit: 3,
            short_window: Duration::from_secs(1),
            long_limit: 10,
            long_window: Duration::from_secs(10),
        };
        let config = ClientConfig::new()
            .with_base_url("http://localhost")
            .with_timeout_ms(5_000)
            .with_max_retries(1)
            .with_retry_after_secs(1)
            .with_rate_limits(limits);

        assert_eq!(config.base_url.as_deref(), Some("http://localhost"));
        assert_eq!(config.timeout_ms, 5_000);
        assert_eq!(config.max_retries, 1);
        assert_eq!(config.retry_after_secs, 1);
        assert_eq!(config.rate_limits.short_limit, 3);
    }

    #[test]
    fn test_client_config_clone() {
        let config1 = ClientConfig::new().with_timeout_ms(5_000);
        let config2 = config1.clone();
        assert_eq!(config1.timeout_ms, config2.timeout_ms);
    }

    #[test]
    fn test_client_config_debug() {
        let config = ClientConfig::new();
        let debug = format!("{config:?}");
        assert!(debug.contains("ClientConfig"));
        assert!(debug.contains("rate_limits"));
    }
}
