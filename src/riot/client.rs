//! Riot API client with rate limiting and retry logic.
//!
//! This module provides:
//! - HTTP client for account, summoner, league, mastery, match-v5 and
//!   challenges endpoints
//! - Limiter admission before every attempt, including retries
//! - 429 retry with Retry-After and exponential backoff
//! - Optional raw-payload forwarding to a [`RawResponseSink`]

#![allow(clippy::missing_errors_doc)]

use std::sync::{Arc, RwLock};
use std::time::Duration;

use reqwest::Client;

use super::config::ClientConfig;
use super::rate_limit::RateLimiter;
use super::regions;
use super::sink::RawResponseSink;
use super::types::{
    Account, ChampionMastery, LeagueEntry, MatchRecord, PlayerChallenges, Summoner,
};
use crate::error::RiotError;

/// Riot API client.
///
/// Cheap to share behind an [`Arc`]; all endpoint calls funnel through a
/// single rate limiter.
pub struct RiotClient {
    client: Client,
    api_key: String,
    config: ClientConfig,
    limiter: RateLimiter,
    sink: Option<Arc<dyn RawResponseSink>>,
    sink_context: RwLock<String>,
}

impl RiotClient {
    /// Create a new Riot client.
    pub fn new(api_key: impl Into<String>, config: ClientConfig) -> Result<Self, RiotError> {
        let timeout = Duration::from_millis(config.timeout_ms);
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RiotError::Transport {
                message: format!("Failed to create HTTP client: {e}"),
            })?;

        let limiter = RateLimiter::new(config.rate_limits);
        Ok(Self {
            client,
            api_key: api_key.into(),
            config,
            limiter,
            sink: None,
            sink_context: RwLock::new(String::new()),
        })
    }

    /// Attach a raw-payload sink.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn RawResponseSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Set the player context forwarded with sink writes.
    pub fn set_sink_context(&self, context: impl Into<String>) {
        if let Ok(mut guard) = self.sink_context.write() {
            *guard = context.into();
        }
    }

    /// Get the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Base URL for platform-scoped endpoints.
    fn platform_base(&self, platform: &str) -> Result<String, RiotError> {
        if !regions::is_valid_platform(platform) {
            return Err(RiotError::InvalidRegion {
                region: platform.to_string(),
            });
        }
        Ok(self
            .config
            .base_url
            .clone()
            .unwrap_or_else(|| regions::platform_host(platform)))
    }

    /// Base URL for cluster-scoped endpoints (account, match-v5).
    fn cluster_base(&self, platform: &str) -> Result<String, RiotError> {
        let cluster = regions::cluster_for(platform)?;
        Ok(self
            .config
            .base_url
            .clone()
            .unwrap_or_else(|| regions::cluster_host(cluster)))
    }

    /// Fetch a URL with rate limiting and 429 retry.
    ///
    /// The limiter is consulted before every attempt, so retries spend
    /// budget like any other request. Only 429 responses are retried:
    /// the wait is `Retry-After x 2^attempt` seconds, and the attempt
    /// count is bounded by `max_retries` beyond the first try.
    pub async fn fetch(&self, url: &str) -> Result<serde_json::Value, RiotError> {
        let mut attempt: u32 = 0;
        loop {
            self.limiter.admit().await;

            match self.execute_once(url).await {
                Ok(value) => {
                    self.forward_to_sink(url, &value).await;
                    return Ok(value);
                }
                Err(e) => {
                    if !e.is_retryable() || attempt >= self.config.max_retries {
                        return Err(e);
                    }
                    let retry_after = match &e {
                        RiotError::Throttled {
                            retry_after_seconds,
                        } => *retry_after_seconds,
                        _ => self.config.retry_after_secs,
                    };
                    let wait = retry_after.saturating_mul(2u64.saturating_pow(attempt));
                    tracing::warn!(url = %url, attempt, wait_secs = wait, "Rate limited, backing off");
                    tokio::time::sleep(Duration::from_secs(wait)).await;
                    attempt += 1;
                }
            }
        }
    }

    /// Execute a single request attempt.
    async fn execute_once(&self, url: &str) -> Result<serde_json::Value, RiotError> {
        let start = std::time::Instant::now();

        tracing::debug!(url = %url, timeout_ms = self.config.timeout_ms, "Starting Riot API request");

        let response = self
            .client
            .get(url)
            .header("X-Riot-Token", &self.api_key)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    url = %url,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    error = %e,
                    "Riot API request failed"
                );
                RiotError::Transport {
                    message: e.to_string(),
                }
            })?;

        let status = response.status();
        tracing::debug!(
            url = %url,
            status = %status,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Riot API response received"
        );

        if status.as_u16() == 404 {
            return Err(RiotError::NotFound {
                resource: url.to_string(),
            });
        }

        if status.as_u16() == 429 {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok())
                .unwrap_or(self.config.retry_after_secs);
            return Err(RiotError::Throttled {
                retry_after_seconds: retry_after,
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RiotError::Upstream {
                status: status.as_u16(),
                message: body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| RiotError::UnexpectedResponse {
                message: format!("Failed to parse response: {e}"),
            })
    }

    /// Forward a successful payload to the sink, swallowing failures.
    async fn forward_to_sink(&self, url: &str, value: &serde_json::Value) {
        if let Some(sink) = &self.sink {
            let context = self
                .sink_context
                .read()
                .map(|guard| guard.clone())
                .unwrap_or_default();
            if let Err(e) = sink.store(url, value, &context).await {
                tracing::warn!(url = %url, error = %e, "Raw payload sink write failed");
            }
        }
    }

    /// Fetch and decode into a typed shape.
    async fn fetch_typed<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, RiotError> {
        let value = self.fetch(url).await?;
        serde_json::from_value(value).map_err(|e| RiotError::UnexpectedResponse {
            message: format!("Failed to decode response: {e}"),
        })
    }

    /// Look up an account by Riot ID (name + tag).
    pub async fn get_account_by_riot_id(
        &self,
        platform: &str,
        game_name: &str,
        tag_line: &str,
    ) -> Result<Account, RiotError> {
        let base = self.cluster_base(platform)?;
        let url = format!("{base}/riot/account/v1/accounts/by-riot-id/{game_name}/{tag_line}");
        self.fetch_typed(&url).await
    }

    /// Look up a summoner by puuid.
    pub async fn get_summoner_by_puuid(
        &self,
        platform: &str,
        puuid: &str,
    ) -> Result<Summoner, RiotError> {
        let base = self.platform_base(platform)?;
        let url = format!("{base}/lol/summoner/v4/summoners/by-puuid/{puuid}");
        self.fetch_typed(&url).await
    }

    /// Ranked league entries for a summoner.
    pub async fn get_league_entries(
        &self,
        platform: &str,
        summoner_id: &str,
    ) -> Result<Vec<LeagueEntry>, RiotError> {
        let base = self.platform_base(platform)?;
        let url = format!("{base}/lol/league/v4/entries/by-summoner/{summoner_id}");
        self.fetch_typed(&url).await
    }

    /// Top champion masteries for a player.
    pub async fn get_top_masteries(
        &self,
        platform: &str,
        puuid: &str,
        count: u32,
    ) -> Result<Vec<ChampionMastery>, RiotError> {
        let base = self.platform_base(platform)?;
        let url = format!(
            "{base}/lol/champion-mastery/v4/champion-masteries/by-puuid/{puuid}/top?count={count}"
        );
        self.fetch_typed(&url).await
    }

    /// Total mastery score for a player.
    pub async fn get_mastery_score(&self, platform: &str, puuid: &str) -> Result<i64, RiotError> {
        let base = self.platform_base(platform)?;
        let url = format!("{base}/lol/champion-mastery/v4/scores/by-puuid/{puuid}");
        self.fetch_typed(&url).await
    }

    /// One page of match IDs for a player, newest first.
    ///
    /// `start_time` and `end_time` are epoch seconds and bound the page
    /// server-side when present.
    pub async fn get_match_ids(
        &self,
        platform: &str,
        puuid: &str,
        start: usize,
        count: usize,
        start_time: Option<i64>,
        end_time: Option<i64>,
    ) -> Result<Vec<String>, RiotError> {
        let base = self.cluster_base(platform)?;
        let mut url =
            format!("{base}/lol/match/v5/matches/by-puuid/{puuid}/ids?start={start}&count={count}");
        if let Some(start_time) = start_time {
            url.push_str(&format!("&startTime={start_time}"));
        }
        if let Some(end_time) = end_time {
            url.push_str(&format!("&endTime={end_time}"));
        }
        self.fetch_typed(&url).await
    }

    /// Full match detail.
    pub async fn get_match(&self, platform: &str, match_id: &str) -> Result<MatchRecord, RiotError> {
        let base = self.cluster_base(platform)?;
        let url = format!("{base}/lol/match/v5/matches/{match_id}");
        self.fetch_typed(&url).await
    }

    /// Challenge data for a player.
    pub async fn get_player_challenges(
        &self,
        platform: &str,
        puuid: &str,
    ) -> Result<PlayerChallenges, RiotError> {
        let base = self.platform_base(platform)?;
        let url = format!("{base}/lol/challenges/v1/player-data/{puuid}");
        self.fetch_typed(&url).await
    }
}

impl std::fmt::Debug for RiotClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RiotClient")
            .field("config", &self.config)
            .field("has_sink", &self.sink.is_some())
            .finish_non_exhaustive()
    }
}
