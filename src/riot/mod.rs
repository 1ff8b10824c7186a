//! Riot Games API integration.
//!
//! This module provides:
//! - Rate-limited HTTP client for the Riot API
//! - Dual sliding-window rate limiter
//! - Platform and regional-cluster routing
//! - Typed response shapes
//! - Optional raw-payload persistence sink

mod client;
pub mod config;
mod rate_limit;
pub mod regions;
mod sink;
mod types;

pub use client::RiotClient;
pub use config::{ClientConfig, RateLimits};
pub use rate_limit::RateLimiter;
pub use sink::RawResponseSink;
pub use types::{
    Account, ChallengeEntry, ChallengePoints, ChampionMastery, LeagueEntry, MatchInfo,
    MatchMetadata, MatchRecord, Participant, PlayerChallenges, Summoner,
};
