//! LoL Wrapped MCP Server
//!
//! A Rust-based MCP server that builds Spotify-Wrapped-style yearly
//! League of Legends reports from the Riot Games API.
//!
//! # Features
//!
//! - 7 tools covering reports, profiles, ranked info, match history and challenges
//! - Dual-window client-side rate limiting (19 req/s, 95 req/120s)
//! - Retry with exponential backoff on upstream throttling
//! - Exhaustive match-ID collection with a bounded detail-fetch budget
//! - Pure aggregation and temporal analytics over fetched matches
//!
//! # Quick Start
//!
//! ```bash
//! RIOT_API_KEY=RGAPI-xxx ./lol-wrapped
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     stdin      ┌─────────────────┐
//! │ Claude Code │───────────────▶│   MCP Server    │──────▶ Riot API
//! │ or Desktop  │◀───────────────│     (Rust)      │
//! └─────────────┘     stdout     └────────┬────────┘
//!                                         │
//!                                         ▼
//!                                  rate limiter +
//!                                  analytics core
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod analytics;
pub mod config;
pub mod error;
pub mod matches;
pub mod report;
pub mod riot;
pub mod server;
