//! Pure statistics over fetched matches.
//!
//! No I/O here. Aggregation folds match records into counters, temporal
//! analysis derives per-period superlatives, and insight composition
//! turns both into threshold-gated highlight strings.

pub mod aggregate;
pub mod insights;
pub mod temporal;

pub use aggregate::{
    aggregate, calculate_kda, ChampionGames, ChampionStats, GameHighlight, MatchAccumulator,
    PeriodStats, PlayerStats, RoleGames,
};
pub use insights::{analyze_challenges, challenge_insights, compose, ChallengeSummary};
pub use temporal::{analyze, TemporalSummary, MIN_PERIOD_GAMES};
