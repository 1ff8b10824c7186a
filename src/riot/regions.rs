//! Platform and regional-cluster routing.
//!
//! Riot exposes two kinds of hosts: platform hosts (`euw1`, `na1`, ...)
//! for summoner/league/mastery/challenges endpoints, and regional cluster
//! hosts (`americas`, `europe`, `asia`, `sea`) for account and match-v5
//! endpoints. Every platform maps to exactly one cluster.

use crate::error::RiotError;

/// All known platform identifiers.
pub const PLATFORMS: &[&str] = &[
    "br1", "eun1", "euw1", "jp1", "kr", "la1", "la2", "na1", "oc1", "ph2", "ru", "sg2", "th2",
    "tr1", "tw2", "vn2",
];

/// All regional clusters.
pub const CLUSTERS: &[&str] = &["americas", "asia", "europe", "sea"];

/// Normalize a region string for lookup (trim and lowercase).
#[must_use]
pub fn normalize(region: &str) -> String {
    region.trim().to_lowercase()
}

/// Returns true if the string names a known platform.
#[must_use]
pub fn is_valid_platform(platform: &str) -> bool {
    PLATFORMS.contains(&normalize(platform).as_str())
}

/// Map a platform to its regional cluster.
///
/// # Errors
///
/// Returns [`RiotError::InvalidRegion`] if the platform is unknown.
pub fn cluster_for(platform: &str) -> Result<&'static str, RiotError> {
    match normalize(platform).as_str() {
        "br1" | "la1" | "la2" | "na1" => Ok("americas"),
        "eun1" | "euw1" | "ru" | "tr1" => Ok("europe"),
        "jp1" | "kr" => Ok("asia"),
        "oc1" | "ph2" | "sg2" | "th2" | "tw2" | "vn2" => Ok("sea"),
        _ => Err(RiotError::InvalidRegion {
            region: platform.to_string(),
        }),
    }
}

/// Host for platform-scoped endpoints (summoner, league, mastery, challenges).
#[must_use]
pub fn platform_host(platform: &str) -> String {
    format!("https://{}.api.riotgames.com", normalize(platform))
}

/// Host for cluster-scoped endpoints (account, match-v5).
#[must_use]
pub fn cluster_host(cluster: &str) -> String {
    format!("https://{cluster}.api.riotgames.com")
}
