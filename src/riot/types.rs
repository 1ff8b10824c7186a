//! Riot API response shapes.
//!
//! All DTOs use camelCase wire names and tolerate absent fields via
//! `#[serde(default)]`, since Riot omits fields freely across queues
//! and patches.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Account from account-v1 (Riot ID lookup).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Account {
    /// Globally unique player identifier.
    pub puuid: String,
    /// Riot ID game name.
    pub game_name: String,
    /// Riot ID tag line.
    pub tag_line: String,
}

/// Summoner from summoner-v4.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Summoner {
    /// Encrypted summoner ID.
    pub id: String,
    /// Player identifier.
    pub puuid: String,
    /// Profile icon identifier.
    pub profile_icon_id: i32,
    /// Summoner level.
    pub summoner_level: i64,
}

/// Ranked entry from league-v4.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct LeagueEntry {
    /// Queue identifier, e.g. `RANKED_SOLO_5x5`.
    pub queue_type: String,
    /// Tier, e.g. `GOLD`.
    pub tier: String,
    /// Division within the tier, e.g. `II`.
    pub rank: String,
    /// League points.
    pub league_points: i32,
    /// Ranked wins.
    pub wins: i32,
    /// Ranked losses.
    pub losses: i32,
    /// Whether the player is on a hot streak.
    pub hot_streak: bool,
}

/// Champion mastery entry from champion-mastery-v4.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ChampionMastery {
    /// Champion identifier.
    pub champion_id: i64,
    /// Mastery level.
    pub champion_level: i32,
    /// Mastery points.
    pub champion_points: i64,
    /// Last play time in epoch milliseconds.
    pub last_play_time: i64,
}

/// A full match from match-v5.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchRecord {
    /// Match metadata.
    pub metadata: MatchMetadata,
    /// Match info. Absent in malformed payloads; such matches are skipped.
    pub info: Option<MatchInfo>,
}

/// Match metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchMetadata {
    /// Match identifier, e.g. `EUW1_7012345678`.
    pub match_id: String,
    /// Participant puuids.
    pub participants: Vec<String>,
}

/// Match info.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchInfo {
    /// Game creation in epoch milliseconds.
    pub game_creation: i64,
    /// Game duration in seconds.
    pub game_duration: i64,
    /// Game mode, e.g. `CLASSIC`.
    pub game_mode: String,
    /// Queue identifier.
    pub queue_id: i64,
    /// All ten participants.
    pub participants: Vec<Participant>,
}

/// A participant row inside match info.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Participant {
    /// Player identifier.
    pub puuid: String,
    /// Champion played.
    pub champion_name: String,
    /// Assigned team position.
    pub team_position: String,
    /// Individual position estimate.
    pub individual_position: String,
    /// Whether the participant won.
    pub win: bool,
    /// Kills.
    pub kills: i32,
    /// Deaths.
    pub deaths: i32,
    /// Assists.
    pub assists: i32,
    /// Double kills.
    pub double_kills: i32,
    /// Triple kills.
    pub triple_kills: i32,
    /// Quadra kills.
    pub quadra_kills: i32,
    /// Penta kills.
    pub penta_kills: i32,
    /// Whether the participant drew first blood.
    pub first_blood_kill: bool,
    /// Damage dealt to champions.
    pub total_damage_dealt_to_champions: i64,
    /// Gold earned.
    pub gold_earned: i64,
    /// Vision score.
    pub vision_score: i64,
    /// Lane minions killed.
    pub total_minions_killed: i32,
}

impl Participant {
    /// Resolve the played role.
    ///
    /// Prefers `teamPosition`, falls back to `individualPosition`, and
    /// defaults to `UTILITY` when both are empty.
    #[must_use]
    pub fn role(&self) -> &str {
        if !self.team_position.is_empty() {
            &self.team_position
        } else if !self.individual_position.is_empty() {
            &self.individual_position
        } else {
            "UTILITY"
        }
    }
}

/// Point totals from challenges-v1.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ChallengePoints {
    /// Current points.
    pub current: i64,
    /// Maximum attainable points.
    pub max: i64,
    /// Tier name for the point total, e.g. `GOLD`.
    pub level: String,
    /// Percentile among all players, 0.0 to 1.0.
    pub percentile: Option<f64>,
}

/// A single challenge entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ChallengeEntry {
    /// Challenge identifier.
    pub challenge_id: i64,
    /// Percentile among all players, 0.0 to 1.0.
    pub percentile: f64,
    /// Tier reached, e.g. `MASTER`.
    pub level: String,
    /// Current challenge value.
    pub value: f64,
}

/// Player challenge data from challenges-v1.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerChallenges {
    /// Overall point totals.
    pub total_points: ChallengePoints,
    /// Per-category point totals.
    pub category_points: HashMap<String, ChallengePoints>,
    /// All individual challenge entries.
    pub challenges: Vec<ChallengeEntry>,
}
