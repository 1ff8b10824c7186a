//! Match aggregation.
//!
//! A [`MatchAccumulator`] is folded over match records and then finalized
//! into an immutable [`PlayerStats`]. The accumulator owns the running
//! counters and comparison sentinels; the finalized struct owns only
//! rounded, serializable results. Aggregation is pure: no I/O, and the
//! same matches always produce the same stats.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::riot::MatchRecord;

/// Round to two decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Kill/death/assist ratio.
///
/// With zero deaths the ratio is exactly `kills + assists`; otherwise
/// `(kills + assists) / deaths` rounded to two decimals.
#[must_use]
pub fn calculate_kda(kills: i32, deaths: i32, assists: i32) -> f64 {
    if deaths == 0 {
        return f64::from(kills + assists);
    }
    round2(f64::from(kills + assists) / f64::from(deaths))
}

/// A single standout game.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameHighlight {
    /// Match identifier.
    pub match_id: String,
    /// Champion played.
    pub champion: String,
    /// KDA for the game.
    pub kda: f64,
    /// Kills.
    pub kills: i32,
    /// Deaths.
    pub deaths: i32,
    /// Assists.
    pub assists: i32,
    /// Whether the game was won.
    pub win: bool,
    /// Damage dealt to champions.
    pub damage: i64,
}

/// Games played on one champion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChampionGames {
    /// Champion name.
    pub champion: String,
    /// Games played.
    pub games: u32,
}

/// Games played in one role.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoleGames {
    /// Role name, e.g. `JUNGLE`.
    pub role: String,
    /// Games played.
    pub games: u32,
}

/// Detailed per-champion statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChampionStats {
    /// Champion name.
    pub champion: String,
    /// Games played.
    pub games: u32,
    /// Games won.
    pub wins: u32,
    /// Win rate as a percentage, rounded to two decimals.
    pub winrate: f64,
    /// KDA over all games on the champion.
    pub kda: f64,
    /// Average kills per game.
    pub avg_kills: f64,
    /// Average deaths per game.
    pub avg_deaths: f64,
    /// Average assists per game.
    pub avg_assists: f64,
}

/// Aggregated statistics for one time period (month, hour or weekday).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PeriodStats {
    /// Games played in the period.
    pub games: u32,
    /// Games won in the period.
    pub wins: u32,
    /// Kills in the period.
    pub kills: i32,
    /// Deaths in the period.
    pub deaths: i32,
    /// Assists in the period.
    pub assists: i32,
    /// Penta, quadra and triple kills summed.
    pub multikills: i32,
    /// Win rate as a percentage, 0 when no games were played.
    pub winrate: f64,
    /// KDA over the period's games.
    pub kda: f64,
}

/// Finalized player statistics for one set of matches.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlayerStats {
    /// Matches that were actually aggregated.
    pub total_games: u32,
    /// Games won.
    pub wins: u32,
    /// Games lost.
    pub losses: u32,
    /// Win rate as a percentage, rounded to two decimals.
    pub winrate: f64,
    /// Total kills.
    pub total_kills: i32,
    /// Total deaths.
    pub total_deaths: i32,
    /// Total assists.
    pub total_assists: i32,
    /// KDA over all games.
    pub avg_kda: f64,
    /// Average kills per game.
    pub avg_kills: f64,
    /// Average deaths per game.
    pub avg_deaths: f64,
    /// Average assists per game.
    pub avg_assists: f64,
    /// Average game length in minutes.
    pub avg_game_duration: f64,
    /// Total playtime in whole minutes (per-game durations truncated).
    pub total_playtime_minutes: i64,
    /// Penta kills across all games.
    pub pentakills: i32,
    /// Quadra kills across all games.
    pub quadrakills: i32,
    /// Triple kills across all games.
    pub triplekills: i32,
    /// Games where the player drew first blood.
    pub first_bloods: u32,
    /// Highest-KDA game. First seen wins ties.
    pub best_game: Option<GameHighlight>,
    /// Lowest-KDA game. First seen wins ties.
    pub worst_game: Option<GameHighlight>,
    /// Most-played champions, up to ten, by games descending.
    pub top_champions: Vec<ChampionGames>,
    /// All roles played, by games descending.
    pub top_roles: Vec<RoleGames>,
    /// Detailed stats for the ten most-played champions.
    pub champion_details: Vec<ChampionStats>,
    /// Per-month stats keyed `YYYY-MM`. Keys iterate in calendar order.
    pub monthly: BTreeMap<String, PeriodStats>,
    /// Per-hour-of-day stats, index 0 to 23.
    pub hourly: Vec<PeriodStats>,
    /// Per-weekday stats, index 0 = Monday.
    pub weekdays: Vec<PeriodStats>,
}

#[derive(Debug, Default, Clone)]
struct ChampionAccumulator {
    games: u32,
    wins: u32,
    kills: i32,
    deaths: i32,
    assists: i32,
}

#[derive(Debug, Default, Clone)]
struct PeriodAccumulator {
    games: u32,
    wins: u32,
    kills: i32,
    deaths: i32,
    assists: i32,
    multikills: i32,
}

impl PeriodAccumulator {
    fn record(&mut self, won: bool, kills: i32, deaths: i32, assists: i32, multikills: i32) {
        self.games += 1;
        if won {
            self.wins += 1;
        }
        self.kills += kills;
        self.deaths += deaths;
        self.assists += assists;
        self.multikills += multikills;
    }

    fn finalize(&self) -> PeriodStats {
        if self.games == 0 {
            return PeriodStats::default();
        }
        PeriodStats {
            games: self.games,
            wins: self.wins,
            kills: self.kills,
            deaths: self.deaths,
            assists: self.assists,
            multikills: self.multikills,
            winrate: round2(f64::from(self.wins) / f64::from(self.games) * 100.0),
            kda: calculate_kda(self.kills, self.deaths, self.assists),
        }
    }
}

/// Running aggregation state.
#[derive(Debug)]
pub struct MatchAccumulator {
    total_games: u32,
    wins: u32,
    losses: u32,
    total_kills: i32,
    total_deaths: i32,
    total_assists: i32,
    playtime_minutes: i64,
    pentakills: i32,
    quadrakills: i32,
    triplekills: i32,
    first_bloods: u32,
    best_kda: f64,
    worst_kda: f64,
    best_game: Option<GameHighlight>,
    worst_game: Option<GameHighlight>,
    champions: HashMap<String, ChampionAccumulator>,
    roles: HashMap<String, u32>,
    monthly: BTreeMap<String, PeriodAccumulator>,
    hourly: [PeriodAccumulator; 24],
    weekdays: [PeriodAccumulator; 7],
}

impl MatchAccumulator {
    /// Create an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            total_games: 0,
            wins: 0,
            losses: 0,
            total_kills: 0,
            total_deaths: 0,
            total_assists: 0,
            playtime_minutes: 0,
            pentakills: 0,
            quadrakills: 0,
            triplekills: 0,
            first_bloods: 0,
            // Sentinels: any real KDA beats both
            best_kda: -1.0,
            worst_kda: f64::INFINITY,
            best_game: None,
            worst_game: None,
            champions: HashMap::new(),
            roles: HashMap::new(),
            monthly: BTreeMap::new(),
            hourly: std::array::from_fn(|_| PeriodAccumulator::default()),
            weekdays: std::array::from_fn(|_| PeriodAccumulator::default()),
        }
    }

    /// Fold one match into the running state.
    ///
    /// Matches without an `info` block, or where the subject does not
    /// appear among the participants, are skipped entirely and count
    /// toward nothing.
    pub fn record(&mut self, record: &MatchRecord, puuid: &str) {
        let Some(info) = &record.info else { return };
        let Some(player) = info.participants.iter().find(|p| p.puuid == puuid) else {
            return;
        };

        let won = player.win;
        let (kills, deaths, assists) = (player.kills, player.deaths, player.assists);

        self.total_games += 1;
        if won {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
        self.total_kills += kills;
        self.total_deaths += deaths;
        self.total_assists += assists;
        self.playtime_minutes += info.game_duration / 60;

        self.pentakills += player.penta_kills;
        self.quadrakills += player.quadra_kills;
        self.triplekills += player.triple_kills;
        if player.first_blood_kill {
            self.first_bloods += 1;
        }

        let champ = self
            .champions
            .entry(player.champion_name.clone())
            .or_default();
        champ.games += 1;
        champ.kills += kills;
        champ.deaths += deaths;
        champ.assists += assists;
        if won {
            champ.wins += 1;
        }

        *self.roles.entry(player.role().to_string()).or_insert(0) += 1;

        let kda = calculate_kda(kills, deaths, assists);
        if kda > self.best_kda {
            self.best_kda = kda;
            self.best_game = Some(GameHighlight {
                match_id: record.metadata.match_id.clone(),
                champion: player.champion_name.clone(),
                kda,
                kills,
                deaths,
                assists,
                win: won,
                damage: player.total_damage_dealt_to_champions,
            });
        }
        if kda < self.worst_kda {
            self.worst_kda = kda;
            self.worst_game = Some(GameHighlight {
                match_id: record.metadata.match_id.clone(),
                champion: player.champion_name.clone(),
                kda,
                kills,
                deaths,
                assists,
                win: won,
                damage: player.total_damage_dealt_to_champions,
            });
        }

        let multikills = player.penta_kills + player.quadra_kills + player.triple_kills;
        if let Some(played_at) = DateTime::<Utc>::from_timestamp_millis(info.game_creation) {
            let month_key = played_at.format("%Y-%m").to_string();
            self.monthly
                .entry(month_key)
                .or_default()
                .record(won, kills, deaths, assists, multikills);
            self.hourly[played_at.hour() as usize].record(won, kills, deaths, assists, multikills);
            self.weekdays[played_at.weekday().num_days_from_monday() as usize]
                .record(won, kills, deaths, assists, multikills);
        }
    }

    /// Finish aggregation and produce immutable stats.
    #[must_use]
    pub fn finalize(self) -> PlayerStats {
        let mut stats = PlayerStats {
            total_games: self.total_games,
            wins: self.wins,
            losses: self.losses,
            total_kills: self.total_kills,
            total_deaths: self.total_deaths,
            total_assists: self.total_assists,
            total_playtime_minutes: self.playtime_minutes,
            pentakills: self.pentakills,
            quadrakills: self.quadrakills,
            triplekills: self.triplekills,
            first_bloods: self.first_bloods,
            best_game: self.best_game,
            worst_game: self.worst_game,
            monthly: self
                .monthly
                .iter()
                .map(|(key, acc)| (key.clone(), acc.finalize()))
                .collect(),
            hourly: self.hourly.iter().map(PeriodAccumulator::finalize).collect(),
            weekdays: self
                .weekdays
                .iter()
                .map(PeriodAccumulator::finalize)
                .collect(),
            ..PlayerStats::default()
        };

        if self.total_games > 0 {
            let games = f64::from(self.total_games);
            stats.winrate = round2(f64::from(self.wins) / games * 100.0);
            stats.avg_kda =
                calculate_kda(self.total_kills, self.total_deaths, self.total_assists);
            stats.avg_kills = round2(f64::from(self.total_kills) / games);
            stats.avg_deaths = round2(f64::from(self.total_deaths) / games);
            stats.avg_assists = round2(f64::from(self.total_assists) / games);
            #[allow(clippy::cast_precision_loss)]
            {
                stats.avg_game_duration = round2(self.playtime_minutes as f64 / games);
            }
        }

        // Ties sort by name so the output is deterministic
        let mut by_games: Vec<(&String, &ChampionAccumulator)> = self.champions.iter().collect();
        by_games.sort_by(|a, b| b.1.games.cmp(&a.1.games).then_with(|| a.0.cmp(b.0)));

        stats.top_champions = by_games
            .iter()
            .take(10)
            .map(|(name, acc)| ChampionGames {
                champion: (*name).clone(),
                games: acc.games,
            })
            .collect();

        stats.champion_details = by_games
            .iter()
            .take(10)
            .map(|(name, acc)| {
                let games = f64::from(acc.games);
                ChampionStats {
                    champion: (*name).clone(),
                    games: acc.games,
                    wins: acc.wins,
                    winrate: round2(f64::from(acc.wins) / games * 100.0),
                    kda: calculate_kda(acc.kills, acc.deaths, acc.assists),
                    avg_kills: round2(f64::from(acc.kills) / games),
                    avg_deaths: round2(f64::from(acc.deaths) / games),
                    avg_assists: round2(f64::from(acc.assists) / games),
                }
            })
            .collect();

        let mut roles: Vec<(&String, &u32)> = self.roles.iter().collect();
        roles.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        stats.top_roles = roles
            .into_iter()
            .map(|(role, games)| RoleGames {
                role: role.clone(),
                games: *games,
            })
            .collect();

        stats
    }
}

impl Default for MatchAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregate a set of matches for one player.
#[must_use]
pub fn aggregate(matches: &[MatchRecord], puuid: &str) -> PlayerStats {
    let mut acc = MatchAccumulator::new();
    for record in matches {
        acc.record(record, puuid);
    }
    acc.finalize()
}
