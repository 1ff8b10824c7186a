//! Human-readable highlights.
//!
//! Each insight is governed by a fixed threshold rule and the rules run
//! in a fixed order, so the same stats always produce the same list. An
//! insight whose guard does not hold is simply absent.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::riot::PlayerChallenges;

use super::aggregate::PlayerStats;
use super::temporal::TemporalSummary;

/// Win rate at or above this reads as a strong year.
const WINRATE_DOMINANT: f64 = 55.0;
/// Win rate at or above this reads as a positive year.
const WINRATE_POSITIVE: f64 = 50.0;
/// Hours of playtime worth calling out.
const HOURS_CALLOUT: i64 = 100;
/// First bloods worth calling out.
const FIRST_BLOOD_CALLOUT: u32 = 10;
/// A category percentile at or above this is a real strength.
const STRONG_CATEGORY_PERCENTILE: f64 = 0.75;
/// Active challenge count worth calling out.
const ACTIVE_CHALLENGE_CALLOUT: usize = 50;

fn plural(count: i32) -> &'static str {
    if count == 1 { "" } else { "s" }
}

/// Compose the ordered insight list for one year of play.
///
/// `total_in_period` and `analyzed` describe how much of the year's match
/// list was actually fetched; when both are present a coverage note leads
/// the list. An empty year produces no insights at all.
#[must_use]
pub fn compose(
    stats: &PlayerStats,
    temporal: &TemporalSummary,
    total_in_period: Option<usize>,
    analyzed: Option<usize>,
) -> Vec<String> {
    let mut insights = Vec::new();

    if let (Some(total), Some(analyzed)) = (total_in_period, analyzed) {
        if total > 0 {
            if analyzed >= total {
                insights.push(format!("Analyzed all {total} games you played this year"));
            } else {
                insights.push(format!(
                    "Analyzed {analyzed} of the {total} games you played this year"
                ));
            }
        }
    }

    if stats.total_games == 0 {
        return insights;
    }

    insights.push(format!("You played {} games this year!", stats.total_games));

    let hours = stats.total_playtime_minutes / 60;
    if hours >= HOURS_CALLOUT {
        insights.push(format!("You spent {hours} hours on the Rift!"));
    }

    if stats.winrate >= WINRATE_DOMINANT {
        insights.push(format!("You dominated with a {}% win rate!", stats.winrate));
    } else if stats.winrate >= WINRATE_POSITIVE {
        insights.push(format!("You kept a positive {}% win rate!", stats.winrate));
    } else {
        insights.push(format!(
            "A tough year at {}% win rate, next year will be better!",
            stats.winrate
        ));
    }

    if let Some(main) = stats.top_champions.first() {
        insights.push(format!(
            "Your main champion was {} with {} games",
            main.champion, main.games
        ));
    }

    if stats.avg_kda >= 3.0 {
        insights.push(format!("An impressive {} KDA!", stats.avg_kda));
    } else if stats.avg_kda >= 2.0 {
        insights.push(format!("A solid {} KDA", stats.avg_kda));
    }

    if stats.pentakills > 0 {
        insights.push(format!(
            "You scored {} pentakill{}!",
            stats.pentakills,
            plural(stats.pentakills)
        ));
    } else if stats.quadrakills > 0 {
        insights.push(format!(
            "You scored {} quadrakill{}!",
            stats.quadrakills,
            plural(stats.quadrakills)
        ));
    }

    if stats.first_bloods >= FIRST_BLOOD_CALLOUT {
        insights.push(format!(
            "You drew first blood {} times, setting the pace early",
            stats.first_bloods
        ));
    }

    if let Some(best) = &stats.best_game {
        insights.push(format!(
            "Your best game: {}/{}/{} with {} (KDA: {})",
            best.kills, best.deaths, best.assists, best.champion, best.kda
        ));
    }

    if let Some(month) = &temporal.most_active_month {
        insights.push(format!(
            "Your most active month was {} with {} games",
            month.month, month.games
        ));
    }
    if let Some(month) = &temporal.best_multikill_month {
        insights.push(format!(
            "{} was your multi-kill month with {} of them",
            month.month, month.multikills
        ));
    }
    if let Some(month) = &temporal.best_winrate_month {
        if month.winrate >= WINRATE_DOMINANT {
            insights.push(format!(
                "In {} you won {}% of your games",
                month.month, month.winrate
            ));
        }
    }
    if let Some(daypart) = &temporal.favorite_time_of_day {
        insights.push(format!(
            "You mostly played in the {} ({} games)",
            daypart.daypart, daypart.games
        ));
    }
    if let Some(weekday) = &temporal.most_active_weekday {
        insights.push(format!(
            "{} was your favorite day to play ({} games)",
            weekday.weekday, weekday.games
        ));
    }
    if let Some(weekday) = &temporal.best_winrate_weekday {
        if weekday.winrate >= WINRATE_DOMINANT {
            insights.push(format!(
                "You won {}% of your {} games",
                weekday.winrate, weekday.weekday
            ));
        }
    }

    insights
}

/// One challenge in the top list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChallengeHighlight {
    /// Challenge identifier.
    pub challenge_id: i64,
    /// Tier reached, e.g. `DIAMOND`.
    pub level: String,
    /// Population percentile, 0 to 1, higher is better.
    pub percentile: f64,
    /// Raw challenge value.
    pub value: f64,
}

/// One challenge category's points.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorySummary {
    /// Current points in the category.
    pub current: i64,
    /// Tier reached in the category.
    pub level: String,
    /// Maximum obtainable points.
    pub max: i64,
    /// Population percentile, 0 when the upstream omits it.
    pub percentile: f64,
}

/// Aggregated challenge progress for one player.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ChallengeSummary {
    /// Total challenge points.
    pub total_points: i64,
    /// Overall challenge tier.
    pub total_level: String,
    /// Challenges with a nonzero value. Only these count anywhere below.
    pub active_challenges: usize,
    /// Active challenges in the 99th percentile or above.
    pub top_1_percent: u32,
    /// Active challenges in the 95th percentile, below the 99th.
    pub top_5_percent: u32,
    /// Active challenges in the 90th percentile, below the 95th.
    pub top_10_percent: u32,
    /// The five highest-percentile active challenges.
    pub top_challenges: Vec<ChallengeHighlight>,
    /// Per-category points, keyed by category name.
    pub category_breakdown: BTreeMap<String, CategorySummary>,
    /// Number of active challenges held at each tier.
    pub level_counts: BTreeMap<String, u32>,
}

/// Summarize raw challenge data.
#[must_use]
pub fn analyze_challenges(data: &PlayerChallenges) -> ChallengeSummary {
    let mut summary = ChallengeSummary {
        total_points: data.total_points.current,
        total_level: data.total_points.level.clone(),
        ..ChallengeSummary::default()
    };

    // Untouched challenges (value 0) count toward nothing
    for entry in &data.challenges {
        if entry.value <= 0.0 {
            continue;
        }
        summary.active_challenges += 1;
        if entry.percentile >= 0.99 {
            summary.top_1_percent += 1;
        } else if entry.percentile >= 0.95 {
            summary.top_5_percent += 1;
        } else if entry.percentile >= 0.90 {
            summary.top_10_percent += 1;
        }
        *summary.level_counts.entry(entry.level.clone()).or_insert(0) += 1;
    }

    let mut ranked: Vec<&crate::riot::ChallengeEntry> = data
        .challenges
        .iter()
        .filter(|entry| entry.value > 0.0)
        .collect();
    ranked.sort_by(|a, b| {
        b.percentile
            .partial_cmp(&a.percentile)
            .unwrap_or(Ordering::Equal)
    });
    summary.top_challenges = ranked
        .into_iter()
        .take(5)
        .map(|entry| ChallengeHighlight {
            challenge_id: entry.challenge_id,
            level: entry.level.clone(),
            percentile: entry.percentile,
            value: entry.value,
        })
        .collect();

    summary.category_breakdown = data
        .category_points
        .iter()
        .map(|(category, points)| {
            (
                category.clone(),
                CategorySummary {
                    current: points.current,
                    level: points.level.clone(),
                    max: points.max,
                    percentile: points.percentile.unwrap_or(0.0),
                },
            )
        })
        .collect();

    summary
}

/// Compose the ordered challenge insight list.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn challenge_insights(summary: &ChallengeSummary) -> Vec<String> {
    let mut insights = Vec::new();

    if summary.total_points > 0 {
        insights.push(format!(
            "You earned {} challenge points",
            summary.total_points
        ));
    }
    if !summary.total_level.is_empty() && summary.total_level != "NONE" {
        insights.push(format!(
            "Your overall challenge rank is {}",
            summary.total_level
        ));
    }
    // Each tier line stands on its own; a player can hold all three
    if summary.top_1_percent > 0 {
        insights.push(format!(
            "Top 1% of players in {} challenge{}",
            summary.top_1_percent,
            if summary.top_1_percent == 1 { "" } else { "s" }
        ));
    }
    if summary.top_5_percent > 0 {
        insights.push(format!(
            "Top 5% of players in {} challenge{}",
            summary.top_5_percent,
            if summary.top_5_percent == 1 { "" } else { "s" }
        ));
    }
    if summary.top_10_percent > 0 {
        insights.push(format!(
            "Top 10% of players in {} challenge{}",
            summary.top_10_percent,
            if summary.top_10_percent == 1 { "" } else { "s" }
        ));
    }

    let elite: u32 = ["MASTER", "GRANDMASTER", "CHALLENGER"]
        .iter()
        .filter_map(|tier| summary.level_counts.get(*tier))
        .sum();
    if elite > 0 {
        insights.push(format!(
            "You hold {elite} challenge{} at Master tier or above",
            if elite == 1 { "" } else { "s" }
        ));
    }

    let best_category = summary.category_breakdown.iter().max_by(|a, b| {
        a.1.percentile
            .partial_cmp(&b.1.percentile)
            .unwrap_or(Ordering::Equal)
    });
    if let Some((category, points)) = best_category {
        if points.percentile >= STRONG_CATEGORY_PERCENTILE {
            let top = ((1.0 - points.percentile) * 100.0) as u32;
            insights.push(format!(
                "Your strongest category is {category} (Top {top}%)"
            ));
        }
    }

    if summary.active_challenges > ACTIVE_CHALLENGE_CALLOUT {
        insights.push(format!(
            "You're actively progressing {} challenges",
            summary.active_challenges
        ));
    }

    insights
}
