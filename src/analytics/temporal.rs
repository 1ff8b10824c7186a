//! Temporal pattern extraction.
//!
//! Pure derivation over the per-month, per-hour and per-weekday
//! accumulators produced by aggregation. Superlatives that compare rates
//! (win rate, KDA) require a minimum sample size; a period below the
//! floor is ineligible no matter how good its rate looks. Categories with
//! no qualifying data are `None`, never zero-valued placeholders.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::aggregate::PeriodStats;

/// Minimum games a period needs before rate-based superlatives apply.
pub const MIN_PERIOD_GAMES: u32 = 5;

/// Weekday names indexed 0 = Monday.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Time-of-day buckets in tie-break order, with their inclusive hour ranges.
const DAYPARTS: [(&str, u32, u32); 4] = [
    ("morning", 6, 11),
    ("afternoon", 12, 17),
    ("evening", 18, 23),
    ("night", 0, 5),
];

/// A standout calendar month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthHighlight {
    /// Month key, `YYYY-MM`.
    pub month: String,
    /// Games played that month.
    pub games: u32,
    /// Win rate that month, as a percentage.
    pub winrate: f64,
    /// KDA that month.
    pub kda: f64,
}

/// The month with the most multi-kills.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MultikillMonth {
    /// Month key, `YYYY-MM`.
    pub month: String,
    /// Penta, quadra and triple kills summed over the month.
    pub multikills: i32,
}

/// The busiest hour of the day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HourHighlight {
    /// Hour of day, 0 to 23, UTC.
    pub hour: u8,
    /// Games started in that hour.
    pub games: u32,
}

/// The favorite part of the day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DaypartHighlight {
    /// Bucket name: morning, afternoon, evening or night.
    pub daypart: String,
    /// Games started in the bucket.
    pub games: u32,
}

/// A standout weekday.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeekdayHighlight {
    /// Weekday name.
    pub weekday: String,
    /// Games played on that weekday.
    pub games: u32,
    /// Win rate on that weekday, as a percentage.
    pub winrate: f64,
}

/// Temporal superlatives derived at finalization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TemporalSummary {
    /// Month with the most games.
    pub most_active_month: Option<MonthHighlight>,
    /// Month with the highest win rate among months with enough games.
    pub best_winrate_month: Option<MonthHighlight>,
    /// Month with the highest KDA among months with enough games.
    pub best_kda_month: Option<MonthHighlight>,
    /// Month with the most multi-kills, absent when there were none.
    pub best_multikill_month: Option<MultikillMonth>,
    /// Hour of day with the most games.
    pub peak_hour: Option<HourHighlight>,
    /// Time-of-day bucket with the most games.
    pub favorite_time_of_day: Option<DaypartHighlight>,
    /// Weekday with the most games.
    pub most_active_weekday: Option<WeekdayHighlight>,
    /// Weekday with the highest win rate among weekdays with enough games.
    pub best_winrate_weekday: Option<WeekdayHighlight>,
}

fn month_highlight(month: &str, stats: &PeriodStats) -> MonthHighlight {
    MonthHighlight {
        month: month.to_string(),
        games: stats.games,
        winrate: stats.winrate,
        kda: stats.kda,
    }
}

fn weekday_highlight(index: usize, stats: &PeriodStats) -> WeekdayHighlight {
    WeekdayHighlight {
        weekday: WEEKDAY_NAMES[index].to_string(),
        games: stats.games,
        winrate: stats.winrate,
    }
}

/// Derive temporal superlatives from the per-period stats.
///
/// Month iteration is in key order, so ties on games or rates resolve to
/// the earliest month. Hour and weekday ties resolve to the lowest index,
/// daypart ties to the first-listed bucket.
#[must_use]
pub fn analyze(
    monthly: &BTreeMap<String, PeriodStats>,
    hourly: &[PeriodStats],
    weekdays: &[PeriodStats],
) -> TemporalSummary {
    let mut summary = TemporalSummary::default();

    for (month, stats) in monthly {
        if stats.games == 0 {
            continue;
        }
        if summary
            .most_active_month
            .as_ref()
            .is_none_or(|best| stats.games > best.games)
        {
            summary.most_active_month = Some(month_highlight(month, stats));
        }
        if stats.multikills > 0
            && summary
                .best_multikill_month
                .as_ref()
                .is_none_or(|best| stats.multikills > best.multikills)
        {
            summary.best_multikill_month = Some(MultikillMonth {
                month: month.clone(),
                multikills: stats.multikills,
            });
        }
        if stats.games >= MIN_PERIOD_GAMES {
            if summary
                .best_winrate_month
                .as_ref()
                .is_none_or(|best| stats.winrate > best.winrate)
            {
                summary.best_winrate_month = Some(month_highlight(month, stats));
            }
            if summary
                .best_kda_month
                .as_ref()
                .is_none_or(|best| stats.kda > best.kda)
            {
                summary.best_kda_month = Some(month_highlight(month, stats));
            }
        }
    }

    for (hour, stats) in hourly.iter().enumerate().take(24) {
        if stats.games > 0
            && summary
                .peak_hour
                .as_ref()
                .is_none_or(|best| stats.games > best.games)
        {
            #[allow(clippy::cast_possible_truncation)]
            let hour = hour as u8;
            summary.peak_hour = Some(HourHighlight {
                hour,
                games: stats.games,
            });
        }
    }

    for (name, first_hour, last_hour) in DAYPARTS {
        let games: u32 = hourly
            .iter()
            .enumerate()
            .filter(|(hour, _)| {
                let hour = u32::try_from(*hour).unwrap_or(u32::MAX);
                hour >= first_hour && hour <= last_hour
            })
            .map(|(_, stats)| stats.games)
            .sum();
        if games > 0
            && summary
                .favorite_time_of_day
                .as_ref()
                .is_none_or(|best| games > best.games)
        {
            summary.favorite_time_of_day = Some(DaypartHighlight {
                daypart: name.to_string(),
                games,
            });
        }
    }

    for (index, stats) in weekdays.iter().enumerate().take(WEEKDAY_NAMES.len()) {
        if stats.games == 0 {
            continue;
        }
        if summary
            .most_active_weekday
            .as_ref()
            .is_none_or(|best| stats.games > best.games)
        {
            summary.most_active_weekday = Some(weekday_highlight(index, stats));
        }
        if stats.games >= MIN_PERIOD_GAMES
            && summary
                .best_winrate_weekday
                .as_ref()
                .is_none_or(|best| stats.winrate > best.winrate)
        {
            summary.best_winrate_weekday = Some(weekday_highlight(index, stats));
        }
    }

    summary
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn period(games: u32, wins: u32) -> PeriodStats {
        PeriodStats {
            games,
            wins,
            kills: i32::try_from(games).unwrap() * 5,
            deaths: i32::try_from(games).unwrap() * 2,
            assists: i32::try_from(games).unwrap() * 5,
            multikills: 0,
            winrate: if games == 0 {
                0.0
            } else {
                f64::from(wins) / f64::from(games) * 100.0
            },
            kda: 5.0,
        }
    }

    fn hours_with(entries: &[(usize, PeriodStats)]) -> Vec<PeriodStats> {
        let mut hours = vec![PeriodStats::default(); 24];
        for (hour, stats) in entries {
            hours[*hour] = stats.clone();
        }
        hours
    }

    fn weekdays_with(entries: &[(usize, PeriodStats)]) -> Vec<PeriodStats> {
        let mut days = vec![PeriodStats::default(); 7];
        for (day, stats) in entries {
            days[*day] = stats.clone();
        }
        days
    }

    #[test]
    fn test_empty_input_has_no_superlatives() {
        let summary = analyze(&BTreeMap::new(), &vec![PeriodStats::default(); 24], &vec![
            PeriodStats::default();
            7
        ]);
        assert_eq!(summary, TemporalSummary::default());
    }

    #[test]
    fn test_most_active_month_ignores_sample_floor() {
        let mut monthly = BTreeMap::new();
        monthly.insert("2025-01".to_string(), period(3, 2));
        monthly.insert("2025-02".to_string(), period(2, 0));
        let summary = analyze(&monthly, &[], &[]);

        let active = summary.most_active_month.unwrap();
        assert_eq!(active.month, "2025-01");
        assert_eq!(active.games, 3);
        assert!(summary.best_winrate_month.is_none());
        assert!(summary.best_kda_month.is_none());
    }

    #[test]
    fn test_winrate_month_needs_five_games() {
        // January has the better rate but only 3 games; February qualifies
        let mut monthly = BTreeMap::new();
        let mut january = period(3, 3);
        january.winrate = 100.0;
        let february = period(6, 5);
        monthly.insert("2025-01".to_string(), january);
        monthly.insert("2025-02".to_string(), february);
        let summary = analyze(&monthly, &[], &[]);

        assert_eq!(summary.most_active_month.unwrap().month, "2025-02");
        assert_eq!(summary.best_winrate_month.unwrap().month, "2025-02");
    }

    #[test]
    fn test_month_ties_resolve_to_earliest_key() {
        let mut monthly = BTreeMap::new();
        monthly.insert("2025-03".to_string(), period(5, 4));
        monthly.insert("2025-01".to_string(), period(5, 4));
        let summary = analyze(&monthly, &[], &[]);
        assert_eq!(summary.most_active_month.unwrap().month, "2025-01");
        assert_eq!(summary.best_winrate_month.unwrap().month, "2025-01");
    }

    #[test]
    fn test_multikill_month_absent_when_none() {
        let mut monthly = BTreeMap::new();
        monthly.insert("2025-01".to_string(), period(10, 5));
        let summary = analyze(&monthly, &[], &[]);
        assert!(summary.best_multikill_month.is_none());
    }

    #[test]
    fn test_multikill_month_picks_highest_sum() {
        let mut monthly = BTreeMap::new();
        let mut january = period(5, 3);
        january.multikills = 2;
        let mut june = period(4, 2);
        june.multikills = 7;
        monthly.insert("2025-01".to_string(), january);
        monthly.insert("2025-06".to_string(), june);
        let summary = analyze(&monthly, &[], &[]);

        let best = summary.best_multikill_month.unwrap();
        assert_eq!(best.month, "2025-06");
        assert_eq!(best.multikills, 7);
    }

    #[test]
    fn test_peak_hour_and_daypart() {
        let hourly = hours_with(&[(9, period(2, 1)), (21, period(6, 4)), (22, period(1, 0))]);
        let summary = analyze(&BTreeMap::new(), &hourly, &[]);

        let peak = summary.peak_hour.unwrap();
        assert_eq!(peak.hour, 21);
        assert_eq!(peak.games, 6);

        let favorite = summary.favorite_time_of_day.unwrap();
        assert_eq!(favorite.daypart, "evening");
        assert_eq!(favorite.games, 7);
    }

    #[test]
    fn test_daypart_ties_prefer_declared_order() {
        // morning and night at 3 games each; morning is listed first
        let hourly = hours_with(&[(7, period(3, 2)), (2, period(3, 1))]);
        let summary = analyze(&BTreeMap::new(), &hourly, &[]);
        assert_eq!(summary.favorite_time_of_day.unwrap().daypart, "morning");
    }

    #[test]
    fn test_weekday_superlatives() {
        let weekdays = weekdays_with(&[(0, period(2, 2)), (5, period(6, 5)), (6, period(5, 2))]);
        let summary = analyze(&BTreeMap::new(), &[], &weekdays);

        let active = summary.most_active_weekday.unwrap();
        assert_eq!(active.weekday, "Saturday");
        assert_eq!(active.games, 6);

        // Monday's 100% rate is under the floor; Saturday beats Sunday
        let best = summary.best_winrate_weekday.unwrap();
        assert_eq!(best.weekday, "Saturday");
    }

    #[test]
    fn test_all_periods_under_floor_yield_none_for_rates() {
        let mut monthly = BTreeMap::new();
        monthly.insert("2025-01".to_string(), period(4, 4));
        let weekdays = weekdays_with(&[(2, period(4, 4))]);
        let summary = analyze(&monthly, &[], &weekdays);

        assert!(summary.most_active_month.is_some());
        assert!(summary.most_active_weekday.is_some());
        assert!(summary.best_winrate_month.is_none());
        assert!(summary.best_kda_month.is_none());
        assert!(summary.best_winrate_weekday.is_none());
    }
}
