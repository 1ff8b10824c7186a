//! Season windows and match-ID timestamps.

use chrono::NaiveDate;

/// A `[start, end)` UTC time window covering one calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonWindow {
    /// The calendar year.
    pub year: i32,
    /// Start of the window in epoch seconds (Jan 1, 00:00:00 UTC).
    pub start_epoch_secs: i64,
    /// End of the window in epoch seconds, exclusive (next Jan 1).
    pub end_epoch_secs: i64,
}

impl SeasonWindow {
    /// Build the window for a calendar year.
    ///
    /// Returns `None` for years outside chrono's representable range.
    #[must_use]
    pub fn for_year(year: i32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1)?
            .and_hms_opt(0, 0, 0)?
            .and_utc()
            .timestamp();
        let end = NaiveDate::from_ymd_opt(year + 1, 1, 1)?
            .and_hms_opt(0, 0, 0)?
            .and_utc()
            .timestamp();
        Some(Self {
            year,
            start_epoch_secs: start,
            end_epoch_secs: end,
        })
    }

    /// Whether an epoch-millisecond timestamp falls inside the window.
    #[must_use]
    pub const fn contains_ms(&self, timestamp_ms: i64) -> bool {
        timestamp_ms >= self.start_epoch_secs * 1000 && timestamp_ms < self.end_epoch_secs * 1000
    }
}

/// Extract the embedded timestamp from a match ID.
///
/// Match IDs look like `EUW1_1704067200000`: a platform prefix and a
/// numeric part interpretable as epoch milliseconds. Returns `None` when
/// the ID does not follow that shape, in which case callers keep the
/// match rather than guessing.
#[must_use]
pub fn match_id_timestamp_ms(match_id: &str) -> Option<i64> {
    let (_, numeric) = match_id.split_once('_')?;
    numeric.parse().ok()
}
