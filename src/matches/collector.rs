//! Exhaustive match-ID collection.
//!
//! Collection always runs to exhaustion before any detail fetching: the
//! resulting count is the ground truth for how many matches the player
//! played in the window, independent of how many are later analyzed.

use crate::error::RiotError;
use crate::riot::RiotClient;

use super::window::{match_id_timestamp_ms, SeasonWindow};

/// Match IDs requested per page. The upstream maximum.
pub const PAGE_SIZE: usize = 100;

/// Collect every match ID for a player, newest first.
///
/// Pages by the number of IDs actually returned and stops at the first
/// short or empty page. When a window is given it is passed upstream as
/// `startTime`/`endTime`, and the returned IDs are additionally filtered
/// client-side through their embedded timestamps; IDs whose timestamp
/// cannot be parsed are kept.
pub async fn collect_match_ids(
    client: &RiotClient,
    platform: &str,
    puuid: &str,
    window: Option<SeasonWindow>,
) -> Result<Vec<String>, RiotError> {
    let start_time = window.map(|w| w.start_epoch_secs);
    let end_time = window.map(|w| w.end_epoch_secs);

    let mut all_ids = Vec::new();
    let mut start = 0;
    loop {
        let page = client
            .get_match_ids(platform, puuid, start, PAGE_SIZE, start_time, end_time)
            .await?;
        let fetched = page.len();
        tracing::debug!(start, fetched, "match id page fetched");
        all_ids.extend(page);
        if fetched < PAGE_SIZE {
            break;
        }
        start += fetched;
    }

    if let Some(window) = window {
        all_ids.retain(|id| match_id_timestamp_ms(id).is_none_or(|ms| window.contains_ms(ms)));
    }

    tracing::info!(total = all_ids.len(), "match id collection complete");
    Ok(all_ids)
}
