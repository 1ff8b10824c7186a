//! Bounded-concurrency match detail fetching.

use futures_util::stream::{self, StreamExt};

use crate::riot::{MatchRecord, RiotClient};

/// In-flight detail requests. The rate limiter is the real throttle; this
/// just keeps memory bounded.
pub const DETAIL_CONCURRENCY: usize = 5;

/// Fetch full details for the given match IDs.
///
/// Failures on individual matches are logged and skipped; the returned
/// records keep the input order. Losing a handful of matches degrades a
/// yearly report marginally, while one bad match failing the whole run
/// would waste the entire collection budget.
pub async fn fetch_match_details(
    client: &RiotClient,
    platform: &str,
    match_ids: &[String],
) -> Vec<MatchRecord> {
    let results: Vec<Option<MatchRecord>> = stream::iter(match_ids.iter().cloned().map(|match_id| {
        async move {
            match client.get_match(platform, &match_id).await {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(match_id = %match_id, error = %e, "Skipping match");
                    None
                }
            }
        }
    }))
    .buffered(DETAIL_CONCURRENCY)
    .collect()
    .await;

    let total = match_ids.len();
    let records: Vec<MatchRecord> = results.into_iter().flatten().collect();
    if records.len() < total {
        tracing::warn!(
            requested = total,
            fetched = records.len(),
            "Some match details could not be fetched"
        );
    }
    records
}
