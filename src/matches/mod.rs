//! Match acquisition pipeline.
//!
//! Two phases, strictly ordered: exhaustive match-ID collection (which
//! establishes the ground-truth match count for the window), then bounded
//! detail fetching for the subset that will be analyzed.

mod collector;
mod details;
mod window;

pub use collector::{collect_match_ids, PAGE_SIZE};
pub use details::{fetch_match_details, DETAIL_CONCURRENCY};
pub use window::{match_id_timestamp_ms, SeasonWindow};
