//! Dual sliding-window rate limiter.
//!
//! Riot development keys allow 20 requests per second and 100 per two
//! minutes; the default budgets here stay one request under each cap.
//! The limiter keeps a single deque of admission timestamps guarded by an
//! async mutex. The lock is held across any waiting so concurrent callers
//! serialize through the window checks and the recorded timestamp is
//! accurate at admission time.

use std::collections::VecDeque;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

use super::config::RateLimits;

/// Slack added after a long-window wait so the oldest entry has aged out.
const LONG_WINDOW_EPSILON: Duration = Duration::from_millis(100);
/// Slack added after a short-window wait.
const SHORT_WINDOW_EPSILON: Duration = Duration::from_millis(50);

/// Sliding-window request limiter shared by all endpoint calls.
#[derive(Debug)]
pub struct RateLimiter {
    limits: RateLimits,
    history: Mutex<VecDeque<Instant>>,
}

impl RateLimiter {
    /// Create a limiter with the given budgets.
    #[must_use]
    pub fn new(limits: RateLimits) -> Self {
        Self {
            limits,
            history: Mutex::new(VecDeque::new()),
        }
    }

    /// Returns the configured budgets.
    #[must_use]
    pub const fn limits(&self) -> &RateLimits {
        &self.limits
    }

    /// Wait until a request may be sent, then record it.
    ///
    /// Checks the long window first, waiting until its oldest entry ages
    /// out when the budget is exhausted, then re-prunes and checks the
    /// short window. Every admitted request is timestamped exactly once.
    pub async fn admit(&self) {
        let mut history = self.history.lock().await;

        let now = Instant::now();
        Self::prune(&mut history, now, self.limits.long_window);

        if history.len() >= self.limits.long_limit {
            if let Some(oldest) = history.front().copied() {
                let elapsed = now.duration_since(oldest);
                let wait = self.limits.long_window.saturating_sub(elapsed) + LONG_WINDOW_EPSILON;
                tracing::debug!(wait_ms = wait.as_millis() as u64, "long window exhausted");
                tokio::time::sleep(wait).await;
            }
            let now = Instant::now();
            Self::prune(&mut history, now, self.limits.long_window);
        }

        let now = Instant::now();
        let first_recent = history
            .iter()
            .position(|&t| now.duration_since(t) <= self.limits.short_window);
        if let Some(idx) = first_recent {
            let recent = history.len() - idx;
            if recent >= self.limits.short_limit {
                let oldest_recent = history[idx];
                let elapsed = now.duration_since(oldest_recent);
                let wait =
                    self.limits.short_window.saturating_sub(elapsed) + SHORT_WINDOW_EPSILON;
                tracing::debug!(wait_ms = wait.as_millis() as u64, "short window exhausted");
                tokio::time::sleep(wait).await;
            }
        }

        history.push_back(Instant::now());
    }

    /// Drop entries older than the long window.
    fn prune(history: &mut VecDeque<Instant>, now: Instant, window: Duration) {
        while history
            .front()
            .is_some_and(|&t| now.duration_since(t) > window)
        {
            history.pop_front();
        }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(RateLimits::default())
    }
}
