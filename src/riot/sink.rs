//! Raw response persistence side-channel.
//!
//! Successful API payloads can be forwarded to a sink (object storage,
//! local archive) for later reprocessing. Sink failures are logged and
//! swallowed; persistence never affects a live request.

use async_trait::async_trait;

use crate::error::RiotError;

/// Destination for raw API payloads.
#[async_trait]
pub trait RawResponseSink: Send + Sync {
    /// Store one payload, keyed by the request URL and a player context
    /// string (e.g. `Name#TAG`).
    async fn store(
        &self,
        url: &str,
        payload: &serde_json::Value,
        context: &str,
    ) -> Result<(), RiotError>;
}
