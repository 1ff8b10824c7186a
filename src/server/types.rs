//! Server types and shared state.

use std::sync::Arc;

use crate::config::Config;
use crate::riot::RiotClient;

/// Shared application state for all tool handlers.
#[derive(Clone)]
pub struct AppState {
    /// Rate-limited Riot API client shared by every tool call.
    pub client: Arc<RiotClient>,
    /// Server configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new application state.
    #[must_use]
    pub fn new(client: RiotClient, config: Config) -> Self {
        Self {
            client: Arc::new(client),
            config: Arc::new(config),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
