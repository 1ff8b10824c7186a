//! Main MCP server orchestration.

use std::sync::Arc;

use crate::config::Config;
use crate::error::AppError;
use crate::riot::{ClientConfig, RiotClient};

use super::tools::WrappedServer;
use super::transport::StdioTransport;
use super::types::AppState;

/// Main MCP server that wires configuration, client and transport.
#[derive(Debug)]
pub struct McpServer {
    /// Server configuration.
    config: Config,
}

impl McpServer {
    /// Creates a new MCP server with the given configuration.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs the server using stdio transport.
    ///
    /// Blocks until the client disconnects or an error occurs.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Riot client creation fails
    /// - Server encounters a runtime error
    pub async fn run_stdio(&self) -> Result<(), AppError> {
        let client_config = ClientConfig::default()
            .with_timeout_ms(self.config.request_timeout_ms)
            .with_max_retries(self.config.max_retries);
        let client = RiotClient::new(self.config.api_key.expose(), client_config)?;

        let state = AppState::new(client, self.config.clone());
        let server = WrappedServer::new(Arc::new(state));

        let transport = StdioTransport::new();
        let running = transport.serve(server).await?;

        let _ = running.waiting().await;

        Ok(())
    }

    /// Returns the server configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }
}
