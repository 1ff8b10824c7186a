//! Transport layer for the MCP server.
//!
//! Stdio is the only transport: stdout carries MCP JSON-RPC, stderr
//! carries logs.

use rmcp::service::{serve_server, RoleServer, RunningService};
use rmcp::transport::io::stdio;

use super::tools::WrappedServer;
use crate::error::AppError;

/// Configuration for transport options.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Maximum message size in bytes.
    pub max_message_size: usize,
    /// Read timeout in milliseconds.
    pub read_timeout_ms: u64,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            max_message_size: 10 * 1024 * 1024, // 10MB
            read_timeout_ms: 300_000,           // 5 minutes
        }
    }
}

/// Stdio transport handler.
#[derive(Debug)]
pub struct StdioTransport {
    config: TransportConfig,
}

impl StdioTransport {
    /// Creates a new stdio transport with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: TransportConfig::default(),
        }
    }

    /// Creates a new stdio transport with custom configuration.
    #[must_use]
    pub const fn with_config(config: TransportConfig) -> Self {
        Self { config }
    }

    /// Returns the transport configuration.
    #[must_use]
    pub const fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Runs the server using stdio transport.
    ///
    /// Blocks until the client disconnects or an error occurs.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to start or encounters
    /// a communication error.
    pub async fn serve(
        self,
        server: WrappedServer,
    ) -> Result<RunningService<RoleServer, WrappedServer>, AppError> {
        let (stdin, stdout) = stdio();

        serve_server(server, (stdin, stdout)).await.map_err(|e| {
            AppError::Mcp(crate::error::McpError::Internal {
                message: e.to_string(),
            })
        })
    }
}

impl Default for StdioTransport {
    fn default() -> Self {
        Self::new()
    }
}
