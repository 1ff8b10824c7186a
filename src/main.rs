//! LoL Wrapped MCP server binary entry point.
//!
//! This binary provides a stdio-based MCP server for League of Legends
//! yearly stats. All logs go to stderr; stdout is reserved for MCP
//! JSON-RPC messages.

use lol_wrapped::config::Config;
use lol_wrapped::server::McpServer;

#[tokio::main]
async fn main() {
    // Initialize logging to stderr only (stdout is for MCP JSON-RPC)
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string())
                .parse()
                .unwrap_or_else(|_| tracing_subscriber::filter::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("lol-wrapped starting...");

    // Load configuration from environment
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Configuration loaded: region={}, timeout={}ms",
        config.default_region,
        config.request_timeout_ms
    );

    // Create and run server
    let server = McpServer::new(config);
    if let Err(e) = server.run_stdio().await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }

    tracing::info!("lol-wrapped shutdown complete");
}
