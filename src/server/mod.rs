//! MCP server implementation.
//!
//! This module provides:
//! - MCP JSON-RPC protocol handling
//! - Tool definitions with rmcp macros
//! - Transport layer (stdio)
//!
//! # Architecture
//!
//! The server is built on the rmcp SDK and provides 7 tools:
//!
//! - **Reports**: `get_player_wrapped`
//! - **Profile**: `get_player_profile`, `get_ranked_info`
//! - **Matches**: `get_match_history`, `get_match_details`
//! - **Challenges**: `get_player_challenges`
//! - **Meta**: `get_available_regions`

mod mcp;
mod tools;
mod transport;
mod types;

pub use mcp::McpServer;
pub use tools::{
    ChallengesResponse, ErrorPayload, MatchDetailsRequest, MatchDetailsResponse,
    MatchHistoryRequest, MatchHistoryResponse, ProfileRequest, ProfileResponse, RankedResponse,
    RegionInfo, RegionsRequest, RegionsResponse, WrappedRequest, WrappedResponse, WrappedServer,
};
pub use transport::{StdioTransport, TransportConfig};
pub use types::AppState;
