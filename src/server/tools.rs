//! Tool definitions with rmcp macros.
//!
//! All seven tools use the rmcp 0.1.5 macro system: `#[tool(tool_box)]`
//! on the impl and `#[tool(name, description)]` on methods. Tool handlers
//! never panic; failures come back as a structured error payload inside
//! the response body.

use std::sync::Arc;

use chrono::Datelike;
use rmcp::handler::server::ServerHandler;
use rmcp::model::{
    Content, Implementation, IntoContents, ProtocolVersion, ServerCapabilities, ServerInfo,
    ToolsCapability,
};
use rmcp::service::{Peer, RoleServer};
use rmcp::tool;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::analytics::{analyze_challenges, challenge_insights};
use crate::error::RiotError;
use crate::matches::{collect_match_ids, SeasonWindow};
use crate::report::{fetch_profile, generate_wrapped, DEFAULT_MAX_MATCHES};
use crate::riot::regions;

use super::types::AppState;

/// Most matches a single wrapped call will fetch in detail.
const MAX_MATCHES_CEILING: usize = 500;
/// Most match IDs a history call returns.
const MAX_HISTORY_COUNT: usize = 100;
/// Default match IDs for a history call.
const DEFAULT_HISTORY_COUNT: usize = 20;
/// Accepted year range for wrapped reports.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 2010..=2100;

/// Macro to implement `IntoContents` for response types by serializing to JSON.
macro_rules! impl_into_contents {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoContents for $ty {
                fn into_contents(self) -> Vec<Content> {
                    match serde_json::to_string(&self) {
                        Ok(json) => vec![Content::text(json)],
                        Err(e) => vec![Content::text(format!("{{\"error\": \"{}\"}}", e))],
                    }
                }
            }
        )*
    };
}

// ============================================================================
// Request Types with JsonSchema (for tool parameters)
// ============================================================================

/// Request for a full wrapped report.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WrappedRequest {
    /// In-game name part of the Riot ID.
    pub game_name: String,
    /// Tag line part of the Riot ID (after the #).
    pub tag_line: String,
    /// Platform region, e.g. euw1, na1, kr. Defaults to the server region.
    pub region: Option<String>,
    /// Calendar year to cover. Defaults to the current year.
    pub year: Option<i32>,
    /// Ceiling on matches fetched in detail (1-500).
    pub max_matches: Option<usize>,
}

/// Request identifying a player.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ProfileRequest {
    /// In-game name part of the Riot ID.
    pub game_name: String,
    /// Tag line part of the Riot ID.
    pub tag_line: String,
    /// Platform region. Defaults to the server region.
    pub region: Option<String>,
}

/// Request for match history.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MatchHistoryRequest {
    /// In-game name part of the Riot ID.
    pub game_name: String,
    /// Tag line part of the Riot ID.
    pub tag_line: String,
    /// Platform region. Defaults to the server region.
    pub region: Option<String>,
    /// Number of match IDs to return (1-100, default 20).
    pub count: Option<usize>,
    /// Restrict to one calendar year.
    pub year: Option<i32>,
}

/// Request for one match's details.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MatchDetailsRequest {
    /// Full match ID, e.g. `EUW1_7264893210`.
    pub match_id: String,
    /// Platform region. Defaults to the server region.
    pub region: Option<String>,
}

/// Request for region listing. Takes no parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct RegionsRequest {}

// ============================================================================
// Response Types
// ============================================================================

/// Structured failure reported inside a tool response.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ErrorPayload {
    /// Stable error kind, e.g. `not_found`, `throttled`.
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Contextual hint for the caller, when one exists.
    pub details: Option<String>,
}

/// Response carrying a wrapped report.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WrappedResponse {
    /// The full report, absent on failure.
    pub report: Option<serde_json::Value>,
    /// Failure description, absent on success.
    pub error: Option<ErrorPayload>,
}

/// Response carrying a player profile.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ProfileResponse {
    /// Profile with rank and mastery context, absent on failure.
    pub profile: Option<serde_json::Value>,
    /// Failure description, absent on success.
    pub error: Option<ErrorPayload>,
}

/// Response carrying ranked entries.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RankedResponse {
    /// Ranked queue entries, absent on failure.
    pub entries: Option<serde_json::Value>,
    /// Failure description, absent on success.
    pub error: Option<ErrorPayload>,
}

/// Response carrying match IDs.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MatchHistoryResponse {
    /// Match IDs, newest first, absent on failure.
    pub match_ids: Option<Vec<String>>,
    /// Total IDs available in the requested window.
    pub total_available: Option<usize>,
    /// Failure description, absent on success.
    pub error: Option<ErrorPayload>,
}

/// Response carrying one match's details.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MatchDetailsResponse {
    /// The raw match record, absent on failure.
    pub match_data: Option<serde_json::Value>,
    /// Failure description, absent on success.
    pub error: Option<ErrorPayload>,
}

/// Response carrying challenge progress.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ChallengesResponse {
    /// Challenge summary, absent on failure.
    pub challenges: Option<serde_json::Value>,
    /// Challenge highlight strings.
    pub insights: Option<Vec<String>>,
    /// Failure description, absent on success.
    pub error: Option<ErrorPayload>,
}

/// One platform region and the routing cluster it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RegionInfo {
    /// Platform identifier, e.g. `euw1`.
    pub platform: String,
    /// Regional routing cluster, e.g. `europe`.
    pub cluster: String,
}

/// Response listing the supported regions.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RegionsResponse {
    /// All supported platform regions.
    pub regions: Vec<RegionInfo>,
    /// The server's default platform.
    pub default_region: String,
}

impl_into_contents!(
    WrappedResponse,
    ProfileResponse,
    RankedResponse,
    MatchHistoryResponse,
    MatchDetailsResponse,
    ChallengesResponse,
    RegionsResponse,
);

fn error_kind(error: &RiotError) -> &'static str {
    match error {
        RiotError::Throttled { .. } => "throttled",
        RiotError::NotFound { .. } => "not_found",
        RiotError::Upstream { .. } => "upstream_error",
        RiotError::Transport { .. } => "transport_error",
        RiotError::UnexpectedResponse { .. } => "unexpected_response",
        RiotError::InvalidRegion { .. } => "invalid_region",
    }
}

fn error_hint(error: &RiotError) -> Option<String> {
    match error {
        RiotError::Throttled {
            retry_after_seconds,
        } => Some(format!(
            "Rate limited upstream; retry in about {retry_after_seconds}s"
        )),
        RiotError::NotFound { .. } => {
            Some("Check the Riot ID spelling (name and tag) and the region".to_string())
        }
        RiotError::InvalidRegion { .. } => Some(format!(
            "Supported regions: {}",
            regions::PLATFORMS.join(", ")
        )),
        _ => None,
    }
}

fn riot_error(error: &RiotError) -> ErrorPayload {
    ErrorPayload {
        error: error_kind(error).to_string(),
        message: error.to_string(),
        details: error_hint(error),
    }
}

fn invalid_parameters(message: impl Into<String>) -> ErrorPayload {
    ErrorPayload {
        error: "invalid_parameters".to_string(),
        message: message.into(),
        details: None,
    }
}

fn to_value<T: Serialize>(value: &T) -> serde_json::Value {
    serde_json::to_value(value).unwrap_or(serde_json::Value::Null)
}

// ============================================================================
// WrappedServer with Tool Box (rmcp 0.1.5 syntax)
// ============================================================================

/// MCP server exposing League of Legends yearly stats tools.
#[derive(Clone)]
pub struct WrappedServer {
    /// Shared application state.
    pub state: Arc<AppState>,
}

impl WrappedServer {
    /// Creates a new server.
    #[must_use]
    pub const fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    fn resolve_region(&self, requested: Option<&str>) -> String {
        regions::normalize(requested.unwrap_or(&self.state.config.default_region))
    }

    fn resolve_window(requested: Option<i32>) -> Result<SeasonWindow, ErrorPayload> {
        let year = requested.unwrap_or_else(|| chrono::Utc::now().year());
        if !YEAR_RANGE.contains(&year) {
            return Err(invalid_parameters(format!(
                "Year {year} is outside the supported range {}-{}",
                YEAR_RANGE.start(),
                YEAR_RANGE.end()
            )));
        }
        SeasonWindow::for_year(year)
            .ok_or_else(|| invalid_parameters(format!("Year {year} has no calendar window")))
    }
}

#[tool(tool_box)]
impl WrappedServer {
    #[tool(
        name = "get_player_wrapped",
        description = "Generate a full yearly 'Wrapped' report for a player: aggregate stats, champion and role breakdowns, temporal patterns and highlight insights."
    )]
    async fn get_player_wrapped(&self, #[tool(aggr)] req: WrappedRequest) -> WrappedResponse {
        let window = match Self::resolve_window(req.year) {
            Ok(window) => window,
            Err(error) => {
                return WrappedResponse {
                    report: None,
                    error: Some(error),
                }
            }
        };
        let region = self.resolve_region(req.region.as_deref());
        let max_matches = req
            .max_matches
            .unwrap_or(DEFAULT_MAX_MATCHES)
            .clamp(1, MAX_MATCHES_CEILING);

        match generate_wrapped(
            &self.state.client,
            &region,
            &req.game_name,
            &req.tag_line,
            window,
            max_matches,
        )
        .await
        {
            Ok(report) => WrappedResponse {
                report: Some(to_value(&report)),
                error: None,
            },
            Err(e) => {
                tracing::error!(error = %e, "Wrapped report failed");
                WrappedResponse {
                    report: None,
                    error: Some(riot_error(&e)),
                }
            }
        }
    }

    #[tool(
        name = "get_player_profile",
        description = "Fetch a player's profile: level, icon, ranked entries, mastery score and top champion masteries."
    )]
    async fn get_player_profile(&self, #[tool(aggr)] req: ProfileRequest) -> ProfileResponse {
        let region = self.resolve_region(req.region.as_deref());
        match fetch_profile(&self.state.client, &region, &req.game_name, &req.tag_line).await {
            Ok(profile) => ProfileResponse {
                profile: Some(to_value(&profile)),
                error: None,
            },
            Err(e) => ProfileResponse {
                profile: None,
                error: Some(riot_error(&e)),
            },
        }
    }

    #[tool(
        name = "get_ranked_info",
        description = "Fetch a player's ranked queue entries (tier, rank, LP, wins/losses)."
    )]
    async fn get_ranked_info(&self, #[tool(aggr)] req: ProfileRequest) -> RankedResponse {
        let region = self.resolve_region(req.region.as_deref());
        let client = &self.state.client;

        let result = async {
            let account = client
                .get_account_by_riot_id(&region, &req.game_name, &req.tag_line)
                .await?;
            let summoner = client.get_summoner_by_puuid(&region, &account.puuid).await?;
            client.get_league_entries(&region, &summoner.id).await
        }
        .await;

        match result {
            Ok(entries) => RankedResponse {
                entries: Some(to_value(&entries)),
                error: None,
            },
            Err(e) => RankedResponse {
                entries: None,
                error: Some(riot_error(&e)),
            },
        }
    }

    #[tool(
        name = "get_match_history",
        description = "List a player's recent match IDs, optionally restricted to one calendar year."
    )]
    async fn get_match_history(
        &self,
        #[tool(aggr)] req: MatchHistoryRequest,
    ) -> MatchHistoryResponse {
        let region = self.resolve_region(req.region.as_deref());
        let count = req
            .count
            .unwrap_or(DEFAULT_HISTORY_COUNT)
            .clamp(1, MAX_HISTORY_COUNT);
        let window = match req.year {
            Some(year) => {
                if !YEAR_RANGE.contains(&year) {
                    return MatchHistoryResponse {
                        match_ids: None,
                        total_available: None,
                        error: Some(invalid_parameters(format!("Unsupported year {year}"))),
                    };
                }
                SeasonWindow::for_year(year)
            }
            None => None,
        };
        let client = &self.state.client;

        let result = async {
            let account = client
                .get_account_by_riot_id(&region, &req.game_name, &req.tag_line)
                .await?;
            if window.is_some() {
                collect_match_ids(client, &region, &account.puuid, window).await
            } else {
                client
                    .get_match_ids(&region, &account.puuid, 0, count, None, None)
                    .await
            }
        }
        .await;

        match result {
            Ok(mut ids) => {
                let total = ids.len();
                ids.truncate(count);
                MatchHistoryResponse {
                    match_ids: Some(ids),
                    total_available: Some(total),
                    error: None,
                }
            }
            Err(e) => MatchHistoryResponse {
                match_ids: None,
                total_available: None,
                error: Some(riot_error(&e)),
            },
        }
    }

    #[tool(
        name = "get_match_details",
        description = "Fetch the full record of one match by its ID."
    )]
    async fn get_match_details(
        &self,
        #[tool(aggr)] req: MatchDetailsRequest,
    ) -> MatchDetailsResponse {
        let region = self.resolve_region(req.region.as_deref());
        match self.state.client.get_match(&region, &req.match_id).await {
            Ok(record) => MatchDetailsResponse {
                match_data: Some(to_value(&record)),
                error: None,
            },
            Err(e) => MatchDetailsResponse {
                match_data: None,
                error: Some(riot_error(&e)),
            },
        }
    }

    #[tool(
        name = "get_player_challenges",
        description = "Fetch and summarize a player's challenge progress: points, tiers, percentile standings and highlights."
    )]
    async fn get_player_challenges(&self, #[tool(aggr)] req: ProfileRequest) -> ChallengesResponse {
        let region = self.resolve_region(req.region.as_deref());
        let client = &self.state.client;

        let result = async {
            let account = client
                .get_account_by_riot_id(&region, &req.game_name, &req.tag_line)
                .await?;
            client.get_player_challenges(&region, &account.puuid).await
        }
        .await;

        match result {
            Ok(data) => {
                let summary = analyze_challenges(&data);
                let insights = challenge_insights(&summary);
                ChallengesResponse {
                    challenges: Some(to_value(&summary)),
                    insights: Some(insights),
                    error: None,
                }
            }
            Err(e) => ChallengesResponse {
                challenges: None,
                insights: None,
                error: Some(riot_error(&e)),
            },
        }
    }

    #[tool(
        name = "get_available_regions",
        description = "List the supported platform regions and their routing clusters."
    )]
    async fn get_available_regions(&self, #[tool(aggr)] req: RegionsRequest) -> RegionsResponse {
        let _ = req;
        let regions = regions::PLATFORMS
            .iter()
            .map(|platform| RegionInfo {
                platform: (*platform).to_string(),
                cluster: regions::cluster_for(platform)
                    .unwrap_or("unknown")
                    .to_string(),
            })
            .collect();
        RegionsResponse {
            regions,
            default_region: self.state.config.default_region.clone(),
        }
    }
}

// Generate the tool_box function from tool definitions
rmcp::tool_box!(WrappedServer {
    get_player_wrapped,
    get_player_profile,
    get_ranked_info,
    get_match_history,
    get_match_details,
    get_player_challenges,
    get_available_regions,
});

// Implement ServerHandler to integrate with rmcp's server infrastructure
impl ServerHandler for WrappedServer {
    // Use tool_box!(@derive) to generate list_tools and call_tool methods
    rmcp::tool_box!(@derive);

    fn get_peer(&self) -> Option<Peer<RoleServer>> {
        None
    }

    fn set_peer(&mut self, _peer: Peer<RoleServer>) {
        // The peer is not needed for stateless tool dispatch
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                ..Default::default()
            },
            server_info: Implementation {
                name: "lol-wrapped".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(
                "League of Legends yearly stats server: wrapped reports, profiles, \
                 ranked info, match history and challenge progress."
                    .to_string(),
            ),
        }
    }
}
