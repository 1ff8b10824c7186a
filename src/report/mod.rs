//! Report generation.
//!
//! Orchestrates the full pipeline for one player: identity resolution,
//! profile enrichment, exhaustive match-ID collection, bounded detail
//! fetching, aggregation, temporal analysis and insight composition.
//! Identity and ID-collection failures abort the report; per-match and
//! challenge failures degrade it.

use serde::{Deserialize, Serialize};

use crate::analytics::{
    aggregate, analyze, analyze_challenges, challenge_insights, compose, ChallengeSummary,
    PlayerStats, TemporalSummary,
};
use crate::error::{PartialData, RiotError};
use crate::matches::{collect_match_ids, fetch_match_details, SeasonWindow};
use crate::riot::{ChampionMastery, LeagueEntry, RiotClient};

/// Masteries included in profiles and reports.
pub const TOP_MASTERY_COUNT: u32 = 5;

/// Default ceiling on matches fetched in detail.
pub const DEFAULT_MAX_MATCHES: usize = 50;

/// Resolved player identity and profile enrichment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerProfile {
    /// In-game name.
    pub game_name: String,
    /// Riot ID tag line.
    pub tag_line: String,
    /// Persistent player identifier.
    pub puuid: String,
    /// Platform the profile was resolved on.
    pub region: String,
    /// Summoner level.
    pub summoner_level: i64,
    /// Profile icon identifier.
    pub profile_icon_id: i32,
    /// Ranked queue entries.
    pub ranked: Vec<LeagueEntry>,
    /// Total champion mastery score.
    pub mastery_score: i64,
    /// Highest champion masteries.
    pub top_masteries: Vec<ChampionMastery>,
}

/// The complete yearly report for one player.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WrappedReport {
    /// Who the report is about.
    pub player: PlayerProfile,
    /// Calendar year covered.
    pub year: i32,
    /// Ground-truth number of matches played in the year.
    pub total_matches_in_year: usize,
    /// Matches actually fetched and aggregated. Never exceeds
    /// `total_matches_in_year` or the caller's `max_matches`.
    pub matches_analyzed: usize,
    /// Aggregated statistics over the analyzed matches.
    pub stats: PlayerStats,
    /// Temporal superlatives.
    pub temporal: TemporalSummary,
    /// Ordered highlight strings.
    pub insights: Vec<String>,
    /// Challenge progress, absent when the challenges endpoint failed.
    pub challenges: Option<ChallengeSummary>,
    /// Challenge highlight strings, empty when challenges are absent.
    pub challenge_insights: Vec<String>,
}

/// Resolve a player's identity and profile enrichment.
///
/// Every call here is a hard dependency: a report without rank or
/// mastery context is not worth producing, so any failure propagates.
pub async fn fetch_profile(
    client: &RiotClient,
    platform: &str,
    game_name: &str,
    tag_line: &str,
) -> Result<PlayerProfile, RiotError> {
    let account = client
        .get_account_by_riot_id(platform, game_name, tag_line)
        .await?;
    let summoner = client.get_summoner_by_puuid(platform, &account.puuid).await?;
    let ranked = client.get_league_entries(platform, &summoner.id).await?;
    let mastery_score = client.get_mastery_score(platform, &account.puuid).await?;
    let top_masteries = client
        .get_top_masteries(platform, &account.puuid, TOP_MASTERY_COUNT)
        .await?;

    Ok(PlayerProfile {
        game_name: account.game_name,
        tag_line: account.tag_line,
        puuid: account.puuid,
        region: platform.to_string(),
        summoner_level: summoner.summoner_level,
        profile_icon_id: summoner.profile_icon_id,
        ranked,
        mastery_score,
        top_masteries,
    })
}

/// Generate the full yearly report for one season window.
///
/// Collection always runs to exhaustion first so the report can state
/// the true number of matches played, then detail fetching covers at
/// most `max_matches` of them. Callers validate the year when they
/// build the window.
pub async fn generate_wrapped(
    client: &RiotClient,
    platform: &str,
    game_name: &str,
    tag_line: &str,
    window: SeasonWindow,
    max_matches: usize,
) -> Result<WrappedReport, RiotError> {
    client.set_sink_context(format!("{game_name}#{tag_line}"));

    let profile = fetch_profile(client, platform, game_name, tag_line).await?;

    let all_ids = collect_match_ids(client, platform, &profile.puuid, Some(window)).await?;
    let total_matches_in_year = all_ids.len();

    let to_fetch = &all_ids[..total_matches_in_year.min(max_matches)];
    let records = fetch_match_details(client, platform, to_fetch).await;
    let matches_analyzed = records.len();

    let stats = aggregate(&records, &profile.puuid);
    let temporal = analyze(&stats.monthly, &stats.hourly, &stats.weekdays);
    let insights = compose(
        &stats,
        &temporal,
        Some(total_matches_in_year),
        Some(matches_analyzed),
    );

    // Challenges enrich the report but never block it
    let challenges = match client.get_player_challenges(platform, &profile.puuid).await {
        Ok(data) => Some(analyze_challenges(&data)),
        Err(source) => {
            let partial = PartialData {
                section: "challenges".to_string(),
                source,
            };
            tracing::warn!(error = %partial, "Continuing without challenge data");
            None
        }
    };
    let challenge_highlights = challenges.as_ref().map(challenge_insights).unwrap_or_default();

    tracing::info!(
        player = %format!("{game_name}#{tag_line}"),
        year = window.year,
        total_matches_in_year,
        matches_analyzed,
        "Wrapped report generated"
    );

    Ok(WrappedReport {
        player: profile,
        year: window.year,
        total_matches_in_year,
        matches_analyzed,
        stats,
        temporal,
        insights,
        challenges,
        challenge_insights: challenge_highlights,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::riot::{ClientConfig, RateLimits};
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path, path_regex};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fast_client(server: &MockServer) -> RiotClient {
        let config = ClientConfig::default()
            .with_base_url(server.uri())
            .with_rate_limits(RateLimits {
                short_limit: 1000,
                short_window: Duration::from_secs(1),
                long_limit: 10_000,
                long_window: Duration::from_secs(120),
            });
        RiotClient::new("test-key", config).unwrap()
    }

    async fn mount_profile(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/riot/account/v1/accounts/by-riot-id/Faker/KR1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "puuid": "p1", "gameName": "Faker", "tagLine": "KR1"
            })))
            .mount(server)
            .await;
        Mock::given(method("GET"))
            .and(path("/lol/summoner/v4/summoners/by-puuid/p1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "s1", "puuid": "p1", "profileIconId": 29, "summonerLevel": 512
            })))
            .mount(server)
            .await;
        Mock::given(method("GET"))
            .and(path("/lol/league/v4/entries/by-summoner/s1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "queueType": "RANKED_SOLO_5x5", "tier": "CHALLENGER", "rank": "I",
                "leaguePoints": 1200, "wins": 300, "losses": 150, "hotStreak": true
            }])))
            .mount(server)
            .await;
        Mock::given(method("GET"))
            .and(path("/lol/champion-mastery/v4/scores/by-puuid/p1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(742)))
            .mount(server)
            .await;
        Mock::given(method("GET"))
            .and(path("/lol/champion-mastery/v4/champion-masteries/by-puuid/p1/top"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "championId": 103, "championLevel": 7, "championPoints": 500_000,
                "lastPlayTime": 1_718_461_800_000i64
            }])))
            .mount(server)
            .await;
    }

    fn match_body(match_id: &str, win: bool, kills: i32) -> serde_json::Value {
        json!({
            "metadata": {"matchId": match_id, "participants": ["p1"]},
            "info": {
                "gameCreation": 1_718_461_800_000i64,
                "gameDuration": 1800,
                "gameMode": "CLASSIC",
                "queueId": 420,
                "participants": [{
                    "puuid": "p1", "championName": "Ahri", "teamPosition": "MIDDLE",
                    "win": win, "kills": kills, "deaths": 2, "assists": 5
                }]
            }
        })
    }

    #[tokio::test]
    async fn test_full_report_with_truncated_analysis() {
        let server = MockServer::start().await;
        mount_profile(&server).await;

        let ids: Vec<String> = (0..3).map(|i| format!("KR_{i}")).collect();
        Mock::given(method("GET"))
            .and(path("/lol/match/v5/matches/by-puuid/p1/ids"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(ids)))
            .mount(&server)
            .await;
        for (i, id) in ids.iter().enumerate() {
            Mock::given(method("GET"))
                .and(path(format!("/lol/match/v5/matches/{id}")))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_json(match_body(id, i % 2 == 0, 8)),
                )
                .mount(&server)
                .await;
        }
        Mock::given(method("GET"))
            .and(path("/lol/challenges/v1/player-data/p1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "totalPoints": {"current": 100, "max": 1000, "level": "SILVER"},
                "categoryPoints": {},
                "challenges": []
            })))
            .mount(&server)
            .await;

        let client = fast_client(&server);
        let report = generate_wrapped(&client, "kr", "Faker", "KR1", SeasonWindow::for_year(2024).unwrap(), 2)
            .await
            .unwrap();

        assert_eq!(report.total_matches_in_year, 3);
        assert_eq!(report.matches_analyzed, 2);
        assert!(report.total_matches_in_year >= report.matches_analyzed);
        assert_eq!(report.stats.total_games, 2);
        assert_eq!(report.player.game_name, "Faker");
        assert_eq!(report.player.mastery_score, 742);
        assert_eq!(report.challenges.as_ref().unwrap().total_points, 100);
        assert_eq!(
            report.insights[0],
            "Analyzed 2 of the 3 games you played this year"
        );
    }

    #[tokio::test]
    async fn test_challenge_failure_degrades_but_report_succeeds() {
        let server = MockServer::start().await;
        mount_profile(&server).await;

        Mock::given(method("GET"))
            .and(path("/lol/match/v5/matches/by-puuid/p1/ids"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(["KR_0"])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path_regex(r"^/lol/match/v5/matches/KR_0$"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(match_body("KR_0", true, 5)),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/lol/challenges/v1/player-data/p1"))
            .respond_with(ResponseTemplate::new(500).set_body_string("down"))
            .mount(&server)
            .await;

        let client = fast_client(&server);
        let report = generate_wrapped(&client, "kr", "Faker", "KR1", SeasonWindow::for_year(2024).unwrap(), 10)
            .await
            .unwrap();

        assert!(report.challenges.is_none());
        assert!(report.challenge_insights.is_empty());
        assert_eq!(report.matches_analyzed, 1);
    }

    #[tokio::test]
    async fn test_unknown_player_aborts_report() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path_regex(r"^/riot/account/v1/accounts/by-riot-id/.*$"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
            .mount(&server)
            .await;

        let client = fast_client(&server);
        let result = generate_wrapped(&client, "kr", "Nobody", "EUW", SeasonWindow::for_year(2024).unwrap(), 10).await;
        assert!(matches!(result.unwrap_err(), RiotError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_report_serializes_round_trip() {
        let server = MockServer::start().await;
        mount_profile(&server).await;

        Mock::given(method("GET"))
            .and(path("/lol/match/v5/matches/by-puuid/p1/ids"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/lol/challenges/v1/player-data/p1"))
            .respond_with(ResponseTemplate::new(404).set_body_string("none"))
            .mount(&server)
            .await;

        let client = fast_client(&server);
        let report = generate_wrapped(&client, "kr", "Faker", "KR1", SeasonWindow::for_year(2024).unwrap(), 10)
            .await
            .unwrap();

        let json = serde_json::to_string(&report).unwrap();
        let back: WrappedReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, back);
    }
}
