//! End-to-end report generation against a mocked Riot API.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lol_wrapped::matches::SeasonWindow;
use lol_wrapped::report::generate_wrapped;
use lol_wrapped::riot::{ClientConfig, RateLimits, RiotClient};

// Epoch seconds for 2025-01-01 and 2025-02-01 UTC
const JAN_2025_SECS: i64 = 1_735_689_600;
const FEB_2025_SECS: i64 = 1_738_368_000;

fn fast_client(server: &MockServer) -> RiotClient {
    let config = ClientConfig::default()
        .with_base_url(server.uri())
        .with_rate_limits(RateLimits {
            short_limit: 10_000,
            short_window: Duration::from_secs(1),
            long_limit: 100_000,
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
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/lol/champion-mastery/v4/scores/by-puuid/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(300)))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/lol/champion-mastery/v4/champion-masteries/by-puuid/p1/top"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/lol/challenges/v1/player-data/p1"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no challenges"))
        .mount(server)
        .await;
}

#[allow(clippy::too_many_arguments)]
fn match_body(
    match_id: &str,
    champion: &str,
    win: bool,
    kills: i32,
    deaths: i32,
    assists: i32,
    game_creation_ms: i64,
) -> serde_json::Value {
    json!({
        "metadata": {"matchId": match_id, "participants": ["p1"]},
        "info": {
            "gameCreation": game_creation_ms,
            "gameDuration": 1800,
            "gameMode": "CLASSIC",
            "queueId": 420,
            "participants": [{
                "puuid": "p1", "championName": champion, "teamPosition": "MIDDLE",
                "win": win, "kills": kills, "deaths": deaths, "assists": assists
            }]
        }
    })
}

#[tokio::test]
async fn temporal_scenario_january_vs_february() {
    let server = MockServer::start().await;
    mount_profile(&server).await;

    // 3 January games (2 wins, KDAs 1.0 / 4.0 / 2.0) and 6 February
    // games (5 wins, KDA 3.0 each)
    let mut games: Vec<(i64, bool, i32, i32, i32)> = vec![
        (JAN_2025_SECS + 14 * 86_400, true, 2, 4, 2),
        (JAN_2025_SECS + 15 * 86_400, true, 6, 2, 2),
        (JAN_2025_SECS + 16 * 86_400, false, 3, 3, 3),
    ];
    for day in 0..6 {
        games.push((FEB_2025_SECS + day * 86_400, day != 0, 4, 2, 2));
    }

    let ids: Vec<String> = games
        .iter()
        .map(|(secs, ..)| format!("KR_{}", secs * 1000))
        .collect();

    Mock::given(method("GET"))
        .and(path("/lol/match/v5/matches/by-puuid/p1/ids"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(ids)))
        .mount(&server)
        .await;

    for (id, (secs, win, kills, deaths, assists)) in ids.iter().zip(&games) {
        Mock::given(method("GET"))
            .and(path(format!("/lol/match/v5/matches/{id}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(match_body(
                id,
                "Ahri",
                *win,
                *kills,
                *deaths,
                *assists,
                secs * 1000,
            )))
            .mount(&server)
            .await;
    }

    let client = fast_client(&server);
    let report = generate_wrapped(&client, "kr", "Faker", "KR1", SeasonWindow::for_year(2025).unwrap(), 100)
        .await
        .unwrap();

    assert_eq!(report.total_matches_in_year, 9);
    assert_eq!(report.matches_analyzed, 9);
    assert_eq!(report.stats.total_games, 9);
    assert_eq!(report.stats.wins + report.stats.losses, 9);

    let active = report.temporal.most_active_month.as_ref().unwrap();
    assert_eq!(active.month, "2025-02");
    assert_eq!(active.games, 6);

    // January (3 games) is under the sample floor however good its rate
    let best = report.temporal.best_winrate_month.as_ref().unwrap();
    assert_eq!(best.month, "2025-02");

    assert!(report
        .insights
        .iter()
        .any(|s| s == "Analyzed all 9 games you played this year"));
    assert!(report
        .insights
        .iter()
        .any(|s| s == "Your most active month was 2025-02 with 6 games"));

    // Challenges 404ed; the report still stands
    assert!(report.challenges.is_none());
}

#[tokio::test]
async fn truncated_analysis_keeps_ground_truth_total() {
    let server = MockServer::start().await;
    mount_profile(&server).await;

    // 342 ids across four pages, all timestamped inside 2025
    let all_ids: Vec<String> = (0..342)
        .map(|i| format!("KR_{}", (JAN_2025_SECS + i * 3_600) * 1000))
        .collect();
    for (start, len) in [(0usize, 100usize), (100, 100), (200, 100), (300, 42)] {
        let page: Vec<String> = all_ids[start..start + len].to_vec();
        Mock::given(method("GET"))
            .and(path("/lol/match/v5/matches/by-puuid/p1/ids"))
            .and(query_param("start", start.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(page)))
            .mount(&server)
            .await;
    }

    for id in &all_ids[..5] {
        Mock::given(method("GET"))
            .and(path(format!("/lol/match/v5/matches/{id}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(match_body(
                id,
                "Zed",
                true,
                8,
                2,
                4,
                JAN_2025_SECS * 1000,
            )))
            .mount(&server)
            .await;
    }

    let client = fast_client(&server);
    let report = generate_wrapped(&client, "kr", "Faker", "KR1", SeasonWindow::for_year(2025).unwrap(), 5)
        .await
        .unwrap();

    assert_eq!(report.total_matches_in_year, 342);
    assert_eq!(report.matches_analyzed, 5);
    assert!(report.total_matches_in_year >= report.matches_analyzed);
    assert!(report.matches_analyzed <= 5);
    assert!(report
        .insights
        .iter()
        .any(|s| s == "Analyzed 5 of the 342 games you played this year"));

    // Round trip through JSON preserves the report
    let serialized = serde_json::to_string(&report).unwrap();
    let restored: lol_wrapped::report::WrappedReport =
        serde_json::from_str(&serialized).unwrap();
    assert_eq!(report, restored);
}

#[tokio::test]
async fn per_match_failures_reduce_analyzed_count() {
    let server = MockServer::start().await;
    mount_profile(&server).await;

    let ids: Vec<String> = (0..3)
        .map(|i| format!("KR_{}", (JAN_2025_SECS + i) * 1000))
        .collect();
    Mock::given(method("GET"))
        .and(path("/lol/match/v5/matches/by-puuid/p1/ids"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(ids)))
        .mount(&server)
        .await;

    // Middle match vanished upstream
    for (i, id) in ids.iter().enumerate() {
        let template = if i == 1 {
            ResponseTemplate::new(404).set_body_string("gone")
        } else {
            ResponseTemplate::new(200).set_body_json(match_body(
                id,
                "Ahri",
                true,
                5,
                1,
                5,
                JAN_2025_SECS * 1000,
            ))
        };
        Mock::given(method("GET"))
            .and(path(format!("/lol/match/v5/matches/{id}")))
            .respond_with(template)
            .mount(&server)
            .await;
    }

    let client = fast_client(&server);
    let report = generate_wrapped(&client, "kr", "Faker", "KR1", SeasonWindow::for_year(2025).unwrap(), 10)
        .await
        .unwrap();

    assert_eq!(report.total_matches_in_year, 3);
    assert_eq!(report.matches_analyzed, 2);
    assert_eq!(report.stats.total_games, 2);
}
