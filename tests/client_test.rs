//! End-to-end tests of the public client API against a mock server

use pandascore::{Client, Game, Match, PandaScoreError, Response, Sorting};
use serde_json::{json, Value};
use wiremock::{
    matchers::{header, method, path, query_param, query_param_is_missing},
    Mock, MockServer, ResponseTemplate,
};

fn match_json(id: i64, series_id: i64) -> Value {
    json!({
        "id": id,
        "name": format!("match {}", id),
        "begin_at": "2019-09-23T15:00:00Z",
        "modified_at": "2019-09-22T08:00:00Z",
        "status": "not_started",
        "opponents": [
            {"type": "Team", "opponent": {"id": 1, "name": "Astralis", "location": "DK"}},
            {"type": "Team", "opponent": {"id": 2, "name": "Natus Vincere"}}
        ],
        "serie": {"id": series_id, "full_name": "Major 2019", "year": 2019},
        "extra": {"not": "mapped"}
    })
}

fn paged(body: Value, page: &str, per_page: &str, total: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_json(body)
        .insert_header("X-Page", page)
        .insert_header("X-Per-Page", per_page)
        .insert_header("X-Total", total)
}

#[cfg(test)]
mod client_tests {
    use super::*;

    #[tokio::test]
    async fn test_two_page_fixture() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/csgo/matches/upcoming"))
            .and(header("authorization", "Bearer test_access_token"))
            .and(query_param_is_missing("page[number]"))
            .respond_with(paged(json!([match_json(1, 10), match_json(2, 10)]), "1", "2", "4"))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/csgo/matches/upcoming"))
            .and(header("authorization", "Bearer test_access_token"))
            .and(query_param("page[number]", "2"))
            .respond_with(paged(json!([match_json(3, 10), match_json(4, 11)]), "2", "2", "4"))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::new()
            .with_base_url(server.uri())
            .with_access_token("test_access_token");
        let (matches, response) = client
            .request(Game::CsGo, "matches/upcoming")
            .get_all::<Vec<Match>>()
            .await
            .unwrap();

        assert_eq!(
            matches.iter().map(|m| m.id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
        assert_eq!(matches[3].series.id, 11);
        assert_eq!(response, Response::new(2, 2, 4));
        assert!(!response.has_more());
    }

    #[tokio::test]
    async fn test_merged_pages_equal_direct_decode() {
        let server = MockServer::start().await;
        let payload = json!([match_json(1, 10), match_json(2, 11)]);
        Mock::given(method("GET"))
            .and(path("/dota2/matches/running"))
            .respond_with(paged(payload.clone(), "1", "50", "2"))
            .mount(&server)
            .await;

        let client = Client::new().with_base_url(server.uri()).with_access_token("t");
        let request = client.request(Game::Dota2, "matches/running");

        let (single, _) = request.get::<Vec<Match>>().await.unwrap();
        let (merged, _) = request.get_all::<Vec<Match>>().await.unwrap();
        let direct: Vec<Match> = serde_json::from_value(payload).unwrap();

        assert_eq!(single, direct);
        assert_eq!(merged, direct);
    }

    #[tokio::test]
    async fn test_api_error_kind_is_distinguishable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/csgo/series/running"))
            .respond_with(
                ResponseTemplate::new(403).set_body_json(json!({"error": "Token is missing"})),
            )
            .mount(&server)
            .await;

        let client = Client::new().with_base_url(server.uri()).with_access_token("");
        let result = client
            .request(Game::CsGo, "series/running")
            .get::<Value>()
            .await;

        match result {
            Err(PandaScoreError::Api { message }) => assert_eq!(message, "Token is missing"),
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_game_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let client = Client::new().with_base_url(server.uri());
        let err = client
            .request("starcraft", "matches")
            .sort("begin_at", Sorting::Ascending)
            .get_all::<Vec<Value>>()
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "unknown game 'starcraft'");
    }

    #[tokio::test]
    async fn test_request_reused_after_page_change() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/lol/leagues"))
            .and(query_param("page[number]", "3"))
            .and(query_param("page[size]", "5"))
            .respond_with(paged(json!([{"id": 1}]), "3", "5", "11"))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::new().with_base_url(server.uri()).with_access_token("t");
        let base = client.request(Game::LoL, "leagues").page_size(5);
        let (records, response) = base.clone().page(3).get::<Vec<Value>>().await.unwrap();

        assert_eq!(records.len(), 1);
        assert!(!response.has_more());
        assert_eq!(base.params().page_number(), None);
    }
}
