//! Unit tests for resource queries against a mock server

use super::*;
use chrono::TimeZone;
use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path, query_param, query_param_is_missing},
    Mock, MockServer, ResponseTemplate,
};

fn league(id: i64, name: &str) -> Value {
    json!({"id": id, "name": name, "modified_at": "2019-09-20T10:04:12Z"})
}

fn upcoming(id: i64) -> Value {
    json!({
        "id": id,
        "name": format!("match {}", id),
        "begin_at": "2019-09-23T15:00:00Z",
        "modified_at": "2019-09-22T08:00:00Z",
        "opponents": [],
        "serie": {"id": 1799, "full_name": "Major 2019"}
    })
}

fn page(body: Value, page: &str, per_page: &str, total: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_json(body)
        .insert_header("X-Page", page)
        .insert_header("X-Per-Page", per_page)
        .insert_header("X-Total", total)
}

#[cfg(test)]
mod endpoint_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_all_leagues_walks_pages() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/dota2/leagues"))
            .and(query_param("page[size]", "100"))
            .and(query_param_is_missing("page[number]"))
            .respond_with(page(json!([league(1, "ESL"), league(2, "DreamLeague")]), "1", "2", "3"))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/dota2/leagues"))
            .and(query_param("page[number]", "2"))
            .respond_with(page(json!([league(3, "The International")]), "2", "2", "3"))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::new().with_base_url(server.uri()).with_access_token("t");
        let leagues = client.get_all_leagues(Game::Dota2).await.unwrap();

        let names: Vec<&str> = leagues.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["ESL", "DreamLeague", "The International"]);
    }

    #[tokio::test]
    async fn test_get_running_series() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/csgo/series/running"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 2522, "full_name": "Pro League season 9 2019"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::new().with_base_url(server.uri()).with_access_token("t");
        let series = client.get_running_series(Game::CsGo).await.unwrap();

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].id, 2522);
    }

    #[tokio::test]
    async fn test_get_upcoming_matches_for_series_filters_by_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/csgo/matches/upcoming"))
            .and(query_param("filter[serie_id]", "1799"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([upcoming(10)])))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::new().with_base_url(server.uri()).with_access_token("t");
        let matches = client
            .get_upcoming_matches_for_series(Game::CsGo, 1799)
            .await
            .unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].series.id, 1799);
    }

    #[tokio::test]
    async fn test_get_upcoming_matches_between_sends_range() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/csgo/matches/upcoming"))
            .and(query_param(
                "range[begin_at]",
                "2019-09-23T00:00:00Z,2019-09-24T00:00:00Z",
            ))
            .respond_with(page(json!([upcoming(1), upcoming(2)]), "1", "100", "2"))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::new().with_base_url(server.uri()).with_access_token("t");
        let from = Utc.with_ymd_and_hms(2019, 9, 23, 0, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2019, 9, 24, 0, 0, 0).unwrap();
        let matches = client
            .get_upcoming_matches_between(Game::CsGo, from, to)
            .await
            .unwrap();

        assert_eq!(matches.iter().map(|m| m.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_get_running_matches_and_upcoming_matches() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/lol/matches/running"))
            .respond_with(page(json!([upcoming(5)]), "1", "100", "1"))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/lol/matches/upcoming"))
            .respond_with(page(json!([upcoming(6), upcoming(7)]), "1", "100", "2"))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::new().with_base_url(server.uri()).with_access_token("t");
        let running = client.get_running_matches(Game::LoL).await.unwrap();
        let upcoming = client.get_upcoming_matches(Game::LoL).await.unwrap();

        assert_eq!(running.len(), 1);
        assert_eq!(upcoming.len(), 2);
    }

    #[tokio::test]
    async fn test_resource_queries_surface_api_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/csgo/leagues"))
            .respond_with(
                ResponseTemplate::new(403).set_body_json(json!({"error": "Token is missing"})),
            )
            .mount(&server)
            .await;

        let client = Client::new().with_base_url(server.uri()).with_access_token("");
        let err = client.get_all_leagues(Game::CsGo).await.unwrap_err();

        assert!(err.is_api());
    }

    #[test]
    fn test_timestamp_format() {
        let at = Utc.with_ymd_and_hms(2019, 9, 23, 15, 30, 0).unwrap();
        assert_eq!(timestamp(&at), "2019-09-23T15:30:00Z");
    }
}
