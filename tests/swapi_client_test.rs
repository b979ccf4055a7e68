//! SWAPI client tests against a local mock server.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use planets_api::errors::AppError;
use planets_api::infra::{FilmsLookup, SwapiClient};

fn client(server: &MockServer) -> SwapiClient {
    SwapiClient::new(server.uri(), Duration::from_secs(5)).unwrap()
}

fn films(count: usize) -> Vec<String> {
    (1..=count)
        .map(|i| format!("https://swapi.dev/api/films/{}/", i))
        .collect()
}

#[tokio::test]
async fn test_exact_match_counts_films() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/planets/"))
        .and(query_param("search", "tatooine"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "results": [{ "name": "Tatooine", "films": films(5) }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let count = client(&server).films_appeared_in("Tatooine").await.unwrap();

    assert_eq!(count, 5);
}

#[tokio::test]
async fn test_name_is_normalized_before_lookup() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/planets/"))
        .and(query_param("search", "yavin iv"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                { "name": "Yavin", "films": films(4) },
                { "name": "Yavin IV", "films": films(1) }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let count = client(&server)
        .films_appeared_in("  YAVIN IV\n")
        .await
        .unwrap();

    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_partial_matches_only_count_as_zero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/planets/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{ "name": "Naboo", "films": films(4) }]
        })))
        .mount(&server)
        .await;

    let count = client(&server).films_appeared_in("Nab").await.unwrap();

    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_no_results_is_zero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/planets/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 0,
            "results": []
        })))
        .mount(&server)
        .await;

    let count = client(&server).films_appeared_in("Nowhere").await.unwrap();

    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_throttled_json_reply_is_zero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/planets/"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "detail": "Request was throttled."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let count = client(&server).films_appeared_in("Tatooine").await.unwrap();

    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_server_error_without_body_is_internal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/planets/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = client(&server).films_appeared_in("Tatooine").await;

    assert!(matches!(result, Err(AppError::Internal { .. })));
}

#[tokio::test]
async fn test_undecodable_body_is_internal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/planets/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let result = client(&server).films_appeared_in("Tatooine").await;

    assert!(matches!(result, Err(AppError::Internal { .. })));
}
