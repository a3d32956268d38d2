//! GIPHY API contract tests.
//!
//! These tests verify exact HTTP request format and response handling
//! against a mock provider:
//! - Request carries api_key, q, limit, rating, and bundle parameters
//! - Response entries are parsed with per-field defaults
//! - Zero primary results trigger exactly one fallback request at limit 1
//! - Transport and status failures degrade to a single placeholder
//! - A missing credential short-circuits before any network call

use giphy_search::{DegradeReason, GiphyClient, GiphyConfig, SearchOutcome};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> GiphyConfig {
    GiphyConfig {
        api_key: Some("test-key".into()),
        base_url: server.uri(),
        ..Default::default()
    }
}

fn sticker_entry(id: &str) -> serde_json::Value {
    json!({
        "images": {
            "original": {"url": format!("https://media.giphy.com/{id}/original.gif")},
            "preview_gif": {"url": format!("https://media.giphy.com/{id}/preview.gif")}
        },
        "source_post_url": format!("https://giphy.com/posts/{id}")
    })
}

#[tokio::test]
async fn request_includes_all_required_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/stickers/search"))
        .and(query_param("api_key", "test-key"))
        .and(query_param("q", "cute puppy"))
        .and(query_param("limit", "3"))
        .and(query_param("rating", "g"))
        .and(query_param("bundle", "messaging_non_clips"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": [sticker_entry("a")]})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = GiphyClient::new(config_for(&mock_server)).expect("client builds");
    let outcome = client.search_stickers("cute puppy", "g", 3).await;

    assert_eq!(
        outcome,
        SearchOutcome::Found(vec![giphy_search::StickerResult {
            url: "https://media.giphy.com/a/original.gif".into(),
            preview: "https://media.giphy.com/a/preview.gif".into(),
            source: "https://giphy.com/posts/a".into(),
        }])
    );
}

#[tokio::test]
async fn results_are_truncated_to_limit() {
    let mock_server = MockServer::start().await;

    let entries: Vec<_> = ["a", "b", "c", "d", "e"].into_iter().map(sticker_entry).collect();
    Mock::given(method("GET"))
        .and(path("/v1/stickers/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": entries})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = GiphyClient::new(config_for(&mock_server)).expect("client builds");
    let results = client.search_stickers("cats", "g", 3).await.into_results();

    assert_eq!(results.len(), 3);
}

#[tokio::test]
async fn missing_response_fields_default() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/stickers/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [{}]})))
        .mount(&mock_server)
        .await;

    let client = GiphyClient::new(config_for(&mock_server)).expect("client builds");
    let results = client.search_stickers("cats", "g", 3).await.into_results();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].url, "");
    assert_eq!(results[0].preview, "");
    assert_eq!(results[0].source, "https://giphy.com/");
}

#[tokio::test]
async fn zero_results_trigger_exactly_one_fallback_request() {
    let mock_server = MockServer::start().await;

    // Primary query matches nothing.
    Mock::given(method("GET"))
        .and(path("/v1/stickers/search"))
        .and(query_param("q", "xqzzt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Fallback pass uses the literal query "happy" with limit 1.
    Mock::given(method("GET"))
        .and(path("/v1/stickers/search"))
        .and(query_param("q", "happy"))
        .and(query_param("limit", "1"))
        .and(query_param("rating", "pg"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": [sticker_entry("fb"), sticker_entry("extra")]})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = GiphyClient::new(config_for(&mock_server)).expect("client builds");
    let results = client.search_stickers("xqzzt", "pg", 3).await.into_results();

    // At most 1 result from the fallback pass, even if the provider sends more.
    assert_eq!(results.len(), 1);
    assert!(results[0].url.contains("/fb/"));
}

#[tokio::test]
async fn empty_fallback_yields_empty_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/stickers/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = GiphyClient::new(config_for(&mock_server)).expect("client builds");
    let outcome = client.search_stickers("xqzzt", "g", 3).await;

    // Terminal state: empty list after both attempts, not a degraded outcome.
    assert_eq!(outcome, SearchOutcome::Found(vec![]));
}

#[tokio::test]
async fn upstream_error_status_degrades() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/stickers/search"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = GiphyClient::new(config_for(&mock_server)).expect("client builds");
    let outcome = client.search_stickers("cats", "g", 3).await;

    assert_eq!(outcome, SearchOutcome::Degraded(DegradeReason::UpstreamStatus));
    let results = outcome.into_results();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].url, "https://giphy.com/sticker-not-found-http-error");
}

#[tokio::test]
async fn malformed_body_degrades_as_unexpected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/stickers/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = GiphyClient::new(config_for(&mock_server)).expect("client builds");
    let outcome = client.search_stickers("cats", "g", 3).await;

    assert_eq!(outcome, SearchOutcome::Degraded(DegradeReason::Unexpected));
}

#[tokio::test]
async fn fallback_failure_degrades() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/stickers/search"))
        .and(query_param("q", "xqzzt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/stickers/search"))
        .and(query_param("q", "happy"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = GiphyClient::new(config_for(&mock_server)).expect("client builds");
    let outcome = client.search_stickers("xqzzt", "g", 3).await;

    assert_eq!(outcome, SearchOutcome::Degraded(DegradeReason::UpstreamStatus));
}

#[tokio::test]
async fn missing_credential_makes_no_network_call() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = GiphyConfig {
        api_key: None,
        base_url: mock_server.uri(),
        ..Default::default()
    };
    let client = GiphyClient::new(config).expect("client builds");
    let results = client.search_stickers("cats", "g", 3).await.into_results();

    assert_eq!(results.len(), 1);
    assert_eq!(
        results[0].url,
        "https://giphy.com/sticker-not-found-no-api-key"
    );
}
