//! Tests for DiscogsClient construction and request plumbing.

use std::time::Duration;

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::config::FinderConfig;
use crate::discogs::DiscogsClient;
use crate::error::FinderError;

fn test_config(base_url: &str) -> FinderConfig {
    FinderConfig {
        base_url: base_url.to_string(),
        request_interval: Duration::ZERO,
        ..FinderConfig::default()
    }
}

fn standalone_release_json(id: u64) -> String {
    serde_json::json!({
        "id": id,
        "genres": ["Electronic"],
        "formats": [{ "name": "Vinyl", "qty": "1", "descriptions": ["12\"", "33 ⅓ RPM"] }]
    })
    .to_string()
}

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let client = DiscogsClient::new(&test_config("http://localhost:9999/")).unwrap();
    assert_eq!(client.base_url(), "http://localhost:9999");
}

#[test]
fn invalid_user_agent_is_a_config_error() {
    let config = FinderConfig {
        user_agent: "bad\nagent".to_string(),
        ..FinderConfig::default()
    };
    match DiscogsClient::new(&config).unwrap_err() {
        FinderError::Config(_) => {} // Expected
        other => panic!("Expected FinderError::Config, got: {other:?}"),
    }
}

#[tokio::test]
async fn sends_user_agent_and_token_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/releases/42"))
        .and(header("user-agent", "TestFinder/0.1"))
        .and(header("authorization", "Discogs token=secret"))
        .respond_with(ResponseTemplate::new(200).set_body_string(standalone_release_json(42)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = FinderConfig {
        user_agent: "TestFinder/0.1".to_string(),
        api_token: Some("secret".to_string()),
        ..test_config(&mock_server.uri())
    };
    let result = tokio::task::spawn_blocking(move || {
        let client = DiscogsClient::new(&config)?;
        client.inspect_release(42)
    })
    .await
    .unwrap();

    assert_eq!(result.unwrap().release_id, 42);
}

#[tokio::test]
async fn omits_authorization_without_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/releases/7"))
        .respond_with(ResponseTemplate::new(200).set_body_string(standalone_release_json(7)))
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server.uri());
    let result = tokio::task::spawn_blocking(move || {
        let client = DiscogsClient::new(&config)?;
        client.inspect_release(7)
    })
    .await
    .unwrap();
    assert!(result.is_ok());

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
    assert!(requests[0].headers.contains_key("user-agent"));
}

#[tokio::test]
async fn non_success_status_is_http_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"message": "Release not found."}"#))
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server.uri());
    let result = tokio::task::spawn_blocking(move || {
        let client = DiscogsClient::new(&config)?;
        client.inspect_release(1)
    })
    .await
    .unwrap();

    match result.unwrap_err() {
        FinderError::HttpStatus { status, url } => {
            assert_eq!(status.as_u16(), 404);
            assert!(url.ends_with("/releases/1"));
        }
        other => panic!("Expected FinderError::HttpStatus, got: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server.uri());
    let result = tokio::task::spawn_blocking(move || {
        let client = DiscogsClient::new(&config)?;
        client.inspect_release(1)
    })
    .await
    .unwrap();

    match result.unwrap_err() {
        FinderError::Parse(_) => {} // Expected
        other => panic!("Expected FinderError::Parse, got: {other:?}"),
    }
}

#[tokio::test]
async fn missing_required_field_is_parse_error() {
    let mock_server = MockServer::start().await;

    // No "id"
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"genres": [], "formats": []}"#))
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server.uri());
    let result = tokio::task::spawn_blocking(move || {
        let client = DiscogsClient::new(&config)?;
        client.inspect_release(1)
    })
    .await
    .unwrap();

    assert!(matches!(result, Err(FinderError::Parse(_))));
}

#[test]
fn unreachable_host_is_network_error() {
    // Port 1 is reserved and nothing listens on it
    let client = DiscogsClient::new(&test_config("http://127.0.0.1:1")).unwrap();
    match client.inspect_release(1).unwrap_err() {
        FinderError::Network(_) => {} // Expected
        other => panic!("Expected FinderError::Network, got: {other:?}"),
    }
}
