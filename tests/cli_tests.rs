//! Runs the built binary against a mock Discogs API.

use std::process::{Command, Output};

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SELLER_URL: &str = "https://www.discogs.com/seller/woodstockmusicshop/profile?format=Vinyl";

async fn run_binary(base_url: String) -> Output {
    tokio::task::spawn_blocking(move || {
        Command::new(env!("CARGO_BIN_EXE_vinyl_only_finder"))
            .args([SELLER_URL, "--base-url", &base_url, "--delay-ms", "0"])
            .env_remove("DISCOGS_API_KEY")
            .env_remove("DISCOGS_USER_AGENT")
            .output()
            .unwrap()
    })
    .await
    .unwrap()
}

#[tokio::test]
async fn inventory_server_error_exits_nonzero_with_empty_stdout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/woodstockmusicshop/inventory"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let output = run_binary(mock_server.uri()).await;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: "), "stderr was: {stderr}");
}

#[tokio::test]
async fn empty_inventory_exits_zero_with_count_line() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/woodstockmusicshop/inventory"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"pagination": {"page": 1, "pages": 0}, "listings": []}"#,
        ))
        .mount(&mock_server)
        .await;

    let output = run_binary(mock_server.uri()).await;

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Total vinyl-only listings: 0\n"
    );
}
