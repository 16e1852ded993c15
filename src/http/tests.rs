//! Tests for the HTTP client module

use super::*;
use crate::config::SourceSettings;
use crate::error::Error;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.connect_timeout, Duration::from_secs(10));
    assert!(config.user_agent.starts_with("source-random-data/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .timeout(Duration::from_secs(60))
        .connect_timeout(Duration::from_secs(2))
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(config.connect_timeout, Duration::from_secs(2));
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_http_client_config_from_settings() {
    let settings = SourceSettings::default().with_timeout(3).with_connect_timeout(1);
    let config = HttpClientConfig::from(&settings);
    assert_eq!(config.timeout, Duration::from_secs(3));
    assert_eq!(config.connect_timeout, Duration::from_secs(1));
}

#[test]
fn test_endpoint_url() {
    let client = HttpClient::new("https://random-data-api.com/", HttpClientConfig::default())
        .unwrap();
    let url = client
        .endpoint_url(
            "api/phone_number/random_phone_number",
            &[("size", "10".to_string())],
        )
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://random-data-api.com/api/phone_number/random_phone_number?size=10"
    );
}

#[test]
fn test_endpoint_url_keeps_base_path() {
    let client =
        HttpClient::new("http://localhost:9000/proxy", HttpClientConfig::default()).unwrap();
    assert_eq!(client.base_url().as_str(), "http://localhost:9000/proxy/");

    let url = client.endpoint_url("/api/code/random_code", &[]).unwrap();
    assert_eq!(url.as_str(), "http://localhost:9000/proxy/api/code/random_code");
}

#[test]
fn test_invalid_base_url() {
    let result = HttpClient::new("not a url", HttpClientConfig::default());
    assert!(matches!(result, Err(Error::InvalidUrl(_))));
}

#[tokio::test]
async fn test_http_client_get() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/code/random_code"))
        .and(query_param("size", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 1, "uid": "a", "npi": "1"}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(&mock_server.uri(), HttpClientConfig::default()).unwrap();
    let url = client
        .endpoint_url("api/code/random_code", &[("size", "2".to_string())])
        .unwrap();
    let response = client.get(&url).await.unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_http_client_returns_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(&mock_server.uri(), HttpClientConfig::default()).unwrap();
    let response = client.get_root().await.unwrap();

    assert_eq!(response.status(), 503);
}

#[tokio::test]
async fn test_http_client_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .timeout(Duration::from_millis(100))
        .build();
    let client = HttpClient::new(&mock_server.uri(), config).unwrap();

    match client.get_root().await {
        Err(Error::Http(e)) => assert!(e.is_timeout()),
        other => panic!("Expected timeout, got {other:?}"),
    }
}
