//! Integration tests for `BrandClient` using wiremock HTTP mocks.

use std::time::Duration;

use brandpeek_client::{BrandClient, FetchError};
use brandpeek_core::{rank_top_brands, DEFAULT_LIMIT};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> BrandClient {
    BrandClient::with_base_url(base_url, Duration::from_secs(5), "brandpeek-test/0.1")
        .expect("client construction should not fail")
}

#[tokio::test]
async fn fetch_brands_returns_catalog_in_source_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/brands.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"nike":{"name":"Nike","foundedYear":1964},"apple":{"name":"Apple","website":"apple.com"}}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let catalog = client.fetch_brands().await.expect("should parse brands");

    let ids: Vec<&str> = catalog.iter().map(|(id, _)| id).collect();
    assert_eq!(ids, vec!["nike", "apple"]);
    assert_eq!(catalog.get("nike").unwrap().founded_year, Some(1964));
    assert_eq!(
        catalog.get("apple").unwrap().website.as_deref(),
        Some("apple.com")
    );
}

#[tokio::test]
async fn fetch_brands_sends_json_content_type() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/brands.json"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let catalog = client.fetch_brands().await.expect("header should match");
    assert!(catalog.is_empty());
}

#[tokio::test]
async fn fetch_brands_keeps_base_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tenant/brands.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "a": { "name": "A" } })))
        .mount(&server)
        .await;

    let client = test_client(&format!("{}/tenant/", server.uri()));
    let catalog = client.fetch_brands().await.expect("should parse brands");
    assert_eq!(catalog.len(), 1);
}

#[tokio::test]
async fn null_body_is_empty_catalog() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/brands.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("null", "application/json"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let catalog = client.fetch_brands().await.expect("null should be accepted");

    assert!(catalog.is_empty());
    assert!(rank_top_brands(&catalog, DEFAULT_LIMIT).is_empty());
}

#[tokio::test]
async fn records_with_missing_fields_do_not_fail() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/brands.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "empty": {},
            "scalar": "just a string",
            "partial": { "name": "Partial", "socialMedia": { "instagram": true } }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let catalog = client.fetch_brands().await.expect("lenient parse");
    let ranked = rank_top_brands(&catalog, DEFAULT_LIMIT);

    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked[0].id, "partial");
    assert_eq!(ranked[0].calculated_rank, 3);
}

#[tokio::test]
async fn array_body_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/brands.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "name": "A" }])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_brands().await.unwrap_err();

    assert!(
        matches!(err, FetchError::Malformed { ref reason } if reason.contains("array")),
        "expected Malformed, got: {err:?}"
    );
}

#[tokio::test]
async fn non_json_body_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/brands.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_brands().await.unwrap_err();

    assert!(
        matches!(err, FetchError::Malformed { .. }),
        "expected Malformed, got: {err:?}"
    );
}

#[tokio::test]
async fn server_error_is_network_error_with_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/brands.json"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_brands().await.unwrap_err();

    match err {
        FetchError::Network(source) => {
            assert_eq!(source.status().map(|s| s.as_u16()), Some(503));
        }
        other => panic!("expected Network, got: {other:?}"),
    }
}

#[tokio::test]
async fn not_found_is_network_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/brands.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_brands().await.unwrap_err();

    assert!(
        matches!(err, FetchError::Network(_)),
        "expected Network, got: {err:?}"
    );
}

#[tokio::test]
async fn unreachable_host_is_network_error() {
    let client = test_client("http://127.0.0.1:1");
    let err = client.fetch_brands().await.unwrap_err();

    assert!(
        matches!(err, FetchError::Network(_)),
        "expected Network, got: {err:?}"
    );
}

#[tokio::test]
async fn slow_response_times_out_instead_of_hanging() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/brands.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = BrandClient::with_base_url(
        &server.uri(),
        Duration::from_millis(200),
        "brandpeek-test/0.1",
    )
    .unwrap();

    let started = std::time::Instant::now();
    let err = client.fetch_brands().await.unwrap_err();

    assert!(
        matches!(err, FetchError::Timeout { timeout_ms: 200 }),
        "expected Timeout, got: {err:?}"
    );
    assert!(
        started.elapsed() < Duration::from_secs(3),
        "fetch should give up at the timeout"
    );
}

#[tokio::test]
async fn each_fetch_issues_exactly_one_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/brands.json"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let _ = client.fetch_brands().await;
    // `expect(1)` is verified when the server drops: no retries.
}
