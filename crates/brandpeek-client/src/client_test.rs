use super::*;

#[test]
fn brands_url_appends_resource_path() {
    let url = brands_url("https://brandpeek-22360-default-rtdb.firebaseio.com").unwrap();
    assert_eq!(
        url.as_str(),
        "https://brandpeek-22360-default-rtdb.firebaseio.com/brands.json"
    );
}

#[test]
fn brands_url_collapses_trailing_slashes() {
    let url = brands_url("https://example.com///").unwrap();
    assert_eq!(url.as_str(), "https://example.com/brands.json");
}

#[test]
fn brands_url_keeps_base_path() {
    let url = brands_url("http://localhost:8080/v1/data").unwrap();
    assert_eq!(url.as_str(), "http://localhost:8080/v1/data/brands.json");
}

#[test]
fn brands_url_rejects_garbage() {
    let err = brands_url("not a url").unwrap_err();
    assert!(
        matches!(err, FetchError::InvalidBaseUrl { ref url, .. } if url == "not a url"),
        "expected InvalidBaseUrl, got: {err:?}"
    );
}

#[test]
fn new_client_targets_default_source() {
    let client = BrandClient::new().expect("client construction should not fail");
    assert_eq!(
        client.brands_url().as_str(),
        "https://brandpeek-22360-default-rtdb.firebaseio.com/brands.json"
    );
    assert_eq!(client.timeout_ms, 10_000);
}
