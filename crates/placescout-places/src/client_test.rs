use placescout_core::RankingPolicy;

use super::*;

fn test_client(base_url: &str) -> PlacesClient {
    PlacesClient::with_base_url("test-key", 30, base_url, "placescout-test/0.1")
        .expect("client construction should not fail")
}

#[test]
fn build_url_appends_params_then_key() {
    let client = test_client("https://maps.example.com/maps/api/place");
    let url = client
        .build_url(DETAILS_ENDPOINT, &[("place_id", "abc"), ("fields", "name")])
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://maps.example.com/maps/api/place/details/json?place_id=abc&fields=name&key=test-key"
    );
}

#[test]
fn build_url_tolerates_trailing_slashes() {
    let client = test_client("https://maps.example.com/place///");
    let url = client
        .build_url(TEXT_SEARCH_ENDPOINT, &[("query", "cafe")])
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://maps.example.com/place/textsearch/json?query=cafe&key=test-key"
    );
}

#[test]
fn build_url_encodes_free_text_query() {
    let client = test_client("https://maps.example.com/place");
    let url = client
        .build_url(TEXT_SEARCH_ENDPOINT, &[("query", "nail salon in Lagos, Nigeria")])
        .unwrap();
    assert!(
        url.as_str()
            .contains("query=nail+salon+in+Lagos%2C+Nigeria"),
        "query param should be percent-encoded: {url}"
    );
}

#[test]
fn invalid_base_url_is_rejected() {
    let result = PlacesClient::with_base_url("k", 30, "not a url", "ua");
    assert!(matches!(result, Err(PlacesError::InvalidUrl { .. })));
}

#[test]
fn photo_url_uses_client_base_and_key() {
    let client = test_client("http://127.0.0.1:9999/place");
    assert_eq!(
        client.photo_url(Some("ref"), 400).as_deref(),
        Some("http://127.0.0.1:9999/place/photo?maxwidth=400&photoreference=ref&key=test-key")
    );
    assert_eq!(client.photo_url(None, 400), None);
}

#[test]
fn default_readiness_is_six_by_one_second() {
    let client = test_client("https://maps.example.com/place");
    assert_eq!(client.readiness(), ReadinessPolicy::default());
}

#[test]
fn from_config_applies_readiness_settings() {
    let config = AppConfig {
        log_level: "debug".to_owned(),
        places_api_key: "cfg-key".to_owned(),
        places_base_url: "http://127.0.0.1:1/place".to_owned(),
        request_timeout_secs: 5,
        user_agent: "ua".to_owned(),
        readiness_max_attempts: 3,
        readiness_interval_ms: 250,
        photo_max_width: 400,
        default_ranking: RankingPolicy::PhoneFirst,
    };
    let client = PlacesClient::from_config(&config).unwrap();
    assert_eq!(
        client.readiness(),
        ReadinessPolicy::new(3, Duration::from_millis(250))
    );
    assert!(client
        .photo_url(Some("r"), 10)
        .unwrap()
        .ends_with("key=cfg-key"));
}
