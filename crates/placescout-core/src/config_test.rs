use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

/// Returns a map with all required env vars populated.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("PLACES_API_KEY", "test-key");
    m
}

#[test]
fn build_app_config_fails_without_api_key() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "PLACES_API_KEY"),
        "expected MissingEnvVar(PLACES_API_KEY), got: {result:?}"
    );
}

#[test]
fn build_app_config_treats_blank_api_key_as_missing() {
    let mut map = full_env();
    map.insert("PLACES_API_KEY", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
}

#[test]
fn build_app_config_succeeds_with_defaults() {
    let map = full_env();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.places_api_key, "test-key");
    assert_eq!(cfg.places_base_url, DEFAULT_PLACES_BASE_URL);
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "placescout/0.1 (merchant-explore)");
    assert_eq!(cfg.readiness_max_attempts, 6);
    assert_eq!(cfg.readiness_interval_ms, 1000);
    assert_eq!(cfg.photo_max_width, 400);
    assert_eq!(cfg.default_ranking, RankingPolicy::PhoneFirst);
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = full_env();
    map.insert("PLACESCOUT_PLACES_BASE_URL", "http://127.0.0.1:9000/");
    map.insert("PLACESCOUT_READINESS_MAX_ATTEMPTS", "3");
    map.insert("PLACESCOUT_READINESS_INTERVAL_MS", "250");
    map.insert("PLACESCOUT_PHOTO_MAX_WIDTH", "800");
    map.insert("PLACESCOUT_DEFAULT_RANKING", "alphabetical");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.places_base_url, "http://127.0.0.1:9000/");
    assert_eq!(cfg.readiness_max_attempts, 3);
    assert_eq!(cfg.readiness_interval_ms, 250);
    assert_eq!(cfg.photo_max_width, 800);
    assert_eq!(cfg.default_ranking, RankingPolicy::Alphabetical);
}

#[test]
fn build_app_config_rejects_zero_readiness_attempts() {
    let mut map = full_env();
    map.insert("PLACESCOUT_READINESS_MAX_ATTEMPTS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PLACESCOUT_READINESS_MAX_ATTEMPTS"),
        "expected InvalidEnvVar(PLACESCOUT_READINESS_MAX_ATTEMPTS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_non_numeric_timeout() {
    let mut map = full_env();
    map.insert("PLACESCOUT_REQUEST_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PLACESCOUT_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(PLACESCOUT_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_unknown_ranking() {
    let mut map = full_env();
    map.insert("PLACESCOUT_DEFAULT_RANKING", "distance");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PLACESCOUT_DEFAULT_RANKING"),
        "expected InvalidEnvVar(PLACESCOUT_DEFAULT_RANKING), got: {result:?}"
    );
}

#[test]
fn debug_output_redacts_api_key() {
    let cfg = build_app_config(lookup_from_map(&full_env())).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("test-key"), "api key leaked: {rendered}");
    assert!(rendered.contains("[redacted]"));
}

#[test]
fn build_app_config_ignores_unrelated_vars() {
    let mut map = full_env();
    map.insert("PLACESCOUT_ENV", "staging");
    map.insert("PLACESCOUT_UNUSED", "x");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg, build_app_config(lookup_from_map(&full_env())).unwrap());
}
