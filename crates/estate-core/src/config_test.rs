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

/// Returns a map with all required env vars populated with valid defaults.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("ESTATE_API_BASE_URL", "http://localhost:8000");
    m
}

#[test]
fn parse_environment_known_values() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "ESTATE_ENV"));
}

#[test]
fn build_app_config_fails_without_base_url() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "ESTATE_API_BASE_URL"),
        "expected MissingEnvVar(ESTATE_API_BASE_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_treats_blank_base_url_as_missing() {
    let mut map = HashMap::new();
    map.insert("ESTATE_API_BASE_URL", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
}

#[test]
fn build_app_config_applies_defaults() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should parse");
    assert_eq!(cfg.api_base_url, "http://localhost:8000");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.http_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "estate-map/0.1 (listing-discovery)");
    assert!((cfg.map_center.latitude - 31.252_973).abs() < 1e-9);
    assert!((cfg.map_center.longitude - 34.791_462).abs() < 1e-9);
    assert_eq!(cfg.map_zoom, 13);
    assert_eq!(cfg.fly_to_zoom, 16);
}

#[test]
fn build_app_config_honours_overrides() {
    let mut map = full_env();
    map.insert("ESTATE_ENV", "production");
    map.insert("ESTATE_HTTP_TIMEOUT_SECS", "5");
    map.insert("ESTATE_MAP_CENTER_LAT", "32.0853");
    map.insert("ESTATE_MAP_CENTER_LNG", "34.7818");
    map.insert("ESTATE_FLY_TO_ZOOM", "18");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.http_timeout_secs, 5);
    assert!((cfg.map_center.latitude - 32.0853).abs() < 1e-9);
    assert_eq!(cfg.fly_to_zoom, 18);
}

#[test]
fn build_app_config_rejects_invalid_timeout() {
    let mut map = full_env();
    map.insert("ESTATE_HTTP_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ESTATE_HTTP_TIMEOUT_SECS"),
        "got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_out_of_range_latitude() {
    let mut map = full_env();
    map.insert("ESTATE_MAP_CENTER_LAT", "95.0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ESTATE_MAP_CENTER_LAT"),
        "got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_excessive_zoom() {
    let mut map = full_env();
    map.insert("ESTATE_MAP_ZOOM", "30");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ESTATE_MAP_ZOOM"),
        "got: {result:?}"
    );
}
