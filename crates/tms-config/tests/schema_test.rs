//! Settings schema validation tests

use serde_json::json;
use tms_config::schema::{safe_validate, validate};
use tms_config::settings::{CorsOrigin, Environment};
use tms_domain::error::Error;

fn minimal_input() -> serde_json::Value {
    json!({
        "openai": { "api_key": "sk-x" },
        "database": { "mongodb": { "uri": "mongodb://localhost/test" } },
        "cors": { "origin": "*" }
    })
}

#[test]
fn test_minimal_input_defaults_every_optional_field() {
    let settings = validate(&minimal_input()).expect("minimal input should validate");

    assert_eq!(settings.port, 3001);
    assert_eq!(settings.node_env, Environment::Development);
    assert_eq!(settings.openai.organization, None);
    assert_eq!(settings.database.postgres.host, "localhost");
    assert_eq!(settings.database.postgres.port, 5432);
    assert_eq!(settings.database.postgres.database, "timemachines");
    assert_eq!(settings.database.postgres.user, "postgres");
    assert_eq!(settings.database.postgres.password, "");
    assert_eq!(settings.api.rate_limit.window_ms, 900_000);
    assert_eq!(settings.api.rate_limit.max, 100);
    assert!(settings.cors.credentials);
    assert!(settings.telemetry.is_none());
}

#[test]
fn test_numeric_string_port_is_coerced() {
    let mut input = minimal_input();
    input["port"] = json!("3001");

    let settings = validate(&input).expect("string port should coerce");
    assert_eq!(settings.port, 3001);
    assert_eq!(settings.node_env, Environment::Development);
}

#[test]
fn test_invalid_port_and_empty_api_key_both_reported() {
    let input = json!({
        "port": "not-a-number",
        "openai": { "api_key": "" }
    });

    let outcome = safe_validate(&input);
    assert!(!outcome.success);
    assert!(outcome.data.is_none());
    assert!(
        outcome.issues.len() >= 2,
        "expected at least port and api_key issues, got {:?}",
        outcome.issues
    );
    assert!(outcome.issues.iter().any(|i| i.path == "port"));
    assert!(outcome.issues.iter().any(|i| i.path == "openai.api_key"));
}

#[test]
fn test_issues_are_sorted_by_path() {
    let outcome = safe_validate(&json!({ "port": 0 }));
    assert!(!outcome.success);
    let paths: Vec<&str> = outcome.issues.iter().map(|i| i.path.as_str()).collect();
    let mut sorted = paths.clone();
    sorted.sort_unstable();
    assert_eq!(paths, sorted);
}

#[test]
fn test_validation_error_carries_the_issue_list() {
    let err = validate(&json!({})).expect_err("empty object lacks required fields");
    match err {
        Error::Validation { issues } => {
            assert!(issues.iter().any(|i| i.path == "openai.api_key"));
            assert!(issues.iter().any(|i| i.path == "database.mongodb.uri"));
            assert!(issues.iter().any(|i| i.path == "cors.origin"));
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn test_validate_is_idempotent_over_its_own_output() {
    let first = validate(&minimal_input()).expect("minimal input should validate");
    let reserialized = serde_json::to_value(&first).expect("settings should serialize");
    let second = validate(&reserialized).expect("validated output should revalidate");
    assert_eq!(first, second);
}

#[test]
fn test_partial_rate_limit_section_defaults_the_rest() {
    let mut input = minimal_input();
    input["api"] = json!({ "rate_limit": { "max": 250 } });

    let settings = validate(&input).expect("partial rate limit should validate");
    assert_eq!(settings.api.rate_limit.max, 250);
    assert_eq!(settings.api.rate_limit.window_ms, 900_000);
}

#[test]
fn test_rate_limit_rejects_non_positive_values() {
    let mut input = minimal_input();
    input["api"] = json!({ "rate_limit": { "window_ms": 0, "max": -5 } });

    let outcome = safe_validate(&input);
    assert!(!outcome.success);
    assert!(outcome
        .issues
        .iter()
        .any(|i| i.path == "api.rate_limit.window_ms"));
    assert!(outcome.issues.iter().any(|i| i.path == "api.rate_limit.max"));
}

#[test]
fn test_cors_origin_accepts_array_of_strings() {
    let mut input = minimal_input();
    input["cors"] = json!({ "origin": ["https://a.example", "https://b.example"] });

    let settings = validate(&input).expect("array origin should validate");
    assert_eq!(
        settings.cors.origin,
        CorsOrigin::Many(vec![
            "https://a.example".to_string(),
            "https://b.example".to_string()
        ])
    );
    assert!(settings.cors.credentials);
}

#[test]
fn test_mongodb_uri_must_be_url_or_mongodb_scheme() {
    let mut input = minimal_input();
    input["database"]["mongodb"]["uri"] = json!("definitely not a uri");

    let outcome = safe_validate(&input);
    assert!(!outcome.success);
    assert!(outcome
        .issues
        .iter()
        .any(|i| i.path == "database.mongodb.uri"));
}

#[test]
fn test_node_env_must_be_a_known_environment() {
    let mut input = minimal_input();
    input["node_env"] = json!("staging");

    let outcome = safe_validate(&input);
    assert!(!outcome.success);
    assert!(outcome.issues.iter().any(|i| i.path == "node_env"));
}

#[test]
fn test_telemetry_section_defaults_independently() {
    let mut input = minimal_input();
    input["telemetry"] = json!({ "enabled": "true" });

    let settings = validate(&input).expect("telemetry section should validate");
    let telemetry = settings.telemetry.expect("telemetry should be present");
    assert!(telemetry.enabled);
    assert_eq!(telemetry.service_name, "time-machines-backend");
    assert_eq!(telemetry.otlp_endpoint, None);
}

#[test]
fn test_telemetry_endpoint_must_be_a_url() {
    let mut input = minimal_input();
    input["telemetry"] = json!({ "otlp_endpoint": "not a url" });

    let outcome = safe_validate(&input);
    assert!(!outcome.success);
    assert!(outcome
        .issues
        .iter()
        .any(|i| i.path == "telemetry.otlp_endpoint"));
}

#[test]
fn test_non_object_input_is_a_single_root_issue() {
    let outcome = safe_validate(&json!("just a string"));
    assert!(!outcome.success);
    assert_eq!(outcome.issues.len(), 1);
    assert_eq!(outcome.issues[0].path, "$");
}

#[test]
fn test_safe_validate_never_returns_data_on_failure() {
    let outcome = safe_validate(&json!({ "port": 99999 }));
    assert!(!outcome.success);
    assert!(outcome.data.is_none());
    assert!(!outcome.issues.is_empty());
}
