//! Nested-path validator tests

use tms_config::require::require_paths;
use tms_config::settings::SdkSettings;
use tms_domain::error::Error;

#[test]
fn test_empty_path_list_never_fails() {
    let settings = SdkSettings::default();
    assert!(require_paths(&settings, &[]).is_ok());
}

#[test]
fn test_empty_string_value_fails_and_names_the_path() {
    // Default settings carry an empty openai api key
    let settings = SdkSettings::default();
    let err = require_paths(&settings, &["ai.openai.api_key"])
        .expect_err("empty api key should be reported missing");

    match err {
        Error::Configuration { message, .. } => {
            assert_eq!(
                message,
                "Missing required configuration: ai.openai.api_key"
            );
        }
        other => panic!("expected Configuration, got {other:?}"),
    }
}

#[test]
fn test_populated_path_passes() {
    let mut settings = SdkSettings::default();
    settings.ai.openai.api_key = "sk-x".to_string();
    assert!(require_paths(&settings, &["ai.openai.api_key"]).is_ok());
}

#[test]
fn test_all_missing_paths_are_aggregated() {
    let settings = SdkSettings::default();
    let err = require_paths(
        &settings,
        &[
            "ai.openai.api_key",
            "messaging.slack.token",
            "web3.evm.rpc_url", // populated by default, must not appear
        ],
    )
    .expect_err("two credentials are missing");

    match err {
        Error::Configuration { message, .. } => {
            assert_eq!(
                message,
                "Missing required configuration: ai.openai.api_key, messaging.slack.token"
            );
        }
        other => panic!("expected Configuration, got {other:?}"),
    }
}

#[test]
fn test_missing_intermediate_node_counts_as_absent() {
    let settings = SdkSettings::default();
    // No such category in the tree at all; traversal must not error
    let err = require_paths(&settings, &["nonexistent.deeply.nested.key"])
        .expect_err("unknown path should be reported missing");
    assert!(err
        .to_string()
        .contains("nonexistent.deeply.nested.key"));
}

#[test]
fn test_default_rpc_urls_are_present() {
    let settings = SdkSettings::default();
    assert!(require_paths(
        &settings,
        &["web3.evm.rpc_url", "web3.solana.rpc_url", "data.redis.url"]
    )
    .is_ok());
}
