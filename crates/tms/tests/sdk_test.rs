//! End-to-end SDK tests: loader -> factory -> adapter

use std::io::Write;

use tms::{ProviderCategory, SdkFactory, SettingsLoader, require_paths};

#[tokio::test]
async fn test_defaults_give_degraded_but_usable_adapters() {
    let settings = SettingsLoader::new()
        .with_config_path("/nonexistent/tms.toml")
        .load()
        .expect("defaults should load");
    let factory = SdkFactory::new(settings);

    // No token configured: adapter exists but is disconnected
    let slack = factory
        .create(ProviderCategory::Messaging, "slack")
        .expect("slack is in the registry");
    assert_eq!(slack.kind(), "slack");
    assert!(!slack.is_connected());
    slack.disconnect().await.expect("disconnect is a no-op");

    // Default RPC endpoint is present: adapter comes up connected
    let evm = factory
        .create(ProviderCategory::Web3, "evm")
        .expect("evm is in the registry");
    assert!(evm.is_connected());
}

#[tokio::test]
async fn test_toml_settings_flow_through_to_adapters() {
    let mut file = tempfile::NamedTempFile::with_suffix(".toml").expect("temp file");
    writeln!(
        file,
        r#"
[messaging.slack]
token = "xoxb-e2e"

[ai.vector_stores.chroma]
url = "http://localhost:8000"
"#
    )
    .expect("write settings file");

    let settings = SettingsLoader::new()
        .with_config_path(file.path())
        .load()
        .expect("file-backed settings should load");
    let factory = SdkFactory::new(settings);

    let slack = factory
        .create(ProviderCategory::Messaging, "slack")
        .expect("slack is in the registry");
    assert!(slack.is_connected());

    let chroma = factory
        .create(ProviderCategory::VectorStore, "chroma")
        .expect("chroma subtree is configured");
    assert!(chroma.is_connected());

    // Unconfigured stores stay gated
    assert!(
        factory
            .create(ProviderCategory::VectorStore, "pinecone")
            .is_err()
    );
}

#[test]
fn test_require_paths_guards_call_sites() {
    let settings = SettingsLoader::new()
        .with_config_path("/nonexistent/tms.toml")
        .load()
        .expect("defaults should load");

    let err = require_paths(&settings, &["messaging.slack.token"])
        .expect_err("no token configured");
    assert_eq!(
        err.to_string(),
        "Configuration error: Missing required configuration: messaging.slack.token"
    );
}
