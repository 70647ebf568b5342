//! Adapter behavior tests
//!
//! Covers the construction-never-fails rule, the connected-state guard on
//! provider operations, and default endpoint resolution.

use serde_json::json;
use tms_adapters::ai::OpenAiAdapter;
use tms_adapters::data::{IpfsAdapter, PostgresAdapter, RedisAdapter, S3Adapter};
use tms_adapters::messaging::{
    BotBuildersAdapter, ManyChatAdapter, MoltbookAdapter, OpenClawAdapter, SlackAdapter,
};
use tms_adapters::web3::{AnchorAdapter, EvmAdapter};
use tms_adapters::{Adapter, Error};
use tms_config::settings::{
    AnchorSettings, BotBuildersSettings, EvmSettings, IpfsSettings, ManyChatSettings,
    MoltbookSettings, OpenAiSettings, OpenClawSettings, PostgresSettings, RedisSettings,
    S3Settings, SlackSettings,
};
use tms_domain::value_objects::GenerateOptions;

#[tokio::test]
async fn test_adapter_without_credentials_degrades_instead_of_failing() {
    // Default settings carry no token; construction still succeeds
    let slack = SlackAdapter::new(&SlackSettings::default());

    assert_eq!(slack.kind(), "slack");
    assert!(!slack.is_connected());

    let err = slack
        .send_message("#general", "hello")
        .await
        .expect_err("disconnected adapter must reject operations");
    assert!(matches!(err, Error::NotInitialized { .. }));
    assert_eq!(err.to_string(), "slack client not initialized");
}

#[tokio::test]
async fn test_disconnect_is_idempotent() {
    let slack = SlackAdapter::new(&SlackSettings::default());
    slack.disconnect().await.expect("first disconnect");
    slack.disconnect().await.expect("second disconnect");
}

#[tokio::test]
async fn test_connected_adapter_reports_unimplemented_operations() {
    let slack = SlackAdapter::new(&SlackSettings {
        token: "xoxb-token".to_string(),
        signing_secret: None,
    });
    assert!(slack.is_connected());

    let err = slack
        .send_message("#general", "hello")
        .await
        .expect_err("operation body is not wired up yet");
    assert!(matches!(err, Error::NotImplemented { .. }));
    assert_eq!(err.to_string(), "Not implemented: slack.send_message");
}

#[tokio::test]
async fn test_invalid_rpc_url_leaves_evm_disconnected() {
    let evm = EvmAdapter::new(&EvmSettings {
        rpc_url: "definitely not a url".to_string(),
        chain_id: 1,
        private_key: None,
    });

    assert!(!evm.is_connected());
    let err = evm.get_block_number().await.expect_err("no RPC endpoint");
    assert!(matches!(err, Error::NotInitialized { .. }));
}

#[tokio::test]
async fn test_default_evm_settings_connect() {
    let evm = EvmAdapter::new(&EvmSettings::default());
    assert!(evm.is_connected());
    assert_eq!(evm.chain_id(), 1);

    let err = evm.get_balance("0x0000000000000000000000000000000000000000").await;
    assert!(matches!(err, Err(Error::NotImplemented { .. })));
}

#[tokio::test]
async fn test_openai_guard_runs_before_operation_stub() {
    // Missing key: the connected-state guard fires first
    let without_key = OpenAiAdapter::new(&OpenAiSettings::default());
    let err = without_key
        .generate_text("hi", &GenerateOptions::new())
        .await
        .expect_err("no API key");
    assert!(matches!(err, Error::NotInitialized { .. }));

    // With a key the stub itself reports NotImplemented
    let with_key = OpenAiAdapter::new(&OpenAiSettings {
        api_key: "sk-x".to_string(),
        organization: None,
    });
    assert!(with_key.is_connected());
    let err = with_key
        .create_embedding("hi")
        .await
        .expect_err("embedding endpoint is not wired up yet");
    assert!(matches!(err, Error::NotImplemented { .. }));
}

#[test]
fn test_anchor_is_connected_iff_enabled() {
    let disabled = AnchorAdapter::new(&AnchorSettings::default());
    assert!(!disabled.is_connected());

    let enabled = AnchorAdapter::new(&AnchorSettings {
        enabled: true,
        program_id: Some("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA".to_string()),
    });
    assert!(enabled.is_connected());
    assert!(enabled.program_id().is_some());
}

#[test]
fn test_messaging_base_url_defaults_and_overrides() {
    let manychat = ManyChatAdapter::new(&ManyChatSettings::default());
    assert_eq!(manychat.base_url(), "https://api.manychat.com/fb");

    let custom = ManyChatAdapter::new(&ManyChatSettings {
        api_key: String::new(),
        base_url: Some("https://manychat.internal/api".to_string()),
    });
    assert_eq!(custom.base_url(), "https://manychat.internal/api");

    let botbuilders = BotBuildersAdapter::new(&BotBuildersSettings::default());
    assert_eq!(botbuilders.base_url(), "https://api.botbuilders.io/v1");
    assert!(botbuilders.workspace_id().is_none());
}

#[tokio::test]
async fn test_invalid_redis_url_leaves_adapter_disconnected() {
    let redis = RedisAdapter::new(&RedisSettings {
        url: "not-a-redis-url".to_string(),
        password: None,
    });

    assert!(!redis.is_connected());
    let err = redis.get("key").await.expect_err("no client handle");
    assert!(matches!(err, Error::NotInitialized { .. }));
}

#[tokio::test]
async fn test_default_redis_url_parses() {
    let redis = RedisAdapter::new(&RedisSettings::default());
    assert!(redis.is_connected());

    let err = redis.set("key", "value").await;
    assert!(matches!(err, Err(Error::NotImplemented { .. })));
}

#[tokio::test]
async fn test_postgres_pool_builds_without_dialing_out() {
    let postgres = PostgresAdapter::new(&PostgresSettings::default());
    assert!(postgres.is_connected());

    let err = postgres.query("SELECT 1").await;
    assert!(matches!(err, Err(Error::NotImplemented { .. })));
}

#[test]
fn test_postgres_without_host_is_disconnected() {
    let postgres = PostgresAdapter::new(&PostgresSettings {
        host: String::new(),
        ..PostgresSettings::default()
    });
    assert!(!postgres.is_connected());
}

#[test]
fn test_s3_requires_a_bucket() {
    let unbucketed = S3Adapter::new(&S3Settings::default());
    assert!(!unbucketed.is_connected());

    let bucketed = S3Adapter::new(&S3Settings {
        bucket: "artifacts".to_string(),
        ..S3Settings::default()
    });
    assert!(bucketed.is_connected());
    assert_eq!(bucketed.region(), "us-east-1");
}

#[tokio::test]
async fn test_bot_platform_operations_share_the_stub_contract() {
    // Every declared platform operation follows the same two-step contract:
    // connected-state guard first, deterministic NotImplemented second.
    let botbuilders = BotBuildersAdapter::new(&BotBuildersSettings {
        api_key: "bb-key".to_string(),
        ..BotBuildersSettings::default()
    });
    assert!(botbuilders.is_connected());

    let config = json!({ "language": "en" });
    for err in [
        botbuilders.update_bot("bot-1", &config).await.map(|_| ()),
        botbuilders
            .get_conversation_history("conv-1", Some(10))
            .await
            .map(|_| ()),
        botbuilders.train_bot("bot-1", &config).await.map(|_| ()),
    ] {
        assert!(matches!(err, Err(Error::NotImplemented { .. })));
    }

    let openclaw = OpenClawAdapter::new(&OpenClawSettings {
        api_key: "oc-key".to_string(),
        ..OpenClawSettings::default()
    });
    for err in [
        openclaw
            .update_session_context("sess-1", &config)
            .await
            .map(|_| ()),
        openclaw
            .create_intent("greeting", &["hello".to_string()])
            .await
            .map(|_| ()),
        openclaw.train_model(&config).await.map(|_| ()),
        openclaw.get_model_status().await.map(|_| ()),
    ] {
        assert!(matches!(err, Err(Error::NotImplemented { .. })));
    }

    let moltbook = MoltbookAdapter::new(&MoltbookSettings {
        api_key: "mb-key".to_string(),
        ..MoltbookSettings::default()
    });
    let members = ["user-2".to_string()];
    for err in [
        moltbook.get_messages("conv-1", None).await.map(|_| ()),
        moltbook.create_group("group", &members).await.map(|_| ()),
        moltbook
            .add_group_members("group-1", &members)
            .await
            .map(|_| ()),
        moltbook.get_connections("user-1").await.map(|_| ()),
    ] {
        assert!(matches!(err, Err(Error::NotImplemented { .. })));
    }

    // Without a key the guard fires before any of them
    let disconnected = MoltbookAdapter::new(&MoltbookSettings::default());
    let err = disconnected
        .get_connections("user-1")
        .await
        .expect_err("no API key");
    assert!(matches!(err, Error::NotInitialized { .. }));
}

#[tokio::test]
async fn test_ipfs_default_endpoint_parses() {
    let ipfs = IpfsAdapter::new(&IpfsSettings::default());
    assert!(ipfs.is_connected());

    let err = ipfs.add(b"content").await;
    assert!(matches!(err, Err(Error::NotImplemented { .. })));
}
