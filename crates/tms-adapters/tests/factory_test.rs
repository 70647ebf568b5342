//! Factory dispatch tests

use tms_adapters::{ProviderCategory, SdkFactory, factory};
use tms_config::settings::{
    ChromaSettings, PineconeSettings, SdkSettings, WeaviateSettings,
};
use tms_domain::error::Error;

fn factory_with_defaults() -> SdkFactory {
    SdkFactory::new(SdkSettings::default())
}

fn factory_with_vector_stores() -> SdkFactory {
    let mut settings = SdkSettings::default();
    settings.ai.vector_stores.pinecone = Some(PineconeSettings {
        api_key: "pc-key".to_string(),
        ..PineconeSettings::default()
    });
    settings.ai.vector_stores.weaviate = Some(WeaviateSettings {
        url: "http://localhost:8080".to_string(),
        api_key: None,
    });
    settings.ai.vector_stores.chroma = Some(ChromaSettings {
        url: "http://localhost:8000".to_string(),
    });
    SdkFactory::new(settings)
}

#[test]
fn test_unknown_provider_is_rejected_with_category_and_name() {
    let factory = factory_with_defaults();
    let err = factory
        .create_ai_adapter("gpt-please")
        .expect_err("provider outside the closed mapping");

    match err {
        Error::UnknownProvider { category, name } => {
            assert_eq!(category, "ai");
            assert_eq!(name, "gpt-please");
        }
        other => panic!("expected UnknownProvider, got {other:?}"),
    }
}

#[test]
fn test_every_registered_provider_constructs() {
    let factory = factory_with_vector_stores();

    for category in ProviderCategory::ALL {
        for (name, _description) in factory::providers(category) {
            let adapter = factory
                .create(category, name)
                .unwrap_or_else(|e| panic!("{category}/{name} should construct: {e}"));
            assert_eq!(adapter.kind(), name);
        }
    }
}

#[test]
fn test_absent_vector_store_subtree_is_not_configured() {
    let factory = factory_with_defaults();

    for name in ["pinecone", "weaviate", "chroma"] {
        let err = factory
            .create_vector_store_adapter(name)
            .expect_err("absent subtree must not construct");
        assert!(
            matches!(err, Error::NotConfigured { .. }),
            "{name}: expected NotConfigured, got {err:?}"
        );
    }
}

#[test]
fn test_not_configured_message_names_the_store() {
    let err = factory_with_defaults()
        .create_vector_store_adapter("pinecone")
        .expect_err("absent subtree");
    assert_eq!(err.to_string(), "Pinecone not configured");
}

#[test]
fn test_unknown_vector_store_beats_not_configured() {
    // An unknown name is rejected as unknown even though nothing is
    // configured either
    let err = factory_with_defaults()
        .create_vector_store_adapter("faiss")
        .expect_err("unknown store");
    assert!(matches!(err, Error::UnknownProvider { .. }));
}

#[test]
fn test_categories_resolve_independently() {
    let factory = factory_with_defaults();

    // "postgres" is a data service, not an AI provider
    assert!(factory.create_data_adapter("postgres").is_ok());
    assert!(matches!(
        factory.create_ai_adapter("postgres"),
        Err(Error::UnknownProvider { .. })
    ));
}

#[test]
fn test_factory_clones_share_the_settings_tree() {
    let factory = factory_with_defaults();
    let clone = factory.clone();
    assert_eq!(factory.settings(), clone.settings());
}

#[test]
fn test_provider_listings_are_closed_and_stable() {
    let ai: Vec<&str> = factory::providers(ProviderCategory::Ai)
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(ai, ["openai", "huggingface", "langchain", "llamaindex"]);

    let web3: Vec<&str> = factory::providers(ProviderCategory::Web3)
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(web3, ["evm", "solana", "anchor"]);

    let messaging: Vec<&str> = factory::providers(ProviderCategory::Messaging)
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(
        messaging,
        ["slack", "discord", "manychat", "botbuilders", "openclaw", "moltbook"]
    );

    let data: Vec<&str> = factory::providers(ProviderCategory::Data)
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(data, ["postgres", "redis", "s3", "ipfs"]);

    let stores: Vec<&str> = factory::providers(ProviderCategory::VectorStore)
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(stores, ["pinecone", "weaviate", "chroma"]);
}
