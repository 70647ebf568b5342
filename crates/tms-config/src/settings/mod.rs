//! Typed settings tree
//!
//! One module per category. Every struct carries `#[serde(default)]` and a
//! `Default` impl matching the documented defaults, so a partial settings
//! object is the common case and deserializes without special-casing.

pub mod ai;
pub mod app;
pub mod data;
pub mod messaging;
pub mod web3;

pub use ai::{
    AiSettings, ChromaSettings, HuggingFaceSettings, LangChainSettings, LlamaIndexSettings,
    OpenAiSettings, PineconeSettings, VectorStoreSettings, WeaviateSettings,
};
pub use app::{
    ApiSettings, AppSettings, CorsOrigin, CorsSettings, DatabaseSettings, Environment,
    MongoDbSettings, RateLimitSettings, TelemetrySettings,
};
pub use data::{DataSettings, IpfsSettings, PostgresSettings, RedisSettings, S3Settings};
pub use messaging::{
    BotBuildersSettings, DiscordSettings, ManyChatSettings, MessagingSettings, MoltbookSettings,
    OpenClawSettings, SlackSettings,
};
pub use web3::{AnchorSettings, EvmSettings, SolanaNetwork, SolanaSettings, Web3Settings};

use serde::{Deserialize, Serialize};

/// Root of the SDK settings tree
///
/// Category → provider → field. Immutable after loading; the adapter
/// factory only ever reads subtrees out of it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SdkSettings {
    /// AI provider settings
    pub ai: AiSettings,
    /// Web3 chain settings
    pub web3: Web3Settings,
    /// Messaging platform settings
    pub messaging: MessagingSettings,
    /// Data service settings
    pub data: DataSettings,
}
