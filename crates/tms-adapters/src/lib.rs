//! # Time Machines SDK - Adapter Implementations
//!
//! This crate contains the capability adapters for every external service
//! the SDK fronts, plus the factory that constructs them from validated
//! settings. Each adapter implements the `Adapter` port defined in
//! `tms-domain`; provider-specific operations live as inherent methods on
//! the concrete adapter types.
//!
//! ## Provider Categories
//!
//! | Category | Providers |
//! |----------|-----------|
//! | AI | OpenAI, Hugging Face, LangChain, LlamaIndex |
//! | Web3 | EVM, Solana, Anchor |
//! | Messaging | Slack, Discord, ManyChat, BotBuilders, OpenClaw, Moltbook |
//! | Data | Postgres, Redis, S3, IPFS |
//! | Vector Store | Pinecone, Weaviate, Chroma |
//!
//! ## Construction Model
//!
//! Adapter construction never fails because a vendor capability is missing.
//! Each constructor runs a local capability probe (build an HTTP client,
//! parse an endpoint URL, assemble a connection config); when the probe
//! fails the adapter is still returned, a warning is logged, and
//! `is_connected()` reports `false`. No constructor performs network I/O.
//!
//! ## Usage
//!
//! ```ignore
//! use tms_adapters::{ProviderCategory, SdkFactory};
//! use tms_config::loader::SettingsLoader;
//!
//! let settings = SettingsLoader::new().load()?;
//! let factory = SdkFactory::new(settings);
//! let slack = factory.create(ProviderCategory::Messaging, "slack")?;
//! assert_eq!(slack.kind(), "slack");
//! ```

// Re-export tms-domain types commonly used with adapters
pub use tms_domain::error::{Error, Result};
pub use tms_domain::ports::adapter::Adapter;

/// Adapter-specific constants (default vendor endpoints)
pub mod constants;

/// Capability probes and client connection state
pub mod client;

/// Closed provider registry plumbing shared by every category
pub mod registry;

/// AI provider adapters
pub mod ai;

/// Web3 chain adapters
pub mod web3;

/// Messaging platform adapters
pub mod messaging;

/// Data service adapters
pub mod data;

/// Vector store adapters
pub mod vector_store;

/// Adapter factory over validated settings
pub mod factory;

pub use client::{Capability, ClientState};
pub use factory::{ProviderCategory, SdkFactory};
