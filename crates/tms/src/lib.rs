//! # Time Machines SDK
//!
//! A multi-provider SDK facade: one validated configuration tree, one
//! factory, and a uniform adapter contract over AI, Web3, messaging, data
//! and vector-store services.
//!
//! This crate provides the main public API. It re-exports the domain
//! types, the configuration layer and the adapter factory.
//!
//! ## Example
//!
//! ```ignore
//! use tms::{ProviderCategory, SdkFactory, SettingsLoader};
//!
//! let settings = SettingsLoader::new().load()?;
//! let factory = SdkFactory::new(settings);
//!
//! let slack = factory.create(ProviderCategory::Messaging, "slack")?;
//! if slack.is_connected() {
//!     // provider-specific operations live on the concrete adapter types
//! }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Error taxonomy, the adapter port and shared value objects
//! - `config` - Settings schema, aggregate validation and source loading
//! - `adapters` - Capability adapters and the closed provider registries

/// Domain layer - error taxonomy, adapter port and value objects
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use tms_domain::*;
}

/// Configuration layer - settings schema, validation and loading
///
/// Re-exports from the config crate for convenience
pub mod config {
    pub use tms_config::*;
}

/// Adapter layer - capability adapters and the provider factory
///
/// Re-exports from the adapters crate for convenience
pub mod adapters {
    pub use tms_adapters::*;
}

/// Logging initialization for SDK binaries
pub mod logging;

// Re-export commonly used types at the crate root
pub use tms_adapters::{Adapter, ProviderCategory, SdkFactory};
pub use tms_config::loader::SettingsLoader;
pub use tms_config::require::require_paths;
pub use tms_domain::error::{Error, Result, ValidationIssue};
