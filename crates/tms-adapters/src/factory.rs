//! Adapter factory
//!
//! Single entry point for constructing capability adapters from validated
//! settings. Dispatch is a closed mapping over `(category, name)`; no
//! dynamic lookup or runtime registration exists.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tms_config::settings::SdkSettings;
use tms_domain::error::{Error, Result};
use tms_domain::ports::adapter::Adapter;

use crate::{ai, data, messaging, vector_store, web3};

/// Adapter category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderCategory {
    /// AI providers
    Ai,
    /// Web3 chains
    Web3,
    /// Messaging platforms
    Messaging,
    /// Data services
    Data,
    /// Vector stores
    VectorStore,
}

impl ProviderCategory {
    /// Every category, in listing order
    pub const ALL: [Self; 5] = [
        Self::Ai,
        Self::Web3,
        Self::Messaging,
        Self::Data,
        Self::VectorStore,
    ];

    /// Canonical category name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ai => "ai",
            Self::Web3 => "web3",
            Self::Messaging => "messaging",
            Self::Data => "data",
            Self::VectorStore => "vector_store",
        }
    }
}

impl fmt::Display for ProviderCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ai" => Ok(Self::Ai),
            "web3" => Ok(Self::Web3),
            "messaging" => Ok(Self::Messaging),
            "data" => Ok(Self::Data),
            "vector_store" | "vector-store" => Ok(Self::VectorStore),
            other => Err(Error::configuration(format!(
                "unknown provider category: {other}"
            ))),
        }
    }
}

/// Adapter factory over a validated settings tree
///
/// Cheap to clone; the settings tree is shared. Construction of an
/// adapter never performs network I/O, so `create` is synchronous.
#[derive(Clone)]
pub struct SdkFactory {
    settings: Arc<SdkSettings>,
}

impl SdkFactory {
    /// Create a factory owning the settings tree
    pub fn new(settings: SdkSettings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }

    /// Create a factory over an already shared settings tree
    pub fn with_settings(settings: Arc<SdkSettings>) -> Self {
        Self { settings }
    }

    /// Settings tree this factory dispatches over
    pub fn settings(&self) -> &SdkSettings {
        &self.settings
    }

    /// Construct the adapter for `(category, name)`
    pub fn create(&self, category: ProviderCategory, name: &str) -> Result<Arc<dyn Adapter>> {
        match category {
            ProviderCategory::Ai => ai::resolve(&self.settings.ai, name),
            ProviderCategory::Web3 => web3::resolve(&self.settings.web3, name),
            ProviderCategory::Messaging => messaging::resolve(&self.settings.messaging, name),
            ProviderCategory::Data => data::resolve(&self.settings.data, name),
            ProviderCategory::VectorStore => {
                vector_store::resolve(&self.settings.ai.vector_stores, name)
            }
        }
    }

    /// Construct an AI adapter by name
    pub fn create_ai_adapter(&self, name: &str) -> Result<Arc<dyn Adapter>> {
        self.create(ProviderCategory::Ai, name)
    }

    /// Construct a Web3 adapter by chain name
    pub fn create_web3_adapter(&self, name: &str) -> Result<Arc<dyn Adapter>> {
        self.create(ProviderCategory::Web3, name)
    }

    /// Construct a messaging adapter by platform name
    pub fn create_messaging_adapter(&self, name: &str) -> Result<Arc<dyn Adapter>> {
        self.create(ProviderCategory::Messaging, name)
    }

    /// Construct a data-service adapter by name
    pub fn create_data_adapter(&self, name: &str) -> Result<Arc<dyn Adapter>> {
        self.create(ProviderCategory::Data, name)
    }

    /// Construct a vector-store adapter by name
    pub fn create_vector_store_adapter(&self, name: &str) -> Result<Arc<dyn Adapter>> {
        self.create(ProviderCategory::VectorStore, name)
    }
}

/// List `(name, description)` pairs for a category
pub fn providers(category: ProviderCategory) -> Vec<(&'static str, &'static str)> {
    match category {
        ProviderCategory::Ai => ai::list(),
        ProviderCategory::Web3 => web3::list(),
        ProviderCategory::Messaging => messaging::list(),
        ProviderCategory::Data => data::list(),
        ProviderCategory::VectorStore => vector_store::list(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_through_from_str() {
        for category in ProviderCategory::ALL {
            let parsed: ProviderCategory = category.as_str().parse().expect("canonical name");
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        assert!("blockchain".parse::<ProviderCategory>().is_err());
    }

    #[test]
    fn test_every_category_lists_at_least_one_provider() {
        for category in ProviderCategory::ALL {
            assert!(!providers(category).is_empty(), "{category} has no providers");
        }
    }
}
