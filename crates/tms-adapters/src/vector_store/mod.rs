//! Vector store adapters
//!
//! Unlike the other categories, every vector store settings subtree is
//! optional; a build request for an absent subtree fails with
//! `NotConfigured` before any adapter is constructed.

use std::sync::Arc;

use tms_config::settings::VectorStoreSettings;
use tms_domain::error::{Error, Result};
use tms_domain::ports::adapter::Adapter;

use crate::registry::{self, ProviderEntry};

mod chroma;
mod pinecone;
mod weaviate;

pub use chroma::ChromaAdapter;
pub use pinecone::PineconeAdapter;
pub use weaviate::WeaviateAdapter;

fn build_pinecone(settings: &VectorStoreSettings) -> Result<Arc<dyn Adapter>> {
    let pinecone = settings
        .pinecone
        .as_ref()
        .ok_or_else(|| Error::not_configured("Pinecone"))?;
    Ok(Arc::new(PineconeAdapter::new(pinecone)))
}

fn build_weaviate(settings: &VectorStoreSettings) -> Result<Arc<dyn Adapter>> {
    let weaviate = settings
        .weaviate
        .as_ref()
        .ok_or_else(|| Error::not_configured("Weaviate"))?;
    Ok(Arc::new(WeaviateAdapter::new(weaviate)))
}

fn build_chroma(settings: &VectorStoreSettings) -> Result<Arc<dyn Adapter>> {
    let chroma = settings
        .chroma
        .as_ref()
        .ok_or_else(|| Error::not_configured("Chroma"))?;
    Ok(Arc::new(ChromaAdapter::new(chroma)))
}

/// Closed registry of vector stores
pub static PROVIDERS: &[ProviderEntry<VectorStoreSettings>] = &[
    ProviderEntry {
        name: "pinecone",
        description: "Pinecone managed vector database",
        build: build_pinecone,
    },
    ProviderEntry {
        name: "weaviate",
        description: "Weaviate vector database",
        build: build_weaviate,
    },
    ProviderEntry {
        name: "chroma",
        description: "Chroma vector database",
        build: build_chroma,
    },
];

/// Resolve a vector store by name
pub fn resolve(settings: &VectorStoreSettings, name: &str) -> Result<Arc<dyn Adapter>> {
    registry::resolve(PROVIDERS, "vector_store", settings, name)
}

/// List supported vector stores
pub fn list() -> Vec<(&'static str, &'static str)> {
    registry::list(PROVIDERS)
}
