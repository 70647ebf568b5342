//! AI provider adapters

use std::sync::Arc;

use tms_config::settings::AiSettings;
use tms_domain::error::Result;
use tms_domain::ports::adapter::Adapter;

use crate::registry::{self, ProviderEntry};

mod huggingface;
mod langchain;
mod llamaindex;
mod openai;

pub use huggingface::HuggingFaceAdapter;
pub use langchain::LangChainAdapter;
pub use llamaindex::LlamaIndexAdapter;
pub use openai::OpenAiAdapter;

fn build_openai(settings: &AiSettings) -> Result<Arc<dyn Adapter>> {
    Ok(Arc::new(OpenAiAdapter::new(&settings.openai)))
}

fn build_huggingface(settings: &AiSettings) -> Result<Arc<dyn Adapter>> {
    Ok(Arc::new(HuggingFaceAdapter::new(&settings.huggingface)))
}

fn build_langchain(settings: &AiSettings) -> Result<Arc<dyn Adapter>> {
    Ok(Arc::new(LangChainAdapter::new(&settings.langchain)))
}

fn build_llamaindex(settings: &AiSettings) -> Result<Arc<dyn Adapter>> {
    Ok(Arc::new(LlamaIndexAdapter::new(&settings.llamaindex)))
}

/// Closed registry of AI providers
pub static PROVIDERS: &[ProviderEntry<AiSettings>] = &[
    ProviderEntry {
        name: "openai",
        description: "OpenAI completion and embedding API",
        build: build_openai,
    },
    ProviderEntry {
        name: "huggingface",
        description: "Hugging Face inference API",
        build: build_huggingface,
    },
    ProviderEntry {
        name: "langchain",
        description: "LangChain orchestration (OpenAI-backed)",
        build: build_langchain,
    },
    ProviderEntry {
        name: "llamaindex",
        description: "LlamaIndex orchestration",
        build: build_llamaindex,
    },
];

/// Resolve an AI provider by name
pub fn resolve(settings: &AiSettings, name: &str) -> Result<Arc<dyn Adapter>> {
    registry::resolve(PROVIDERS, "ai", settings, name)
}

/// List supported AI providers
pub fn list() -> Vec<(&'static str, &'static str)> {
    registry::list(PROVIDERS)
}
