//! AI provider settings

use serde::{Deserialize, Serialize};

/// AI provider settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiSettings {
    /// OpenAI settings
    pub openai: OpenAiSettings,
    /// Hugging Face settings
    pub huggingface: HuggingFaceSettings,
    /// LangChain settings (uses OpenAI by default)
    pub langchain: LangChainSettings,
    /// LlamaIndex settings
    pub llamaindex: LlamaIndexSettings,
    /// Vector store settings (optional heavy dependencies)
    pub vector_stores: VectorStoreSettings,
}

/// OpenAI settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAiSettings {
    /// API key
    pub api_key: String,
    /// Optional organization identifier
    pub organization: Option<String>,
}

/// Hugging Face settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HuggingFaceSettings {
    /// API key
    pub api_key: String,
    /// Optional custom inference endpoint
    pub inference_endpoint: Option<String>,
}

/// LangChain settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LangChainSettings {
    /// Whether the LangChain integration is enabled
    pub enabled: bool,
}

/// LlamaIndex settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlamaIndexSettings {
    /// Whether the LlamaIndex integration is enabled
    pub enabled: bool,
}

/// Vector store settings
///
/// Each subtree is either fully present or `None`, never partially
/// populated; presence is the gate the factory uses before constructing the
/// corresponding adapter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorStoreSettings {
    /// Pinecone settings
    pub pinecone: Option<PineconeSettings>,
    /// Weaviate settings
    pub weaviate: Option<WeaviateSettings>,
    /// Chroma settings
    pub chroma: Option<ChromaSettings>,
}

/// Pinecone settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PineconeSettings {
    /// API key
    pub api_key: String,
    /// Pinecone environment
    pub environment: String,
}

impl Default for PineconeSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            environment: "us-west1-gcp".to_string(),
        }
    }
}

/// Weaviate settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaviateSettings {
    /// Server URL
    pub url: String,
    /// Optional API key
    pub api_key: Option<String>,
}

/// Chroma settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromaSettings {
    /// Server URL
    pub url: String,
}
