//! OpenAI adapter

use async_trait::async_trait;
use tms_config::settings::OpenAiSettings;
use tms_domain::error::{Error, Result};
use tms_domain::ports::adapter::Adapter;
use tms_domain::value_objects::GenerateOptions;

use crate::client::{ClientState, default_http_timeout, ensure_connected, probe_http_client};

/// OpenAI completion and embedding adapter
///
/// Holds a plain HTTP client; request wiring for the completion and
/// embedding endpoints is not implemented yet.
pub struct OpenAiAdapter {
    api_key: String,
    organization: Option<String>,
    client: ClientState<reqwest::Client>,
}

impl OpenAiAdapter {
    /// Build the adapter, probing for an HTTP client
    pub fn new(settings: &OpenAiSettings) -> Self {
        let client = ClientState::from_probe("openai", probe_http_client(default_http_timeout()));
        Self {
            api_key: settings.api_key.clone(),
            organization: settings.organization.clone(),
            client,
        }
    }

    /// Configured organization, if any
    pub fn organization(&self) -> Option<&str> {
        self.organization.as_deref()
    }

    /// Generate a text completion for the prompt
    pub async fn generate_text(&self, _prompt: &str, _options: &GenerateOptions) -> Result<String> {
        ensure_connected(self)?;
        Err(Error::not_implemented("openai.generate_text"))
    }

    /// Create an embedding vector for the text
    pub async fn create_embedding(&self, _text: &str) -> Result<Vec<f32>> {
        ensure_connected(self)?;
        Err(Error::not_implemented("openai.create_embedding"))
    }
}

#[async_trait]
impl Adapter for OpenAiAdapter {
    fn kind(&self) -> &'static str {
        "openai"
    }

    fn is_connected(&self) -> bool {
        self.client.is_ready() && !self.api_key.is_empty()
    }

    async fn disconnect(&self) -> Result<()> {
        Ok(())
    }
}
