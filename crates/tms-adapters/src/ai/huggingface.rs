//! Hugging Face adapter

use async_trait::async_trait;
use tms_config::settings::HuggingFaceSettings;
use tms_domain::error::{Error, Result};
use tms_domain::ports::adapter::Adapter;
use tms_domain::value_objects::GenerateOptions;

use crate::client::{ClientState, default_http_timeout, ensure_connected, probe_http_client};
use crate::constants::HUGGINGFACE_DEFAULT_BASE_URL;

/// Hugging Face inference adapter
pub struct HuggingFaceAdapter {
    api_key: String,
    endpoint: String,
    client: ClientState<reqwest::Client>,
}

impl HuggingFaceAdapter {
    /// Build the adapter, probing for an HTTP client
    pub fn new(settings: &HuggingFaceSettings) -> Self {
        let client =
            ClientState::from_probe("huggingface", probe_http_client(default_http_timeout()));
        Self {
            api_key: settings.api_key.clone(),
            endpoint: settings
                .inference_endpoint
                .clone()
                .unwrap_or_else(|| HUGGINGFACE_DEFAULT_BASE_URL.to_string()),
            client,
        }
    }

    /// Inference endpoint this adapter targets
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Generate a text completion for the prompt
    pub async fn generate_text(&self, _prompt: &str, _options: &GenerateOptions) -> Result<String> {
        ensure_connected(self)?;
        Err(Error::not_implemented("huggingface.generate_text"))
    }
}

#[async_trait]
impl Adapter for HuggingFaceAdapter {
    fn kind(&self) -> &'static str {
        "huggingface"
    }

    fn is_connected(&self) -> bool {
        self.client.is_ready() && !self.api_key.is_empty()
    }

    async fn disconnect(&self) -> Result<()> {
        Ok(())
    }
}
