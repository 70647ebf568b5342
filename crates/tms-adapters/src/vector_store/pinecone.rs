//! Pinecone adapter

use async_trait::async_trait;
use tms_config::settings::PineconeSettings;
use tms_domain::error::Result;
use tms_domain::ports::adapter::Adapter;

use crate::client::{ClientState, default_http_timeout, probe_http_client};

/// Pinecone vector store adapter
pub struct PineconeAdapter {
    api_key: String,
    environment: String,
    client: ClientState<reqwest::Client>,
}

impl PineconeAdapter {
    /// Build the adapter, probing for an HTTP client
    pub fn new(settings: &PineconeSettings) -> Self {
        let client = ClientState::from_probe("pinecone", probe_http_client(default_http_timeout()));
        Self {
            api_key: settings.api_key.clone(),
            environment: settings.environment.clone(),
            client,
        }
    }

    /// Pinecone environment this adapter targets
    pub fn environment(&self) -> &str {
        &self.environment
    }
}

#[async_trait]
impl Adapter for PineconeAdapter {
    fn kind(&self) -> &'static str {
        "pinecone"
    }

    fn is_connected(&self) -> bool {
        self.client.is_ready() && !self.api_key.is_empty()
    }

    async fn disconnect(&self) -> Result<()> {
        Ok(())
    }
}
