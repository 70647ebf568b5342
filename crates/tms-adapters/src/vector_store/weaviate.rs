//! Weaviate adapter

use async_trait::async_trait;
use tms_config::settings::WeaviateSettings;
use tms_domain::error::Result;
use tms_domain::ports::adapter::Adapter;
use url::Url;

use crate::client::{ClientState, probe_url};

/// Weaviate vector store adapter
pub struct WeaviateAdapter {
    endpoint: ClientState<Url>,
    api_key: Option<String>,
}

impl WeaviateAdapter {
    /// Build the adapter, probing the server URL
    pub fn new(settings: &WeaviateSettings) -> Self {
        Self {
            endpoint: ClientState::from_probe("weaviate", probe_url(&settings.url)),
            api_key: settings.api_key.clone(),
        }
    }

    /// Configured API key, if any (anonymous access is valid)
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}

#[async_trait]
impl Adapter for WeaviateAdapter {
    fn kind(&self) -> &'static str {
        "weaviate"
    }

    fn is_connected(&self) -> bool {
        self.endpoint.is_ready()
    }

    async fn disconnect(&self) -> Result<()> {
        Ok(())
    }
}
