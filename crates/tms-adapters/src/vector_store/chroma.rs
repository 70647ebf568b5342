//! Chroma adapter

use async_trait::async_trait;
use tms_config::settings::ChromaSettings;
use tms_domain::error::Result;
use tms_domain::ports::adapter::Adapter;
use url::Url;

use crate::client::{ClientState, probe_url};

/// Chroma vector store adapter
pub struct ChromaAdapter {
    endpoint: ClientState<Url>,
}

impl ChromaAdapter {
    /// Build the adapter, probing the server URL
    pub fn new(settings: &ChromaSettings) -> Self {
        Self {
            endpoint: ClientState::from_probe("chroma", probe_url(&settings.url)),
        }
    }
}

#[async_trait]
impl Adapter for ChromaAdapter {
    fn kind(&self) -> &'static str {
        "chroma"
    }

    fn is_connected(&self) -> bool {
        self.endpoint.is_ready()
    }

    async fn disconnect(&self) -> Result<()> {
        Ok(())
    }
}
