//! IPFS adapter

use async_trait::async_trait;
use tms_config::settings::IpfsSettings;
use tms_domain::error::{Error, Result};
use tms_domain::ports::adapter::Adapter;
use url::Url;

use crate::client::{ClientState, ensure_connected, probe_url};

/// IPFS HTTP API adapter
pub struct IpfsAdapter {
    endpoint: ClientState<Url>,
}

impl IpfsAdapter {
    /// Build the adapter, probing the API endpoint
    pub fn new(settings: &IpfsSettings) -> Self {
        Self {
            endpoint: ClientState::from_probe("ipfs", probe_url(&settings.url)),
        }
    }

    /// Add content, returning its CID
    pub async fn add(&self, _content: &[u8]) -> Result<String> {
        ensure_connected(self)?;
        Err(Error::not_implemented("ipfs.add"))
    }

    /// Fetch the content behind a CID
    pub async fn get(&self, _cid: &str) -> Result<Vec<u8>> {
        ensure_connected(self)?;
        Err(Error::not_implemented("ipfs.get"))
    }
}

#[async_trait]
impl Adapter for IpfsAdapter {
    fn kind(&self) -> &'static str {
        "ipfs"
    }

    fn is_connected(&self) -> bool {
        self.endpoint.is_ready()
    }

    async fn disconnect(&self) -> Result<()> {
        Ok(())
    }
}
