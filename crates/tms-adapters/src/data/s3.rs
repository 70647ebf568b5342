//! S3 adapter

use async_trait::async_trait;
use tms_config::settings::S3Settings;
use tms_domain::error::{Error, Result};
use tms_domain::ports::adapter::Adapter;

use crate::client::{ClientState, default_http_timeout, ensure_connected, probe_http_client};

/// S3 object storage adapter
pub struct S3Adapter {
    bucket: String,
    region: String,
    client: ClientState<reqwest::Client>,
}

impl S3Adapter {
    /// Build the adapter, probing for an HTTP client
    pub fn new(settings: &S3Settings) -> Self {
        let client = ClientState::from_probe("s3", probe_http_client(default_http_timeout()));
        Self {
            bucket: settings.bucket.clone(),
            region: settings.region.clone(),
            client,
        }
    }

    /// Region this adapter targets
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Upload an object under the given key
    pub async fn upload(&self, _key: &str, _body: &[u8]) -> Result<()> {
        ensure_connected(self)?;
        Err(Error::not_implemented("s3.upload"))
    }

    /// Download the object stored under the given key
    pub async fn download(&self, _key: &str) -> Result<Vec<u8>> {
        ensure_connected(self)?;
        Err(Error::not_implemented("s3.download"))
    }
}

#[async_trait]
impl Adapter for S3Adapter {
    fn kind(&self) -> &'static str {
        "s3"
    }

    fn is_connected(&self) -> bool {
        self.client.is_ready() && !self.bucket.is_empty()
    }

    async fn disconnect(&self) -> Result<()> {
        Ok(())
    }
}
