//! Redis adapter

use async_trait::async_trait;
use tms_config::settings::RedisSettings;
use tms_domain::error::{Error, Result};
use tms_domain::ports::adapter::Adapter;

use crate::client::{Capability, ClientState, ensure_connected};

/// Redis adapter
///
/// `redis::Client::open` only parses the connection URL, so the probe is
/// a pure local check; actual connections are made per operation.
pub struct RedisAdapter {
    client: ClientState<redis::Client>,
}

impl RedisAdapter {
    /// Build the adapter, probing the connection URL
    pub fn new(settings: &RedisSettings) -> Self {
        Self {
            client: ClientState::from_probe("redis", probe_client(&settings.url)),
        }
    }

    /// Fetch a string value
    pub async fn get(&self, _key: &str) -> Result<Option<String>> {
        ensure_connected(self)?;
        Err(Error::not_implemented("redis.get"))
    }

    /// Store a string value
    pub async fn set(&self, _key: &str, _value: &str) -> Result<()> {
        ensure_connected(self)?;
        Err(Error::not_implemented("redis.set"))
    }
}

fn probe_client(url: &str) -> Capability<redis::Client> {
    if url.is_empty() {
        return Capability::Unavailable("redis URL is empty".to_string());
    }
    match redis::Client::open(url) {
        Ok(client) => Capability::Available(client),
        Err(e) => Capability::Unavailable(format!("invalid redis URL {url:?}: {e}")),
    }
}

#[async_trait]
impl Adapter for RedisAdapter {
    fn kind(&self) -> &'static str {
        "redis"
    }

    fn is_connected(&self) -> bool {
        self.client.is_ready()
    }

    async fn disconnect(&self) -> Result<()> {
        Ok(())
    }
}
