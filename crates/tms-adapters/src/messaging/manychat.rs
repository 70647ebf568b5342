//! ManyChat adapter

use async_trait::async_trait;
use serde_json::Value;
use tms_config::settings::ManyChatSettings;
use tms_domain::error::{Error, Result};
use tms_domain::ports::adapter::Adapter;

use crate::client::{ClientState, default_http_timeout, ensure_connected, probe_http_client};
use crate::constants::MANYCHAT_DEFAULT_BASE_URL;

/// ManyChat API adapter
pub struct ManyChatAdapter {
    api_key: String,
    base_url: String,
    client: ClientState<reqwest::Client>,
}

impl ManyChatAdapter {
    /// Build the adapter, probing for an HTTP client
    pub fn new(settings: &ManyChatSettings) -> Self {
        let client = ClientState::from_probe("manychat", probe_http_client(default_http_timeout()));
        Self {
            api_key: settings.api_key.clone(),
            base_url: settings
                .base_url
                .clone()
                .unwrap_or_else(|| MANYCHAT_DEFAULT_BASE_URL.to_string()),
            client,
        }
    }

    /// API base URL this adapter targets
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a text message to a subscriber
    pub async fn send_message(&self, _subscriber_id: &str, _text: &str) -> Result<()> {
        ensure_connected(self)?;
        Err(Error::not_implemented("manychat.send_message"))
    }

    /// Fetch a subscriber record
    pub async fn get_subscriber(&self, _subscriber_id: &str) -> Result<Value> {
        ensure_connected(self)?;
        Err(Error::not_implemented("manychat.get_subscriber"))
    }

    /// Set a custom field on a subscriber
    pub async fn set_custom_field(
        &self,
        _subscriber_id: &str,
        _field: &str,
        _value: &Value,
    ) -> Result<()> {
        ensure_connected(self)?;
        Err(Error::not_implemented("manychat.set_custom_field"))
    }

    /// Add a tag to a subscriber
    pub async fn add_tag(&self, _subscriber_id: &str, _tag: &str) -> Result<()> {
        ensure_connected(self)?;
        Err(Error::not_implemented("manychat.add_tag"))
    }

    /// Remove a tag from a subscriber
    pub async fn remove_tag(&self, _subscriber_id: &str, _tag: &str) -> Result<()> {
        ensure_connected(self)?;
        Err(Error::not_implemented("manychat.remove_tag"))
    }
}

#[async_trait]
impl Adapter for ManyChatAdapter {
    fn kind(&self) -> &'static str {
        "manychat"
    }

    fn is_connected(&self) -> bool {
        self.client.is_ready() && !self.api_key.is_empty()
    }

    async fn disconnect(&self) -> Result<()> {
        Ok(())
    }
}
