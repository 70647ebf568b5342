//! Moltbook adapter

use async_trait::async_trait;
use serde_json::Value;
use tms_config::settings::MoltbookSettings;
use tms_domain::error::{Error, Result};
use tms_domain::ports::adapter::Adapter;

use crate::client::{ClientState, default_http_timeout, ensure_connected, probe_http_client};
use crate::constants::MOLTBOOK_DEFAULT_BASE_URL;

/// Moltbook social platform adapter
pub struct MoltbookAdapter {
    api_key: String,
    base_url: String,
    app_id: Option<String>,
    client: ClientState<reqwest::Client>,
}

impl MoltbookAdapter {
    /// Build the adapter, probing for an HTTP client
    pub fn new(settings: &MoltbookSettings) -> Self {
        let client = ClientState::from_probe("moltbook", probe_http_client(default_http_timeout()));
        Self {
            api_key: settings.api_key.clone(),
            base_url: settings
                .base_url
                .clone()
                .unwrap_or_else(|| MOLTBOOK_DEFAULT_BASE_URL.to_string()),
            app_id: settings.app_id.clone(),
            client,
        }
    }

    /// API base URL this adapter targets
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Configured application, if any
    pub fn app_id(&self) -> Option<&str> {
        self.app_id.as_deref()
    }

    /// Send a direct message to a user
    pub async fn send_message(&self, _user_id: &str, _message: &str) -> Result<Value> {
        ensure_connected(self)?;
        Err(Error::not_implemented("moltbook.send_message"))
    }

    /// Fetch a user profile
    pub async fn get_user_profile(&self, _user_id: &str) -> Result<Value> {
        ensure_connected(self)?;
        Err(Error::not_implemented("moltbook.get_user_profile"))
    }

    /// Publish content to the feed
    pub async fn post_to_feed(&self, _content: &str) -> Result<Value> {
        ensure_connected(self)?;
        Err(Error::not_implemented("moltbook.post_to_feed"))
    }

    /// Fetch a user's conversations
    pub async fn get_conversations(
        &self,
        _user_id: &str,
        _limit: Option<u32>,
    ) -> Result<Vec<Value>> {
        ensure_connected(self)?;
        Err(Error::not_implemented("moltbook.get_conversations"))
    }

    /// Fetch a conversation's messages, newest first
    pub async fn get_messages(
        &self,
        _conversation_id: &str,
        _limit: Option<u32>,
    ) -> Result<Vec<Value>> {
        ensure_connected(self)?;
        Err(Error::not_implemented("moltbook.get_messages"))
    }

    /// Create a group with the given members
    pub async fn create_group(&self, _name: &str, _member_ids: &[String]) -> Result<Value> {
        ensure_connected(self)?;
        Err(Error::not_implemented("moltbook.create_group"))
    }

    /// Add members to a group
    pub async fn add_group_members(&self, _group_id: &str, _member_ids: &[String]) -> Result<Value> {
        ensure_connected(self)?;
        Err(Error::not_implemented("moltbook.add_group_members"))
    }

    /// Fetch a user's connections
    pub async fn get_connections(&self, _user_id: &str) -> Result<Vec<Value>> {
        ensure_connected(self)?;
        Err(Error::not_implemented("moltbook.get_connections"))
    }
}

#[async_trait]
impl Adapter for MoltbookAdapter {
    fn kind(&self) -> &'static str {
        "moltbook"
    }

    fn is_connected(&self) -> bool {
        self.client.is_ready() && !self.api_key.is_empty()
    }

    async fn disconnect(&self) -> Result<()> {
        Ok(())
    }
}
