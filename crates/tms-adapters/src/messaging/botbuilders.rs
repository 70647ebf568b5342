//! BotBuilders adapter

use async_trait::async_trait;
use serde_json::Value;
use tms_config::settings::BotBuildersSettings;
use tms_domain::error::{Error, Result};
use tms_domain::ports::adapter::Adapter;

use crate::client::{ClientState, default_http_timeout, ensure_connected, probe_http_client};
use crate::constants::BOTBUILDERS_DEFAULT_BASE_URL;

/// BotBuilders platform adapter
pub struct BotBuildersAdapter {
    api_key: String,
    base_url: String,
    workspace_id: Option<String>,
    client: ClientState<reqwest::Client>,
}

impl BotBuildersAdapter {
    /// Build the adapter, probing for an HTTP client
    pub fn new(settings: &BotBuildersSettings) -> Self {
        let client =
            ClientState::from_probe("botbuilders", probe_http_client(default_http_timeout()));
        Self {
            api_key: settings.api_key.clone(),
            base_url: settings
                .base_url
                .clone()
                .unwrap_or_else(|| BOTBUILDERS_DEFAULT_BASE_URL.to_string()),
            workspace_id: settings.workspace_id.clone(),
            client,
        }
    }

    /// API base URL this adapter targets
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Configured workspace, if any
    pub fn workspace_id(&self) -> Option<&str> {
        self.workspace_id.as_deref()
    }

    /// Send a message into a conversation
    pub async fn send_message(&self, _conversation_id: &str, _message: &str) -> Result<()> {
        ensure_connected(self)?;
        Err(Error::not_implemented("botbuilders.send_message"))
    }

    /// Create a bot in the workspace
    pub async fn create_bot(&self, _name: &str, _config: &Value) -> Result<Value> {
        ensure_connected(self)?;
        Err(Error::not_implemented("botbuilders.create_bot"))
    }

    /// Fetch a bot definition
    pub async fn get_bot(&self, _bot_id: &str) -> Result<Value> {
        ensure_connected(self)?;
        Err(Error::not_implemented("botbuilders.get_bot"))
    }

    /// Update a bot's configuration
    pub async fn update_bot(&self, _bot_id: &str, _config: &Value) -> Result<()> {
        ensure_connected(self)?;
        Err(Error::not_implemented("botbuilders.update_bot"))
    }

    /// Deploy a bot to the given channels
    pub async fn deploy_bot(&self, _bot_id: &str, _channels: &[String]) -> Result<()> {
        ensure_connected(self)?;
        Err(Error::not_implemented("botbuilders.deploy_bot"))
    }

    /// Fetch a conversation's history, newest first
    pub async fn get_conversation_history(
        &self,
        _conversation_id: &str,
        _limit: Option<u32>,
    ) -> Result<Vec<Value>> {
        ensure_connected(self)?;
        Err(Error::not_implemented("botbuilders.get_conversation_history"))
    }

    /// Train a bot on the given data set
    pub async fn train_bot(&self, _bot_id: &str, _training_data: &Value) -> Result<()> {
        ensure_connected(self)?;
        Err(Error::not_implemented("botbuilders.train_bot"))
    }
}

#[async_trait]
impl Adapter for BotBuildersAdapter {
    fn kind(&self) -> &'static str {
        "botbuilders"
    }

    fn is_connected(&self) -> bool {
        self.client.is_ready() && !self.api_key.is_empty()
    }

    async fn disconnect(&self) -> Result<()> {
        Ok(())
    }
}
