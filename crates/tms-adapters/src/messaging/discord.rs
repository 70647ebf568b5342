//! Discord adapter

use async_trait::async_trait;
use tms_config::settings::DiscordSettings;
use tms_domain::error::{Error, Result};
use tms_domain::ports::adapter::Adapter;

use crate::client::{ClientState, default_http_timeout, ensure_connected, probe_http_client};

/// Discord REST adapter
pub struct DiscordAdapter {
    token: String,
    client: ClientState<reqwest::Client>,
}

impl DiscordAdapter {
    /// Build the adapter, probing for an HTTP client
    pub fn new(settings: &DiscordSettings) -> Self {
        let client = ClientState::from_probe("discord", probe_http_client(default_http_timeout()));
        Self {
            token: settings.token.clone(),
            client,
        }
    }

    /// Open a gateway session for the bot
    pub async fn login(&self) -> Result<()> {
        ensure_connected(self)?;
        Err(Error::not_implemented("discord.login"))
    }

    /// Post a message to a channel
    pub async fn send_message(&self, _channel_id: &str, _content: &str) -> Result<()> {
        ensure_connected(self)?;
        Err(Error::not_implemented("discord.send_message"))
    }
}

#[async_trait]
impl Adapter for DiscordAdapter {
    fn kind(&self) -> &'static str {
        "discord"
    }

    fn is_connected(&self) -> bool {
        self.client.is_ready() && !self.token.is_empty()
    }

    async fn disconnect(&self) -> Result<()> {
        Ok(())
    }
}
