//! Slack adapter

use async_trait::async_trait;
use tms_config::settings::SlackSettings;
use tms_domain::error::{Error, Result};
use tms_domain::ports::adapter::Adapter;

use crate::client::{ClientState, default_http_timeout, ensure_connected, probe_http_client};

/// Slack Web API adapter
pub struct SlackAdapter {
    token: String,
    client: ClientState<reqwest::Client>,
}

impl SlackAdapter {
    /// Build the adapter, probing for an HTTP client
    pub fn new(settings: &SlackSettings) -> Self {
        let client = ClientState::from_probe("slack", probe_http_client(default_http_timeout()));
        Self {
            token: settings.token.clone(),
            client,
        }
    }

    /// Post a message to a channel
    pub async fn send_message(&self, _channel: &str, _text: &str) -> Result<()> {
        ensure_connected(self)?;
        Err(Error::not_implemented("slack.send_message"))
    }
}

#[async_trait]
impl Adapter for SlackAdapter {
    fn kind(&self) -> &'static str {
        "slack"
    }

    fn is_connected(&self) -> bool {
        self.client.is_ready() && !self.token.is_empty()
    }

    async fn disconnect(&self) -> Result<()> {
        Ok(())
    }
}
