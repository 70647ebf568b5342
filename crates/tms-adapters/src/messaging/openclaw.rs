//! OpenClaw adapter

use async_trait::async_trait;
use serde_json::Value;
use tms_config::settings::OpenClawSettings;
use tms_domain::error::{Error, Result};
use tms_domain::ports::adapter::Adapter;

use crate::client::{ClientState, default_http_timeout, ensure_connected, probe_http_client};
use crate::constants::OPENCLAW_DEFAULT_BASE_URL;

/// OpenClaw conversational platform adapter
pub struct OpenClawAdapter {
    api_key: String,
    base_url: String,
    project_id: Option<String>,
    client: ClientState<reqwest::Client>,
}

impl OpenClawAdapter {
    /// Build the adapter, probing for an HTTP client
    pub fn new(settings: &OpenClawSettings) -> Self {
        let client = ClientState::from_probe("openclaw", probe_http_client(default_http_timeout()));
        Self {
            api_key: settings.api_key.clone(),
            base_url: settings
                .base_url
                .clone()
                .unwrap_or_else(|| OPENCLAW_DEFAULT_BASE_URL.to_string()),
            project_id: settings.project_id.clone(),
            client,
        }
    }

    /// API base URL this adapter targets
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Configured project, if any
    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    /// Send a message into a session
    pub async fn send_message(&self, _session_id: &str, _message: &str) -> Result<Value> {
        ensure_connected(self)?;
        Err(Error::not_implemented("openclaw.send_message"))
    }

    /// Open a session for a user
    pub async fn create_session(&self, _user_id: &str) -> Result<Value> {
        ensure_connected(self)?;
        Err(Error::not_implemented("openclaw.create_session"))
    }

    /// Fetch a session record
    pub async fn get_session(&self, _session_id: &str) -> Result<Value> {
        ensure_connected(self)?;
        Err(Error::not_implemented("openclaw.get_session"))
    }

    /// Replace a session's conversational context
    pub async fn update_session_context(&self, _session_id: &str, _context: &Value) -> Result<()> {
        ensure_connected(self)?;
        Err(Error::not_implemented("openclaw.update_session_context"))
    }

    /// Fetch session history, newest first
    pub async fn get_history(&self, _session_id: &str, _limit: Option<u32>) -> Result<Vec<Value>> {
        ensure_connected(self)?;
        Err(Error::not_implemented("openclaw.get_history"))
    }

    /// Register an intent with example utterances
    pub async fn create_intent(&self, _name: &str, _examples: &[String]) -> Result<Value> {
        ensure_connected(self)?;
        Err(Error::not_implemented("openclaw.create_intent"))
    }

    /// Train the project model on the given data set
    pub async fn train_model(&self, _training_data: &Value) -> Result<()> {
        ensure_connected(self)?;
        Err(Error::not_implemented("openclaw.train_model"))
    }

    /// Fetch the project model's training status
    pub async fn get_model_status(&self) -> Result<Value> {
        ensure_connected(self)?;
        Err(Error::not_implemented("openclaw.get_model_status"))
    }
}

#[async_trait]
impl Adapter for OpenClawAdapter {
    fn kind(&self) -> &'static str {
        "openclaw"
    }

    fn is_connected(&self) -> bool {
        self.client.is_ready() && !self.api_key.is_empty()
    }

    async fn disconnect(&self) -> Result<()> {
        Ok(())
    }
}
