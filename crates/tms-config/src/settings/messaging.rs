//! Messaging platform settings

use serde::{Deserialize, Serialize};

/// Messaging platform settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessagingSettings {
    /// Slack settings
    pub slack: SlackSettings,
    /// Discord settings
    pub discord: DiscordSettings,
    /// ManyChat settings
    pub manychat: ManyChatSettings,
    /// BotBuilders settings
    pub botbuilders: BotBuildersSettings,
    /// OpenClaw settings
    pub openclaw: OpenClawSettings,
    /// Moltbook settings
    pub moltbook: MoltbookSettings,
}

/// Slack settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlackSettings {
    /// Bot token
    pub token: String,
    /// Optional signing secret
    pub signing_secret: Option<String>,
}

/// Discord settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscordSettings {
    /// Bot token
    pub token: String,
    /// Optional client identifier
    pub client_id: Option<String>,
}

/// ManyChat settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManyChatSettings {
    /// API key
    pub api_key: String,
    /// Optional custom base URL
    pub base_url: Option<String>,
}

/// BotBuilders settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotBuildersSettings {
    /// API key
    pub api_key: String,
    /// Optional API secret
    pub api_secret: Option<String>,
    /// Optional custom base URL
    pub base_url: Option<String>,
    /// Optional workspace identifier
    pub workspace_id: Option<String>,
}

/// OpenClaw settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenClawSettings {
    /// API key
    pub api_key: String,
    /// Optional API secret
    pub api_secret: Option<String>,
    /// Optional custom base URL
    pub base_url: Option<String>,
    /// Optional project identifier
    pub project_id: Option<String>,
}

/// Moltbook settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoltbookSettings {
    /// API key
    pub api_key: String,
    /// Optional API secret
    pub api_secret: Option<String>,
    /// Optional custom base URL
    pub base_url: Option<String>,
    /// Optional application identifier
    pub app_id: Option<String>,
}
