//! Messaging platform adapters

use std::sync::Arc;

use tms_config::settings::MessagingSettings;
use tms_domain::error::Result;
use tms_domain::ports::adapter::Adapter;

use crate::registry::{self, ProviderEntry};

mod botbuilders;
mod discord;
mod manychat;
mod moltbook;
mod openclaw;
mod slack;

pub use botbuilders::BotBuildersAdapter;
pub use discord::DiscordAdapter;
pub use manychat::ManyChatAdapter;
pub use moltbook::MoltbookAdapter;
pub use openclaw::OpenClawAdapter;
pub use slack::SlackAdapter;

fn build_slack(settings: &MessagingSettings) -> Result<Arc<dyn Adapter>> {
    Ok(Arc::new(SlackAdapter::new(&settings.slack)))
}

fn build_discord(settings: &MessagingSettings) -> Result<Arc<dyn Adapter>> {
    Ok(Arc::new(DiscordAdapter::new(&settings.discord)))
}

fn build_manychat(settings: &MessagingSettings) -> Result<Arc<dyn Adapter>> {
    Ok(Arc::new(ManyChatAdapter::new(&settings.manychat)))
}

fn build_botbuilders(settings: &MessagingSettings) -> Result<Arc<dyn Adapter>> {
    Ok(Arc::new(BotBuildersAdapter::new(&settings.botbuilders)))
}

fn build_openclaw(settings: &MessagingSettings) -> Result<Arc<dyn Adapter>> {
    Ok(Arc::new(OpenClawAdapter::new(&settings.openclaw)))
}

fn build_moltbook(settings: &MessagingSettings) -> Result<Arc<dyn Adapter>> {
    Ok(Arc::new(MoltbookAdapter::new(&settings.moltbook)))
}

/// Closed registry of messaging platforms
pub static PROVIDERS: &[ProviderEntry<MessagingSettings>] = &[
    ProviderEntry {
        name: "slack",
        description: "Slack Web API",
        build: build_slack,
    },
    ProviderEntry {
        name: "discord",
        description: "Discord REST API",
        build: build_discord,
    },
    ProviderEntry {
        name: "manychat",
        description: "ManyChat subscriber messaging",
        build: build_manychat,
    },
    ProviderEntry {
        name: "botbuilders",
        description: "BotBuilders bot platform",
        build: build_botbuilders,
    },
    ProviderEntry {
        name: "openclaw",
        description: "OpenClaw conversational platform",
        build: build_openclaw,
    },
    ProviderEntry {
        name: "moltbook",
        description: "Moltbook social platform",
        build: build_moltbook,
    },
];

/// Resolve a messaging platform by name
pub fn resolve(settings: &MessagingSettings, name: &str) -> Result<Arc<dyn Adapter>> {
    registry::resolve(PROVIDERS, "messaging", settings, name)
}

/// List supported messaging platforms
pub fn list() -> Vec<(&'static str, &'static str)> {
    registry::list(PROVIDERS)
}
