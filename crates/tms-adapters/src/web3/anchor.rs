//! Anchor framework adapter
//!
//! Toggle-style adapter; program interaction is gated on the integration
//! being enabled in settings.

use async_trait::async_trait;
use tms_config::settings::AnchorSettings;
use tms_domain::error::Result;
use tms_domain::ports::adapter::Adapter;

/// Anchor (Solana framework) adapter
pub struct AnchorAdapter {
    enabled: bool,
    program_id: Option<String>,
}

impl AnchorAdapter {
    /// Build the adapter from settings
    pub fn new(settings: &AnchorSettings) -> Self {
        Self {
            enabled: settings.enabled,
            program_id: settings.program_id.clone(),
        }
    }

    /// Configured program identifier, if any
    pub fn program_id(&self) -> Option<&str> {
        self.program_id.as_deref()
    }
}

#[async_trait]
impl Adapter for AnchorAdapter {
    fn kind(&self) -> &'static str {
        "anchor"
    }

    fn is_connected(&self) -> bool {
        self.enabled
    }

    async fn disconnect(&self) -> Result<()> {
        Ok(())
    }
}
