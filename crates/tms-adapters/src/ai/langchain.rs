//! LangChain orchestration adapter
//!
//! Pure toggle: no client handle to probe, the integration is connected
//! exactly when it is enabled in settings.

use async_trait::async_trait;
use tms_config::settings::LangChainSettings;
use tms_domain::error::Result;
use tms_domain::ports::adapter::Adapter;

/// LangChain adapter
pub struct LangChainAdapter {
    enabled: bool,
}

impl LangChainAdapter {
    /// Build the adapter from settings
    pub fn new(settings: &LangChainSettings) -> Self {
        Self {
            enabled: settings.enabled,
        }
    }
}

#[async_trait]
impl Adapter for LangChainAdapter {
    fn kind(&self) -> &'static str {
        "langchain"
    }

    fn is_connected(&self) -> bool {
        self.enabled
    }

    async fn disconnect(&self) -> Result<()> {
        Ok(())
    }
}
