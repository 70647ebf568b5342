//! LlamaIndex orchestration adapter
//!
//! Pure toggle, same model as the LangChain adapter.

use async_trait::async_trait;
use tms_config::settings::LlamaIndexSettings;
use tms_domain::error::Result;
use tms_domain::ports::adapter::Adapter;

/// LlamaIndex adapter
pub struct LlamaIndexAdapter {
    enabled: bool,
}

impl LlamaIndexAdapter {
    /// Build the adapter from settings
    pub fn new(settings: &LlamaIndexSettings) -> Self {
        Self {
            enabled: settings.enabled,
        }
    }
}

#[async_trait]
impl Adapter for LlamaIndexAdapter {
    fn kind(&self) -> &'static str {
        "llamaindex"
    }

    fn is_connected(&self) -> bool {
        self.enabled
    }

    async fn disconnect(&self) -> Result<()> {
        Ok(())
    }
}
