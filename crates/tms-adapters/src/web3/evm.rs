//! EVM chain adapter

use async_trait::async_trait;
use tms_config::settings::EvmSettings;
use tms_domain::error::{Error, Result};
use tms_domain::ports::adapter::Adapter;
use url::Url;

use crate::client::{ClientState, ensure_connected, probe_url};

/// EVM JSON-RPC adapter (Ethereum, Polygon, BSC, ...)
///
/// The probe only parses the RPC endpoint; no JSON-RPC calls are wired up
/// yet.
pub struct EvmAdapter {
    rpc: ClientState<Url>,
    chain_id: u64,
}

impl EvmAdapter {
    /// Build the adapter, probing the RPC endpoint
    pub fn new(settings: &EvmSettings) -> Self {
        Self {
            rpc: ClientState::from_probe("evm", probe_url(&settings.rpc_url)),
            chain_id: settings.chain_id,
        }
    }

    /// Chain this adapter targets
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Fetch the latest block number
    pub async fn get_block_number(&self) -> Result<u64> {
        ensure_connected(self)?;
        Err(Error::not_implemented("evm.get_block_number"))
    }

    /// Fetch the native-token balance of an address, in wei as a decimal
    /// string
    pub async fn get_balance(&self, _address: &str) -> Result<String> {
        ensure_connected(self)?;
        Err(Error::not_implemented("evm.get_balance"))
    }
}

#[async_trait]
impl Adapter for EvmAdapter {
    fn kind(&self) -> &'static str {
        "evm"
    }

    fn is_connected(&self) -> bool {
        self.rpc.is_ready()
    }

    async fn disconnect(&self) -> Result<()> {
        Ok(())
    }
}
