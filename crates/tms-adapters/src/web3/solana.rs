//! Solana adapter

use async_trait::async_trait;
use tms_config::settings::{SolanaNetwork, SolanaSettings};
use tms_domain::error::{Error, Result};
use tms_domain::ports::adapter::Adapter;
use url::Url;

use crate::client::{ClientState, ensure_connected, probe_url};

/// Solana JSON-RPC adapter
pub struct SolanaAdapter {
    rpc: ClientState<Url>,
    network: SolanaNetwork,
}

impl SolanaAdapter {
    /// Build the adapter, probing the RPC endpoint
    pub fn new(settings: &SolanaSettings) -> Self {
        Self {
            rpc: ClientState::from_probe("solana", probe_url(&settings.rpc_url)),
            network: settings.network,
        }
    }

    /// Cluster this adapter targets
    pub fn network(&self) -> SolanaNetwork {
        self.network
    }

    /// Fetch the current slot
    pub async fn get_slot(&self) -> Result<u64> {
        ensure_connected(self)?;
        Err(Error::not_implemented("solana.get_slot"))
    }

    /// Fetch the lamport balance of an account
    pub async fn get_balance(&self, _pubkey: &str) -> Result<u64> {
        ensure_connected(self)?;
        Err(Error::not_implemented("solana.get_balance"))
    }
}

#[async_trait]
impl Adapter for SolanaAdapter {
    fn kind(&self) -> &'static str {
        "solana"
    }

    fn is_connected(&self) -> bool {
        self.rpc.is_ready()
    }

    async fn disconnect(&self) -> Result<()> {
        Ok(())
    }
}
