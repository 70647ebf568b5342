//! Web3 chain adapters

use std::sync::Arc;

use tms_config::settings::Web3Settings;
use tms_domain::error::Result;
use tms_domain::ports::adapter::Adapter;

use crate::registry::{self, ProviderEntry};

mod anchor;
mod evm;
mod solana;

pub use anchor::AnchorAdapter;
pub use evm::EvmAdapter;
pub use solana::SolanaAdapter;

fn build_evm(settings: &Web3Settings) -> Result<Arc<dyn Adapter>> {
    Ok(Arc::new(EvmAdapter::new(&settings.evm)))
}

fn build_solana(settings: &Web3Settings) -> Result<Arc<dyn Adapter>> {
    Ok(Arc::new(SolanaAdapter::new(&settings.solana)))
}

fn build_anchor(settings: &Web3Settings) -> Result<Arc<dyn Adapter>> {
    Ok(Arc::new(AnchorAdapter::new(&settings.anchor)))
}

/// Closed registry of Web3 chains
pub static PROVIDERS: &[ProviderEntry<Web3Settings>] = &[
    ProviderEntry {
        name: "evm",
        description: "EVM JSON-RPC chains (Ethereum, Polygon, BSC, ...)",
        build: build_evm,
    },
    ProviderEntry {
        name: "solana",
        description: "Solana JSON-RPC cluster",
        build: build_solana,
    },
    ProviderEntry {
        name: "anchor",
        description: "Anchor framework on Solana",
        build: build_anchor,
    },
];

/// Resolve a Web3 chain by name
pub fn resolve(settings: &Web3Settings, name: &str) -> Result<Arc<dyn Adapter>> {
    registry::resolve(PROVIDERS, "web3", settings, name)
}

/// List supported Web3 chains
pub fn list() -> Vec<(&'static str, &'static str)> {
    registry::list(PROVIDERS)
}
