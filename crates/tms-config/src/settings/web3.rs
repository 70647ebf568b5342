//! Web3 chain settings

use serde::{Deserialize, Serialize};

/// Web3 chain settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Web3Settings {
    /// EVM chain settings (Ethereum, Polygon, BSC, ...)
    pub evm: EvmSettings,
    /// Solana settings
    pub solana: SolanaSettings,
    /// Anchor (Solana framework) settings
    pub anchor: AnchorSettings,
}

/// EVM chain settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvmSettings {
    /// JSON-RPC endpoint URL
    pub rpc_url: String,
    /// Chain identifier
    pub chain_id: u64,
    /// Private key placeholder. Load from a secrets manager in production;
    /// never commit actual keys.
    pub private_key: Option<String>,
}

impl Default for EvmSettings {
    fn default() -> Self {
        Self {
            rpc_url: "https://eth-mainnet.g.alchemy.com/v2/demo".to_string(),
            chain_id: 1,
            private_key: None,
        }
    }
}

/// Solana cluster selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SolanaNetwork {
    /// Main network
    #[default]
    MainnetBeta,
    /// Test network
    Testnet,
    /// Development network
    Devnet,
}

impl SolanaNetwork {
    /// Canonical cluster name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MainnetBeta => "mainnet-beta",
            Self::Testnet => "testnet",
            Self::Devnet => "devnet",
        }
    }
}

/// Solana settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolanaSettings {
    /// JSON-RPC endpoint URL
    pub rpc_url: String,
    /// Cluster to target
    pub network: SolanaNetwork,
    /// Private key placeholder. Load from a secrets manager in production;
    /// never commit actual keys.
    pub private_key: Option<String>,
}

impl Default for SolanaSettings {
    fn default() -> Self {
        Self {
            rpc_url: "https://api.mainnet-beta.solana.com".to_string(),
            network: SolanaNetwork::MainnetBeta,
            private_key: None,
        }
    }
}

/// Anchor settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorSettings {
    /// Whether the Anchor integration is enabled
    pub enabled: bool,
    /// Program identifier
    pub program_id: Option<String>,
}
