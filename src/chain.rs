use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{AsRefStr, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// A network the deployment scripts can publish to.
///
/// The discriminant is the chain id; the string form is the canonical lowercase network name
/// used by the explorer and RPC helpers.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    AsRefStr,
    IntoStaticStr,
    EnumString,
    EnumIter,
    EnumCount,
    TryFromPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(u64)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Chain {
    Mainnet = 1,
    Goerli = 5,
    Optimism = 10,
    #[strum(serialize = "binance")]
    #[serde(rename = "binance")]
    BinanceSmartChain = 56,
    #[strum(serialize = "binance-testnet")]
    #[serde(rename = "binance-testnet")]
    BinanceSmartChainTestnet = 97,
    Polygon = 137,
    Fantom = 250,
    OptimismGoerli = 420,
    FantomTestnet = 4002,
    Arbitrum = 42161,
    #[strum(serialize = "avalanche-testnet")]
    #[serde(rename = "avalanche-testnet")]
    AvalancheFuji = 43113,
    Avalanche = 43114,
    #[strum(serialize = "mumbai")]
    #[serde(rename = "mumbai")]
    PolygonMumbai = 80001,
    ArbitrumGoerli = 421613,
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.as_ref())
    }
}

impl From<Chain> for u64 {
    fn from(chain: Chain) -> Self {
        chain as u64
    }
}

impl Chain {
    /// The chain id.
    #[inline]
    pub const fn id(self) -> u64 {
        self as u64
    }

    /// Canonical network name, e.g. `optimism-goerli`.
    #[inline]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Name of the environment variable holding this network's block explorer API key.
    pub const fn explorer_api_key_var(self) -> &'static str {
        use crate::env::*;

        match self {
            Chain::Mainnet | Chain::Goerli => ETHERSCAN_API_KEY,
            Chain::Polygon | Chain::PolygonMumbai => POLYGONSCAN_API_KEY,
            Chain::Optimism | Chain::OptimismGoerli => OPTIMISM_SCAN_API_KEY,
            Chain::Arbitrum | Chain::ArbitrumGoerli => ARBITRUM_SCAN_API_KEY,
            Chain::Fantom | Chain::FantomTestnet => FANTOMSCAN_API_KEY,
            Chain::Avalanche | Chain::AvalancheFuji => SNOWTRACE_API_KEY,
            Chain::BinanceSmartChain | Chain::BinanceSmartChainTestnet => BINANCE_SCAN_API_KEY,
        }
    }

    /// Whether this is a test network.
    pub const fn is_testnet(self) -> bool {
        matches!(
            self,
            Chain::Goerli |
                Chain::PolygonMumbai |
                Chain::OptimismGoerli |
                Chain::ArbitrumGoerli |
                Chain::FantomTestnet |
                Chain::AvalancheFuji |
                Chain::BinanceSmartChainTestnet
        )
    }
}
