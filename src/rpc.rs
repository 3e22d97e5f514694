//! JSON-RPC endpoint derivation for a network name.
//!
//! Known networks are listed in [`RPC_RULES`]. Anything else gets an
//! `https://eth-{name}.alchemyapi.io/v2/{key}` URL, even when that host does not exist.

use crate::env;
use tracing::trace;

/// How an RPC URL is built for one network.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RpcRule {
    /// Alchemy host; the key is appended as `/v2/{key}`.
    Alchemy(&'static str),
    /// Public endpoint, used verbatim.
    Public(&'static str),
}

impl RpcRule {
    /// Renders the rule into a URL, embedding `key` where the rule needs one.
    pub fn url(&self, key: &str) -> String {
        match self {
            RpcRule::Alchemy(host) => alchemy_url(host, key),
            RpcRule::Public(url) => (*url).to_string(),
        }
    }
}

/// Network name to RPC rule. Adding a network is a new entry here.
pub static RPC_RULES: &[(&str, RpcRule)] = &[
    ("polygon", RpcRule::Alchemy("polygon-mainnet.g.alchemy.com")),
    ("mumbai", RpcRule::Alchemy("polygon-mumbai.g.alchemy.com")),
    ("optimism", RpcRule::Alchemy("opt-mainnet.g.alchemy.com")),
    ("optimism-goerli", RpcRule::Alchemy("opt-goerli.g.alchemy.com")),
    ("arbitrum", RpcRule::Alchemy("arb-mainnet.g.alchemy.com")),
    ("arbitrum-goerli", RpcRule::Alchemy("arb-goerli.g.alchemy.com")),
    ("avalanche", RpcRule::Public("https://api.avax.network/ext/bc/C/rpc")),
    ("avalanche-testnet", RpcRule::Public("https://api.avax-test.network/ext/bc/C/rpc")),
    ("fantom", RpcRule::Public("https://rpc.ftm.tools")),
    ("fantom-testnet", RpcRule::Public("https://rpc.testnet.fantom.network")),
    ("binance", RpcRule::Public("https://bsc-dataseed1.binance.org/")),
    ("binance-testnet", RpcRule::Public("https://data-seed-prebsc-1-s1.binance.org:8545/")),
];

/// Returns the rule registered for `network`, if any.
pub fn rule(network: &str) -> Option<RpcRule> {
    RPC_RULES.iter().find(|(name, _)| *name == network).map(|(_, rule)| *rule)
}

/// Builds the RPC URL for `network` with the given Alchemy key.
pub fn rpc_url(network: &str, alchemy_key: &str) -> String {
    match rule(network) {
        Some(rule) => rule.url(alchemy_key),
        None => {
            trace!(target: "tw_deploy::rpc", network, "no rpc rule, using eth- fallback");
            alchemy_url(&format!("eth-{network}.alchemyapi.io"), alchemy_key)
        }
    }
}

/// Builds the RPC URL for `network`, reading the key from `ALCHEMY_KEY` (empty if unset).
///
/// ```
/// assert_eq!(
///     tw_deploy::rpc::explorer_api_url("avalanche"),
///     "https://api.avax.network/ext/bc/C/rpc"
/// );
/// ```
pub fn explorer_api_url(network: &str) -> String {
    let key = env::var(env::ALCHEMY_KEY).unwrap_or_default();
    rpc_url(network, &key)
}

fn alchemy_url(host: &str, key: &str) -> String {
    format!("https://{host}/v2/{key}")
}
