//! Environment variables read by the deployment configuration.

/// Etherscan key, used for mainnet and goerli.
pub const ETHERSCAN_API_KEY: &str = "ETHERSCAN_API_KEY";
/// Polygonscan key, used for polygon and mumbai.
pub const POLYGONSCAN_API_KEY: &str = "POLYGONSCAN_API_KEY";
pub const OPTIMISM_SCAN_API_KEY: &str = "OPTIMISM_SCAN_API_KEY";
pub const ARBITRUM_SCAN_API_KEY: &str = "ARBITRUM_SCAN_API_KEY";
pub const FANTOMSCAN_API_KEY: &str = "FANTOMSCAN_API_KEY";
/// Snowtrace key, used for avalanche and its fuji testnet.
pub const SNOWTRACE_API_KEY: &str = "SNOWTRACE_API_KEY";
pub const BINANCE_SCAN_API_KEY: &str = "BINANCE_SCAN_API_KEY";
/// Explorer key used for any network whose own key is unset.
pub const SCAN_API_KEY: &str = "SCAN_API_KEY";
/// Alchemy key embedded in the RPC URLs built by [`crate::rpc`].
pub const ALCHEMY_KEY: &str = "ALCHEMY_KEY";

/// Reads `name` from the process environment. Unset, non-unicode and empty values are all
/// treated as absent.
pub fn var(name: &str) -> Option<String> {
    non_empty(std::env::var(name).ok())
}

/// Picks the network specific value if there is one, else the shared one.
///
/// Empty strings count as absent, so a blank `POLYGONSCAN_API_KEY=` line in a `.env` file
/// still falls through to `SCAN_API_KEY`.
pub fn resolve_with_fallback(specific: Option<String>, shared: Option<String>) -> Option<String> {
    non_empty(specific).or_else(|| non_empty(shared))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
