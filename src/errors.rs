use crate::chain::Chain;

/// Errors raised while building a [`crate::NetworkConfig`].
///
/// Missing API keys and unknown network names are not errors; these variants all mean the
/// embedded tables or the contract registry are inconsistent.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("contract {0} is not in the registry")]
    MissingRegistryContract(String),
    #[error("registry has no factory deployed on {0} ({id})", id = .0.id())]
    MissingFactory(Chain),
    #[error("invalid address {address} configured for {chain}: {reason}")]
    InvalidAddress { chain: Chain, address: &'static str, reason: String },
    #[error("chain name {0} is used by more than one chain")]
    DuplicateChainName(&'static str),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
