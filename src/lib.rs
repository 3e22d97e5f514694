//! # tw-deploy
//!
//! Network configuration shared by the contract deployment scripts: wrapped native token and
//! default factory addresses per chain, canonical network names, block explorer API keys taken
//! from the environment, and RPC URL derivation.
//!
//! ```no_run
//! use tw_deploy::NetworkConfig;
//!
//! # fn main() -> Result<(), tw_deploy::ConfigError> {
//! let config = NetworkConfig::from_env()?;
//! let factory = config.default_factory(137).expect("polygon has a factory");
//! let rpc = config.rpc_url("polygon");
//! # let _ = (factory, rpc);
//! # Ok(())
//! # }
//! ```
#![deny(unsafe_code, rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod chain;
pub mod config;
pub mod env;
pub mod errors;
pub mod rpc;

pub use chain::Chain;
pub use config::{FactoryRegistry, NetworkConfig, NetworkEntry};
pub use errors::{ConfigError, Result};
pub use ethers_core::types::Address;
pub use rpc::explorer_api_url;
