#![doc = include_str!("../README.md")]
#![deny(unsafe_code, rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use ethers_core::types::Address;

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;

const CONTRACTS_JSON: &str = include_str!("./contracts/contracts.json");

static ADDRESSBOOK: Lazy<HashMap<String, Contract>> = Lazy::new(|| {
    serde_json::from_str(CONTRACTS_JSON).expect("embedded contracts.json does not match Contract")
});

/// Maps a chain id to the contract's deployed address on that chain.
#[derive(Clone, Debug, Deserialize)]
pub struct Contract {
    addresses: HashMap<u64, Address>,
}

impl Contract {
    /// Returns the address of the contract on the specified chain. If the contract is not
    /// deployed there according to the addressbook, the getter returns None.
    pub fn address(&self, chain_id: impl Into<u64>) -> Option<Address> {
        self.addresses.get(&chain_id.into()).copied()
    }
}

/// Fetch the addressbook entry for a contract by its name. Returns None for names the
/// addressbook does not know.
pub fn contract<S: AsRef<str>>(name: S) -> Option<Contract> {
    ADDRESSBOOK.get(name.as_ref()).cloned()
}
