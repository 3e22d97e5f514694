//! Per-network tables consumed by the deployment scripts.

use crate::{
    chain::Chain,
    env,
    errors::{ConfigError, Result},
    rpc,
};
use ethers_core::types::Address;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use strum::IntoEnumIterator;
use tracing::{debug, trace};

/// Registry contract whose deployments populate the default factory table.
pub const FACTORY_CONTRACT: &str = "TWFactory";

/// Wrapped native token contracts. Chains not listed have no wrapper configured.
pub const NATIVE_TOKEN_WRAPPERS: &[(Chain, &str)] = &[
    (Chain::Mainnet, "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
    (Chain::Goerli, "0xB4FBF271143F4FBf7B91A5ded31805e42b2208d6"),
    (Chain::Polygon, "0x0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270"),
    (Chain::PolygonMumbai, "0x9c3C9283D3e44854697Cd22D3Faa240Cfb032889"),
    (Chain::Avalanche, "0xB31f66AA3C1e785363F0875A1B74E27b85FD66c7"),
    (Chain::AvalancheFuji, "0xd00ae08403B9bbb9124bB305C09058E32C39A48c"),
    (Chain::Fantom, "0x21be370D5312f44cB42ce377BC9b8a0cEF1A4C83"),
    (Chain::FantomTestnet, "0xf1277d1Ed8AD466beddF92ef448A132661956621"),
    // OP stack predeploy, same address on every optimism network
    (Chain::Optimism, "0x4200000000000000000000000000000000000006"),
    (Chain::OptimismGoerli, "0x4200000000000000000000000000000000000006"),
    (Chain::Arbitrum, "0x82af49447d8a07e3bd95bd0d56f35241523fbab1"),
    (Chain::ArbitrumGoerli, "0xe39Ab88f8A4777030A534146A9Ca3B52bd5D43A3"),
];

/// Source of per-chain factory deployments.
pub trait FactoryRegistry {
    /// Address of the factory on `chain`, or `None` if the registry has no deployment there.
    fn factory(&self, chain: Chain) -> Option<Address>;
}

impl FactoryRegistry for tw_addressbook::Contract {
    fn factory(&self, chain: Chain) -> Option<Address> {
        self.address(chain)
    }
}

impl FactoryRegistry for HashMap<Chain, Address> {
    fn factory(&self, chain: Chain) -> Option<Address> {
        self.get(&chain).copied()
    }
}

/// The network tables, built once and then read-only.
///
/// Every table is keyed by chain id. Lookups for ids that are not configured return `None`.
#[derive(Clone, Debug)]
pub struct NetworkConfig {
    native_token_wrappers: BTreeMap<u64, Address>,
    chain_names: BTreeMap<u64, &'static str>,
    api_keys: BTreeMap<u64, Option<String>>,
    default_factories: BTreeMap<u64, Address>,
    alchemy_key: String,
}

impl NetworkConfig {
    /// Loads `.env` from the working directory if there is one, then builds the tables from
    /// the process environment and the bundled addressbook.
    pub fn from_env() -> Result<Self> {
        match dotenv::dotenv() {
            Ok(path) => debug!(target: "tw_deploy::config", path = %path.display(), "loaded .env"),
            Err(err) => trace!(target: "tw_deploy::config", %err, "no .env loaded"),
        }
        Self::from_registry_name(FACTORY_CONTRACT, env::var)
    }

    /// Builds the tables using the addressbook entry `name` as factory registry. Fails if the
    /// addressbook has no contract of that name.
    pub fn from_registry_name<F>(name: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let registry = tw_addressbook::contract(name)
            .ok_or_else(|| ConfigError::MissingRegistryContract(name.to_string()))?;
        Self::load_with(&registry, lookup)
    }

    /// Builds the tables from `registry` and an environment lookup.
    ///
    /// `lookup` is called at most once per variable name. Returning `None` or an empty string
    /// means unset.
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use strum::IntoEnumIterator;
    /// use tw_deploy::{Address, Chain, NetworkConfig};
    ///
    /// let registry: HashMap<Chain, Address> =
    ///     Chain::iter().map(|chain| (chain, Address::zero())).collect();
    /// let config = NetworkConfig::load_with(&registry, |_| None).unwrap();
    /// assert_eq!(config.chain_name(421613), Some("arbitrum-goerli"));
    /// assert_eq!(config.api_key(1), None);
    /// ```
    pub fn load_with<R, F>(registry: &R, lookup: F) -> Result<Self>
    where
        R: FactoryRegistry + ?Sized,
        F: Fn(&str) -> Option<String>,
    {
        let mut vars: HashMap<&'static str, Option<String>> = HashMap::new();
        let mut read = |name: &'static str| -> Option<String> {
            vars.entry(name).or_insert_with(|| lookup(name)).clone()
        };

        let chain_names = chain_name_table(Chain::iter().map(|chain| (chain.id(), chain.name())))?;

        let mut default_factories = BTreeMap::new();
        let mut api_keys = BTreeMap::new();
        let shared_key = read(env::SCAN_API_KEY);
        for chain in Chain::iter() {
            let factory = registry.factory(chain).ok_or(ConfigError::MissingFactory(chain))?;
            default_factories.insert(chain.id(), factory);

            let key = env::resolve_with_fallback(read(chain.explorer_api_key_var()), shared_key.clone());
            if key.is_none() {
                debug!(target: "tw_deploy::config", %chain, "no explorer api key configured");
            }
            api_keys.insert(chain.id(), key);
        }

        let native_token_wrappers = wrapper_table(NATIVE_TOKEN_WRAPPERS)?;
        let alchemy_key = read(env::ALCHEMY_KEY).unwrap_or_default();

        trace!(
            target: "tw_deploy::config",
            chains = chain_names.len(),
            wrappers = native_token_wrappers.len(),
            "network config loaded"
        );

        Ok(Self { native_token_wrappers, chain_names, api_keys, default_factories, alchemy_key })
    }

    /// Wrapped native token on `chain_id`.
    pub fn native_token_wrapper(&self, chain_id: u64) -> Option<Address> {
        self.native_token_wrappers.get(&chain_id).copied()
    }

    /// Canonical network name of `chain_id`.
    pub fn chain_name(&self, chain_id: u64) -> Option<&str> {
        self.chain_names.get(&chain_id).copied()
    }

    /// Chain id for a canonical network name.
    pub fn chain_id(&self, name: &str) -> Option<u64> {
        self.chain_names.iter().find(|(_, n)| **n == name).map(|(id, _)| *id)
    }

    /// Block explorer API key for `chain_id`, if one is configured.
    pub fn api_key(&self, chain_id: u64) -> Option<&str> {
        self.api_keys.get(&chain_id).and_then(|key| key.as_deref())
    }

    /// Default factory deployment on `chain_id`.
    pub fn default_factory(&self, chain_id: u64) -> Option<Address> {
        self.default_factories.get(&chain_id).copied()
    }

    /// RPC URL for `network`, using the Alchemy key captured when the config was loaded.
    pub fn rpc_url(&self, network: &str) -> String {
        rpc::rpc_url(network, &self.alchemy_key)
    }

    /// RPC URL for `chain_id`, if the chain has a name.
    pub fn rpc_url_for(&self, chain_id: u64) -> Option<String> {
        self.chain_name(chain_id).map(|name| self.rpc_url(name))
    }

    /// Supported chain ids, ascending.
    pub fn chain_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.chain_names.keys().copied()
    }

    /// Joins all tables for `chain_id`.
    pub fn network(&self, chain_id: u64) -> Option<NetworkEntry> {
        let name = self.chain_name(chain_id)?;
        Some(NetworkEntry {
            chain_id,
            name: name.to_string(),
            testnet: Chain::try_from(chain_id).map_or(false, Chain::is_testnet),
            native_token_wrapper: self.native_token_wrapper(chain_id),
            default_factory: self.default_factory(chain_id),
            has_api_key: self.api_key(chain_id).is_some(),
            rpc_url: self.rpc_url(name),
        })
    }

    /// All supported networks, by ascending chain id.
    pub fn networks(&self) -> Vec<NetworkEntry> {
        self.chain_ids().filter_map(|id| self.network(id)).collect()
    }
}

/// Indexes chain names by id, rejecting a name that is used twice.
fn chain_name_table<I>(entries: I) -> Result<BTreeMap<u64, &'static str>>
where
    I: IntoIterator<Item = (u64, &'static str)>,
{
    let mut names = BTreeMap::new();
    for (id, name) in entries {
        if names.values().any(|n| *n == name) {
            return Err(ConfigError::DuplicateChainName(name))
        }
        names.insert(id, name);
    }
    Ok(names)
}

/// Parses the wrapper literals, failing on the first malformed address.
fn wrapper_table(entries: &[(Chain, &'static str)]) -> Result<BTreeMap<u64, Address>> {
    entries
        .iter()
        .map(|&(chain, address)| -> Result<(u64, Address)> {
            let parsed = address.parse::<Address>().map_err(|err| {
                ConfigError::InvalidAddress { chain, address, reason: err.to_string() }
            })?;
            Ok((chain.id(), parsed))
        })
        .collect()
}

/// Everything configured for one network. The explorer key itself is never included.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkEntry {
    pub chain_id: u64,
    pub name: String,
    pub testnet: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native_token_wrapper: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_factory: Option<Address>,
    pub has_api_key: bool,
    pub rpc_url: String,
}
