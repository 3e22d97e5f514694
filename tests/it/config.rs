use crate::{clear_env, init_tracing};
use serial_test::serial;
use std::collections::HashSet;
use strum::IntoEnumIterator;
use tw_deploy::{config::FACTORY_CONTRACT, env, Chain, NetworkConfig};

/// Reads the process environment directly, without loading `.env`.
fn load_from_process_env() -> NetworkConfig {
    NetworkConfig::from_registry_name(FACTORY_CONTRACT, env::var).unwrap()
}

#[test]
#[serial]
fn from_env_factories_match_registry() {
    init_tracing();
    clear_env();
    let config = NetworkConfig::from_env().unwrap();
    let registry = tw_addressbook::contract("TWFactory").unwrap();
    for chain in Chain::iter() {
        let factory = config.default_factory(chain.id());
        assert!(factory.is_some(), "{chain}");
        assert_eq!(factory, registry.address(chain), "{chain}");
    }
}

#[test]
#[serial]
fn chain_names_are_unique() {
    clear_env();
    let config = load_from_process_env();
    let names: Vec<_> = config.chain_ids().filter_map(|id| config.chain_name(id)).collect();
    let unique: HashSet<_> = names.iter().collect();
    assert_eq!(names.len(), unique.len());
    for id in config.chain_ids() {
        let name = config.chain_name(id).unwrap();
        assert_eq!(config.chain_id(name), Some(id));
    }
}

#[test]
#[serial]
fn api_key_falls_back_to_shared() {
    clear_env();
    std::env::set_var("SCAN_API_KEY", "shared");
    let config = load_from_process_env();
    assert_eq!(config.api_key(Chain::Optimism.id()), Some("shared"));
    assert_eq!(config.api_key(Chain::Mainnet.id()), Some("shared"));
    clear_env();
}

#[test]
#[serial]
fn api_key_absent_without_env() {
    clear_env();
    let config = load_from_process_env();
    for chain in Chain::iter() {
        assert_eq!(config.api_key(chain.id()), None, "{chain}");
    }
    assert!(config.networks().iter().all(|net| !net.has_api_key));
}

#[test]
#[serial]
fn specific_key_beats_shared() {
    clear_env();
    std::env::set_var("SNOWTRACE_API_KEY", "snow");
    std::env::set_var("SCAN_API_KEY", "shared");
    let config = load_from_process_env();
    assert_eq!(config.api_key(43114), Some("snow"));
    assert_eq!(config.api_key(43113), Some("snow"));
    assert_eq!(config.api_key(56), Some("shared"));
    clear_env();
}

#[test]
#[serial]
fn wrappers_are_sparse() {
    clear_env();
    let config = load_from_process_env();
    assert!(config.native_token_wrapper(Chain::Optimism.id()).is_some());
    assert_eq!(
        config.native_token_wrapper(Chain::Optimism.id()),
        config.native_token_wrapper(Chain::OptimismGoerli.id())
    );
    assert!(config.native_token_wrapper(Chain::BinanceSmartChain.id()).is_none());
    assert!(config.native_token_wrapper(Chain::BinanceSmartChainTestnet.id()).is_none());
    assert!(config.native_token_wrapper(31337).is_none());
}

#[test]
#[serial]
fn process_env_is_read_without_dotenv() {
    clear_env();
    std::env::set_var(env::ETHERSCAN_API_KEY, "ether");
    let config = load_from_process_env();
    assert_eq!(config.api_key(Chain::Goerli.id()), Some("ether"));
    assert_eq!(config.api_key(Chain::Polygon.id()), None);
    clear_env();
}

#[test]
fn unknown_registry_contract_is_fatal() {
    let err = NetworkConfig::from_registry_name("NoSuchContract", |_| None).unwrap_err();
    assert!(matches!(err, tw_deploy::ConfigError::MissingRegistryContract(_)));
    assert_eq!(err.to_string(), "contract NoSuchContract is not in the registry");
}
