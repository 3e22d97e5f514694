use crate::{clear_env, init_tracing};
use serial_test::serial;
use tw_deploy::{env::ALCHEMY_KEY, explorer_api_url};

#[test]
#[serial]
fn polygon_without_key() {
    init_tracing();
    clear_env();
    assert_eq!(explorer_api_url("polygon"), "https://polygon-mainnet.g.alchemy.com/v2/");
}

#[test]
#[serial]
fn mumbai_with_key() {
    clear_env();
    std::env::set_var(ALCHEMY_KEY, "ABC");
    assert_eq!(explorer_api_url("mumbai"), "https://polygon-mumbai.g.alchemy.com/v2/ABC");
    clear_env();
}

#[test]
#[serial]
fn avalanche_ignores_env() {
    clear_env();
    assert_eq!(explorer_api_url("avalanche"), "https://api.avax.network/ext/bc/C/rpc");
    std::env::set_var(ALCHEMY_KEY, "ABC");
    assert_eq!(explorer_api_url("avalanche"), "https://api.avax.network/ext/bc/C/rpc");
    clear_env();
}

// Typos and unsupported networks still get an eth- URL instead of an error.
#[test]
#[serial]
fn unknown_network_uses_fallback() {
    clear_env();
    assert_eq!(
        explorer_api_url("someUnknownChain"),
        "https://eth-someUnknownChain.alchemyapi.io/v2/"
    );
}
