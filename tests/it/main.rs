//! tw-deploy integration tests

mod config;
mod rpc;

#[track_caller]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Removes every variable the config reads so tests start from a clean environment.
fn clear_env() {
    use tw_deploy::env::*;

    for var in [
        ETHERSCAN_API_KEY,
        POLYGONSCAN_API_KEY,
        OPTIMISM_SCAN_API_KEY,
        ARBITRUM_SCAN_API_KEY,
        FANTOMSCAN_API_KEY,
        SNOWTRACE_API_KEY,
        BINANCE_SCAN_API_KEY,
        SCAN_API_KEY,
        ALCHEMY_KEY,
    ] {
        std::env::remove_var(var);
    }
}
