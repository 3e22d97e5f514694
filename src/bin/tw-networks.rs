use clap::{Parser, Subcommand};
use eyre::{eyre, Result};
use tracing::{debug, trace};
use tw_deploy::{explorer_api_url, Chain, NetworkConfig};

/// Inspect the networks known to the deployment scripts.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// One line per supported network.
    List,
    /// Print a network's configuration as JSON.
    Show {
        /// Chain id or canonical network name, e.g. `137` or `optimism-goerli`.
        chain: String,
    },
    /// Print the RPC URL for a network name. Unknown names are not rejected.
    Rpc { network: String },
}

fn parse_chain(s: &str) -> Result<Chain> {
    if let Ok(id) = s.parse::<u64>() {
        return Chain::try_from(id).map_err(|_| eyre!("unsupported chain id {id}"))
    }
    s.parse::<Chain>().map_err(|_| eyre!("unknown network {s}"))
}

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let args = Args::parse();
    match args.command {
        Command::List => {
            let config = NetworkConfig::from_env()?;
            for net in config.networks() {
                let wrapper =
                    net.native_token_wrapper.map(|a| format!("{a:?}")).unwrap_or_else(|| "-".into());
                let factory =
                    net.default_factory.map(|a| format!("{a:?}")).unwrap_or_else(|| "-".into());
                let kind = if net.testnet { "testnet" } else { "mainnet" };
                let key = if net.has_api_key { "key" } else { "no key" };
                println!(
                    "{:>7}  {:<18} {kind:<8} {wrapper:<42} {factory:<42} {key}",
                    net.chain_id, net.name
                );
            }
        }
        Command::Show { chain } => {
            let chain = parse_chain(&chain)?;
            let config = NetworkConfig::from_env()?;
            let entry = config
                .network(chain.id())
                .ok_or_else(|| eyre!("{chain} is not configured"))?;
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
        Command::Rpc { network } => {
            // no full config load needed, but keep .env support
            match dotenv::dotenv() {
                Ok(path) => debug!(target: "tw_networks", path = %path.display(), "loaded .env"),
                Err(err) => trace!(target: "tw_networks", %err, "no .env loaded"),
            }
            println!("{}", explorer_api_url(&network));
        }
    }
    Ok(())
}
