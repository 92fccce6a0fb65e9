use std::path::PathBuf;

use clap::Parser;
use log::info;

use rewards_collector::client::ChainClient;
use rewards_collector::{collector, config};

#[derive(Parser, Debug)]
#[command(
    name = "rewards-collector",
    version,
    about = "Collects outstanding validator rewards across Cosmos chains into a JSON snapshot",
    long_about = None
)]
struct Cli {
    /// Chain registry file (JSON array of {"name", "addr"} records)
    #[arg(short, long, default_value = "chains.json")]
    chains: PathBuf,

    /// Output snapshot file, overwritten on every run
    #[arg(short, long, default_value = "validator_rewards.json")]
    output: PathBuf,

    /// Debug logging
    #[arg(long)]
    debug: bool,

    /// Quiet mode (warnings only)
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.debug {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else if cli.quiet {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Warn)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    let chains = config::load_registry(&cli.chains)?;
    info!(
        "Collecting rewards for {} chains from {}",
        chains.len(),
        cli.chains.display()
    );

    let client = ChainClient::new();
    let snapshot = collector::collect_all(&client, chains).await?;

    collector::write_snapshot(&snapshot, &cli.output)?;
    info!("Snapshot written to {}", cli.output.display());

    Ok(())
}
