// wallet-core/src/main.rs
//
// wallet-generate - one-shot CLI that writes a fresh Cardano wallet file.

use anyhow::Context;
use cardano_wallet_core::config::{self, DEFAULT_OUTPUT_FILE};
use cardano_wallet_core::{api, GenerateConfig, WalletDocument, WalletError};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "cardano_wallet_core=info,wallet_generate=info";

#[derive(Parser, Debug)]
#[command(
    name = "wallet-generate",
    version,
    about = "Generate a Cardano CIP-1852 wallet (mnemonic, keys, addresses) as JSON"
)]
struct Cli {
    /// Target network: preprod, preview or mainnet [default: $DEFAULT_NETWORK or preprod].
    /// Preview addresses use network id 2 and are not accepted by the live preview ledger.
    #[arg(short, long)]
    network: Option<String>,

    /// Output file; relative paths are resolved against the working directory
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Mnemonic length: 12, 15, 18, 21 or 24
    #[arg(short, long, default_value = "24")]
    words: String,

    /// Overwrite the output file if it already exists
    #[arg(short, long)]
    force: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn execute(cli: Cli) -> anyhow::Result<(WalletDocument, PathBuf)> {
    let network = match cli.network {
        Some(network) => network,
        None => config::load_default_network().to_string(),
    };
    let cwd = std::env::current_dir().context("could not resolve working directory")?;

    let config = GenerateConfig::resolve(&network, &cli.words, &cli.output, cli.force, &cwd)?;
    let document = api::run(&config)?;
    Ok((document, config.output))
}

fn print_summary(document: &WalletDocument, path: &Path) {
    println!("Wallet generated.");
    println!("Network: {}", document.network);
    println!("Base address: {}", document.addresses.base);
    println!("Reward address: {}", document.addresses.reward);
    println!("File saved to: {}", path.display());
    if let Some(note) = document.network.profile().ledger_note() {
        println!("Note: {note}");
    }
    println!();
    println!("Warning: Never commit wallet files with real funds. Delete after use in production.");
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    match execute(cli) {
        Ok((document, path)) => {
            print_summary(&document, &path);
            ExitCode::SUCCESS
        }
        Err(err) => {
            match err.downcast_ref::<WalletError>() {
                Some(wallet_err) => {
                    tracing::debug!(kind = wallet_err.kind(), "generation aborted");
                    eprintln!("Failed to generate wallet: {wallet_err}");
                }
                None => eprintln!("Failed to generate wallet: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
