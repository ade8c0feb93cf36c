use anyhow::{Context, Result};
use clap::Parser;
use cute_bank::{
    bin_utils::{Service, render::ListingFormat},
    ledger::Ledger,
};
use tracing_subscriber::EnvFilter;

/// Interactive, in-memory bank ledger. Nothing is kept after exit.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Name shown in the welcome banner
    #[arg(long, default_value = "Bankify")]
    bank_name: String,

    /// Seed for account number generation, for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,

    /// List accounts as CSV instead of detail blocks
    #[arg(long)]
    csv: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // logs go to stderr, stdout belongs to the menu
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut ledger = match args.seed {
        Some(seed) => Ledger::with_seed(&args.bank_name, seed),
        None => Ledger::new(&args.bank_name),
    };

    let service = Service {
        input: std::io::stdin().lock(),
        output: &mut std::io::stdout(),
        processor: &mut ledger,
        bank_name: args.bank_name,
        listing_format: if args.csv {
            ListingFormat::Csv
        } else {
            ListingFormat::Details
        },
    };
    service.run().context("Bank session failed")
}
