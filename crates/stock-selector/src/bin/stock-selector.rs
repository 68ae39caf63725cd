//! Stock Selection Tool CLI
//!
//! A menu-driven terminal tool for analyzing closing prices.
//!
//! # Usage
//!
//! ```bash
//! # Use ./users.csv and ./stock_data/
//! cargo run --bin stock-selector
//!
//! # Keep data elsewhere and show debug logs
//! RUST_LOG=stock_selector=debug cargo run --bin stock-selector -- \
//!     --user-file ~/.stocks/users.csv --results-dir ~/.stocks/results
//! ```

use clap::Parser;
use std::path::PathBuf;
use stock_selector::api::default_provider;
use stock_selector::{SelectorConfig, StockSelector};

/// Interactive stock selection tool
#[derive(Debug, Parser)]
#[command(name = "stock-selector", version, about)]
struct Args {
    /// CSV file holding registered users
    #[arg(long)]
    user_file: Option<PathBuf>,

    /// Directory for saved analyses
    #[arg(long)]
    results_dir: Option<PathBuf>,

    /// Seconds to reuse fetched prices; 0 disables the cache
    #[arg(long)]
    cache_ttl_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr and stay quiet unless RUST_LOG says otherwise
    selector_utils::init_tracing();

    let args = Args::parse();

    let mut builder = SelectorConfig::builder().with_env();
    if let Some(path) = args.user_file {
        builder = builder.user_file(path);
    }
    if let Some(dir) = args.results_dir {
        builder = builder.results_dir(dir);
    }
    if let Some(secs) = args.cache_ttl_secs {
        builder = builder.cache_ttl_secs(secs);
    }
    let config = builder.build()?;
    tracing::debug!(?config, "Starting stock selector");

    let selector = StockSelector::from_config(&config, default_provider(&config));

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    selector.run(&mut stdin.lock(), &mut stdout.lock()).await?;

    Ok(())
}
