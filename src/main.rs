// ============================================================
// File: main.rs
// Project: bidtree
// Date: Oct. 4, 2026
//
// Description:
//   Entry point for the bid index program. Parses the optional
//   CSV path and default bid id, sets up logging, and hands the
//   session to the menu loop in the library.
//
//   Usage:
//     bidtree [CSV_PATH] [BID_KEY] [--currency <CHAR>]
//
//   Logging goes to stderr and is controlled with RUST_LOG
//   (e.g. RUST_LOG=bidtree=debug). The default level is warn.
// ============================================================
use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use bidtree::{Session, ShellConfig, repl_loop};


#[derive(Parser, Debug)]
#[command(name = "bidtree")]
#[command(version)]
#[command(about = "Load, display, find and remove auction bids held in a binary search tree")]
struct Args {
    /// Monthly sales CSV file to load
    #[arg(value_name = "CSV_PATH")]
    csv_path: Option<PathBuf>,

    /// Bid id used when FIND or REMOVE is given without one
    #[arg(value_name = "BID_KEY")]
    bid_key: Option<String>,

    /// Currency symbol stripped from the bid amount column
    #[arg(long, value_name = "CHAR")]
    currency: Option<char>,
}


/// Entry point for the bid index program.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = ShellConfig::with_overrides(args.csv_path, args.bid_key, args.currency);
    tracing::debug!(?config, "starting bid shell");

    let mut session = Session::new(config);

    // Hand off to the main command loop
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    repl_loop(&mut session, stdin.lock(), &mut stdout)?;

    Ok(())
}
