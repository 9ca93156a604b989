//! Finance Ledger CLI
//!
//! Imports transactions from CSV files into an in-memory ledger and prints a
//! report.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- transactions.csv > balance.csv
//! cargo run -- --report transactions january.csv february.csv > transactions.csv
//! cargo run -- --strategy sync transactions.csv
//! cargo run -- --strategy async --batch-size 2000 --workers 4 transactions.csv
//! ```
//!
//! Diagnostics go to stderr; set `RUST_LOG` (default `warn`) to see more.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, unreadable CSV, etc.)

use finance_ledger::cli;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();

    let mut output = std::io::stdout();
    if let Err(e) = cli::execute(&args, &mut output) {
        tracing::error!(error = %e, "import failed");
        process::exit(1);
    }
}
