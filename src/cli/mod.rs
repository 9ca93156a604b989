// CLI module
// Command-line interface, argument parsing and command execution

mod args;

pub use args::{CliArgs, ReportType, StrategyType};

use crate::core::{LedgerEngine, MemoryStore};
use crate::io::csv_format::{write_balance_csv, write_transactions_csv};
use crate::strategy;
use crate::types::LedgerError;
use clap::Parser;
use std::io::Write;

/// Parse command-line arguments using clap
///
/// On invalid arguments or `--help`, clap prints the message and exits the
/// process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Import every input file into a fresh in-memory ledger, then write the
/// selected report to `output`
///
/// Files are imported in the order given. The first failing file stops the
/// run; files imported before it stay in the ledger but no report is written.
pub fn execute(args: &CliArgs, output: &mut dyn Write) -> Result<(), LedgerError> {
    let config = match args.strategy {
        StrategyType::Async => Some(args.to_import_config()),
        StrategyType::Sync => None,
    };
    let strategy = strategy::create_strategy(args.strategy, config);
    let mut engine = LedgerEngine::new(MemoryStore::new());

    for input in &args.input_files {
        let imported = engine.import_transactions(input, strategy.as_ref())?;
        tracing::debug!(path = %input.display(), count = imported.len(), "imported file");
    }

    match args.report {
        ReportType::Balance => write_balance_csv(&engine.get_balance()?, output),
        ReportType::Transactions => {
            let listing = engine.list_transactions()?;
            write_transactions_csv(&listing.transactions, output)
        }
    }
}
