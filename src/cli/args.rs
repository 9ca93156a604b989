use crate::strategy::ImportConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Import transactions from CSV files and report on the ledger
#[derive(Parser, Debug)]
#[command(name = "finance-ledger")]
#[command(about = "Import transactions from CSV files and report on the ledger", long_about = None)]
pub struct CliArgs {
    /// Input CSV files, imported in order into one ledger
    #[arg(
        value_name = "INPUT",
        required = true,
        num_args = 1..,
        help = "Path to one or more CSV files (title,type,value,category)"
    )]
    pub input_files: Vec<PathBuf>,

    /// Reading strategy used for each import file
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "async",
        help = "Reading strategy: 'sync' for synchronous or 'async' for batched asynchronous"
    )]
    pub strategy: StrategyType,

    /// Number of rows per read batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of rows per read batch (default: 1000)"
    )]
    pub batch_size: Option<usize>,

    /// Number of runtime worker threads (async mode only)
    #[arg(
        long = "workers",
        value_name = "COUNT",
        help = "Number of runtime worker threads (default: CPU cores)"
    )]
    pub workers: Option<usize>,

    /// Report written to stdout once every file is imported
    #[arg(
        long = "report",
        value_name = "REPORT",
        default_value = "balance",
        help = "Report to print: 'balance' or 'transactions'"
    )]
    pub report: ReportType,
}

/// Available reading strategies for CSV imports
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

/// Available reports
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportType {
    /// income, outcome and total
    Balance,
    /// Every transaction with its category
    Transactions,
}

impl CliArgs {
    /// Create an ImportConfig from CLI arguments
    ///
    /// Missing values take the defaults; zero values fall back to the
    /// defaults with a warning.
    pub fn to_import_config(&self) -> ImportConfig {
        if self.batch_size.is_none() && self.workers.is_none() {
            return ImportConfig::default();
        }

        let default = ImportConfig::default();
        ImportConfig::new(
            self.batch_size.unwrap_or(default.batch_size()),
            self.workers.unwrap_or(default.worker_threads()),
        )
    }
}
