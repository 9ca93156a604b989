//! Import strategy module
//!
//! This module defines the Strategy pattern for reading CSV import files.
//! Different read implementations (synchronous streaming, asynchronous
//! batches) can be selected at runtime. Whatever the strategy, the result is
//! the same [`ImportBatch`], which the engine then persists in one go.

use crate::cli::StrategyType;
use crate::types::{ImportBatch, LedgerError};
use std::path::Path;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncImportStrategy, ImportConfig};
pub use sync::SyncImportStrategy;

/// Read strategy for CSV import files
pub trait ImportStrategy: Send + Sync {
    /// Parse every importable row of `input_path`
    ///
    /// Rows with missing or unusable cells are skipped. Nothing is persisted
    /// here; a returned error means the file could not be read as a whole.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::FileNotFound`] if the file does not exist
    /// - [`LedgerError::IoError`] for other open or runtime failures
    /// - [`LedgerError::ParseError`] if the CSV stream is unreadable
    fn read(&self, input_path: &Path) -> Result<ImportBatch, LedgerError>;
}

/// Create an import strategy based on the specified strategy type
///
/// `config` is only used by the async strategy; `None` means defaults.
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<ImportConfig>,
) -> Box<dyn ImportStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncImportStrategy),
        StrategyType::Async => Box::new(AsyncImportStrategy::new(config.unwrap_or_default())),
    }
}
