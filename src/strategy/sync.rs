//! Synchronous import strategy
//!
//! Reads the file on the calling thread with the streaming `SyncReader`.
//! One CSV record is held at a time; only accepted rows are kept.

use crate::io::sync_reader::read_csv;
use crate::strategy::ImportStrategy;
use crate::types::{ImportBatch, LedgerError};
use std::path::Path;

/// Synchronous import strategy
///
/// # Examples
///
/// ```no_run
/// use finance_ledger::core::{LedgerEngine, MemoryStore};
/// use finance_ledger::strategy::SyncImportStrategy;
/// use std::path::Path;
///
/// let mut engine = LedgerEngine::new(MemoryStore::new());
/// engine
///     .import_transactions(Path::new("transactions.csv"), &SyncImportStrategy)
///     .expect("Import failed");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncImportStrategy;

impl ImportStrategy for SyncImportStrategy {
    fn read(&self, input_path: &Path) -> Result<ImportBatch, LedgerError> {
        let batch = read_csv(input_path)?;
        tracing::debug!(
            path = %input_path.display(),
            rows = batch.len(),
            categories = batch.categories.len(),
            "read import file"
        );
        Ok(batch)
    }
}
