//! Asynchronous batch import strategy
//!
//! Reads the import file on a tokio multi-threaded runtime, pulling
//! `batch_size` accepted rows at a time from the `AsyncReader`. Outside any
//! runtime a dedicated one is built per read; inside a multi-threaded runtime
//! the caller's runtime is reused.
//!
//! # Architecture
//!
//! ```text
//! AsyncImportStrategy
//!     ├── ImportConfig (batch_size, worker_threads)
//!     ├── tokio runtime (worker_threads)
//!     └── read_csv_async
//!         └── AsyncReader (batch CSV reading)
//! ```

use crate::io::async_reader::read_csv_async;
use crate::strategy::ImportStrategy;
use crate::types::{ImportBatch, LedgerError};
use std::path::Path;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};
use tokio::task;

/// Configuration for batch imports
///
/// Both values are always at least one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportConfig {
    batch_size: usize,
    worker_threads: usize,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            batch_size: 1000,
            worker_threads: num_cpus::get().max(1),
        }
    }
}

impl ImportConfig {
    /// Create a new ImportConfig with custom values
    ///
    /// Zero values fall back to the defaults with a warning.
    pub fn new(batch_size: usize, worker_threads: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            tracing::warn!(
                batch_size,
                default = default.batch_size,
                "invalid batch size, using default"
            );
            default.batch_size
        } else {
            batch_size
        };

        let worker_threads = if worker_threads == 0 {
            tracing::warn!(
                worker_threads,
                default = default.worker_threads,
                "invalid worker thread count, using default"
            );
            default.worker_threads
        } else {
            worker_threads
        };

        Self {
            batch_size,
            worker_threads,
        }
    }

    /// Number of accepted rows read per batch
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of tokio worker threads for a dedicated runtime
    pub fn worker_threads(&self) -> usize {
        self.worker_threads
    }
}

/// Asynchronous batch import strategy
///
/// Called outside any runtime, each read builds its own multi-threaded
/// runtime. Called from a task on a multi-threaded runtime, the read runs on
/// that runtime through `block_in_place`. A current-thread runtime cannot
/// block, so reads from one are rejected.
#[derive(Debug, Clone)]
pub struct AsyncImportStrategy {
    config: ImportConfig,
}

impl AsyncImportStrategy {
    pub fn new(config: ImportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    fn build_runtime(&self) -> Result<Runtime, LedgerError> {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.config.worker_threads)
            .build()
            .map_err(|e| LedgerError::IoError {
                message: format!("Failed to create tokio runtime: {}", e),
            })
    }
}

impl ImportStrategy for AsyncImportStrategy {
    /// # Errors
    ///
    /// Besides the reader errors, returns [`LedgerError::IoError`] if a
    /// runtime cannot be built or the caller runs on a current-thread runtime.
    fn read(&self, input_path: &Path) -> Result<ImportBatch, LedgerError> {
        let read = read_csv_async(input_path, self.config.batch_size);

        let batch = match Handle::try_current() {
            Ok(handle) => match handle.runtime_flavor() {
                RuntimeFlavor::MultiThread => task::block_in_place(|| handle.block_on(read))?,
                flavor => {
                    return Err(LedgerError::IoError {
                        message: format!("Cannot block on a {:?} tokio runtime", flavor),
                    })
                }
            },
            Err(_) => self.build_runtime()?.block_on(read)?,
        };

        tracing::debug!(
            path = %input_path.display(),
            rows = batch.len(),
            categories = batch.categories.len(),
            batch_size = self.config.batch_size,
            "read import file"
        );
        Ok(batch)
    }
}
