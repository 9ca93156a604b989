//! Asynchronous CSV reader with batch interface
//!
//! Provides a streaming interface over import rows from a CSV file.
//! Supports batch reading so large files never sit in memory as raw text.
//!
//! # Design
//!
//! The AsyncReader uses:
//! - csv-async for streaming CSV parsing
//! - tokio for file access (through the tokio-util compat layer)
//! - Batch reading for efficient processing
//!
//! # Architecture
//!
//! ```text
//! CSV Reader → AsyncReader → Batches of ImportRows → ImportBatch
//!                  ↓
//!           csv_format module
//!           (CsvRecord, convert_csv_record)
//! ```
//!
//! Row skipping follows the same rules as the synchronous reader.

use crate::io::csv_format::{convert_csv_record, CsvRecord, RowRejection};
use crate::types::{ImportBatch, ImportRow, LedgerError};
use csv_async::{AsyncReaderBuilder, StringRecord};
use futures::io::AsyncRead;
use std::path::Path;
use tokio_util::compat::TokioAsyncReadCompatExt;

/// Asynchronous CSV reader
///
/// Provides batch reading interface over import rows.
/// Maintains streaming behavior with constant memory usage.
pub struct AsyncReader<R: AsyncRead + Unpin + Send> {
    csv_reader: csv_async::AsyncReader<R>,
    record: StringRecord,
}

impl<R: AsyncRead + Unpin + Send> AsyncReader<R> {
    /// Create a new AsyncReader from an async reader
    ///
    /// The first line is treated as a header and skipped.
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv_async::Trim::All)
            .create_reader(reader);

        Self {
            csv_reader,
            record: StringRecord::new(),
        }
    }

    /// Read a batch of import rows
    ///
    /// Reads until `batch_size` rows have been accepted or the input ends.
    /// Rejected rows are logged and do not count towards the batch. A
    /// `batch_size` of zero is treated as one.
    ///
    /// # Returns
    ///
    /// The accepted rows. An empty vector means the end of the file.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::ParseError`] if the stream cannot be decoded.
    pub async fn read_batch(&mut self, batch_size: usize) -> Result<Vec<ImportRow>, LedgerError> {
        let batch_size = batch_size.max(1);
        let mut batch = Vec::with_capacity(batch_size);

        while batch.len() < batch_size {
            if !self.csv_reader.read_record(&mut self.record).await? {
                break;
            }

            let line = self.record.position().map(|pos| pos.line());
            match convert_csv_record(CsvRecord::from_fields(self.record.iter())) {
                Ok(row) => batch.push(row),
                Err(RowRejection::Incomplete) => {
                    tracing::debug!(?line, "skipping incomplete row");
                }
                Err(RowRejection::Invalid(reason)) => {
                    tracing::warn!(?line, %reason, "skipping malformed row");
                }
            }
        }

        Ok(batch)
    }
}

/// Parse a whole CSV file into an import batch, `batch_size` rows at a time
///
/// # Errors
///
/// Returns [`LedgerError::FileNotFound`] or [`LedgerError::IoError`] if the
/// file cannot be opened, and [`LedgerError::ParseError`] on the first stream
/// error. No partial batch is returned.
pub async fn read_csv_async(path: &Path, batch_size: usize) -> Result<ImportBatch, LedgerError> {
    let file = tokio::fs::File::open(path)
        .await
        .map_err(|e| LedgerError::from_open(e, path))?;

    let mut reader = AsyncReader::new(file.compat());
    let mut import = ImportBatch::new();

    loop {
        let rows = reader.read_batch(batch_size).await?;
        if rows.is_empty() {
            break;
        }
        tracing::trace!(rows = rows.len(), "read batch");
        import.extend(rows);
    }

    Ok(import)
}
