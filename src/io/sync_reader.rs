//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over import rows from a CSV file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Design
//!
//! The SyncReader uses csv::Reader to read records one at a time, converts
//! each into an [`ImportRow`] with [`convert_csv_record`], and skips the rows
//! that cannot be imported:
//! - Rows missing a title, type or value are skipped silently (debug log)
//! - Rows with an unknown type or unusable value are skipped with a warning
//!
//! The first line is always treated as a header and skipped, whatever it
//! contains.
//!
//! # Error Handling
//!
//! - Fatal open errors (file not found, permission denied) are returned from `new()`
//! - Stream errors (invalid UTF-8, read failures) are yielded as `Err` and
//!   callers abort the import on the first one
//!
//! ```no_run
//! use finance_ledger::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::new(Path::new("transactions.csv")).unwrap();
//! for row in reader {
//!     println!("{:?}", row.unwrap());
//! }
//! ```

use crate::io::csv_format::{convert_csv_record, CsvRecord, RowRejection};
use crate::types::{ImportBatch, ImportRow, LedgerError};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Synchronous CSV reader
///
/// Maintains streaming behavior: one record is held in memory at a time.
#[derive(Debug)]
pub struct SyncReader<R = File> {
    reader: csv::Reader<R>,
    record: StringRecord,
}

impl SyncReader<File> {
    /// Open a CSV file for streaming
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::FileNotFound`] if the path does not exist and
    /// [`LedgerError::IoError`] for any other open failure.
    pub fn new(path: &Path) -> Result<Self, LedgerError> {
        let file = File::open(path).map_err(|e| LedgerError::from_open(e, path))?;
        Ok(Self::from_reader(file))
    }
}

impl<R: Read> SyncReader<R> {
    /// Read CSV data from any reader
    ///
    /// The CSV reader is configured to:
    /// - Skip the header line
    /// - Trim whitespace from all fields
    /// - Allow flexible field counts
    /// - Use an 8KB buffer for efficient I/O
    pub fn from_reader(reader: R) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(reader);

        Self {
            reader,
            record: StringRecord::new(),
        }
    }
}

impl<R: Read> Iterator for SyncReader<R> {
    type Item = Result<ImportRow, LedgerError>;

    /// Get the next importable row
    ///
    /// # Returns
    ///
    /// * `Some(Ok(ImportRow))` - The next well-formed row
    /// * `Some(Err(LedgerError))` - The stream could not be read
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.reader.read_record(&mut self.record) {
                Ok(false) => return None,
                Ok(true) => {
                    let line = self.record.position().map(|pos| pos.line());
                    match convert_csv_record(CsvRecord::from_fields(self.record.iter())) {
                        Ok(row) => return Some(Ok(row)),
                        Err(RowRejection::Incomplete) => {
                            tracing::debug!(?line, "skipping incomplete row");
                        }
                        Err(RowRejection::Invalid(reason)) => {
                            tracing::warn!(?line, %reason, "skipping malformed row");
                        }
                    }
                }
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

/// Parse a whole CSV file into an import batch
///
/// Stops at the first stream error.
pub fn read_csv(path: &Path) -> Result<ImportBatch, LedgerError> {
    let mut batch = ImportBatch::new();
    for row in SyncReader::new(path)? {
        batch.push(row?);
    }
    Ok(batch)
}
