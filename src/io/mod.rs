//! I/O module
//!
//! Handles CSV import parsing and report output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, report serialization)
//! - `sync_reader` - Synchronous CSV reader with iterator interface
//! - `async_reader` - Asynchronous CSV reader with batch reading interface

pub mod async_reader;
pub mod csv_format;
pub mod sync_reader;

pub use async_reader::{read_csv_async, AsyncReader};
pub use csv_format::{
    convert_csv_record, write_balance_csv, write_transactions_csv, CsvRecord, RowRejection,
};
pub use sync_reader::{read_csv, SyncReader};
