//! Error types for the finance ledger
//!
//! This module defines all error types that can occur while creating,
//! deleting and importing transactions.
//!
//! # Error Categories
//!
//! - **Validation Errors**: Insufficient balance, negative values
//! - **Not Found Errors**: Deleting a transaction that does not exist
//! - **I/O Errors**: Import file not found, unreadable, or an unparseable stream
//! - **Persistence Errors**: Any failure reported by the store, including
//!   arithmetic overflow while summing balances
//!
//! Malformed CSV rows are not errors; the importer skips them.

use super::transaction::TransactionId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the ledger
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Outcome would exceed the current balance total
    ///
    /// Only direct creation enforces this; imports do not.
    #[error("Insufficient balance: total {total}, requested {requested}")]
    InsufficientBalance {
        /// Balance total at the time of the check
        total: Decimal,
        /// Value of the rejected outcome
        requested: Decimal,
    },

    /// Transaction value is negative
    #[error("Invalid transaction value {value}: must not be negative")]
    InvalidValue {
        /// The rejected value
        value: Decimal,
    },

    /// No transaction exists with the given id
    #[error("Transaction {id} not found")]
    TransactionNotFound {
        /// The id that was looked up
        id: TransactionId,
    },

    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// The CSV stream itself could not be parsed
    ///
    /// Unlike a malformed row, this aborts the whole import.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// A category with this title already exists
    #[error("Category '{title}' already exists")]
    DuplicateCategory {
        /// The duplicated title
        title: String,
    },

    /// The store failed to complete an operation
    #[error("Persistence error: {message}")]
    Persistence {
        /// Description of the store failure
        message: String,
    },

    /// Arithmetic overflow would occur
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },
}

/// Coarse classification of a [`LedgerError`], for callers deciding how to
/// present it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller can correct the request
    Validation,
    /// The referenced entity does not exist
    NotFound,
    /// Reading the input failed
    Io,
    /// The store failed
    Persistence,
}

impl LedgerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::InsufficientBalance { .. } | LedgerError::InvalidValue { .. } => {
                ErrorKind::Validation
            }
            LedgerError::TransactionNotFound { .. } => ErrorKind::NotFound,
            LedgerError::FileNotFound { .. }
            | LedgerError::IoError { .. }
            | LedgerError::ParseError { .. } => ErrorKind::Io,
            LedgerError::DuplicateCategory { .. }
            | LedgerError::Persistence { .. }
            | LedgerError::ArithmeticOverflow { .. } => ErrorKind::Persistence,
        }
    }

    /// HTTP-equivalent status code for this error
    pub fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::Validation => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::Io | ErrorKind::Persistence => 500,
        }
    }
}

// Conversion from io::Error to LedgerError
impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to LedgerError
impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl From<csv_async::Error> for LedgerError {
    fn from(error: csv_async::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an InsufficientBalance error
    pub fn insufficient_balance(total: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientBalance { total, requested }
    }

    /// Create an InvalidValue error
    pub fn invalid_value(value: Decimal) -> Self {
        LedgerError::InvalidValue { value }
    }

    /// Create a TransactionNotFound error
    pub fn transaction_not_found(id: TransactionId) -> Self {
        LedgerError::TransactionNotFound { id }
    }

    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        LedgerError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create a DuplicateCategory error
    pub fn duplicate_category(title: &str) -> Self {
        LedgerError::DuplicateCategory {
            title: title.to_string(),
        }
    }

    /// Create a Persistence error
    pub fn persistence(message: impl Into<String>) -> Self {
        LedgerError::Persistence {
            message: message.into(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }

    /// Map an error from opening an input file
    ///
    /// `NotFound` becomes [`LedgerError::FileNotFound`]; everything else is an
    /// [`LedgerError::IoError`] that names the path.
    pub fn from_open(error: std::io::Error, path: &std::path::Path) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            return LedgerError::file_not_found(&path.display().to_string());
        }
        LedgerError::IoError {
            message: format!("Failed to open file '{}': {}", path.display(), error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::path::Path;

    #[rstest]
    #[case::insufficient_balance(
        LedgerError::InsufficientBalance { total: Decimal::new(10000, 2), requested: Decimal::new(15000, 2) },
        "Insufficient balance: total 100.00, requested 150.00"
    )]
    #[case::invalid_value(
        LedgerError::InvalidValue { value: Decimal::new(-5, 0) },
        "Invalid transaction value -5: must not be negative"
    )]
    #[case::transaction_not_found(
        LedgerError::TransactionNotFound { id: 42 },
        "Transaction 42 not found"
    )]
    #[case::file_not_found(
        LedgerError::FileNotFound { path: "test.csv".to_string() },
        "File not found: test.csv"
    )]
    #[case::io_error(
        LedgerError::IoError { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::parse_error_with_line(
        LedgerError::ParseError { line: Some(7), message: "invalid utf-8".to_string() },
        "CSV parse error at line 7: invalid utf-8"
    )]
    #[case::parse_error_without_line(
        LedgerError::ParseError { line: None, message: "invalid utf-8".to_string() },
        "CSV parse error: invalid utf-8"
    )]
    #[case::duplicate_category(
        LedgerError::DuplicateCategory { title: "Food".to_string() },
        "Category 'Food' already exists"
    )]
    #[case::persistence(
        LedgerError::Persistence { message: "disk full".to_string() },
        "Persistence error: disk full"
    )]
    #[case::arithmetic_overflow(
        LedgerError::ArithmeticOverflow { operation: "income sum".to_string() },
        "Arithmetic overflow in income sum"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::insufficient_balance(LedgerError::insufficient_balance(Decimal::ZERO, Decimal::ONE), ErrorKind::Validation, 400)]
    #[case::invalid_value(LedgerError::invalid_value(Decimal::NEGATIVE_ONE), ErrorKind::Validation, 400)]
    #[case::not_found(LedgerError::transaction_not_found(1), ErrorKind::NotFound, 404)]
    #[case::file_not_found(LedgerError::file_not_found("x.csv"), ErrorKind::Io, 500)]
    #[case::duplicate_category(LedgerError::duplicate_category("Food"), ErrorKind::Persistence, 500)]
    #[case::persistence(LedgerError::persistence("boom"), ErrorKind::Persistence, 500)]
    #[case::overflow(LedgerError::arithmetic_overflow("sum"), ErrorKind::Persistence, 500)]
    fn test_kind_and_status(
        #[case] error: LedgerError,
        #[case] kind: ErrorKind,
        #[case] status: u16,
    ) {
        assert_eq!(error.kind(), kind);
        assert_eq!(error.status_code(), status);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: LedgerError = io_error.into();
        assert!(matches!(error, LedgerError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }

    #[rstest]
    #[case::not_found(std::io::ErrorKind::NotFound, "File not found: missing.csv")]
    #[case::permission_denied(
        std::io::ErrorKind::PermissionDenied,
        "I/O error: Failed to open file 'missing.csv': nope"
    )]
    fn test_from_open(#[case] kind: std::io::ErrorKind, #[case] expected: &str) {
        let error =
            LedgerError::from_open(std::io::Error::new(kind, "nope"), Path::new("missing.csv"));
        assert_eq!(error.to_string(), expected);
    }
}
