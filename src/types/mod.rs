//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `transaction`: Transaction entities, import rows and identifiers
//! - `category`: Category entities and identifiers
//! - `balance`: Derived balance summary
//! - `error`: Error types for the ledger

pub mod balance;
pub mod category;
pub mod error;
pub mod transaction;

pub use balance::{Balance, TransactionListing};
pub use category::{Category, CategoryId, NewCategory};
pub use error::{ErrorKind, LedgerError};
pub use transaction::{
    CreateTransactionRequest, ImportBatch, ImportRow, NewTransaction, Transaction, TransactionId,
    TransactionType,
};
