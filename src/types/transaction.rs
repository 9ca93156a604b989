//! Transaction-related types for the finance ledger
//!
//! This module defines the transaction type enum, the persisted transaction
//! entity, its unsaved form, and the records produced by the CSV importer.

use super::category::Category;
use super::error::LedgerError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Transaction identifier
///
/// Assigned by the store on save, ascending in creation order.
pub type TransactionId = u32;

/// Direction of money movement for a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in; adds to the balance
    Income,

    /// Money going out; subtracts from the balance
    ///
    /// Direct creation of an outcome is rejected when it exceeds the current total.
    Outcome,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Outcome => "outcome",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    /// Parse exactly `income` or `outcome`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionType::Income),
            "outcome" => Ok(TransactionType::Outcome),
            _ => Err(format!("Invalid transaction type: '{}'", s)),
        }
    }
}

/// A persisted transaction
///
/// Transactions are immutable once saved; the only lifecycle operations are
/// creation and deletion.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Store-assigned identifier
    pub id: TransactionId,

    /// Free-form description
    pub title: String,

    /// Non-negative amount
    pub value: Decimal,

    /// Income or outcome
    pub tx_type: TransactionType,

    /// The category this transaction is grouped under
    pub category: Category,
}

/// A transaction that has been built but not yet saved
///
/// This is what callers hand to
/// [`TransactionRepository::save_transaction`](crate::core::traits::TransactionRepository::save_transaction);
/// the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub title: String,
    pub value: Decimal,
    pub tx_type: TransactionType,
    pub category: Category,
}

impl NewTransaction {
    /// Attach a store-assigned id, producing the persisted entity
    pub fn into_transaction(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            title: self.title,
            value: self.value,
            tx_type: self.tx_type,
            category: self.category,
        }
    }
}

/// Input for creating a single transaction
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTransactionRequest {
    pub title: String,
    pub value: Decimal,
    pub tx_type: TransactionType,

    /// Title of the category; created on first use
    pub category_title: String,
}

impl CreateTransactionRequest {
    pub fn new(
        title: impl Into<String>,
        value: Decimal,
        tx_type: TransactionType,
        category_title: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            value,
            tx_type,
            category_title: category_title.into(),
        }
    }

    /// Reject values the ledger cannot hold
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidValue`] for negative values and for
    /// values finer than a cent.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.value < Decimal::ZERO || self.value.normalize().scale() > 2 {
            return Err(LedgerError::invalid_value(self.value));
        }
        Ok(())
    }
}

/// A well-formed row read from an import CSV file
///
/// Rows missing a title, type or value never become an `ImportRow`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportRow {
    pub title: String,
    pub tx_type: TransactionType,
    pub value: Decimal,

    /// Category title as written in the file; may be empty
    pub category: String,
}

/// Everything an import needs after the file has been fully parsed
///
/// Rows are kept in file order. Category titles are distinct and kept in the
/// order they were first seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportBatch {
    pub rows: Vec<ImportRow>,
    pub categories: Vec<String>,
}

impl ImportBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row, recording its category title if it is new
    pub fn push(&mut self, row: ImportRow) {
        if !self.categories.contains(&row.category) {
            self.categories.push(row.category.clone());
        }
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Extend<ImportRow> for ImportBatch {
    fn extend<I: IntoIterator<Item = ImportRow>>(&mut self, iter: I) {
        for row in iter {
            self.push(row);
        }
    }
}
