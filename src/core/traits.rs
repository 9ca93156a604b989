//! Persistence gateway traits
//!
//! The ledger core only talks to storage through these traits. A store is a
//! key-based collection of transactions and categories supporting filtered
//! finds, saves (single and bulk) and deletion by id.
//!
//! Bulk saves are expected to be all-or-nothing: either every item is
//! persisted or the call fails and nothing changes.

use crate::types::{
    Category, CategoryId, LedgerError, NewCategory, NewTransaction, Transaction, TransactionId,
    TransactionType,
};

/// Storage for transactions
pub trait TransactionRepository {
    /// All transactions, in ascending id order
    fn find_transactions(&self) -> Result<Vec<Transaction>, LedgerError>;

    /// All transactions of one type, in ascending id order
    fn find_transactions_by_type(
        &self,
        tx_type: TransactionType,
    ) -> Result<Vec<Transaction>, LedgerError>;

    /// Look up a single transaction by id
    fn find_transaction(&self, id: TransactionId) -> Result<Option<Transaction>, LedgerError>;

    /// Persist one transaction, assigning its id
    fn save_transaction(&mut self, transaction: NewTransaction)
        -> Result<Transaction, LedgerError>;

    /// Persist many transactions in one call, preserving input order
    fn save_transactions(
        &mut self,
        transactions: Vec<NewTransaction>,
    ) -> Result<Vec<Transaction>, LedgerError>;

    /// Remove a transaction by id
    ///
    /// Deleting an id that does not exist is not an error at this layer;
    /// callers that care check with [`find_transaction`](Self::find_transaction) first.
    fn delete_transaction(&mut self, id: TransactionId) -> Result<(), LedgerError>;
}

/// Storage for categories
pub trait CategoryRepository {
    /// Look up a single category by id
    fn find_category(&self, id: CategoryId) -> Result<Option<Category>, LedgerError>;

    /// Exact-match lookup by title
    fn find_category_by_title(&self, title: &str) -> Result<Option<Category>, LedgerError>;

    /// Batched "title in set" lookup
    ///
    /// Titles with no matching category are simply absent from the result.
    fn find_categories_by_titles(&self, titles: &[String]) -> Result<Vec<Category>, LedgerError>;

    /// Persist one category, assigning its id
    fn save_category(&mut self, category: NewCategory) -> Result<Category, LedgerError>;

    /// Persist many categories in one call, preserving input order
    fn save_categories(
        &mut self,
        categories: Vec<NewCategory>,
    ) -> Result<Vec<Category>, LedgerError>;
}

/// A store holding both entity kinds
///
/// Implemented automatically for anything that implements both repositories.
pub trait LedgerStore: TransactionRepository + CategoryRepository {}

impl<T: TransactionRepository + CategoryRepository> LedgerStore for T {}
