//! In-memory ledger store
//!
//! `MemoryStore` combines a [`TransactionStore`] and a [`CategoryStore`] into
//! a single [`LedgerStore`](crate::core::traits::LedgerStore). It backs the CLI
//! and the test suites; a database-backed store would implement the same two
//! traits.

use crate::core::category_store::CategoryStore;
use crate::core::traits::{CategoryRepository, TransactionRepository};
use crate::core::transaction_store::TransactionStore;
use crate::types::{
    Category, CategoryId, LedgerError, NewCategory, NewTransaction, Transaction, TransactionId,
    TransactionType,
};

/// Transactions and categories held in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    transactions: TransactionStore,
    categories: CategoryStore,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All categories in ascending id order, including orphans
    pub fn categories(&self) -> Vec<Category> {
        self.categories.all()
    }
}

impl TransactionRepository for MemoryStore {
    fn find_transactions(&self) -> Result<Vec<Transaction>, LedgerError> {
        self.transactions.find_transactions()
    }

    fn find_transactions_by_type(
        &self,
        tx_type: TransactionType,
    ) -> Result<Vec<Transaction>, LedgerError> {
        self.transactions.find_transactions_by_type(tx_type)
    }

    fn find_transaction(&self, id: TransactionId) -> Result<Option<Transaction>, LedgerError> {
        self.transactions.find_transaction(id)
    }

    fn save_transaction(
        &mut self,
        transaction: NewTransaction,
    ) -> Result<Transaction, LedgerError> {
        self.transactions.save_transaction(transaction)
    }

    fn save_transactions(
        &mut self,
        transactions: Vec<NewTransaction>,
    ) -> Result<Vec<Transaction>, LedgerError> {
        self.transactions.save_transactions(transactions)
    }

    fn delete_transaction(&mut self, id: TransactionId) -> Result<(), LedgerError> {
        self.transactions.delete_transaction(id)
    }
}

impl CategoryRepository for MemoryStore {
    fn find_category(&self, id: CategoryId) -> Result<Option<Category>, LedgerError> {
        self.categories.find_category(id)
    }

    fn find_category_by_title(&self, title: &str) -> Result<Option<Category>, LedgerError> {
        self.categories.find_category_by_title(title)
    }

    fn find_categories_by_titles(&self, titles: &[String]) -> Result<Vec<Category>, LedgerError> {
        self.categories.find_categories_by_titles(titles)
    }

    fn save_category(&mut self, category: NewCategory) -> Result<Category, LedgerError> {
        self.categories.save_category(category)
    }

    fn save_categories(
        &mut self,
        categories: Vec<NewCategory>,
    ) -> Result<Vec<Category>, LedgerError> {
        self.categories.save_categories(categories)
    }
}
