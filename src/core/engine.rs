//! Ledger engine
//!
//! This module provides the LedgerEngine that orchestrates the ledger's
//! service-level operations on top of a [`LedgerStore`].
//!
//! The engine enforces business rules such as:
//! - Outcomes created directly may not exceed the current balance total
//! - Deleting a missing transaction is a not-found error
//! - Imports resolve all their categories in one batch and save all their
//!   transactions in one call
//!
//! Imported outcomes are deliberately not balance-checked: a CSV import
//! records what already happened, so it may leave the total negative.

use crate::core::balance;
use crate::core::category_resolver::{find_or_create_categories, find_or_create_category};
use crate::core::traits::LedgerStore;
use crate::strategy::ImportStrategy;
use crate::types::{
    Balance, CreateTransactionRequest, ImportBatch, LedgerError, NewTransaction, Transaction,
    TransactionId, TransactionListing, TransactionType,
};
use std::path::Path;

/// Ledger engine
///
/// Owns a store and runs every operation to completion before the next one
/// starts. Mutating operations take `&mut self`, so a single engine can never
/// interleave a balance check with another caller's write.
#[derive(Debug)]
pub struct LedgerEngine<S> {
    store: S,
}

impl<S: LedgerStore> LedgerEngine<S> {
    /// Create a new LedgerEngine over the given store
    pub fn new(store: S) -> Self {
        LedgerEngine { store }
    }

    /// Read-only access to the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the engine, returning the store
    pub fn into_store(self) -> S {
        self.store
    }

    /// Current income, outcome and total
    pub fn get_balance(&self) -> Result<Balance, LedgerError> {
        balance::get_balance(&self.store)
    }

    /// All transactions in creation order, with the balance they produce
    pub fn list_transactions(&self) -> Result<TransactionListing, LedgerError> {
        let transactions = self.store.find_transactions()?;
        let balance = self.get_balance()?;
        Ok(TransactionListing {
            transactions,
            balance,
        })
    }

    /// Create and persist a single transaction
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The value is negative
    /// - The transaction is an outcome larger than the current balance total;
    ///   nothing is persisted and no category is created
    /// - The store fails while resolving the category or saving
    pub fn create_transaction(
        &mut self,
        request: CreateTransactionRequest,
    ) -> Result<Transaction, LedgerError> {
        request.validate()?;

        if request.tx_type == TransactionType::Outcome {
            let balance = self.get_balance()?;
            if balance.total < request.value {
                return Err(LedgerError::insufficient_balance(
                    balance.total,
                    request.value,
                ));
            }
        }

        let category = find_or_create_category(&mut self.store, &request.category_title)?;

        let transaction = self.store.save_transaction(NewTransaction {
            title: request.title,
            value: request.value,
            tx_type: request.tx_type,
            category,
        })?;

        tracing::info!(
            id = transaction.id,
            tx_type = %transaction.tx_type,
            value = %transaction.value,
            "created transaction"
        );

        Ok(transaction)
    }

    /// Delete a transaction by id
    ///
    /// Categories are left in place even if this was their last transaction.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::TransactionNotFound`] if no transaction has this id.
    pub fn delete_transaction(&mut self, id: TransactionId) -> Result<(), LedgerError> {
        if self.store.find_transaction(id)?.is_none() {
            return Err(LedgerError::transaction_not_found(id));
        }

        self.store.delete_transaction(id)?;
        tracing::info!(id, "deleted transaction");
        Ok(())
    }

    /// Read a CSV file with the given strategy and persist its transactions
    ///
    /// The file is parsed completely before anything is written, so I/O and
    /// stream errors leave the store untouched.
    pub fn import_transactions(
        &mut self,
        path: &Path,
        strategy: &dyn ImportStrategy,
    ) -> Result<Vec<Transaction>, LedgerError> {
        let batch = strategy.read(path)?;
        tracing::info!(
            path = %path.display(),
            rows = batch.len(),
            categories = batch.categories.len(),
            "parsed import file"
        );
        self.import_batch(batch)
    }

    /// Persist an already-parsed import
    ///
    /// Categories are resolved in bulk, each row is linked to its category by
    /// title, and all transactions are saved in one call. Returns the saved
    /// transactions in file order.
    pub fn import_batch(&mut self, batch: ImportBatch) -> Result<Vec<Transaction>, LedgerError> {
        if batch.is_empty() {
            return Ok(Vec::new());
        }

        let categories = find_or_create_categories(&mut self.store, &batch.categories)?;

        let transactions = batch
            .rows
            .into_iter()
            .map(|row| {
                let category = categories
                    .iter()
                    .find(|category| category.title == row.category)
                    .cloned()
                    .ok_or_else(|| {
                        LedgerError::persistence(format!(
                            "category '{}' was not resolved",
                            row.category
                        ))
                    })?;

                Ok(NewTransaction {
                    title: row.title,
                    value: row.value,
                    tx_type: row.tx_type,
                    category,
                })
            })
            .collect::<Result<Vec<_>, LedgerError>>()?;

        let saved = self.store.save_transactions(transactions)?;
        tracing::info!(count = saved.len(), "imported transactions");
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::memory_store::MemoryStore;
    use crate::core::traits::{CategoryRepository, TransactionRepository};
    use crate::strategy::{AsyncImportStrategy, ImportConfig, SyncImportStrategy};
    use crate::types::TransactionType::{Income, Outcome};
    use crate::types::{Category, CategoryId, ImportRow, NewCategory};
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn engine() -> LedgerEngine<MemoryStore> {
        LedgerEngine::new(MemoryStore::new())
    }

    fn request(
        title: &str,
        value: i64,
        tx_type: TransactionType,
        category: &str,
    ) -> CreateTransactionRequest {
        CreateTransactionRequest::new(title, Decimal::new(value, 0), tx_type, category)
    }

    fn row(title: &str, tx_type: TransactionType, value: i64, category: &str) -> ImportRow {
        ImportRow {
            title: title.to_string(),
            tx_type,
            value: Decimal::new(value, 0),
            category: category.to_string(),
        }
    }

    fn csv_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    /// A store whose writes always fail
    #[derive(Debug, Default)]
    struct ReadOnlyStore {
        inner: MemoryStore,
    }

    impl TransactionRepository for ReadOnlyStore {
        fn find_transactions(&self) -> Result<Vec<Transaction>, LedgerError> {
            self.inner.find_transactions()
        }
        fn find_transactions_by_type(
            &self,
            tx_type: TransactionType,
        ) -> Result<Vec<Transaction>, LedgerError> {
            self.inner.find_transactions_by_type(tx_type)
        }
        fn find_transaction(&self, id: TransactionId) -> Result<Option<Transaction>, LedgerError> {
            self.inner.find_transaction(id)
        }
        fn save_transaction(&mut self, _: NewTransaction) -> Result<Transaction, LedgerError> {
            Err(LedgerError::persistence("read-only"))
        }
        fn save_transactions(
            &mut self,
            _: Vec<NewTransaction>,
        ) -> Result<Vec<Transaction>, LedgerError> {
            Err(LedgerError::persistence("read-only"))
        }
        fn delete_transaction(&mut self, _: TransactionId) -> Result<(), LedgerError> {
            Err(LedgerError::persistence("read-only"))
        }
    }

    impl CategoryRepository for ReadOnlyStore {
        fn find_category(&self, id: CategoryId) -> Result<Option<Category>, LedgerError> {
            self.inner.find_category(id)
        }
        fn find_category_by_title(&self, title: &str) -> Result<Option<Category>, LedgerError> {
            self.inner.find_category_by_title(title)
        }
        fn find_categories_by_titles(
            &self,
            titles: &[String],
        ) -> Result<Vec<Category>, LedgerError> {
            self.inner.find_categories_by_titles(titles)
        }
        fn save_category(&mut self, category: NewCategory) -> Result<Category, LedgerError> {
            self.inner.save_category(category)
        }
        fn save_categories(
            &mut self,
            categories: Vec<NewCategory>,
        ) -> Result<Vec<Category>, LedgerError> {
            self.inner.save_categories(categories)
        }
    }

    #[test]
    fn test_create_income_without_balance() {
        let mut engine = engine();

        let tx = engine
            .create_transaction(request("Salary", 5000, Income, "Job"))
            .unwrap();

        assert_eq!(tx.id, 1);
        assert_eq!(tx.title, "Salary");
        assert_eq!(tx.category.title, "Job");
        assert_eq!(engine.get_balance().unwrap().total, Decimal::new(5000, 0));
    }

    #[rstest]
    #[case::below_total(400)]
    #[case::equal_to_total(1000)]
    fn test_create_outcome_within_balance(#[case] value: i64) {
        let mut engine = engine();
        engine
            .create_transaction(request("Salary", 1000, Income, "Job"))
            .unwrap();

        engine
            .create_transaction(request("Rent", value, Outcome, "Housing"))
            .unwrap();

        let balance = engine.get_balance().unwrap();
        assert_eq!(balance.outcome, Decimal::new(value, 0));
        assert_eq!(balance.total, Decimal::new(1000 - value, 0));
        assert_eq!(engine.store().find_transactions().unwrap().len(), 2);
    }

    #[test]
    fn test_create_outcome_exceeding_balance_persists_nothing() {
        let mut engine = engine();
        engine
            .create_transaction(request("Salary", 100, Income, "Job"))
            .unwrap();

        let result = engine.create_transaction(request("TV", 101, Outcome, "Electronics"));

        assert_eq!(
            result,
            Err(LedgerError::insufficient_balance(
                Decimal::new(100, 0),
                Decimal::new(101, 0)
            ))
        );
        assert_eq!(engine.store().find_transactions().unwrap().len(), 1);
        assert_eq!(
            engine.store().find_category_by_title("Electronics").unwrap(),
            None
        );
        assert_eq!(engine.store().categories().len(), 1);
    }

    #[test]
    fn test_create_outcome_on_empty_ledger_fails() {
        let mut engine = engine();

        let result = engine.create_transaction(request("Coffee", 3, Outcome, "Food"));

        assert!(matches!(
            result,
            Err(LedgerError::InsufficientBalance { .. })
        ));
    }

    #[test]
    fn test_create_rejects_negative_value() {
        let mut engine = engine();

        let result = engine.create_transaction(request("Refund", -5, Income, "Misc"));

        assert_eq!(result, Err(LedgerError::invalid_value(Decimal::new(-5, 0))));
        assert!(engine.store().categories().is_empty());
    }

    #[test]
    fn test_create_reuses_category() {
        let mut engine = engine();

        let first = engine
            .create_transaction(request("Salary", 100, Income, "Job"))
            .unwrap();
        let second = engine
            .create_transaction(request("Bonus", 50, Income, "Job"))
            .unwrap();

        assert_eq!(first.category.id, second.category.id);
        assert_eq!(engine.store().categories().len(), 1);
    }

    #[test]
    fn test_create_propagates_persistence_error() {
        let mut engine = LedgerEngine::new(ReadOnlyStore::default());

        let result = engine.create_transaction(request("Salary", 100, Income, "Job"));

        assert_eq!(result, Err(LedgerError::persistence("read-only")));
    }

    #[test]
    fn test_delete_existing_removes_only_that_transaction() {
        let mut engine = engine();
        let a = engine
            .create_transaction(request("a", 1, Income, "X"))
            .unwrap();
        let b = engine
            .create_transaction(request("b", 2, Income, "X"))
            .unwrap();

        engine.delete_transaction(a.id).unwrap();

        assert_eq!(engine.store().find_transactions().unwrap(), vec![b]);
        // Orphaned category stays
        assert_eq!(engine.store().categories().len(), 1);
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let mut engine = engine();
        engine
            .create_transaction(request("a", 1, Income, "X"))
            .unwrap();

        let result = engine.delete_transaction(99);

        assert_eq!(result, Err(LedgerError::transaction_not_found(99)));
        assert_eq!(result.unwrap_err().status_code(), 404);
        assert_eq!(engine.store().find_transactions().unwrap().len(), 1);
    }

    #[test]
    fn test_delete_orphan_category_keeps_category() {
        let mut engine = engine();
        let tx = engine
            .create_transaction(request("Gift", 20, Income, "Gifts"))
            .unwrap();

        engine.delete_transaction(tx.id).unwrap();

        assert!(engine.store().find_transactions().unwrap().is_empty());
        assert!(engine
            .store()
            .find_category_by_title("Gifts")
            .unwrap()
            .is_some());
    }

    #[test]
    fn test_list_transactions_includes_balance() {
        let mut engine = engine();
        engine
            .create_transaction(request("Salary", 300, Income, "Job"))
            .unwrap();
        engine
            .create_transaction(request("Food", 100, Outcome, "Food"))
            .unwrap();

        let listing = engine.list_transactions().unwrap();

        assert_eq!(listing.transactions.len(), 2);
        assert_eq!(listing.balance.total, Decimal::new(200, 0));
    }

    #[test]
    fn test_import_batch_links_categories() {
        let mut engine = engine();
        let mut batch = ImportBatch::new();
        batch.push(row("Salary", Income, 5000, "Job"));
        batch.push(row("Rent", Outcome, 1200, "Housing"));
        batch.push(row("Bonus", Income, 300, "Job"));

        let saved = engine.import_batch(batch).unwrap();

        assert_eq!(saved.len(), 3);
        assert_eq!(saved[0].category, saved[2].category);
        assert_eq!(saved[1].category.title, "Housing");
        assert_eq!(engine.store().categories().len(), 2);
    }

    #[test]
    fn test_import_batch_reuses_existing_categories() {
        let mut engine = engine();
        let existing = engine
            .create_transaction(request("Salary", 100, Income, "Job"))
            .unwrap()
            .category;
        let mut batch = ImportBatch::new();
        batch.push(row("Bonus", Income, 50, "Job"));

        let saved = engine.import_batch(batch).unwrap();

        assert_eq!(saved[0].category, existing);
        assert_eq!(engine.store().categories().len(), 1);
    }

    #[test]
    fn test_import_batch_skips_balance_check() {
        let mut engine = engine();
        let mut batch = ImportBatch::new();
        batch.push(row("Rent", Outcome, 1200, "Housing"));

        let saved = engine.import_batch(batch).unwrap();

        assert_eq!(saved.len(), 1);
        assert_eq!(engine.get_balance().unwrap().total, Decimal::new(-1200, 0));
    }

    #[test]
    fn test_import_empty_batch_creates_nothing() {
        let mut engine = engine();

        let saved = engine.import_batch(ImportBatch::new()).unwrap();

        assert!(saved.is_empty());
        assert!(engine.store().categories().is_empty());
    }

    #[test]
    fn test_import_transactions_from_file() {
        let mut engine = engine();
        let file = csv_file(
            "title,type,value,category\n\
             Salary,income,5000,Job\n\
             Rent,outcome,1200,Housing\n\
             ,outcome,50,Bad\n",
        );

        let saved = engine
            .import_transactions(file.path(), &SyncImportStrategy)
            .unwrap();

        let titles: Vec<&str> = saved.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Salary", "Rent"]);
        let categories: Vec<String> = engine
            .store()
            .categories()
            .into_iter()
            .map(|c| c.title)
            .collect();
        assert_eq!(categories, vec!["Job", "Housing"]);
    }

    #[test]
    fn test_import_missing_file_persists_nothing() {
        let mut engine = engine();

        let result = engine.import_transactions(
            Path::new("does/not/exist.csv"),
            &SyncImportStrategy,
        );

        assert!(matches!(result, Err(LedgerError::FileNotFound { .. })));
        assert!(engine.store().find_transactions().unwrap().is_empty());
        assert!(engine.store().categories().is_empty());
    }

    #[test]
    fn test_import_stream_error_persists_nothing() {
        let mut engine = engine();
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            b"title,type,value,category\n\
              Salary,income,5000,Job\n\
              \xff\xfe,outcome,10,Food\n\
              Rent,outcome,1200,Housing\n",
        )
        .unwrap();
        file.flush().unwrap();

        let result = engine.import_transactions(file.path(), &SyncImportStrategy);

        assert!(matches!(result, Err(LedgerError::ParseError { .. })));
        assert!(engine.store().find_transactions().unwrap().is_empty());
        assert!(engine.store().categories().is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_import_with_async_strategy_inside_runtime() {
        let mut engine = engine();
        let file = csv_file(
            "title,type,value,category\n\
             Salary,income,5000,Job\n\
             Rent,outcome,1200,Housing\n",
        );
        let strategy = AsyncImportStrategy::new(ImportConfig::new(10, 2));

        let saved = engine.import_transactions(file.path(), &strategy).unwrap();

        assert_eq!(saved.len(), 2);
        assert_eq!(engine.get_balance().unwrap().total, Decimal::new(3800, 0));
    }

    #[test]
    fn test_import_propagates_persistence_error() {
        let mut engine = LedgerEngine::new(ReadOnlyStore::default());
        let mut batch = ImportBatch::new();
        batch.push(row("Salary", Income, 10, "Job"));

        let result = engine.import_batch(batch);

        assert_eq!(result, Err(LedgerError::persistence("read-only")));
    }
}
