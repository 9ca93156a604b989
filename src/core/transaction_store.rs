//! In-memory transaction storage
//!
//! This module provides the TransactionStore component, an in-memory
//! [`TransactionRepository`] keyed by transaction id.
//!
//! # Ordering
//!
//! Ids are handed out in ascending order and the map is ordered by id, so
//! every find returns transactions in creation order.
//!
//! # Bulk Saves
//!
//! `save_transactions` reserves the whole id range before inserting anything,
//! so a batch either lands completely or not at all.

use crate::core::traits::TransactionRepository;
use crate::types::{LedgerError, NewTransaction, Transaction, TransactionId, TransactionType};
use std::collections::BTreeMap;

/// In-memory transaction store
#[derive(Debug)]
pub struct TransactionStore {
    /// Map of transaction ID to stored transaction
    transactions: BTreeMap<TransactionId, Transaction>,

    /// Id the next saved transaction receives
    next_id: TransactionId,
}

impl TransactionStore {
    /// Create a new empty transaction store
    ///
    /// The first saved transaction receives id 1.
    pub fn new() -> Self {
        TransactionStore {
            transactions: BTreeMap::new(),
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Reserve `count` consecutive ids
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the id space is exhausted; no ids are
    /// consumed in that case.
    fn reserve_ids(&mut self, count: usize) -> Result<TransactionId, LedgerError> {
        let first = self.next_id;
        let count = TransactionId::try_from(count)
            .map_err(|_| LedgerError::persistence("too many transactions in one save"))?;
        self.next_id = first
            .checked_add(count)
            .ok_or_else(|| LedgerError::persistence("transaction id space exhausted"))?;
        Ok(first)
    }
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionRepository for TransactionStore {
    fn find_transactions(&self) -> Result<Vec<Transaction>, LedgerError> {
        Ok(self.transactions.values().cloned().collect())
    }

    fn find_transactions_by_type(
        &self,
        tx_type: TransactionType,
    ) -> Result<Vec<Transaction>, LedgerError> {
        Ok(self
            .transactions
            .values()
            .filter(|tx| tx.tx_type == tx_type)
            .cloned()
            .collect())
    }

    fn find_transaction(&self, id: TransactionId) -> Result<Option<Transaction>, LedgerError> {
        Ok(self.transactions.get(&id).cloned())
    }

    fn save_transaction(
        &mut self,
        transaction: NewTransaction,
    ) -> Result<Transaction, LedgerError> {
        let id = self.reserve_ids(1)?;
        let saved = transaction.into_transaction(id);
        self.transactions.insert(id, saved.clone());
        Ok(saved)
    }

    fn save_transactions(
        &mut self,
        transactions: Vec<NewTransaction>,
    ) -> Result<Vec<Transaction>, LedgerError> {
        let first = self.reserve_ids(transactions.len())?;

        let saved: Vec<Transaction> = transactions
            .into_iter()
            .zip(first..)
            .map(|(tx, id)| tx.into_transaction(id))
            .collect();

        for tx in &saved {
            self.transactions.insert(tx.id, tx.clone());
        }

        Ok(saved)
    }

    fn delete_transaction(&mut self, id: TransactionId) -> Result<(), LedgerError> {
        self.transactions.remove(&id);
        Ok(())
    }
}
