//! Task-safe ledger handle for concurrent callers
//!
//! This module provides `SharedLedger`, a cloneable handle around a
//! [`LedgerEngine`] that many async tasks can use at once.
//!
//! # Design
//!
//! Creating an outcome is a check-then-act sequence: read the balance, resolve
//! the category, save the transaction. Two callers interleaving those steps
//! could each see enough balance for themselves and together overdraw the
//! ledger. `SharedLedger` holds a single `tokio::sync::Mutex` over the engine
//! for the whole sequence, so every operation is serializable.
//!
//! # Architecture
//!
//! ```text
//! SharedLedger (Clone)
//!     └── Arc<Mutex<LedgerEngine<S>>>
//!             └── S: LedgerStore
//! ```
//!
//! Imports parse their CSV file before taking the lock, so a slow file does
//! not block other callers; only the persistence step runs under the lock.

use crate::core::engine::LedgerEngine;
use crate::core::traits::LedgerStore;
use crate::io::async_reader::read_csv_async;
use crate::types::{
    Balance, CreateTransactionRequest, LedgerError, Transaction, TransactionId,
    TransactionListing,
};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Cloneable, task-safe handle to a ledger
#[derive(Debug)]
pub struct SharedLedger<S> {
    engine: Arc<Mutex<LedgerEngine<S>>>,
}

impl<S> Clone for SharedLedger<S> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
        }
    }
}

impl<S: LedgerStore + Send> SharedLedger<S> {
    /// Wrap a store in a new shared ledger
    pub fn new(store: S) -> Self {
        Self::from_engine(LedgerEngine::new(store))
    }

    pub fn from_engine(engine: LedgerEngine<S>) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
        }
    }

    /// See [`LedgerEngine::create_transaction`]
    ///
    /// The balance check and the save happen under one lock.
    pub async fn create_transaction(
        &self,
        request: CreateTransactionRequest,
    ) -> Result<Transaction, LedgerError> {
        let mut engine = self.engine.lock().await;
        engine.create_transaction(request)
    }

    /// See [`LedgerEngine::delete_transaction`]
    pub async fn delete_transaction(&self, id: TransactionId) -> Result<(), LedgerError> {
        let mut engine = self.engine.lock().await;
        engine.delete_transaction(id)
    }

    /// See [`LedgerEngine::get_balance`]
    pub async fn balance(&self) -> Result<Balance, LedgerError> {
        let engine = self.engine.lock().await;
        engine.get_balance()
    }

    /// See [`LedgerEngine::list_transactions`]
    pub async fn list_transactions(&self) -> Result<TransactionListing, LedgerError> {
        let engine = self.engine.lock().await;
        engine.list_transactions()
    }

    /// Stream-parse a CSV file, then persist it
    ///
    /// Parsing runs without the lock and reads `batch_size` rows at a time.
    /// Nothing is written if parsing fails.
    pub async fn import_transactions(
        &self,
        path: &Path,
        batch_size: usize,
    ) -> Result<Vec<Transaction>, LedgerError> {
        let batch = read_csv_async(path, batch_size).await?;
        tracing::info!(
            path = %path.display(),
            rows = batch.len(),
            "parsed import file"
        );

        let mut engine = self.engine.lock().await;
        engine.import_batch(batch)
    }
}
