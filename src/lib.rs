//! Finance Ledger Library
//! # Overview
//!
//! This library keeps a personal finance ledger of income and outcome
//! transactions, each filed under a category. It computes the balance,
//! creates and deletes transactions, and bulk-imports CSV files with either a
//! synchronous or an asynchronous reading strategy.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Transaction, Category, Balance, errors)
//! - [`cli`] - CLI arguments parsing and command execution
//! - [`core`] - Business logic components:
//!   - [`core::engine`] - Ledger operations (create, delete, import, balance)
//!   - [`core::traits`] - Persistence gateway abstractions
//!   - [`core::memory_store`] - In-memory gateway
//!   - [`core::r#async`] - Task-safe shared ledger
//! - [`io`] - CSV readers and report writers
//! - [`strategy`] - Pluggable import reading strategies
//!
//! # Rules
//!
//! - **Balance**: `total = income - outcome`, summed over every transaction
//! - **Create**: an outcome larger than the current total is rejected
//! - **Delete**: removing an unknown id is a not-found error
//! - **Import**: every category title is resolved once per file, and all rows
//!   are saved together; imports do not check the balance

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use core::{LedgerEngine, MemoryStore, SharedLedger};
pub use io::{write_balance_csv, write_transactions_csv};
pub use types::{
    Balance, Category, CategoryId, CreateTransactionRequest, LedgerError, Transaction,
    TransactionId, TransactionType,
};
