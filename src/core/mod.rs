//! Core business logic module
//!
//! This module contains the ledger's core components:
//! - `traits` - Persistence gateway abstractions
//! - `transaction_store` / `category_store` / `memory_store` - In-memory gateway
//! - `balance` - Balance calculation
//! - `category_resolver` - Find-or-create for categories
//! - `engine` - Service-level operations (create, delete, import, balance)
//! - `async` - Task-safe shared ledger

pub mod r#async;
pub mod balance;
pub mod category_resolver;
pub mod category_store;
pub mod engine;
pub mod memory_store;
pub mod traits;
pub mod transaction_store;

pub use category_store::CategoryStore;
pub use engine::LedgerEngine;
pub use memory_store::MemoryStore;
pub use r#async::SharedLedger;
pub use traits::{CategoryRepository, LedgerStore, TransactionRepository};
pub use transaction_store::TransactionStore;
