//! Asynchronous access to the ledger
//!
//! - **SharedLedger**: cloneable handle that serializes every operation
//!   behind a tokio mutex, closing the check-then-act race between
//!   concurrent outcome creations

pub mod shared_ledger;

pub use shared_ledger::SharedLedger;
