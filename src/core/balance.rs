//! Balance calculation
//!
//! The balance is recomputed from the full transaction set on every call:
//! income and outcome values are summed separately and the total is their
//! difference. Nothing is cached, so the cost is linear in the number of
//! transactions.

use crate::core::traits::TransactionRepository;
use crate::types::{Balance, LedgerError, Transaction, TransactionType};
use rust_decimal::Decimal;

/// Compute the current balance from the store
///
/// # Errors
///
/// Propagates store failures and returns
/// [`LedgerError::ArithmeticOverflow`] if a sum does not fit in a `Decimal`.
pub fn get_balance<R>(repository: &R) -> Result<Balance, LedgerError>
where
    R: TransactionRepository + ?Sized,
{
    let incomes = repository.find_transactions_by_type(TransactionType::Income)?;
    let outcomes = repository.find_transactions_by_type(TransactionType::Outcome)?;

    let income = sum_values(&incomes, "income sum")?;
    let outcome = sum_values(&outcomes, "outcome sum")?;

    Balance::from_sums(income, outcome).ok_or_else(|| LedgerError::arithmetic_overflow("total"))
}

/// Sum transaction values with checked arithmetic
fn sum_values(transactions: &[Transaction], operation: &str) -> Result<Decimal, LedgerError> {
    transactions
        .iter()
        .try_fold(Decimal::ZERO, |acc, tx| acc.checked_add(tx.value))
        .ok_or_else(|| LedgerError::arithmetic_overflow(operation))
}
