//! Balance summary type
//!
//! The balance is derived from the full transaction set on every read and is
//! never persisted.

use super::transaction::Transaction;
use rust_decimal::Decimal;

/// Income, outcome and net total over all transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Balance {
    /// Sum of all income transaction values
    pub income: Decimal,

    /// Sum of all outcome transaction values
    pub outcome: Decimal,

    /// `income - outcome`; negative when imports have overdrawn the ledger
    pub total: Decimal,
}

impl Balance {
    /// Build a balance from its two sums
    ///
    /// Returns `None` if the difference overflows.
    pub fn from_sums(income: Decimal, outcome: Decimal) -> Option<Self> {
        let total = income.checked_sub(outcome)?;
        Some(Balance {
            income,
            outcome,
            total,
        })
    }
}

/// All transactions together with the balance they produce
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionListing {
    pub transactions: Vec<Transaction>,
    pub balance: Balance,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::zero(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO)]
    #[case::positive(Decimal::new(5000, 0), Decimal::new(1200, 0), Decimal::new(3800, 0))]
    #[case::negative(Decimal::new(100, 0), Decimal::new(25050, 2), Decimal::new(-15050, 2))]
    fn test_from_sums(#[case] income: Decimal, #[case] outcome: Decimal, #[case] total: Decimal) {
        let balance = Balance::from_sums(income, outcome).unwrap();
        assert_eq!(balance.income, income);
        assert_eq!(balance.outcome, outcome);
        assert_eq!(balance.total, total);
    }

    #[test]
    fn test_from_sums_overflow() {
        assert!(Balance::from_sums(Decimal::MIN, Decimal::MAX).is_none());
    }

    #[test]
    fn test_default_is_zero() {
        let balance = Balance::default();
        assert_eq!(balance.total, Decimal::ZERO);
    }
}
