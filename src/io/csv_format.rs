//! CSV format handling for import rows and report output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord, the raw positional cells of one import line
//! - Conversion from CSV records to import rows
//! - Balance and transaction report serialization
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::types::{Balance, ImportRow, LedgerError, Transaction, TransactionId, TransactionType};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::io::Write;
use std::str::FromStr;

/// Decimal places a monetary amount may carry
pub const MAX_SCALE: u32 = 2;

/// Raw cells of one import line
///
/// Columns are positional: `title, type, value, category`. The header line
/// is never turned into a record. Each cell is trimmed; empty or absent cells
/// are `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CsvRecord {
    pub title: Option<String>,
    pub tx_type: Option<String>,
    pub value: Option<String>,
    pub category: Option<String>,
}

impl CsvRecord {
    /// Build a record from the cells of a line, in column order
    ///
    /// Cells past the fourth are ignored.
    pub fn from_fields<'a>(fields: impl IntoIterator<Item = &'a str>) -> Self {
        let mut cells = fields.into_iter().map(|cell| {
            let cell = cell.trim();
            (!cell.is_empty()).then(|| cell.to_string())
        });

        CsvRecord {
            title: cells.next().flatten(),
            tx_type: cells.next().flatten(),
            value: cells.next().flatten(),
            category: cells.next().flatten(),
        }
    }
}

/// Why a record did not become an import row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowRejection {
    /// Title, type or value is missing; skipped silently
    Incomplete,

    /// All required cells are present but one of them cannot be used
    Invalid(String),
}

/// Convert a CsvRecord to an ImportRow
///
/// This function:
/// - Rejects records without a title, type or value as incomplete
/// - Parses the type into a TransactionType (exactly `income` or `outcome`)
/// - Parses the value into a non-negative Decimal with at most two decimal
///   places
/// - Uses the empty title for a missing category
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<ImportRow, RowRejection> {
    let (Some(title), Some(tx_type), Some(value)) =
        (csv_record.title, csv_record.tx_type, csv_record.value)
    else {
        return Err(RowRejection::Incomplete);
    };

    let tx_type = TransactionType::from_str(&tx_type).map_err(RowRejection::Invalid)?;

    let value = match Decimal::from_str(&value) {
        Ok(decimal) if decimal < Decimal::ZERO => {
            return Err(RowRejection::Invalid(format!(
                "Negative value '{}' for '{}'",
                value, title
            )))
        }
        Ok(decimal) if decimal.normalize().scale() > MAX_SCALE => {
            return Err(RowRejection::Invalid(format!(
                "Value '{}' for '{}' has more than {} decimal places",
                value, title, MAX_SCALE
            )))
        }
        Ok(decimal) => decimal,
        Err(_) => {
            return Err(RowRejection::Invalid(format!(
                "Invalid value '{}' for '{}'",
                value, title
            )))
        }
    };

    Ok(ImportRow {
        title,
        tx_type,
        value,
        category: csv_record.category.unwrap_or_default(),
    })
}

/// Format a monetary amount with two decimal places, rounding half away
/// from zero
fn money(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(MAX_SCALE, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

fn write_error(error: csv::Error) -> LedgerError {
    LedgerError::IoError {
        message: format!("Failed to write report: {}", error),
    }
}

#[derive(Serialize)]
struct BalanceRow {
    income: String,
    outcome: String,
    total: String,
}

#[derive(Serialize)]
struct TransactionRow<'a> {
    id: TransactionId,
    title: &'a str,
    #[serde(rename = "type")]
    tx_type: TransactionType,
    value: String,
    category: &'a str,
}

/// Write the balance as a one-row CSV report
///
/// Columns: income, outcome, total
pub fn write_balance_csv(balance: &Balance, output: &mut dyn Write) -> Result<(), LedgerError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(output);

    writer
        .write_record(["income", "outcome", "total"])
        .map_err(write_error)?;
    writer
        .serialize(BalanceRow {
            income: money(balance.income),
            outcome: money(balance.outcome),
            total: money(balance.total),
        })
        .map_err(write_error)?;

    writer.flush()?;
    Ok(())
}

/// Write transactions as a CSV report, in the order given
///
/// Columns: id, title, type, value, category. The header is written even
/// when there are no transactions.
pub fn write_transactions_csv(
    transactions: &[Transaction],
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(output);

    writer
        .write_record(["id", "title", "type", "value", "category"])
        .map_err(write_error)?;

    for transaction in transactions {
        writer
            .serialize(TransactionRow {
                id: transaction.id,
                title: &transaction.title,
                tx_type: transaction.tx_type,
                value: money(transaction.value),
                category: &transaction.category.title,
            })
            .map_err(write_error)?;
    }

    writer.flush()?;
    Ok(())
}
