mod batch;
mod errors;
mod schema;
pub mod validators;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::TransactionType;
use crate::types::{CurrencyCode, RowIndex};

pub use batch::BatchValidator;
pub use errors::FieldError;
pub use schema::{FieldKind, VAT_IMPORT_SCHEMA};

/// A normalized cell value produced by a field validator.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Date(NaiveDate),
    TransactionType(TransactionType),
    Country(String),
    Currency(CurrencyCode),
    Money(Decimal)
}

impl FieldValue {
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldValue::Date(_) => "date",
            FieldValue::TransactionType(_) => "transaction_type",
            FieldValue::Country(_) => "country",
            FieldValue::Currency(_) => "currency",
            FieldValue::Money(_) => "money"
        }
    }
}

/// A row whose every cell passed its validator, in schema order.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRow {
    pub row_index: RowIndex,
    pub values: Vec<FieldValue>
}

/// One failing cell (or a malformed row), reported back to the caller as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub row_index: RowIndex,
    pub raw_value: String,
    pub reason: String
}

impl ValidationError {
    pub fn new(row_index: RowIndex, raw_value: impl Into<String>, reason: impl ToString) -> Self {
        Self {
            row_index,
            raw_value: raw_value.into(),
            reason: reason.to_string()
        }
    }
}

/// Aggregate outcome of validating a whole batch.
///
/// Every input row is either in `rows` or the source of at least one entry in `errors`.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub all_valid: bool,
    pub errors: Vec<ValidationError>,
    pub rows: Vec<ValidatedRow>
}
