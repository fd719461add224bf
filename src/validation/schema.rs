use crate::rates::ExchangeRateSnapshot;
use crate::validation::errors::FieldError;
use crate::validation::{validators, FieldValue};

/// How to interpret one column of an import file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Date,
    TransactionType,
    Country,
    Currency,
    Money
}

/// Column layout of the VAT transaction import file.
pub const VAT_IMPORT_SCHEMA: [FieldKind; 6] = [
    FieldKind::Date,
    FieldKind::TransactionType,
    FieldKind::Country,
    FieldKind::Currency,
    FieldKind::Money,
    FieldKind::Money
];

impl FieldKind {
    /// Parses and normalizes one raw cell of this kind.
    pub fn validate(&self, raw: &str, rates: &ExchangeRateSnapshot) -> Result<FieldValue, FieldError> {
        match self {
            FieldKind::Date => validators::date(raw).map(FieldValue::Date),
            FieldKind::TransactionType => validators::transaction_type(raw).map(FieldValue::TransactionType),
            FieldKind::Country => Ok(FieldValue::Country(validators::country(raw))),
            FieldKind::Currency => validators::currency(raw, rates).map(FieldValue::Currency),
            FieldKind::Money => validators::money(raw).map(FieldValue::Money)
        }
    }
}
