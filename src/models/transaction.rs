use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::errors::RecordError;
use crate::models::TransactionType;
use crate::types::{CurrencyCode, TransactionId};
use crate::validation::{FieldValue, ValidatedRow};

/// A fully validated transaction that has not been written to the store yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub created_at: NaiveDate,
    pub transaction_type: TransactionType,
    pub country: String,
    pub currency: CurrencyCode,
    pub net: Decimal,
    pub vat: Decimal
}

impl NewTransaction {
    /// Flips the sign of both amounts, leaving zero untouched so it never renders as `-0`.
    pub fn invert_amounts(&mut self) {
        self.net = negate(self.net);
        self.vat = negate(self.vat);
    }
}

fn negate(amount: Decimal) -> Decimal {
    if amount.is_zero() { Decimal::ZERO } else { -amount }
}

impl TryFrom<ValidatedRow> for NewTransaction {
    type Error = RecordError;

    fn try_from(row: ValidatedRow) -> Result<Self, Self::Error> {
        match row.values.as_slice() {
            [
                FieldValue::Date(created_at),
                FieldValue::TransactionType(transaction_type),
                FieldValue::Country(country),
                FieldValue::Currency(currency),
                FieldValue::Money(net),
                FieldValue::Money(vat)
            ] => Ok(NewTransaction {
                created_at: *created_at,
                transaction_type: *transaction_type,
                country: country.clone(),
                currency: currency.clone(),
                net: *net,
                vat: *vat
            }),
            values => Err(RecordError::UnexpectedShape {
                row_index: row.row_index,
                expected: "date, transaction_type, country, currency, money, money",
                found: values.iter().map(FieldValue::kind_name).collect::<Vec<_>>().join(", ")
            })
        }
    }
}

/// A transaction as held by the store.
///
/// `net_euro` and `vat_euro` start out empty and are filled together by the currency
/// conversion sweep once a rate is available.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub created_at: NaiveDateTime,
    pub country: String,
    pub currency: CurrencyCode,
    pub transaction_type: TransactionType,
    pub net: Decimal,
    pub vat: Decimal,
    pub net_euro: Option<Decimal>,
    pub vat_euro: Option<Decimal>
}

impl Transaction {
    pub fn new(id: TransactionId, transaction: NewTransaction) -> Self {
        Self {
            id,
            created_at: transaction.created_at.and_time(NaiveTime::MIN),
            country: transaction.country,
            currency: transaction.currency,
            transaction_type: transaction.transaction_type,
            net: transaction.net,
            vat: transaction.vat,
            net_euro: None,
            vat_euro: None
        }
    }

    pub fn is_converted(&self) -> bool {
        self.net_euro.is_some() && self.vat_euro.is_some()
    }
}
