use super::{NewTransaction, RecordError, Transaction, TransactionType};

use std::str::FromStr;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::types::CurrencyCode;
use crate::validation::{FieldValue, ValidatedRow};

fn create_validated_row(transaction_type: TransactionType, net: &str, vat: &str) -> Result<ValidatedRow> {
    Ok(ValidatedRow {
        row_index: 3,
        values: vec![
            FieldValue::Date(NaiveDate::from_ymd_opt(2024, 1, 15).ok_or_else(|| anyhow!("invalid date"))?),
            FieldValue::TransactionType(transaction_type),
            FieldValue::Country("Germany".to_string()),
            FieldValue::Currency(CurrencyCode::from_str("USD")?),
            FieldValue::Money(Decimal::from_str(net)?),
            FieldValue::Money(Decimal::from_str(vat)?),
        ]
    })
}

#[test]
fn test_validated_row_converts_into_new_transaction() -> Result<()> {
    let transaction = NewTransaction::try_from(create_validated_row(TransactionType::Purchase, "50.00", "10.00")?)?;

    assert_eq!(transaction.created_at, NaiveDate::from_ymd_opt(2024, 1, 15).ok_or_else(|| anyhow!("invalid date"))?);
    assert_eq!(transaction.transaction_type, TransactionType::Purchase);
    assert_eq!(transaction.country, "Germany");
    assert_eq!(transaction.currency.as_str(), "USD");
    assert_eq!(transaction.net, Decimal::from_str("50.00")?);
    assert_eq!(transaction.vat, Decimal::from_str("10.00")?);

    Ok(())
}

#[test]
fn test_validated_row_with_other_layout_is_rejected() -> Result<()> {
    let mut row = create_validated_row(TransactionType::Sale, "1", "1")?;
    row.values.swap(0, 2);
    row.values.pop();

    let result = NewTransaction::try_from(row);

    match result {
        Err(RecordError::UnexpectedShape { row_index, found, .. }) => {
            assert_eq!(row_index, 3);
            assert_eq!(found, "country, transaction_type, date, currency, money");
        },
        other => return Err(anyhow!("unexpected result: {other:?}"))
    }

    Ok(())
}

#[test]
fn test_invert_amounts_flips_sign_and_keeps_zero_positive() -> Result<()> {
    let mut transaction = NewTransaction::try_from(create_validated_row(TransactionType::Purchase, "50.00", "0.00")?)?;

    transaction.invert_amounts();

    assert_eq!(transaction.net, Decimal::from_str("-50.00")?);
    assert!(transaction.vat.is_zero());
    assert!(!transaction.vat.is_sign_negative());

    transaction.invert_amounts();

    assert_eq!(transaction.net, Decimal::from_str("50.00")?);

    Ok(())
}

#[test]
fn test_persisted_transaction_starts_unconverted_at_midnight() -> Result<()> {
    let new_transaction = NewTransaction::try_from(create_validated_row(TransactionType::Sale, "5", "1")?)?;
    let transaction = Transaction::new(7, new_transaction);

    assert_eq!(transaction.id, 7);
    assert_eq!(transaction.created_at.to_string(), "2024-01-15 00:00:00");
    assert!(!transaction.is_converted());

    Ok(())
}

#[test]
fn test_transaction_type_serializes_lowercase() -> Result<()> {
    assert_eq!(serde_json::to_string(&TransactionType::Purchase)?, "\"purchase\"");
    assert_eq!(TransactionType::Sale.to_string(), "sale");

    Ok(())
}
