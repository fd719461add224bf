use super::{TransactionStorage, TransactionStore};
use crate::models::{NewTransaction, TransactionType};
use crate::types::CurrencyCode;
use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

fn create_new_transaction(date: (i32, u32, u32), currency: &str, net: &str) -> Result<NewTransaction> {
    Ok(NewTransaction {
        created_at: NaiveDate::from_ymd_opt(date.0, date.1, date.2).ok_or_else(|| anyhow!("invalid date"))?,
        transaction_type: TransactionType::Sale,
        country: "Somewhere".to_string(),
        currency: CurrencyCode::from_str(currency)?,
        net: Decimal::from_str(net)?,
        vat: Decimal::ZERO
    })
}

fn day_start(year: i32, month: u32, day: u32) -> Result<chrono::NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| anyhow!("invalid date"))
}

#[test]
fn test_storage_create_assigns_ids_and_leaves_euro_amounts_empty() -> Result<()> {
    let storage = TransactionStorage::new();

    assert!(storage.all().is_empty());

    let first = storage.create(create_new_transaction((2024, 1, 15), "USD", "10.00")?);
    let second = storage.create(create_new_transaction((2024, 1, 15), "EUR", "20.00")?);

    assert_eq!(storage.all().len(), 2);
    assert!(second.id > first.id);
    assert_eq!(first.created_at, day_start(2024, 1, 15)?);
    assert!(first.net_euro.is_none());
    assert!(first.vat_euro.is_none());
    assert!(!first.is_converted());

    Ok(())
}

#[test]
fn test_storage_update_replaces_record_and_removes_it_from_unconverted() -> Result<()> {
    let storage = TransactionStorage::new();
    let mut first = storage.create(create_new_transaction((2024, 1, 15), "USD", "10.00")?);
    let second = storage.create(create_new_transaction((2024, 1, 16), "USD", "30.00")?);

    first.net_euro = Some(Decimal::from_str("9.00")?);
    first.vat_euro = Some(Decimal::ZERO);
    storage.update(first.clone());

    let unconverted = storage.unconverted();

    assert_eq!(unconverted.len(), 1);
    assert_eq!(unconverted[0].id, second.id);
    assert_eq!(storage.all()[0], first);

    Ok(())
}

#[test]
fn test_storage_update_ignores_unknown_ids() -> Result<()> {
    let storage = TransactionStorage::new();
    let mut record = storage.create(create_new_transaction((2024, 1, 15), "USD", "10.00")?);

    record.id = 999;
    storage.update(record);

    assert_eq!(storage.all().len(), 1);
    assert!(storage.all().iter().all(|transaction| transaction.id != 999));

    Ok(())
}

#[test]
fn test_storage_filters_by_currency_prefix_and_half_open_day() -> Result<()> {
    let storage = TransactionStorage::new();
    let matching = storage.create(create_new_transaction((2024, 1, 15), "USD", "1")?);
    storage.create(create_new_transaction((2024, 1, 14), "USD", "2")?);
    storage.create(create_new_transaction((2024, 1, 16), "USD", "3")?);
    storage.create(create_new_transaction((2024, 1, 15), "GBP", "4")?);
    let also_matching = storage.create(create_new_transaction((2024, 1, 15), "USD", "5")?);

    let found = storage.by_currency_prefix_and_date("us", day_start(2024, 1, 15)?, day_start(2024, 1, 16)?);
    let ids: Vec<u64> = found.iter().map(|transaction| transaction.id).collect();

    assert_eq!(ids, vec![matching.id, also_matching.id]);

    Ok(())
}
