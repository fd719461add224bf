//! One validator per field kind. Each returns the normalized value or the reason it was rejected.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::TransactionType;
use crate::rates::ExchangeRateSnapshot;
use crate::types::CurrencyCode;
use crate::validation::errors::FieldError;

pub const DATE_FORMAT: &str = "%Y/%m/%d";

/// Surrounding whitespace is not part of the format, so `" 2024/01/15"` is rejected.
pub fn date(raw: &str) -> Result<NaiveDate, FieldError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| FieldError::InvalidDate(raw.to_string()))
}

/// Accepts "sale" or "purchase" regardless of casing or surrounding whitespace.
pub fn transaction_type(raw: &str) -> Result<TransactionType, FieldError> {
    match raw.trim().to_lowercase().as_str() {
        "sale" => Ok(TransactionType::Sale),
        "purchase" => Ok(TransactionType::Purchase),
        _ => Err(FieldError::InvalidTransactionType(raw.to_string()))
    }
}

/// Countries are kept for record keeping only, so anything goes once trimmed.
pub fn country(raw: &str) -> String {
    raw.trim().to_string()
}

/// The Euro is accepted explicitly since the rate source never lists it.
pub fn currency(raw: &str, rates: &ExchangeRateSnapshot) -> Result<CurrencyCode, FieldError> {
    let normalized = raw.trim().to_uppercase();

    if normalized == CurrencyCode::EURO {
        return Ok(CurrencyCode::euro());
    }

    if !rates.is_recognised(&normalized) {
        return Err(FieldError::UnrecognisedCurrency(normalized));
    }

    CurrencyCode::from_str(&normalized).map_err(|_| FieldError::UnrecognisedCurrency(normalized))
}

/// Amounts that cannot be held without rounding are rejected.
pub fn money(raw: &str) -> Result<Decimal, FieldError> {
    let value = raw.trim();

    Decimal::from_str_exact(value)
        .ok()
        .or_else(|| scientific(value))
        .ok_or_else(|| FieldError::InvalidAmount(raw.to_string()))
}

/// `1.5e2` style amounts, shifted by rescaling the exact mantissa.
fn scientific(value: &str) -> Option<Decimal> {
    let (mantissa, exponent) = value.split_once(['e', 'E'])?;
    let mut amount = Decimal::from_str_exact(mantissa).ok()?;
    let exponent: i64 = exponent.parse().ok()?;
    let scale = i64::from(amount.scale()) - exponent;

    if scale >= 0 {
        amount.set_scale(u32::try_from(scale).ok()?).ok()?;
        return Some(amount);
    }

    amount.set_scale(0).ok()?;
    (0..-scale).try_fold(amount, |amount, _| amount.checked_mul(Decimal::TEN))
}
