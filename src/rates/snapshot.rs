use crate::rates::errors::RateError;
use crate::types::CurrencyCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::io::Read;
use std::str::FromStr;

/// A single currency's rate against the Euro, as published by the rate source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Human readable currency name, e.g. "US dollar".
    pub name: String,
    /// Units of this currency per one Euro.
    pub value: Decimal
}

/// Immutable point-in-time mapping of currency code to its Euro exchange rate.
///
/// The Euro itself is never a key; every lookup treats it as the identity rate instead.
/// A snapshot is built once and shared read-only for as long as the process runs.
#[derive(Debug, Clone, Default)]
pub struct ExchangeRateSnapshot {
    rates: HashMap<CurrencyCode, ExchangeRate>
}

impl ExchangeRateSnapshot {
    pub fn new(rates: HashMap<CurrencyCode, ExchangeRate>) -> Self {
        Self { rates }
    }

    /// Reads a `{ "USD": { "name": "US dollar", "value": 1.10 } }` style mapping.
    ///
    /// # Errors
    /// Returns `RateError` if the JSON is malformed, a key is not a currency code, or a rate
    /// is zero or negative.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, RateError> {
        let raw: HashMap<String, ExchangeRate> = serde_json::from_reader(reader)?;
        let mut rates = HashMap::with_capacity(raw.len());

        for (code, rate) in raw {
            let code = CurrencyCode::from_str(&code)?;

            if rate.value <= Decimal::ZERO {
                return Err(RateError::InvalidRate {
                    currency: code.to_string(),
                    value: rate.value.to_string()
                });
            }

            rates.insert(code, rate);
        }

        Ok(Self::new(rates))
    }

    pub fn get(&self, code: &CurrencyCode) -> Option<&ExchangeRate> {
        self.rates.get(code)
    }

    /// Rate used to convert an amount in `code` into Euros. The Euro is always `1`.
    pub fn rate_for(&self, code: &CurrencyCode) -> Option<Decimal> {
        if code.is_euro() {
            return Some(Decimal::ONE);
        }

        self.get(code).map(|rate| rate.value)
    }

    /// Whether an already normalized (trimmed, upper-case) code can be imported.
    pub fn is_recognised(&self, code: &str) -> bool {
        if code == CurrencyCode::EURO {
            return true;
        }

        CurrencyCode::from_str(code)
            .map(|code| self.rates.contains_key(&code))
            .unwrap_or(false)
    }

    /// The distinct two-letter prefixes of every published currency code.
    ///
    /// The Euro is not published, so "EU" only appears if another code happens to share it.
    pub fn country_codes(&self) -> BTreeSet<String> {
        self.rates.keys().map(|code| code.country_prefix().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
