use crate::types::errors::CurrencyCodeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const CODE_LENGTH: usize = 3;

/// An upper-case, three-letter ISO 4217 style currency code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub const EURO: &'static str = "EUR";

    pub fn euro() -> Self {
        CurrencyCode(Self::EURO.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_euro(&self) -> bool {
        self.0 == Self::EURO
    }

    /// The first two letters of the code, which by convention match the issuing country.
    pub fn country_prefix(&self) -> &str {
        &self.0[..2]
    }
}

impl FromStr for CurrencyCode {
    type Err = CurrencyCodeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_uppercase();

        if normalized.len() != CODE_LENGTH || !normalized.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CurrencyCodeError::InvalidFormat(value.to_string()));
        }

        Ok(CurrencyCode(normalized))
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = CurrencyCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CurrencyCode::from_str(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl Display for CurrencyCode {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}
