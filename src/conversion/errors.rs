use crate::types::{CurrencyCode, TransactionId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    #[error("No exchange rate for currency [{currency}] of transaction [{transaction_id}]; it was validated against a snapshot that no longer lists it")]
    MissingRate {
        transaction_id: TransactionId,
        currency: CurrencyCode
    },
    #[error("Exchange rate for currency [{currency}] of transaction [{transaction_id}] is zero")]
    ZeroRate {
        transaction_id: TransactionId,
        currency: CurrencyCode
    },
    #[error("Numeric overflow converting transaction [{transaction_id}] from [{currency}]")]
    Overflow {
        transaction_id: TransactionId,
        currency: CurrencyCode
    }
}

