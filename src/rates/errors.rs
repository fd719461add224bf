use crate::types::CurrencyCodeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RateError {
    #[error("Exchange rate error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Exchange rate error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Exchange rate error: {0}")]
    CurrencyCode(#[from] CurrencyCodeError),
    #[error("Exchange rate error: the response has no data set")]
    MissingDataSet,
    #[error("Exchange rate error: the response has no UNIT series attribute")]
    MissingUnitAttribute,
    #[error("Exchange rate error: series [{key}] for currency [{currency}] was not found")]
    MissingSeries {
        currency: String,
        key: String
    },
    #[error("Exchange rate error: no observation was found for currency [{currency}]")]
    MissingObservation {
        currency: String
    },
    #[error("Exchange rate error: rate [{value}] for currency [{currency}] is not a positive decimal")]
    InvalidRate {
        currency: String,
        value: String
    }
}
