use thiserror::Error;

/// Why a single raw cell was rejected. The Display text is what callers see as the reason.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("date value (\"{0}\") is not an acceptable date - must be in the format: YYYY/MM/DD")]
    InvalidDate(String),
    #[error("transaction type (\"{0}\") is not an acceptable value - must be either \"Sale\" or \"Purchase\"")]
    InvalidTransactionType(String),
    #[error("currency (\"{0}\") is not an acceptable value - must be recognised by the European Central Bank")]
    UnrecognisedCurrency(String),
    #[error("transaction amount (\"{0}\") is not an acceptable value - must be valid numeric value")]
    InvalidAmount(String),
    #[error("row has {found} field(s) - must have exactly {expected}")]
    FieldCount {
        expected: usize,
        found: usize
    }
}
