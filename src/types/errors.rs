use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CurrencyCodeError {
    #[error("Currency code error: \"{0}\" must be exactly three ASCII letters")]
    InvalidFormat(String)
}
