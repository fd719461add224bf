mod currency;
mod errors;

pub use currency::CurrencyCode;
pub use errors::CurrencyCodeError;

/// 0-based position of a data row within an import batch, counted after any header skip.
pub type RowIndex = usize;
pub type TransactionId = u64;
