pub mod ecb;
mod errors;
mod snapshot;

pub use errors::RateError;
pub use snapshot::{ExchangeRate, ExchangeRateSnapshot};
