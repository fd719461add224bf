mod currency_converter;
mod errors;

pub use currency_converter::{ConversionReport, CurrencyConverter};
pub use errors::ConversionError;
