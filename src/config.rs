use clap::Parser;
use tracing::level_filters::LevelFilter;

use crate::engine::QueryRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatesFormat {
    /// `{ "USD": { "name": "US dollar", "value": 1.10 } }`
    Snapshot,
    Ecb
}

/// Imports a VAT transaction CSV and prints the JSON import report to stdout.
#[derive(Parser, Debug, Clone)]
#[command(name = "vat-transaction-importer", version)]
pub struct Config {
    /// Exchange rate snapshot (JSON)
    pub rates_path: String,

    /// Transaction rows (CSV)
    pub transactions_path: String,

    /// Read the rates file as an ECB SDMX jsondata response
    #[arg(long)]
    pub ecb_rates: bool,

    /// Skip the first row of the CSV (header)
    #[arg(long)]
    pub ignore_first_row: bool,

    /// Import every valid row even when some rows are invalid
    #[arg(long)]
    pub ignore_errors: bool,

    /// After importing, list transactions for this country code
    #[arg(long, value_name = "CC", requires = "query_date")]
    pub query_country: Option<String>,

    /// Day to list transactions for
    #[arg(long, value_name = "YYYY/MM/DD", requires = "query_country")]
    pub query_date: Option<String>,

    /// error, warn, info, debug or trace
    #[arg(long, default_value = "error", value_parser = parse_log_level)]
    pub log_level: LevelFilter
}

impl Config {
    pub fn rates_format(&self) -> RatesFormat {
        if self.ecb_rates { RatesFormat::Ecb } else { RatesFormat::Snapshot }
    }

    pub fn query(&self) -> Option<QueryRequest> {
        match (&self.query_country, &self.query_date) {
            (Some(country_code), Some(query_date)) => Some(QueryRequest {
                country_code: country_code.clone(),
                query_date: query_date.clone()
            }),
            _ => None
        }
    }
}

fn parse_log_level(level: &str) -> Result<LevelFilter, String> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(LevelFilter::TRACE),
        "debug" => Ok(LevelFilter::DEBUG),
        "info" => Ok(LevelFilter::INFO),
        "warn" => Ok(LevelFilter::WARN),
        "error" => Ok(LevelFilter::ERROR),
        _ => Err(format!("invalid log level '{level}'"))
    }
}
