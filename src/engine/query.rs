use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;

use crate::engine::errors::QueryError;
use crate::rates::ExchangeRateSnapshot;
use crate::validation::validators::DATE_FORMAT;

#[derive(Debug, Clone, Deserialize)]
pub struct QueryRequest {
    pub country_code: String,
    pub query_date: String
}

/// A validated lookup of one country's transactions on one day.
///
/// Countries are matched through the first two letters of the currency code ("US" finds "USD").
/// Currencies sharing a prefix will collide; that is accepted behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionQuery {
    pub country_code: String,
    pub date: NaiveDate
}

impl TransactionQuery {
    /// Checks the request against the current snapshot, reporting every problem at once.
    ///
    /// # Errors
    /// Returns `QueryError::InvalidRequest` if the country code is not the prefix of any published
    /// currency, or the date is not `YYYY/MM/DD`.
    pub fn parse(request: &QueryRequest, rates: &ExchangeRateSnapshot) -> Result<Self, QueryError> {
        let country_code = request.country_code.trim().to_uppercase();
        let mut errors = Vec::new();

        if !rates.country_codes().contains(&country_code) {
            errors.push(format!("Country code \"{country_code}\" is not supported"));
        }

        let date = NaiveDate::parse_from_str(request.query_date.trim(), DATE_FORMAT);

        if date.is_err() {
            errors.push(format!("Query date \"{}\" is not in a supported format (YYYY/MM/DD)", request.query_date));
        }

        match date {
            Ok(date) if errors.is_empty() => Ok(Self { country_code, date }),
            _ => Err(QueryError::InvalidRequest(errors))
        }
    }

    /// The half-open `[start, end)` range covering the query date.
    pub fn day_range(&self) -> (NaiveDateTime, NaiveDateTime) {
        let start = self.date.and_time(NaiveTime::MIN);
        let end = start.checked_add_days(Days::new(1)).unwrap_or(NaiveDateTime::MAX);

        (start, end)
    }
}
