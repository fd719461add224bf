//! Loader for the European Central Bank SDMX `jsondata` payload, as returned by
//! `EXR/D..EUR.SP00.A?lastNObservations=1&format=jsondata`.
//!
//! Currency codes and names live in the `UNIT` series attribute. The rate of the i-th unit is
//! found in data set series `0:{i}:0:0:0`, whose observations map an index to a value array.

use crate::rates::errors::RateError;
use crate::rates::{ExchangeRate, ExchangeRateSnapshot};
use crate::types::CurrencyCode;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::io::Read;
use std::str::FromStr;
use tracing::debug;

const UNIT_ATTRIBUTE: &str = "UNIT";

#[derive(Debug, Deserialize)]
struct EcbResponse {
    #[serde(rename = "dataSets")]
    data_sets: Vec<EcbDataSet>,
    structure: EcbStructure
}

#[derive(Debug, Deserialize)]
struct EcbDataSet {
    series: HashMap<String, EcbSeries>
}

#[derive(Debug, Deserialize)]
struct EcbSeries {
    #[serde(default)]
    observations: HashMap<String, Vec<Value>>
}

#[derive(Debug, Deserialize)]
struct EcbStructure {
    attributes: EcbAttributes
}

#[derive(Debug, Deserialize)]
struct EcbAttributes {
    #[serde(default)]
    series: Vec<EcbAttribute>
}

#[derive(Debug, Deserialize)]
struct EcbAttribute {
    id: String,
    #[serde(default)]
    values: Vec<EcbAttributeValue>
}

#[derive(Debug, Deserialize)]
struct EcbAttributeValue {
    id: Option<String>,
    #[serde(default)]
    name: String
}

/// Parses an ECB exchange rate response into a snapshot.
///
/// # Errors
/// Returns `RateError` if the payload is not valid JSON, lacks the `UNIT` attribute or a data
/// set, or a currency has no usable latest observation.
pub fn from_reader<R: Read>(reader: R) -> Result<ExchangeRateSnapshot, RateError> {
    let response: EcbResponse = serde_json::from_reader(reader)?;
    from_response(response)
}

fn from_response(response: EcbResponse) -> Result<ExchangeRateSnapshot, RateError> {
    let units = response.structure.attributes.series.into_iter()
        .find(|attribute| attribute.id == UNIT_ATTRIBUTE)
        .ok_or(RateError::MissingUnitAttribute)?;

    let data_set = response.data_sets.into_iter().next()
        .ok_or(RateError::MissingDataSet)?;

    let mut rates = HashMap::with_capacity(units.values.len());

    for (index, unit) in units.values.into_iter().enumerate() {
        let Some(raw_code) = unit.id else {
            continue;
        };

        let key = format!("0:{index}:0:0:0");
        let series = data_set.series.get(&key).ok_or_else(|| RateError::MissingSeries {
            currency: raw_code.clone(),
            key: key.clone()
        })?;

        let value = latest_observation(series, &raw_code)?;
        let code = CurrencyCode::from_str(&raw_code)?;

        debug!("Loaded ECB rate [{code}] = [{value}]");

        rates.insert(code, ExchangeRate { name: unit.name, value });
    }

    Ok(ExchangeRateSnapshot::new(rates))
}

fn latest_observation(series: &EcbSeries, currency: &str) -> Result<Decimal, RateError> {
    let (_, observation) = series.observations.iter()
        .filter_map(|(index, values)| index.parse::<u64>().ok().map(|index| (index, values)))
        .max_by_key(|(index, _)| *index)
        .ok_or_else(|| RateError::MissingObservation { currency: currency.to_string() })?;

    let raw_value = observation.first()
        .ok_or_else(|| RateError::MissingObservation { currency: currency.to_string() })?;

    let invalid_rate = || RateError::InvalidRate {
        currency: currency.to_string(),
        value: raw_value.to_string()
    };

    //NOTE: Going through the textual form keeps 1.1 as exactly 1.1 instead of its binary approximation
    let value = match raw_value {
        Value::Number(number) => {
            let text = number.to_string();
            Decimal::from_str(&text).or_else(|_| Decimal::from_scientific(&text)).map_err(|_| invalid_rate())?
        },
        Value::String(text) => Decimal::from_str(text.trim()).map_err(|_| invalid_rate())?,
        _ => return Err(invalid_rate())
    };

    if value <= Decimal::ZERO {
        return Err(invalid_rate());
    }

    Ok(value)
}
