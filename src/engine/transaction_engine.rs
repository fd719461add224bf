use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::conversion::{ConversionReport, CurrencyConverter};
use crate::engine::adjustments::apply_post_validation_rules;
use crate::engine::errors::{ImportError, QueryError};
use crate::engine::query::{QueryRequest, TransactionQuery};
use crate::models::{NewTransaction, Transaction};
use crate::rates::ExchangeRateSnapshot;
use crate::storage::TransactionStore;
use crate::validation::{BatchValidator, ValidationError, ValidationResult, VAT_IMPORT_SCHEMA};

/// A batch of raw VAT transaction rows submitted for import.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImportRequest {
    pub transaction_data: Vec<Vec<String>>,
    #[serde(default)]
    pub ignore_first_row: bool,
    #[serde(default)]
    pub ignore_errors: bool
}

/// What happened to an import request. Errors are always included, even when rows were imported.
#[derive(Debug, Clone, Serialize)]
pub struct ImportOutcome {
    /// `false` only when validation errors blocked the whole batch.
    pub success: bool,
    pub message: String,
    pub persisted_count: usize,
    /// Number of submitted rows, including a skipped header row.
    pub total_rows: usize,
    pub errors: Vec<ValidationError>
}

/// Whether a validated batch may be written to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitDecision {
    /// Persist every valid row; invalid rows (if any) are skipped.
    Commit,
    /// Write nothing, not even the rows that validated cleanly.
    Reject
}

impl CommitDecision {
    pub fn evaluate(validation: &ValidationResult, ignore_errors: bool) -> Self {
        if validation.all_valid || ignore_errors {
            CommitDecision::Commit
        } else {
            CommitDecision::Reject
        }
    }
}

/// Drives validate, adjust, persist and convert for VAT transaction imports, and answers queries
/// over the persisted transactions.
pub struct TransactionEngine<S: TransactionStore> {
    storage: Arc<S>,
    rates: Arc<ExchangeRateSnapshot>,
    converter: CurrencyConverter<S>
}

impl<S: TransactionStore> TransactionEngine<S> {
    pub fn new(storage: Arc<S>, rates: Arc<ExchangeRateSnapshot>) -> Self {
        Self {
            converter: CurrencyConverter::new(storage.clone(), rates.clone()),
            storage,
            rates
        }
    }

    /// Imports a batch of raw rows.
    ///
    /// When validation fails and `ignore_errors` is not set, nothing is written. Otherwise every
    /// valid row is adjusted and persisted, followed by a conversion sweep over all unconverted
    /// records in the store.
    ///
    /// # Errors
    /// Returns `ImportError` if a validated row does not have the VAT import layout. This is
    /// checked for the whole batch before anything is written.
    pub fn import(&self, request: &ImportRequest) -> Result<ImportOutcome, ImportError> {
        let total_rows = request.transaction_data.len();
        let rows = if request.ignore_first_row {
            request.transaction_data.get(1..).unwrap_or_default()
        } else {
            request.transaction_data.as_slice()
        };

        let validation = BatchValidator::new(&VAT_IMPORT_SCHEMA, &self.rates).validate(rows);
        //NOTE: Messages count validation errors, so a row with two bad cells counts twice
        let invalid_rows = validation.errors.len();

        if CommitDecision::evaluate(&validation, request.ignore_errors) == CommitDecision::Reject {
            warn!("Import rejected: [{invalid_rows}] of [{total_rows}] row(s) are invalid");

            return Ok(ImportOutcome {
                success: false,
                message: format!(
                    "There were {invalid_rows} / {total_rows} invalid row(s) preventing the import of the data - try setting \
                     the \"ignore_errors\" flag to True to import all valid transactions and ignore the invalid transactions"
                ),
                persisted_count: 0,
                total_rows,
                errors: validation.errors
            });
        }

        let ValidationResult { errors, rows, .. } = validation;

        let mut transactions = rows.into_iter()
            .map(NewTransaction::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        apply_post_validation_rules(&mut transactions);

        let mut persisted_count = 0;

        for transaction in transactions {
            let stored = self.storage.create(transaction);
            debug!("Transaction [{}]:[{}] persisted", stored.id, stored.transaction_type);
            persisted_count += 1;
        }

        self.convert_unconverted();

        let mut message = format!("{persisted_count} / {total_rows} row(s) were successfully imported");

        if invalid_rows > 0 {
            message.push_str(&format!(", {invalid_rows} invalid row(s) were ignored"));
        }

        info!("{message}");

        Ok(ImportOutcome {
            success: true,
            message,
            persisted_count,
            total_rows,
            errors
        })
    }

    /// Runs a conversion sweep over every record still missing its euro amounts.
    pub fn convert_unconverted(&self) -> ConversionReport {
        self.converter.convert_all()
    }

    /// Finds the transactions of one country on one day.
    ///
    /// # Errors
    /// Returns `QueryError::InvalidRequest` listing every problem with the request.
    pub fn query(&self, request: &QueryRequest) -> Result<Vec<Transaction>, QueryError> {
        let query = TransactionQuery::parse(request, &self.rates).inspect_err(|error| warn!("{error}"))?;
        let (start, end) = query.day_range();

        Ok(self.storage.by_currency_prefix_and_date(&query.country_code, start, end))
    }
}
