use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, error, info};

use crate::conversion::errors::ConversionError;
use crate::models::Transaction;
use crate::rates::ExchangeRateSnapshot;
use crate::storage::TransactionStore;

/// Outcome of one sweep over the unconverted records.
#[derive(Debug, Default)]
pub struct ConversionReport {
    pub converted: usize,
    pub failures: Vec<ConversionError>
}

/// Fills in `net_euro` and `vat_euro` for persisted transactions.
pub struct CurrencyConverter<S: TransactionStore> {
    storage: Arc<S>,
    rates: Arc<ExchangeRateSnapshot>
}

impl<S: TransactionStore> CurrencyConverter<S> {
    pub fn new(storage: Arc<S>, rates: Arc<ExchangeRateSnapshot>) -> Self {
        Self { storage, rates }
    }

    /// Converts every record that is still missing its euro amounts.
    ///
    /// Each record is written on its own. A record that cannot be converted is logged, reported
    /// and left untouched so a later sweep can pick it up again. Already converted records are
    /// never revisited, which makes repeated sweeps a no-op.
    pub fn convert_all(&self) -> ConversionReport {
        let mut report = ConversionReport::default();

        for mut transaction in self.storage.unconverted() {
            match self.convert(&transaction) {
                Ok((net_euro, vat_euro)) => {
                    transaction.net_euro = Some(net_euro);
                    transaction.vat_euro = Some(vat_euro);

                    debug!("Transaction [{}]:[{}] converted to [{net_euro}] / [{vat_euro}] EUR", transaction.id, transaction.currency);

                    self.storage.update(transaction);
                    report.converted += 1;
                },
                Err(conversion_error) => {
                    error!("{conversion_error}");
                    report.failures.push(conversion_error);
                }
            }
        }

        info!("Currency conversion sweep converted [{}] transaction(s), [{}] left for retry", report.converted, report.failures.len());

        report
    }

    /// Returns the euro equivalents of a transaction's net and vat amounts.
    fn convert(&self, transaction: &Transaction) -> Result<(Decimal, Decimal), ConversionError> {
        //NOTE: Identity conversion skips the division entirely so the amounts keep their exact scale
        if transaction.currency.is_euro() {
            return Ok((transaction.net, transaction.vat));
        }

        let Some(rate) = self.rates.rate_for(&transaction.currency) else {
            return Err(ConversionError::MissingRate {
                transaction_id: transaction.id,
                currency: transaction.currency.clone()
            });
        };

        if rate.is_zero() {
            return Err(ConversionError::ZeroRate {
                transaction_id: transaction.id,
                currency: transaction.currency.clone()
            });
        }

        let overflow = || ConversionError::Overflow {
            transaction_id: transaction.id,
            currency: transaction.currency.clone()
        };

        let net_euro = transaction.net.checked_div(rate).ok_or_else(overflow)?;
        let vat_euro = transaction.vat.checked_div(rate).ok_or_else(overflow)?;

        Ok((net_euro, vat_euro))
    }
}
