#[cfg(test)]
mod tests;
mod transaction_storage;

use chrono::NaiveDateTime;

use crate::models::{NewTransaction, Transaction};

pub use transaction_storage::TransactionStorage;

pub trait TransactionStore: Send + Sync + 'static {
    /// Persists a new transaction with empty euro amounts and returns the stored record.
    fn create(&self, transaction: NewTransaction) -> Transaction;
    /// Replaces an existing record. Unknown ids are ignored.
    fn update(&self, transaction: Transaction);
    /// Records still missing a euro amount, ordered by id.
    fn unconverted(&self) -> Vec<Transaction>;
    /// Records whose currency starts with `prefix` (case-insensitive) and whose `created_at`
    /// lies in `[start, end)`, ordered by id.
    fn by_currency_prefix_and_date(&self, prefix: &str, start: NaiveDateTime, end: NaiveDateTime) -> Vec<Transaction>;
    fn all(&self) -> Vec<Transaction>;
}
