use crate::models::{NewTransaction, Transaction};
use crate::storage::TransactionStore;
use crate::types::TransactionId;
use chrono::NaiveDateTime;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// In-memory transaction store keyed by a monotonically increasing id.
pub struct TransactionStorage {
    records: Arc<DashMap<TransactionId, Transaction>>,
    next_id: AtomicU64
}

impl TransactionStorage {
    pub fn new() -> Self {
        Self {
            records: Arc::new(DashMap::new()),
            next_id: AtomicU64::new(1)
        }
    }

    fn collect_where<F>(&self, predicate: F) -> Vec<Transaction>
    where
        F: Fn(&Transaction) -> bool
    {
        let mut transactions: Vec<Transaction> = self.records.iter()
            .filter(|entry| predicate(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();

        transactions.sort_by_key(|transaction| transaction.id);
        transactions
    }
}

impl Default for TransactionStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionStore for TransactionStorage {
    fn create(&self, transaction: NewTransaction) -> Transaction {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let transaction = Transaction::new(id, transaction);

        self.records.insert(id, transaction.clone());

        transaction
    }

    fn update(&self, transaction: Transaction) {
        if let Some(mut existing) = self.records.get_mut(&transaction.id) {
            *existing = transaction;
        }
    }

    fn unconverted(&self) -> Vec<Transaction> {
        self.collect_where(|transaction| !transaction.is_converted())
    }

    fn by_currency_prefix_and_date(&self, prefix: &str, start: NaiveDateTime, end: NaiveDateTime) -> Vec<Transaction> {
        let prefix = prefix.to_ascii_uppercase();

        self.collect_where(|transaction| {
            transaction.currency.as_str().starts_with(&prefix)
                && transaction.created_at >= start
                && transaction.created_at < end
        })
    }

    fn all(&self) -> Vec<Transaction> {
        self.collect_where(|_| true)
    }
}
