use crate::models::{NewTransaction, TransactionType};

/// Business rules applied to validated transactions right before they are persisted.
///
/// Purchases are outflows, so both their net and vat amounts are stored negated. Sales keep
/// their sign. Must run exactly once per batch.
pub fn apply_post_validation_rules(transactions: &mut [NewTransaction]) {
    for transaction in transactions.iter_mut() {
        if transaction.transaction_type == TransactionType::Purchase {
            transaction.invert_amounts();
        }
    }
}
