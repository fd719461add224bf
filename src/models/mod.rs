mod errors;
#[cfg(test)]
mod tests;
mod transaction;

use serde::Serialize;
use std::fmt;
use std::fmt::{Display, Formatter};

pub use errors::RecordError;
pub use transaction::{NewTransaction, Transaction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Sale,
    Purchase
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Sale => "sale",
            TransactionType::Purchase => "purchase"
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
