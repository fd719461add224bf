mod adjustments;
mod errors;
mod query;
mod transaction_engine;

pub use adjustments::apply_post_validation_rules;
pub use errors::{ImportError, QueryError};
pub use query::{QueryRequest, TransactionQuery};
pub use transaction_engine::{CommitDecision, ImportOutcome, ImportRequest, TransactionEngine};
