use crate::models::RecordError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Import error: {0}")]
    Record(#[from] RecordError)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("Invalid query: {}", .0.join("; "))]
    InvalidRequest(Vec<String>)
}
