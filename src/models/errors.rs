use crate::types::RowIndex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Validated row [{row_index}] does not match the VAT import layout: expected [{expected}] but found [{found}]")]
    UnexpectedShape {
        row_index: RowIndex,
        expected: &'static str,
        found: String
    }
}
