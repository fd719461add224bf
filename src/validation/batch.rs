use tracing::debug;

use crate::rates::ExchangeRateSnapshot;
use crate::types::RowIndex;
use crate::validation::errors::FieldError;
use crate::validation::{FieldKind, ValidatedRow, ValidationError, ValidationResult};

/// Validates every cell of every row against a field schema, collecting all failures.
pub struct BatchValidator<'a> {
    schema: &'a [FieldKind],
    rates: &'a ExchangeRateSnapshot
}

impl<'a> BatchValidator<'a> {
    pub fn new(schema: &'a [FieldKind], rates: &'a ExchangeRateSnapshot) -> Self {
        Self { schema, rates }
    }

    /// Validates a batch of raw rows.
    ///
    /// A failing cell never stops validation of its siblings or of later rows. Errors are
    /// ordered by row, then by column. Rows without any error come back as `ValidatedRow`s in
    /// their original order.
    pub fn validate<R: AsRef<[String]>>(&self, rows: &[R]) -> ValidationResult {
        let mut result = ValidationResult::default();

        for (row_index, row) in rows.iter().enumerate() {
            match self.validate_row(row_index, row.as_ref()) {
                Ok(validated) => result.rows.push(validated),
                Err(row_errors) => {
                    debug!("Row [{row_index}] failed validation with [{}] error(s)", row_errors.len());
                    result.errors.extend(row_errors);
                }
            }
        }

        result.all_valid = result.errors.is_empty();
        result
    }

    fn validate_row(&self, row_index: RowIndex, row: &[String]) -> Result<ValidatedRow, Vec<ValidationError>> {
        let mut values = Vec::with_capacity(self.schema.len());
        let mut errors = Vec::new();

        for (kind, raw) in self.schema.iter().zip(row) {
            match kind.validate(raw, self.rates) {
                Ok(value) => values.push(value),
                Err(error) => errors.push(ValidationError::new(row_index, raw.as_str(), error))
            }
        }

        if row.len() != self.schema.len() {
            let error = FieldError::FieldCount { expected: self.schema.len(), found: row.len() };
            errors.push(ValidationError::new(row_index, row.join(","), error));
        }

        if errors.is_empty() {
            Ok(ValidatedRow { row_index, values })
        } else {
            Err(errors)
        }
    }
}
