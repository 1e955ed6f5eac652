//! Outcome of a validation run.

use serde::Serialize;

use crate::domain::{ErrorKind, ValidationError};

/// Findings of one [`super::ValidationService::run`], plus enough context
/// to render them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub source: String,
    pub headers: Vec<String>,
    pub row_count: usize,
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Number of findings of one kind.
    pub fn count_of(&self, kind: ErrorKind) -> usize {
        self.errors.iter().filter(|e| e.kind() == kind).count()
    }

    /// Findings recorded at row 0.
    pub fn header_errors(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().filter(|e| e.row_index() == 0)
    }

    /// Findings for the 1-based data row `row`.
    pub fn errors_for_row(&self, row: usize) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().filter(move |e| e.row_index() == row)
    }

    /// Distinct data rows with at least one finding, ascending.
    pub fn failing_rows(&self) -> Vec<usize> {
        let mut rows: Vec<usize> = self
            .errors
            .iter()
            .map(ValidationError::row_index)
            .filter(|&r| r > 0)
            .collect();
        rows.sort_unstable();
        rows.dedup();
        rows
    }
}
