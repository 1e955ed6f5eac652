//! Validation Service - main application orchestrator.
//!
//! This service coordinates the validation workflow:
//! 1. Load parsed data from a `CsvSource`
//! 2. Run the checks a `ValidationPlan` asks for
//! 3. Package the findings as a `ValidationReport`

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ports::CsvSource,
        services::{ValidationPlan, ValidationReport},
    },
    domain::{ParsedCsv, ValidationError, Validator},
    error::CoreResult,
};

/// Main validation service.
pub struct ValidationService {
    source: Box<dyn CsvSource>,
}

impl ValidationService {
    /// Create a new validation service reading from `source`.
    pub fn new(source: Box<dyn CsvSource>) -> Self {
        Self { source }
    }

    /// Load the source and validate it against `plan`.
    ///
    /// Only a failure to load is an `Err`. Shape violations end up in the
    /// returned report.
    #[instrument(skip_all, fields(source = %self.source.describe()))]
    pub fn run(&self, plan: &ValidationPlan) -> CoreResult<ValidationReport> {
        if plan.is_noop() {
            warn!("validation plan enables no checks");
        }

        let csv = self.source.load()?;
        let errors = Self::check(&csv, plan);

        let report = ValidationReport {
            source: self.source.describe(),
            headers: csv.headers().to_vec(),
            row_count: csv.row_count(),
            errors,
        };

        info!(
            rows = report.row_count,
            errors = report.error_count(),
            valid = report.is_valid(),
            "validation finished"
        );
        Ok(report)
    }

    /// Run the plan's checks against already-loaded data.
    ///
    /// Order is fixed: headers, then structure, then required fields.
    pub fn check(csv: &ParsedCsv, plan: &ValidationPlan) -> Vec<ValidationError> {
        let mut validator = Validator::new(csv);

        if plan.checks_headers() {
            validator.validate_headers_are_equal(plan.expected_headers());
        }
        if plan.checks_structure() {
            validator.validate_data_structure(plan.expected_headers());
        }
        if plan.checks_required() {
            validator.validate_data_for_required_headers(plan.required_fields());
        }

        validator.into_errors()
    }
}
