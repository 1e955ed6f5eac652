//! Which checks to run, against which names.

use serde::{Deserialize, Serialize};

/// Description of a validation run.
///
/// `ValidationPlan::new(expected)` runs the header and structure checks
/// against `expected`. Required-field checks run only when required names
/// are given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationPlan {
    expected_headers: Vec<String>,
    required_fields: Vec<String>,
    check_headers: bool,
    check_structure: bool,
}

impl ValidationPlan {
    pub fn new<I, S>(expected_headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            expected_headers: expected_headers.into_iter().map(Into::into).collect(),
            required_fields: Vec::new(),
            check_headers: true,
            check_structure: true,
        }
    }

    /// Only check required fields; no header or structure expectations.
    pub fn required_only<I, S>(required: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Vec::<String>::new())
            .skip_headers()
            .skip_structure()
            .with_required(required)
    }

    pub fn with_required<I, S>(mut self, required: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_fields = required.into_iter().map(Into::into).collect();
        self
    }

    /// Treat every expected header as required.
    pub fn require_all(mut self) -> Self {
        self.required_fields = self.expected_headers.clone();
        self
    }

    pub fn skip_headers(mut self) -> Self {
        self.check_headers = false;
        self
    }

    pub fn skip_structure(mut self) -> Self {
        self.check_structure = false;
        self
    }

    pub fn expected_headers(&self) -> &[String] {
        &self.expected_headers
    }

    pub fn required_fields(&self) -> &[String] {
        &self.required_fields
    }

    pub fn checks_headers(&self) -> bool {
        self.check_headers
    }

    pub fn checks_structure(&self) -> bool {
        self.check_structure
    }

    pub fn checks_required(&self) -> bool {
        !self.required_fields.is_empty()
    }

    /// `true` if running this plan would not execute any check.
    pub fn is_noop(&self) -> bool {
        !self.check_headers && !self.check_structure && !self.checks_required()
    }
}
