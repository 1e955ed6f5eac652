use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::domain::{
    finding::{ErrorKind, ValidationError},
    table::{ParsedCsv, Row},
};

/// Collects shape violations of a [`ParsedCsv`].
///
/// Every check appends to the same list and hands back `&mut Self`, so
/// checks can be chained in any order and combination:
///
/// ```
/// use csvshape_core::domain::{ParsedCsv, Validator};
///
/// let csv = ParsedCsv::from_pairs(["id", "name"], [vec![("id", "1"), ("name", "")]]);
/// let expected = ["id", "name"];
///
/// let mut validator = Validator::new(&csv);
/// validator
///     .validate_headers_are_equal(&expected)
///     .validate_data_structure(&expected)
///     .validate_data_for_required_headers(&expected);
///
/// assert_eq!(validator.errors().len(), 1);
/// ```
///
/// Nothing here fails: a finding is data, not an `Err`. Running a check twice
/// records its findings twice.
#[derive(Debug)]
pub struct Validator<'a> {
    source: &'a ParsedCsv,
    errors: Vec<ValidationError>,
}

impl<'a> Validator<'a> {
    pub fn new(source: &'a ParsedCsv) -> Self {
        Self {
            source,
            errors: Vec::new(),
        }
    }

    /// Compare the header line against `expected`.
    ///
    /// Empty headers, a count mismatch and a name mismatch are reported
    /// independently, all at row 0.
    pub fn validate_headers_are_equal<S: AsRef<str>>(&mut self, expected: &[S]) -> &mut Self {
        let source = self.source;
        let actual = source.headers();
        debug!(
            actual = actual.len(),
            expected = expected.len(),
            "validating headers"
        );

        if actual.is_empty() {
            self.push(ValidationError::new(
                0,
                ErrorKind::HeadersEmpty,
                "actual header count is 0",
            ));
        }

        if actual.len() != expected.len() {
            self.push(ValidationError::new(
                0,
                ErrorKind::HeadersCountMismatch,
                format!(
                    "actual header count {} is not equal to expected header count {}",
                    actual.len(),
                    expected.len()
                ),
            ));
        }

        let diff = SetDiff::between(actual.iter().map(String::as_str), names(expected));
        if !diff.is_empty() {
            self.push(ValidationError::new(
                0,
                ErrorKind::HeadersMismatch,
                format!("actual headers not equal to expected headers ({diff})"),
            ));
        }

        self
    }

    /// Check that every data row carries exactly the `expected` keys.
    pub fn validate_data_structure<S: AsRef<str>>(&mut self, expected: &[S]) -> &mut Self {
        let source = self.source;
        let rows = source.rows();
        debug!(
            rows = rows.len(),
            expected = expected.len(),
            "validating data structure"
        );

        if rows.is_empty() {
            self.push(ValidationError::new(
                0,
                ErrorKind::DataEmpty,
                "data contains no rows",
            ));
        }

        for (index, row) in numbered(rows) {
            self.validate_row_structure(index, row, expected);
        }

        self
    }

    /// Check that each row has a non-empty value for every `required` name.
    ///
    /// All required names are checked on every row. An absent field is
    /// reported once as missing and is not also reported as empty.
    pub fn validate_data_for_required_headers<S: AsRef<str>>(
        &mut self,
        required: &[S],
    ) -> &mut Self {
        let source = self.source;
        debug!(
            rows = source.row_count(),
            required = required.len(),
            "validating required fields"
        );

        for (index, row) in numbered(source.rows()) {
            for name in names(required) {
                match row.get(name) {
                    None => self.push(ValidationError::for_field(
                        index,
                        ErrorKind::DataRowMissingField,
                        name,
                        format!("data row is missing required field `{name}`"),
                    )),
                    Some(value) if is_blank(value) => self.push(ValidationError::for_field(
                        index,
                        ErrorKind::DataRowFieldEmpty,
                        name,
                        format!("required field `{name}` has no content"),
                    )),
                    Some(_) => {}
                }
            }
        }

        self
    }

    /// Findings collected so far, in the order they were recorded.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn source(&self) -> &'a ParsedCsv {
        self.source
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    fn validate_row_structure<S: AsRef<str>>(&mut self, index: usize, row: &Row, expected: &[S]) {
        if row.len() != expected.len() {
            self.push(ValidationError::new(
                index,
                ErrorKind::DataRowCountMismatch,
                format!(
                    "data row field count {} is not equal to expected key count {}",
                    row.len(),
                    expected.len()
                ),
            ));
        }

        let diff = SetDiff::between(row.keys().map(String::as_str), names(expected));
        if !diff.is_empty() {
            self.push(ValidationError::new(
                index,
                ErrorKind::DataRowKeysMismatch,
                format!("data row keys not equal to expected keys ({diff})"),
            ));
        }
    }

    fn push(&mut self, error: ValidationError) {
        trace!(row = error.row_index(), kind = %error.kind(), "finding recorded");
        self.errors.push(error);
    }
}

/// Cell content that counts as "no content": the empty string or `"0"`.
fn is_blank(value: &str) -> bool {
    value.is_empty() || value == "0"
}

fn names<S: AsRef<str>>(list: &[S]) -> impl Iterator<Item = &str> {
    list.iter().map(AsRef::as_ref)
}

/// Rows paired with their 1-based position.
fn numbered(rows: &[Row]) -> impl Iterator<Item = (usize, &Row)> {
    rows.iter().enumerate().map(|(i, row)| (i + 1, row))
}

/// Symmetric difference of two name sets, split by side.
struct SetDiff<'s> {
    unexpected: BTreeSet<&'s str>,
    missing: BTreeSet<&'s str>,
}

impl<'s> SetDiff<'s> {
    fn between(
        actual: impl Iterator<Item = &'s str>,
        expected: impl Iterator<Item = &'s str>,
    ) -> Self {
        let actual: BTreeSet<&str> = actual.collect();
        let expected: BTreeSet<&str> = expected.collect();
        Self {
            unexpected: actual.difference(&expected).copied().collect(),
            missing: expected.difference(&actual).copied().collect(),
        }
    }

    fn is_empty(&self) -> bool {
        self.unexpected.is_empty() && self.missing.is_empty()
    }
}

impl std::fmt::Display for SetDiff<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let join = |set: &BTreeSet<&str>| set.iter().copied().collect::<Vec<_>>().join(", ");
        match (self.unexpected.is_empty(), self.missing.is_empty()) {
            (false, false) => write!(
                f,
                "unexpected: {}; missing: {}",
                join(&self.unexpected),
                join(&self.missing)
            ),
            (false, true) => write!(f, "unexpected: {}", join(&self.unexpected)),
            (true, false) => write!(f, "missing: {}", join(&self.missing)),
            (true, true) => Ok(()),
        }
    }
}
