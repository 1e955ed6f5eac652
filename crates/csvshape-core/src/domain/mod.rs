// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for csvshape.
//!
//! Pure shape validation over already-parsed CSV data. Reading and parsing
//! CSV text is an adapter concern; this module only sees [`ParsedCsv`].
//!
//! ## Rules
//!
//! - **No async**: validation is synchronous
//! - **No I/O**: no filesystem, network, or parser calls
//! - **Findings are data**: shape violations are collected as
//!   [`ValidationError`] records, never returned as `Err`
pub mod finding;
pub mod table;
pub mod validator;

// Re-exports for convenience
pub use finding::{ErrorKind, ValidationError};
pub use table::{ParsedCsv, Row};
pub use validator::Validator;

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Scenarios
    // ========================================================================

    fn invalid_fixture() -> ParsedCsv {
        ParsedCsv::from_pairs(
            ["header1", "header2", "header3"],
            [
                vec![("header1", "a"), ("header2", "b"), ("header3", "c")],
                vec![("header1", "d"), ("header2", "")],
                vec![
                    ("header1", "e"),
                    ("header2", "f"),
                    ("header3", "g"),
                    ("header4", "h"),
                ],
            ],
        )
    }

    #[test]
    fn invalid_file_fails_every_stage() {
        let csv = invalid_fixture();
        let expected = ["header1", "header2", "header3", "header4"];

        let mut validator = Validator::new(&csv);
        validator
            .validate_headers_are_equal(&expected)
            .validate_data_structure(&expected)
            .validate_data_for_required_headers(&expected);

        let errors = validator.errors();
        assert!(errors.iter().any(|e| e.kind().is_header_level()));
        assert!(
            errors
                .iter()
                .any(|e| e.row_index() == 1 && e.kind() == ErrorKind::DataRowKeysMismatch)
        );
        assert!(
            errors
                .iter()
                .any(|e| e.row_index() == 2 && e.kind() == ErrorKind::DataRowFieldEmpty)
        );
        // row 3 matches the four expected headers exactly
        assert!(errors.iter().all(|e| e.row_index() != 3));
    }

    #[test]
    fn row_indices_follow_data_position() {
        let csv = invalid_fixture();
        let expected = ["header1", "header2", "header3"];

        let mut validator = Validator::new(&csv);
        validator.validate_data_structure(&expected);

        let rows: Vec<usize> = validator.errors().iter().map(|e| e.row_index()).collect();
        assert_eq!(rows, [2, 2, 3, 3]);
    }
}
