// ============================================================================
// domain/finding.rs - VALIDATION FINDINGS
// ============================================================================

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Kind of shape violation.
///
/// The symbolic name ([`ErrorKind::as_str`]) is the stable identifier for
/// programmatic matching. [`ErrorKind::code`] keeps the numeric codes the
/// original PHP validator attached to its exceptions, for log correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    // ========================================================================
    // Header-level (row 0)
    // ========================================================================
    HeadersEmpty,
    HeadersCountMismatch,
    HeadersMismatch,

    // ========================================================================
    // Data-level
    // ========================================================================
    /// No data rows at all (row 0).
    DataEmpty,
    DataRowCountMismatch,
    DataRowKeysMismatch,
    DataRowMissingField,
    DataRowFieldEmpty,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 8] = [
        Self::HeadersEmpty,
        Self::HeadersCountMismatch,
        Self::HeadersMismatch,
        Self::DataEmpty,
        Self::DataRowCountMismatch,
        Self::DataRowKeysMismatch,
        Self::DataRowMissingField,
        Self::DataRowFieldEmpty,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::HeadersEmpty => "HEADERS_EMPTY",
            Self::HeadersCountMismatch => "HEADERS_COUNT_MISMATCH",
            Self::HeadersMismatch => "HEADERS_MISMATCH",
            Self::DataEmpty => "DATA_EMPTY",
            Self::DataRowCountMismatch => "DATA_ROW_COUNT_MISMATCH",
            Self::DataRowKeysMismatch => "DATA_ROW_KEYS_MISMATCH",
            Self::DataRowMissingField => "DATA_ROW_MISSING_FIELD",
            Self::DataRowFieldEmpty => "DATA_ROW_FIELD_EMPTY",
        }
    }

    /// Legacy numeric code.
    pub fn code(self) -> u32 {
        match self {
            Self::HeadersEmpty => 1_542_991_949,
            Self::HeadersCountMismatch => 1_542_991_950,
            Self::HeadersMismatch => 1_542_991_951,
            Self::DataEmpty => 1_542_991_952,
            Self::DataRowCountMismatch => 1_542_991_955,
            Self::DataRowKeysMismatch => 1_542_991_956,
            Self::DataRowMissingField => 1_542_991_957,
            Self::DataRowFieldEmpty => 1_542_991_958,
        }
    }

    /// `true` for kinds that always sit at row 0.
    pub fn is_header_level(self) -> bool {
        matches!(
            self,
            Self::HeadersEmpty | Self::HeadersCountMismatch | Self::HeadersMismatch
        )
    }

    /// `true` for kinds that name a single required field.
    pub fn is_field_level(self) -> bool {
        matches!(self, Self::DataRowMissingField | Self::DataRowFieldEmpty)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One collected shape violation.
///
/// Never returned as an `Err`: the validator accumulates these. Fields are
/// private so a finding cannot change after it is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("row {row_index}: {message} [{kind}]")]
pub struct ValidationError {
    row_index: usize,
    kind: ErrorKind,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<String>,
}

impl ValidationError {
    pub fn new(row_index: usize, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            row_index,
            kind,
            message: message.into(),
            field: None,
        }
    }

    /// Finding about a single named field of a data row.
    pub fn for_field(
        row_index: usize,
        kind: ErrorKind,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            row_index,
            kind,
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// 0 for header-level and empty-data findings, otherwise the 1-based
    /// position of the data row.
    pub fn row_index(&self) -> usize {
        self.row_index
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn code(&self) -> u32 {
        self.kind.code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }
}
