//! Unified error handling for csvshape core.
//!
//! These are the *hard* failures: a source that cannot be read or parsed,
//! or a bug. Shape violations found in readable data are never
//! errors of this type; they are [`crate::domain::ValidationError`] findings.

use thiserror::Error;

/// Root error type for csvshape core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    /// The CSV source could not be opened or read.
    #[error("Cannot read '{source_name}': {reason}")]
    SourceUnavailable { source_name: String, reason: String },

    /// The CSV source was readable but a record could not be parsed.
    #[error("Malformed CSV in '{source_name}' at line {line}: {reason}")]
    MalformedInput {
        source_name: String,
        line: u64,
        reason: String,
    },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl CoreError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SourceUnavailable { source_name, .. } => vec![
                format!("Check that '{}' exists and is readable", source_name),
                "Paths are resolved relative to the current directory".into(),
            ],
            Self::MalformedInput { line, .. } => vec![
                format!("Inspect line {} of the file", line),
                "Check the delimiter (--delimiter) and quoting".into(),
                "The file must be UTF-8 encoded".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in csvshape".into(),
                "Please report this issue at: https://github.com/cosecruz/csvshape/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SourceUnavailable { .. } => ErrorCategory::NotFound,
            Self::MalformedInput { .. } => ErrorCategory::Input,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_input_mentions_line() {
        let err = CoreError::MalformedInput {
            source_name: "data.csv".into(),
            line: 7,
            reason: "unclosed quote".into(),
        };
        assert!(err.to_string().contains("line 7"));
        assert!(err.suggestions().iter().any(|s| s.contains("line 7")));
        assert_eq!(err.category(), ErrorCategory::Input);
    }

    #[test]
    fn unreadable_source_is_not_found() {
        let err = CoreError::SourceUnavailable {
            source_name: "missing.csv".into(),
            reason: "No such file or directory".into(),
        };
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }
}
