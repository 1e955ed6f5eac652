//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `csvshape-adapters` crate provides implementations.

use crate::domain::ParsedCsv;
use crate::error::CoreResult;

/// Port for obtaining parsed CSV data.
///
/// Implemented by:
/// - `csvshape_adapters::FileSource` (CSV file on disk)
/// - `csvshape_adapters::MemorySource` (in-memory text or pre-parsed data)
///
/// ## Design Notes
///
/// - Parsing (delimiters, quoting, encoding) is entirely the adapter's job
/// - A load failure is a `CoreError`; shape problems in loaded data are not
#[cfg_attr(test, mockall::automock)]
pub trait CsvSource: Send + Sync {
    /// Read and parse the whole document.
    fn load(&self) -> CoreResult<ParsedCsv>;

    /// Human-readable label (usually a path) for reports and logs.
    fn describe(&self) -> String;
}
