//! Parsed tabular data as handed over by a CSV reader.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One data row: header name → cell content.
///
/// Key order carries no meaning; the map is ordered only so that
/// diagnostics and serialized output are deterministic.
pub type Row = BTreeMap<String, String>;

/// Headers plus rows of an already-parsed CSV document.
///
/// The validator only ever reads this; adapters build it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCsv {
    headers: Vec<String>,
    rows: Vec<Row>,
}

impl ParsedCsv {
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        Self { headers, rows }
    }

    /// A document with neither headers nor rows (what an empty file parses to).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from string slices. Handy for fixtures.
    ///
    /// Each row is a list of `(header, value)` pairs.
    pub fn from_pairs<H, R>(headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator,
        R::Item: IntoIterator<Item = (&'static str, &'static str)>,
    {
        let headers = headers.into_iter().map(Into::into).collect();
        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|(k, v)| (k.to_owned(), v.to_owned()))
                    .collect()
            })
            .collect();
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// `true` when there are no headers and no rows.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_nothing() {
        let csv = ParsedCsv::empty();
        assert!(csv.is_empty());
        assert_eq!(csv.row_count(), 0);
        assert!(csv.headers().is_empty());
    }

    #[test]
    fn from_pairs_keys_rows_by_header() {
        let csv = ParsedCsv::from_pairs(["a", "b"], [vec![("a", "1"), ("b", "2")]]);
        assert_eq!(csv.headers(), ["a", "b"]);
        assert_eq!(csv.rows()[0].get("b").map(String::as_str), Some("2"));
        assert!(!csv.is_empty());
    }
}
