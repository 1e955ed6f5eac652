//! Reader settings shared by every CSV-backed source.

use thiserror::Error;

/// Reasons a reader setting is rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptionsError {
    /// The csv reader works on single bytes.
    #[error("delimiter '{0}' is not a single ASCII character")]
    NonAsciiDelimiter(String),

    #[error("delimiter and quote must differ (both '{0}')")]
    DelimiterIsQuote(char),
}

/// How to split a document into cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    pub delimiter: u8,
    pub quote: u8,
    /// Strip surrounding whitespace from headers and cells.
    pub trim: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            trim: false,
        }
    }
}

impl ReadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the delimiter from user text such as `";"` or `"\t"`.
    ///
    /// The literal two-character sequence `\t` is accepted for tab, since it
    /// is awkward to pass a real tab on a command line.
    pub fn with_delimiter(mut self, text: &str) -> Result<Self, OptionsError> {
        let byte = match text {
            "\\t" => b'\t',
            _ => single_ascii(text).ok_or_else(|| OptionsError::NonAsciiDelimiter(text.into()))?,
        };
        if byte == self.quote {
            return Err(OptionsError::DelimiterIsQuote(byte as char));
        }
        self.delimiter = byte;
        Ok(self)
    }

    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    pub(crate) fn reader_builder(&self) -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        builder
            .has_headers(true)
            .flexible(true)
            .delimiter(self.delimiter)
            .quote(self.quote)
            .trim(if self.trim {
                csv::Trim::All
            } else {
                csv::Trim::None
            });
        builder
    }
}

fn single_ascii(text: &str) -> Option<u8> {
    match text.as_bytes() {
        [b] if b.is_ascii() => Some(*b),
        _ => None,
    }
}
