//! In-memory sources for tests and embedding.

use csvshape_core::{application::ports::CsvSource, domain::ParsedCsv, error::CoreResult};

use crate::{options::ReadOptions, source::reader};

/// Source backed by memory: either raw CSV text or already-parsed data.
#[derive(Debug, Clone)]
pub struct MemorySource {
    label: String,
    content: Content,
}

#[derive(Debug, Clone)]
enum Content {
    Text { text: String, options: ReadOptions },
    Parsed(ParsedCsv),
}

impl MemorySource {
    /// CSV text, parsed on every load.
    pub fn from_text(text: impl Into<String>, options: ReadOptions) -> Self {
        Self {
            label: "<memory>".into(),
            content: Content::Text {
                text: text.into(),
                options,
            },
        }
    }

    /// Data that has already been parsed elsewhere.
    pub fn from_parsed(csv: ParsedCsv) -> Self {
        Self {
            label: "<memory>".into(),
            content: Content::Parsed(csv),
        }
    }

    /// Replace the label used in reports and logs.
    pub fn labelled(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

impl CsvSource for MemorySource {
    fn load(&self) -> CoreResult<ParsedCsv> {
        match &self.content {
            Content::Text { text, options } => reader::parse(text.as_bytes(), options, &self.label),
            Content::Parsed(csv) => Ok(csv.clone()),
        }
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}
