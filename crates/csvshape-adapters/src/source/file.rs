//! CSV file adapter.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use csvshape_core::{
    application::ports::CsvSource,
    domain::ParsedCsv,
    error::{CoreError, CoreResult},
};
use tracing::debug;

use crate::{options::ReadOptions, source::reader};

/// Production source reading a CSV file from disk.
///
/// The file is opened on every [`CsvSource::load`], so a source can be
/// reused after the file changes.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    options: ReadOptions,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>, options: ReadOptions) -> Self {
        Self {
            path: path.into(),
            options,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn options(&self) -> &ReadOptions {
        &self.options
    }
}

impl CsvSource for FileSource {
    fn load(&self) -> CoreResult<ParsedCsv> {
        debug!(path = %self.path.display(), "opening csv file");
        let file = File::open(&self.path).map_err(|e| CoreError::SourceUnavailable {
            source_name: self.describe(),
            reason: e.to_string(),
        })?;
        reader::parse(BufReader::new(file), &self.options, &self.describe())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
