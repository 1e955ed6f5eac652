//! `CsvSource` adapters.

mod file;
mod memory;
mod reader;

pub use file::FileSource;
pub use memory::MemorySource;
