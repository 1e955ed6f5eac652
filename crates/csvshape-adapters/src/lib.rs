//! Infrastructure adapters for csvshape.
//!
//! This crate implements the ports defined in `csvshape-core::application::ports`.
//! It owns every external dependency and I/O operation; all CSV parsing is
//! delegated to the `csv` crate.

pub mod options;
pub mod source;

// Re-export commonly used adapters
pub use options::{OptionsError, ReadOptions};
pub use source::{FileSource, MemorySource};
