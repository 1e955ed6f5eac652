//! csvshape Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for csvshape, a
//! validator that checks parsed CSV data against an expected tabular shape.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          csvshape-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │          (ValidationService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │              (CsvSource)                │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     csvshape-adapters (Infrastructure)  │
//! │        (FileSource, MemorySource)       │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ParsedCsv, Validator, ValidationError) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use csvshape_core::domain::{ErrorKind, ParsedCsv, Validator};
//!
//! let csv = ParsedCsv::from_pairs(["h1", "h2"], [vec![("h1", "a"), ("h2", "")]]);
//! let expected = ["h1", "h2", "h3"];
//!
//! let mut validator = Validator::new(&csv);
//! validator
//!     .validate_headers_are_equal(&expected)
//!     .validate_data_structure(&expected)
//!     .validate_data_for_required_headers(&expected);
//!
//! assert!(validator
//!     .errors()
//!     .iter()
//!     .any(|e| e.kind() == ErrorKind::DataRowMissingField && e.row_index() == 1));
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ValidationPlan, ValidationReport, ValidationService, ports::CsvSource,
    };
    pub use crate::domain::{ErrorKind, ParsedCsv, Row, ValidationError, Validator};
    pub use crate::error::{CoreError, CoreResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
