//! Application layer for csvshape.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ValidationService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//!
//! The application layer coordinates the domain layer but contains no
//! validation rules itself. All rules live in `crate::domain`.
//! Application failures use the crate-wide `CoreError`.

pub mod ports;
pub mod services;

// Re-export main services
pub use services::{ValidationPlan, ValidationReport, ValidationService};

// Re-export port traits (for adapter implementation)
pub use ports::CsvSource;
