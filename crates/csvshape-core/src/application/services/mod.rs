//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "validate this file against that shape".

pub mod plan;
pub mod report;
pub mod validation_service;

pub use plan::ValidationPlan;
pub use report::ValidationReport;
pub use validation_service::ValidationService;
