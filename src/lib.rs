//! NagarNigrani Core - report store, aggregation and export
//!
//! This crate holds the testable core of the NagarNigrani civic issue
//! reporting application: citizens submit reports (title, description,
//! category, location, optional photo reference), an admin view filters
//! and exports them, and both dashboards render aggregate statistics.
//! Routing, forms and chart rendering live in the front end; everything
//! with a contract worth testing lives here.
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `model` - report records, the fixed category taxonomy, status enum
//! - `store` - durable report sequence (JSON file) plus in-memory stand-in
//! - `submission` - draft validation, id assignment, append
//! - `dashboard` - pure aggregation and filter/search pipeline
//! - `export` - CSV and paginated text document serializers
//! - `sample` - seeded sample-report generator for the analytics view
//!
//! The store is always injected, the aggregation reference date is always
//! an explicit parameter, and sample data is always seeded: the whole core
//! is deterministic under test.

pub mod dashboard;
pub mod export;
pub mod model;
pub mod sample;
pub mod store;
pub mod submission;

pub use dashboard::{summarize, DashboardSummary, ReportFilter};
pub use model::{Category, ReportRecord, Status};
pub use store::{JsonFileStore, MemoryStore, ReportStore};
pub use submission::{submit, ReportDraft, SubmissionError};

/// Initialize the module-level logger.
///
/// Safe to call more than once; embedders that configure their own `log`
/// backend can skip it.
pub fn init_logger() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_millis()
        .try_init();
}
