//! Core data model: report records, categories, statuses.

pub mod report;

pub use report::{Category, ReportRecord, Status};
