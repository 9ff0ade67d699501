//! Dashboard pipeline.
//!
//! Pure, synchronous transformations from the report sequence to what the
//! admin and analytics views render:
//! - `aggregate` - totals, histograms, trend and top-K rankings
//! - `filter` - category/status/search narrowing of the report table
//!
//! Nothing in this module performs I/O or mutates its input; every function
//! is total over its documented domain and deterministic given a fixed
//! reference date.

pub mod aggregate;
pub mod filter;

pub use aggregate::{summarize, DashboardSummary};
pub use filter::{CategoryFilter, ReportFilter, StatusFilter};
