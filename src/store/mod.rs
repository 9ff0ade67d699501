//! Durable report storage.
//!
//! The store holds the full ordered sequence of report records and is the
//! single source of truth for every dashboard. All writes are
//! whole-collection: each mutation serializes the entire sequence back out
//! (no incremental writes). The store is single-actor by design; concurrent
//! writers are out of scope and the last writer wins.
//!
//! Consumers receive the store as an injected [`ReportStore`] rather than a
//! process-global, so the pipeline stays testable against [`MemoryStore`].

pub mod json_file;
pub mod memory;

use thiserror::Error;

use crate::model::{ReportRecord, Status};

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Errors produced when persisting the report sequence.
///
/// Read-side failures never surface here: `load` absorbs them and returns
/// an empty sequence instead.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to write the serialized sequence.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize the sequence to JSON.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Ordered, durable sequence of report records.
pub trait ReportStore {
    /// Load every persisted record, in insertion order.
    ///
    /// Absent or unparseable persisted content yields an empty sequence,
    /// never an error. Corruption is logged and absorbed.
    fn load(&self) -> Vec<ReportRecord>;

    /// Append one record, preserving all prior records.
    fn append(&mut self, record: ReportRecord) -> Result<(), StoreError>;

    /// Replace the status of the record matching `id`.
    ///
    /// A silent no-op when no record matches; ids are never recycled so a
    /// stale id is not an error condition worth surfacing.
    fn update_status(&mut self, id: i64, status: Status) -> Result<(), StoreError>;
}
