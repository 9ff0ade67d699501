//! Report submission.
//!
//! Validates a citizen-entered draft, assigns the server-side fields (id,
//! status, submission time) and appends exactly one record to the store.
//! Nothing is written when validation fails.
//!
//! The submission time is an explicit parameter rather than a wall-clock
//! read, so the whole path is deterministic under test.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{Category, ReportRecord, Status};
use crate::store::{ReportStore, StoreError};

/// A candidate report as entered in the submission form: everything the
/// citizen provides, nothing the system assigns.
#[derive(Debug, Clone, Default)]
pub struct ReportDraft {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub location: String,
    pub image: Option<String>,
}

/// Errors from the submission path.
#[derive(Error, Debug)]
pub enum SubmissionError {
    /// A required field is empty or whitespace-only.
    #[error("Required field '{0}' is empty")]
    EmptyField(&'static str),

    /// The record validated but could not be persisted.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Validate `draft` and append it to `store` as a new Pending record.
///
/// On success returns the record as persisted, with a fresh unique id and
/// `submitted_at = now`. On validation failure the store is not touched.
pub fn submit(
    store: &mut dyn ReportStore,
    draft: ReportDraft,
    now: DateTime<Utc>,
) -> Result<ReportRecord, SubmissionError> {
    validate(&draft)?;

    let existing = store.load();
    let record = ReportRecord {
        id: fresh_id(&existing, now),
        title: draft.title,
        description: draft.description,
        category: draft.category,
        location: draft.location,
        image: draft.image,
        status: Status::Pending,
        submitted_at: now,
    };

    store.append(record.clone())?;
    Ok(record)
}

/// Check the required free-text fields. Category always has a value (the
/// form pre-selects the first member) and the image is optional.
fn validate(draft: &ReportDraft) -> Result<(), SubmissionError> {
    for (name, value) in [
        ("title", &draft.title),
        ("description", &draft.description),
        ("location", &draft.location),
    ] {
        if value.trim().is_empty() {
            log::warn!("SUBMISSION_REJECTED missing_field={}", name);
            return Err(SubmissionError::EmptyField(name));
        }
    }
    Ok(())
}

/// Millisecond-timestamp id, bumped past the current maximum if a record
/// already holds it (two submissions inside one millisecond).
fn fresh_id(existing: &[ReportRecord], now: DateTime<Utc>) -> i64 {
    let candidate = now.timestamp_millis();
    if existing.iter().any(|r| r.id == candidate) {
        let max = existing.iter().map(|r| r.id).max().unwrap_or(candidate);
        max + 1
    } else {
        candidate
    }
}
