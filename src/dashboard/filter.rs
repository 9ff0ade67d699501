//! Report table filtering.
//!
//! Narrows the record sequence by category, status and a free-text search
//! over title and location, preserving the original relative order. The
//! all-pass filter is the identity and filtering is idempotent.

use crate::model::{Category, ReportRecord, Status};

/// Category predicate with the "All" sentinel from the UI dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parse a dropdown value: the sentinel "All" or a category label.
    pub fn from_label(label: &str) -> Option<CategoryFilter> {
        if label == "All" {
            Some(CategoryFilter::All)
        } else {
            Category::from_label(label).map(CategoryFilter::Only)
        }
    }

    fn passes(&self, record: &ReportRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(cat) => record.category == *cat,
        }
    }
}

/// Status predicate with the "All" sentinel from the UI dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    pub fn from_label(label: &str) -> Option<StatusFilter> {
        if label == "All" {
            Some(StatusFilter::All)
        } else {
            Status::from_label(label).map(StatusFilter::Only)
        }
    }

    fn passes(&self, record: &ReportRecord) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => record.status == *status,
        }
    }
}

/// Combined filter state of the admin table. `Default` passes everything.
#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    pub category: CategoryFilter,
    pub status: StatusFilter,
    /// Case-insensitive substring match over title or location.
    /// Empty means no text constraint.
    pub search: String,
}

impl ReportFilter {
    /// Whether a single record passes all three predicates.
    pub fn matches(&self, record: &ReportRecord) -> bool {
        if !self.category.passes(record) || !self.status.passes(record) {
            return false;
        }
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        record.title.to_lowercase().contains(&needle)
            || record.location.to_lowercase().contains(&needle)
    }

    /// Filter the sequence, preserving relative order. An empty result is
    /// a normal outcome, not an error.
    pub fn apply(&self, records: &[ReportRecord]) -> Vec<ReportRecord> {
        records
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect()
    }
}
