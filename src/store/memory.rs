//! In-memory report store.
//!
//! Stand-in for [`JsonFileStore`](super::JsonFileStore) in tests, and the
//! natural holder for generated sample data feeding the analytics dashboard.

use crate::model::{ReportRecord, Status};

use super::{ReportStore, StoreError};

/// Report store holding its records in memory, nothing persisted.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: Vec<ReportRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with an existing sequence (e.g. generated sample data).
    pub fn with_records(records: Vec<ReportRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ReportStore for MemoryStore {
    fn load(&self) -> Vec<ReportRecord> {
        self.records.clone()
    }

    fn append(&mut self, record: ReportRecord) -> Result<(), StoreError> {
        self.records.push(record);
        Ok(())
    }

    fn update_status(&mut self, id: i64, status: Status) -> Result<(), StoreError> {
        if let Some(record) = self.records.iter_mut().find(|r| r.id == id) {
            record.status = status;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_append_and_update() {
        let mut store = MemoryStore::new();
        store
            .append(ReportRecord {
                id: 7,
                title: "t".to_string(),
                description: "d".to_string(),
                category: Category::Others,
                location: "l".to_string(),
                image: None,
                status: Status::Pending,
                submitted_at: Utc.with_ymd_and_hms(2026, 8, 20, 0, 0, 0).unwrap(),
            })
            .unwrap();

        store.update_status(7, Status::Resolved).unwrap();
        assert_eq!(store.load()[0].status, Status::Resolved);

        // Unknown id: no-op, not an error.
        store.update_status(8, Status::Resolved).unwrap();
        assert_eq!(store.len(), 1);
    }
}
