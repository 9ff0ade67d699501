//! JSON-file-backed report store.
//!
//! One named file holds the JSON-serialized array of records, the same
//! layout the web front end keeps under its single local-storage entry.
//! Every operation is a synchronous whole-file read-modify-write.

use std::path::{Path, PathBuf};

use crate::model::{ReportRecord, Status};

use super::{ReportStore, StoreError};

/// Report store persisting to a single JSON file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open a store at an explicit path. The file is created on first write;
    /// a missing file reads as an empty sequence.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Filesystem path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the full sequence. Callers that must not fail go
    /// through [`ReportStore::load`], which absorbs this error.
    fn read_all(&self) -> anyhow::Result<Vec<ReportRecord>> {
        let raw = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn write_all(&self, records: &[ReportRecord]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(records)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl ReportStore for JsonFileStore {
    fn load(&self) -> Vec<ReportRecord> {
        if !self.path.exists() {
            return Vec::new();
        }
        match self.read_all() {
            Ok(records) => records,
            Err(e) => {
                // Unreadable content is treated as an empty store, matching
                // the front end's `JSON.parse(... || "[]")` fallback.
                log::warn!(
                    "STORE_UNREADABLE path={} error={}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    fn append(&mut self, record: ReportRecord) -> Result<(), StoreError> {
        let mut records = self.load();
        log::info!(
            "REPORT_APPENDED id={} category={:?} location={:?}",
            record.id,
            record.category.label(),
            record.location
        );
        records.push(record);
        self.write_all(&records)
    }

    fn update_status(&mut self, id: i64, status: Status) -> Result<(), StoreError> {
        let mut records = self.load();
        match records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                log::info!(
                    "STATUS_UPDATED id={} from={} to={}",
                    id,
                    record.status,
                    status
                );
                record.status = status;
                self.write_all(&records)
            }
            None => {
                log::debug!("STATUS_UPDATE_NO_MATCH id={}", id);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use chrono::{TimeZone, Utc};

    fn record(id: i64, title: &str) -> ReportRecord {
        ReportRecord {
            id,
            title: title.to_string(),
            description: "desc".to_string(),
            category: Category::default(),
            location: "Elm St".to_string(),
            image: None,
            status: Status::Pending,
            submitted_at: Utc.with_ymd_and_hms(2026, 8, 20, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("reports.json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_append_preserves_prior_records() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::open(dir.path().join("reports.json"));

        store.append(record(1, "first")).unwrap();
        store.append(record(2, "second")).unwrap();

        let records = store.load();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "first");
        assert_eq!(records[1].title, "second");
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports.json");
        std::fs::write(&path, "not json{").unwrap();

        let store = JsonFileStore::open(&path);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_update_status_replaces_matching_record() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::open(dir.path().join("reports.json"));
        store.append(record(1, "first")).unwrap();
        store.append(record(2, "second")).unwrap();

        store.update_status(2, Status::Resolved).unwrap();

        let records = store.load();
        assert_eq!(records[0].status, Status::Pending);
        assert_eq!(records[1].status, Status::Resolved);
    }

    #[test]
    fn test_update_status_unknown_id_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::open(dir.path().join("reports.json"));
        store.append(record(1, "only")).unwrap();

        store.update_status(999, Status::Resolved).unwrap();

        let records = store.load();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, Status::Pending);
    }

    #[test]
    fn test_reads_blob_written_by_front_end() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports.json");
        std::fs::write(
            &path,
            r#"[{"id":1755600000000,"title":"Broken streetlight","description":"Dark at night","category":"Streetlights & Public Infrastructure","location":"MG Road","status":"Pending","submittedAt":"2026-08-19T18:45:00Z"}]"#,
        )
        .unwrap();

        let store = JsonFileStore::open(&path);
        let records = store.load();
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].category,
            Category::StreetlightsAndPublicInfrastructure
        );
        assert_eq!(records[0].image, None);
    }
}
