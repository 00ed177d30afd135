//! Class report export with JSON persistence.
//!
//! A [`ClassReport`] is a point-in-time snapshot of the store (records plus
//! cohort summary) for handing to other tools. The marks file stays the
//! source of truth; reports are never read back into the store.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::model::StudentRecord;
use crate::statistics::ClassSummary;
use crate::store::RecordStore;

/// A snapshot of the store, ready for serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassReport {
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// The marks file the snapshot came from.
    pub source: String,
    /// Records in their order at generation time.
    pub records: Vec<StudentRecord>,
    /// Cohort summary.
    pub summary: ClassSummary,
}

impl ClassReport {
    /// Snapshot a store. Fails with [`StoreError::Empty`] when there is
    /// nothing to report on.
    pub fn from_store(store: &RecordStore) -> Result<Self, StoreError> {
        Ok(Self {
            generated_at: Utc::now(),
            source: store.path().display().to_string(),
            records: store.records().to_vec(),
            summary: store.summary()?,
        })
    }

    /// Save the report as pretty-printed JSON.
    pub fn save_json(&self, path: &Path) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a previously saved report.
    pub fn load_json(path: &Path) -> Result<Self, StoreError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewRecord;

    fn seeded_store(dir: &tempfile::TempDir) -> RecordStore {
        let mut store = RecordStore::empty(dir.path().join("marks.txt"));
        store
            .add(NewRecord {
                id: "1001",
                name: "Alice Wong",
                coursework: ["19", "19", "19"],
                exam: "40",
            })
            .unwrap();
        store
    }

    #[test]
    fn snapshot_captures_records_and_summary() {
        let dir = tempfile::tempdir().unwrap();
        let store = seeded_store(&dir);

        let report = ClassReport::from_store(&store).unwrap();
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.summary.count, 1);
        assert!(report.source.ends_with("marks.txt"));
    }

    #[test]
    fn snapshot_of_empty_store_fails() {
        let store = RecordStore::empty("unused.txt");
        assert!(matches!(
            ClassReport::from_store(&store),
            Err(StoreError::Empty)
        ));
    }

    #[test]
    fn json_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = seeded_store(&dir);
        let path = dir.path().join("report.json");

        let report = ClassReport::from_store(&store).unwrap();
        report.save_json(&path).unwrap();
        let loaded = ClassReport::load_json(&path).unwrap();

        assert_eq!(loaded.records.len(), 1);
        assert_eq!(loaded.records[0].name, "Alice Wong");
        assert_eq!(loaded.summary.count, 1);
    }
}
