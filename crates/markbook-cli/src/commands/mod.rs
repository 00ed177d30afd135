//! Subcommand implementations and shared rendering helpers.

pub mod add;
pub mod check;
pub mod export;
pub mod extreme;
pub mod init;
pub mod joke;
pub mod list;
pub mod quiz;
pub mod remove;
pub mod set;
pub mod show;
pub mod sort;

use anyhow::Result;
use comfy_table::{Cell, Table};

use markbook_core::error::StoreError;
use markbook_core::model::StudentRecord;
use markbook_core::store::RecordStore;

use crate::config::Config;

/// Open the record store, treating a missing marks file as an empty store
/// rather than a fatal error.
pub fn open_store(config: &Config) -> Result<RecordStore> {
    match RecordStore::open(&config.marks_file) {
        Ok(store) => Ok(store),
        Err(StoreError::FileNotFound(path)) => {
            tracing::warn!(path = %path.display(), "marks file not found, starting empty");
            Ok(RecordStore::empty(&config.marks_file))
        }
        Err(e) => Err(e.into()),
    }
}

/// Render records the way every listing command prints them.
pub fn record_table(records: &[StudentRecord]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "Name",
        "ID",
        "Coursework",
        "Exam",
        "Overall %",
        "Grade",
    ]);

    for rec in records {
        table.add_row(vec![
            Cell::new(&rec.name),
            Cell::new(&rec.id),
            Cell::new(rec.coursework),
            Cell::new(rec.exam),
            Cell::new(format!("{:.2}%", rec.percent)),
            Cell::new(rec.grade),
        ]);
    }

    table
}
