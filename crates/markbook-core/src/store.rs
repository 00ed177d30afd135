//! The record store.
//!
//! [`RecordStore`] is the exclusive owner of the in-memory collection and
//! the backing marks file. Callers read through shared references and
//! mutate only through its operations, so the derived fields always agree
//! with the scores. Every mutating operation rewrites the whole file before
//! returning; there is no deferred or batched write. A rejected operation
//! leaves both memory and disk untouched.

use std::path::{Path, PathBuf};

use crate::error::{bad_score, StoreError};
use crate::format;
use crate::model::{NewRecord, StudentRecord, UpdateField};
use crate::statistics::{self, ClassSummary};

/// In-memory student records bound to a marks file.
#[derive(Debug)]
pub struct RecordStore {
    records: Vec<StudentRecord>,
    path: PathBuf,
}

impl RecordStore {
    /// Load a store from a marks file.
    ///
    /// Propagates [`StoreError::FileNotFound`] so the caller decides whether
    /// a missing file means "start empty" ([`RecordStore::empty`]) or is a
    /// hard error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let records = format::load_marks_file(&path)?;
        tracing::info!(path = %path.display(), records = records.len(), "opened record store");
        Ok(Self { records, path })
    }

    /// A store with no records, bound to a path that may not exist yet.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            records: Vec::new(),
            path: path.into(),
        }
    }

    /// The backing marks file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All records in their current order.
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Write the full collection to the marks file, overwriting it.
    pub fn save(&self) -> Result<(), StoreError> {
        format::write_marks_file(&self.path, &self.records)
    }

    /// Validate, append, and persist a new record.
    ///
    /// The four score fields must parse as non-negative integers; otherwise
    /// the operation fails with [`StoreError::Validation`] and nothing is
    /// added. Ids are not checked for uniqueness.
    pub fn add(&mut self, new: NewRecord<'_>) -> Result<&StudentRecord, StoreError> {
        let [c1, c2, c3] = new.coursework;
        let coursework = parse_score("coursework 1", c1)?
            + parse_score("coursework 2", c2)?
            + parse_score("coursework 3", c3)?;
        let exam = parse_score("exam", new.exam)?;

        let index = self.records.len();
        self.records
            .push(StudentRecord::new(new.id, new.name, coursework, exam));
        self.save()?;

        let added = &self.records[index];
        tracing::info!(id = %added.id, name = %added.name, "added record");
        Ok(added)
    }

    /// Remove every record matching the key; returns how many were removed.
    ///
    /// Zero removals is a normal outcome, not an error, and does not touch
    /// the file.
    pub fn remove(&mut self, key: &str) -> Result<usize, StoreError> {
        let before = self.records.len();
        self.records.retain(|rec| !rec.matches_key(key));
        let removed = before - self.records.len();

        if removed > 0 {
            self.save()?;
            tracing::info!(key, removed, "removed record(s)");
        }
        Ok(removed)
    }

    /// Update one field of the first record matching the key, then persist.
    ///
    /// Score fields are parse-validated and trigger a rescore of the derived
    /// fields; `name` and `id` are replaced verbatim with no rescore.
    pub fn update(
        &mut self,
        key: &str,
        field: UpdateField,
        value: &str,
    ) -> Result<&StudentRecord, StoreError> {
        enum Change {
            Coursework(u32),
            Exam(u32),
            Name(String),
            Id(String),
        }

        // Validate before mutating so a rejected value leaves the record as
        // it was.
        let change = match field {
            UpdateField::Coursework => Change::Coursework(parse_score("coursework", value)?),
            UpdateField::Exam => Change::Exam(parse_score("exam", value)?),
            UpdateField::Name => Change::Name(value.to_string()),
            UpdateField::Id => Change::Id(value.to_string()),
        };

        let position = self
            .records
            .iter()
            .position(|rec| rec.matches_key(key))
            .ok_or_else(|| StoreError::NoSuchRecord(key.to_string()))?;

        let rec = &mut self.records[position];
        match change {
            Change::Coursework(score) => {
                rec.coursework = score;
                rec.rescore();
            }
            Change::Exam(score) => {
                rec.exam = score;
                rec.rescore();
            }
            Change::Name(name) => rec.name = name,
            Change::Id(id) => rec.id = id,
        }
        self.save()?;

        let updated = &self.records[position];
        tracing::info!(key, %field, id = %updated.id, "updated record");
        Ok(updated)
    }

    /// Stable in-place sort by lowercased name, then persist.
    ///
    /// Records with identical lowercased names keep their relative order in
    /// both directions.
    pub fn sort_by_name(&mut self, ascending: bool) -> Result<(), StoreError> {
        self.records.sort_by(|a, b| {
            let ord = a.name.to_lowercase().cmp(&b.name.to_lowercase());
            if ascending {
                ord
            } else {
                ord.reverse()
            }
        });
        self.save()
    }

    /// Aggregate view of the cohort; [`StoreError::Empty`] on an empty
    /// store.
    pub fn summary(&self) -> Result<ClassSummary, StoreError> {
        statistics::summarize(&self.records)
    }

    /// Record with the highest overall mark (first among ties).
    pub fn best(&self) -> Result<&StudentRecord, StoreError> {
        statistics::best(&self.records)
    }

    /// Record with the lowest overall mark (first among ties).
    pub fn worst(&self) -> Result<&StudentRecord, StoreError> {
        statistics::worst(&self.records)
    }

    /// First record whose name matches exactly (case-sensitive).
    pub fn find_by_name(&self, name: &str) -> Result<&StudentRecord, StoreError> {
        self.records
            .iter()
            .find(|rec| rec.name == name)
            .ok_or_else(|| StoreError::NoSuchRecord(name.to_string()))
    }
}

fn parse_score(field: &str, raw: &str) -> Result<u32, StoreError> {
    raw.trim().parse().map_err(|_| bad_score(field, raw))
}
