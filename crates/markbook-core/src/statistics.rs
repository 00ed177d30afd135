//! Cohort statistics over a set of student records.
//!
//! Free functions so they can be used against any record slice; the store
//! exposes them as queries over its own collection.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::grading::Grade;
use crate::model::StudentRecord;

/// Aggregate view of a cohort.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassSummary {
    /// Number of records.
    pub count: usize,
    /// Arithmetic mean of the percentage field.
    pub average_percent: f64,
    /// How many records fall into each grade bucket.
    pub grade_counts: BTreeMap<Grade, usize>,
}

/// Summarize a cohort. Fails with [`StoreError::Empty`] rather than divide
/// by zero.
pub fn summarize(records: &[StudentRecord]) -> Result<ClassSummary, StoreError> {
    if records.is_empty() {
        return Err(StoreError::Empty);
    }

    let total_percent: f64 = records.iter().map(|r| r.percent).sum();
    let mut grade_counts = BTreeMap::new();
    for rec in records {
        *grade_counts.entry(rec.grade).or_insert(0) += 1;
    }

    Ok(ClassSummary {
        count: records.len(),
        average_percent: total_percent / records.len() as f64,
        grade_counts,
    })
}

/// The record with the highest overall mark. Ties go to the first record
/// encountered in the current order.
pub fn best(records: &[StudentRecord]) -> Result<&StudentRecord, StoreError> {
    extreme(records, |candidate, current| candidate.overall > current.overall)
}

/// The record with the lowest overall mark. Ties go to the first record
/// encountered in the current order.
pub fn worst(records: &[StudentRecord]) -> Result<&StudentRecord, StoreError> {
    extreme(records, |candidate, current| candidate.overall < current.overall)
}

fn extreme<'a>(
    records: &'a [StudentRecord],
    beats: impl Fn(&StudentRecord, &StudentRecord) -> bool,
) -> Result<&'a StudentRecord, StoreError> {
    let (first, rest) = records.split_first().ok_or(StoreError::Empty)?;
    // Strict comparison keeps the first-encountered record on ties.
    Ok(rest.iter().fold(first, |current, candidate| {
        if beats(candidate, current) {
            candidate
        } else {
            current
        }
    }))
}
