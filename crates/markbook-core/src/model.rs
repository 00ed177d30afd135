//! Core data model types for markbook.
//!
//! A [`StudentRecord`] is a fixed-shape struct: the three derived fields are
//! always recomputed through [`crate::grading`] and never set independently.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::grading::{self, Grade};

/// One student's marks, as held by the store and rendered by callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentRecord {
    /// User-supplied identifier. Uniqueness is NOT enforced.
    pub id: String,
    /// Display name. Record keys match it case-insensitively.
    pub name: String,
    /// Sum of the three coursework components. The individual components
    /// are not retained.
    pub coursework: u32,
    /// Exam score.
    pub exam: u32,
    /// Derived: coursework + exam.
    pub overall: u32,
    /// Derived: overall as a percentage of the maximum marks.
    pub percent: f64,
    /// Derived: letter grade for the percentage.
    pub grade: Grade,
}

impl StudentRecord {
    /// Build a record, computing the derived fields.
    pub fn new(id: impl Into<String>, name: impl Into<String>, coursework: u32, exam: u32) -> Self {
        let marks = grading::compute(coursework, exam);
        Self {
            id: id.into(),
            name: name.into(),
            coursework,
            exam,
            overall: marks.overall,
            percent: marks.percent,
            grade: marks.grade,
        }
    }

    /// Recompute `overall`, `percent`, and `grade` after a score change.
    pub(crate) fn rescore(&mut self) {
        let marks = grading::compute(self.coursework, self.exam);
        self.overall = marks.overall;
        self.percent = marks.percent;
        self.grade = marks.grade;
    }

    /// Record-key matching: the key equals the name case-insensitively, or
    /// the id exactly. Both update and remove use this rule.
    pub fn matches_key(&self, key: &str) -> bool {
        self.name.eq_ignore_ascii_case(key) || self.id == key
    }
}

/// Raw, unvalidated input for a new record. Score fields are kept as strings
/// so the store owns the parse-or-reject decision.
#[derive(Debug, Clone)]
pub struct NewRecord<'a> {
    pub id: &'a str,
    pub name: &'a str,
    /// The three coursework component scores.
    pub coursework: [&'a str; 3],
    pub exam: &'a str,
}

/// Which field an update targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateField {
    /// Replaces the coursework total (not a single component).
    Coursework,
    Exam,
    Name,
    Id,
}

impl fmt::Display for UpdateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateField::Coursework => write!(f, "coursework"),
            UpdateField::Exam => write!(f, "exam"),
            UpdateField::Name => write!(f, "name"),
            UpdateField::Id => write!(f, "id"),
        }
    }
}

impl FromStr for UpdateField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "coursework" => Ok(UpdateField::Coursework),
            "exam" => Ok(UpdateField::Exam),
            "name" => Ok(UpdateField::Name),
            "id" => Ok(UpdateField::Id),
            other => Err(format!("unknown field: {other}")),
        }
    }
}
