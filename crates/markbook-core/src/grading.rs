//! Grading policy: derives overall marks, percentage, and letter grade.
//!
//! Pure functions with no state; the store calls [`compute`] on every load,
//! add, and score update so derived fields can never drift from the inputs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum achievable marks: three coursework components plus the exam.
/// The percentage denominator is fixed at this value and individual scores
/// are not validated against it.
pub const MAX_MARKS: u32 = 160;

/// Letter grade buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::A => write!(f, "A"),
            Grade::B => write!(f, "B"),
            Grade::C => write!(f, "C"),
            Grade::D => write!(f, "D"),
            Grade::F => write!(f, "F"),
        }
    }
}

/// The derived portion of a student record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marks {
    /// Coursework total plus exam score.
    pub overall: u32,
    /// Overall expressed as a fraction of [`MAX_MARKS`], times 100.
    pub percent: f64,
    /// Letter grade for the percentage.
    pub grade: Grade,
}

/// Compute all derived fields from a coursework total and an exam score.
pub fn compute(coursework: u32, exam: u32) -> Marks {
    let overall = coursework + exam;
    let percent = f64::from(overall) / f64::from(MAX_MARKS) * 100.0;
    Marks {
        overall,
        percent,
        grade: grade_for(percent),
    }
}

/// Map a percentage onto a letter grade.
///
/// Thresholds are inclusive lower bounds checked in descending order. There
/// is no upper bound: a percentage above 100 still grades as A.
pub fn grade_for(percent: f64) -> Grade {
    if percent >= 70.0 {
        Grade::A
    } else if percent >= 60.0 {
        Grade::B
    } else if percent >= 50.0 {
        Grade::C
    } else if percent >= 40.0 {
        Grade::D
    } else {
        Grade::F
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_overall_and_percent() {
        let marks = compute(60, 40);
        assert_eq!(marks.overall, 100);
        assert!((marks.percent - 62.5).abs() < f64::EPSILON);
        assert_eq!(marks.grade, Grade::B);
    }

    #[test]
    fn grade_thresholds() {
        assert_eq!(grade_for(100.0), Grade::A);
        assert_eq!(grade_for(70.0), Grade::A);
        assert_eq!(grade_for(69.999), Grade::B);
        assert_eq!(grade_for(60.0), Grade::B);
        assert_eq!(grade_for(50.0), Grade::C);
        assert_eq!(grade_for(40.0), Grade::D);
        assert_eq!(grade_for(39.999), Grade::F);
        assert_eq!(grade_for(0.0), Grade::F);
    }

    #[test]
    fn no_upper_bound_on_percent() {
        // Scores are not validated against MAX_MARKS, so an "impossible"
        // overall still grades into the nearest bucket.
        let marks = compute(200, 100);
        assert!(marks.percent > 100.0);
        assert_eq!(marks.grade, Grade::A);
    }

    #[test]
    fn full_marks() {
        let marks = compute(120, 40);
        assert_eq!(marks.overall, MAX_MARKS);
        assert!((marks.percent - 100.0).abs() < f64::EPSILON);
        assert_eq!(marks.grade, Grade::A);
    }

    #[test]
    fn zero_marks() {
        let marks = compute(0, 0);
        assert_eq!(marks.overall, 0);
        assert_eq!(marks.percent, 0.0);
        assert_eq!(marks.grade, Grade::F);
    }

    #[test]
    fn grade_display() {
        assert_eq!(Grade::A.to_string(), "A");
        assert_eq!(Grade::F.to_string(), "F");
    }
}
