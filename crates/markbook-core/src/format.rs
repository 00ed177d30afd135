//! Marks-file codec.
//!
//! The on-disk format is line-oriented UTF-8 text. The first line is a
//! record count (informational only; it is written on save but never
//! validated on load). Every following non-blank line is one record:
//!
//! ```text
//! id,name,c1,c2,c3,exam
//! ```
//!
//! Six comma-separated fields with no quoting or escaping, so a name must
//! not contain a comma. On save the coursework total is split back into
//! three equal parts with integer division; totals not divisible by three
//! lose the remainder on a save/load round trip. That loss is part of the
//! format contract and [`audit`] flags records it will affect.

use std::collections::HashSet;
use std::path::Path;

use crate::error::StoreError;
use crate::model::StudentRecord;

/// Parse the contents of a marks file.
///
/// Blank lines are skipped. Any line that does not split into exactly six
/// fields, or whose score fields do not parse as non-negative integers,
/// fails the whole load with [`StoreError::Format`]; there is no per-line
/// recovery.
pub fn parse_marks(text: &str) -> Result<Vec<StudentRecord>, StoreError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let Some((count_line, header)) = lines.next() else {
        return Ok(Vec::new());
    };
    let _declared: usize = header.parse().map_err(|_| StoreError::Format {
        line: count_line,
        reason: format!("expected a record count, found '{header}'"),
    })?;

    let mut records = Vec::new();
    for (line_no, line) in lines {
        records.push(parse_record_line(line_no, line)?);
    }
    Ok(records)
}

fn parse_record_line(line_no: usize, line: &str) -> Result<StudentRecord, StoreError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [id, name, c1, c2, c3, exam] = fields.as_slice() else {
        return Err(StoreError::Format {
            line: line_no,
            reason: format!("expected 6 comma-separated fields, found {}", fields.len()),
        });
    };

    let score = |field: &str, raw: &str| -> Result<u32, StoreError> {
        raw.parse().map_err(|_| StoreError::Format {
            line: line_no,
            reason: format!("{field} score '{raw}' is not a non-negative integer"),
        })
    };

    let coursework = score("coursework 1", c1)? + score("coursework 2", c2)? + score("coursework 3", c3)?;
    let exam = score("exam", exam)?;
    Ok(StudentRecord::new(*id, *name, coursework, exam))
}

/// Render records into marks-file text. An empty collection renders as a
/// valid zero-count file.
pub fn render_marks(records: &[StudentRecord]) -> String {
    let mut out = format!("{}\n", records.len());
    for rec in records {
        let third = rec.coursework / 3;
        out.push_str(&format!(
            "{},{},{},{},{},{}\n",
            rec.id, rec.name, third, third, third, rec.exam
        ));
    }
    out
}

/// Read and parse a marks file.
///
/// A missing file is [`StoreError::FileNotFound`] so callers can choose to
/// continue with an empty store instead of failing.
pub fn load_marks_file(path: &Path) -> Result<Vec<StudentRecord>, StoreError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(StoreError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };
    let records = parse_marks(&text)?;
    tracing::debug!(path = %path.display(), records = records.len(), "loaded marks file");
    Ok(records)
}

/// Write records to a marks file, replacing its contents entirely.
pub fn write_marks_file(path: &Path, records: &[StudentRecord]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, render_marks(records))?;
    tracing::debug!(path = %path.display(), records = records.len(), "wrote marks file");
    Ok(())
}

/// A warning from a marks-file audit.
#[derive(Debug, Clone)]
pub struct AuditWarning {
    /// The record id the warning refers to, if any.
    pub record_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Audit marks-file text for issues that load silently but bite later.
///
/// Duplicate ids are warned about, not rejected: the store deliberately
/// does not enforce id uniqueness, and update/remove treat "name or id" as
/// one key space.
pub fn audit(text: &str) -> Result<Vec<AuditWarning>, StoreError> {
    let records = parse_marks(text)?;
    let mut warnings = Vec::new();

    // Header count vs actual record count
    if let Some(header) = text.lines().map(str::trim).find(|l| !l.is_empty()) {
        if let Ok(declared) = header.parse::<usize>() {
            if declared != records.len() {
                warnings.push(AuditWarning {
                    record_id: None,
                    message: format!(
                        "header declares {declared} record(s) but file contains {}",
                        records.len()
                    ),
                });
            }
        }
    }

    // Duplicate ids
    let mut seen_ids = HashSet::new();
    for rec in &records {
        if !seen_ids.insert(rec.id.as_str()) {
            warnings.push(AuditWarning {
                record_id: Some(rec.id.clone()),
                message: format!("duplicate id: {}", rec.id),
            });
        }
    }

    // Coursework totals the save split will truncate
    for rec in &records {
        if rec.coursework % 3 != 0 {
            warnings.push(AuditWarning {
                record_id: Some(rec.id.clone()),
                message: format!(
                    "coursework total {} is not divisible by 3 and will lose {} mark(s) on save",
                    rec.coursework,
                    rec.coursework % 3
                ),
            });
        }
    }

    Ok(warnings)
}
