//! The `markbook set` command.

use anyhow::Result;

use markbook_core::model::UpdateField;

use crate::commands::open_store;
use crate::config::Config;

pub fn execute(config: &Config, key: &str, field: &str, value: &str) -> Result<()> {
    let field: UpdateField = field
        .parse()
        .map_err(|e: String| anyhow::anyhow!("{e} (expected coursework, exam, name, or id)"))?;

    let mut store = open_store(config)?;
    let updated = store.update(key, field, value)?;

    println!(
        "Updated '{}' ({}): coursework {}, exam {}, overall {}, {:.2}%, grade {}",
        updated.name,
        updated.id,
        updated.coursework,
        updated.exam,
        updated.overall,
        updated.percent,
        updated.grade
    );
    Ok(())
}
