//! The `markbook add` command.

use anyhow::Result;

use markbook_core::model::NewRecord;

use crate::commands::open_store;
use crate::config::Config;

pub fn execute(
    config: &Config,
    id: &str,
    name: &str,
    coursework: &[String],
    exam: &str,
) -> Result<()> {
    // clap enforces num_args = 3; this guards direct callers.
    let [c1, c2, c3] = coursework else {
        anyhow::bail!("expected exactly three coursework scores");
    };

    let mut store = open_store(config)?;
    let added = store.add(NewRecord {
        id,
        name,
        coursework: [c1.as_str(), c2.as_str(), c3.as_str()],
        exam,
    })?;

    println!(
        "Added '{}' ({}): overall {}, {:.2}%, grade {}",
        added.name, added.id, added.overall, added.percent, added.grade
    );
    Ok(())
}
