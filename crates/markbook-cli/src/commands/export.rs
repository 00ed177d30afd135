//! The `markbook export` command.

use std::path::Path;

use anyhow::Result;

use markbook_core::report::ClassReport;

use crate::commands::open_store;
use crate::config::Config;

pub fn execute(config: &Config, output: &Path) -> Result<()> {
    let store = open_store(config)?;
    let report = ClassReport::from_store(&store)?;
    report.save_json(output)?;

    println!(
        "Wrote report for {} record(s) to {}",
        report.records.len(),
        output.display()
    );
    Ok(())
}
