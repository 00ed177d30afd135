//! The `markbook list` command.

use anyhow::Result;

use crate::commands::{open_store, record_table};
use crate::config::Config;

pub fn execute(config: &Config) -> Result<()> {
    let store = open_store(config)?;
    if store.is_empty() {
        println!("No student records available.");
        return Ok(());
    }

    println!("{}", record_table(store.records()));

    let summary = store.summary()?;
    println!("\nTotal Students: {}", summary.count);
    println!("Average Percentage: {:.2}%", summary.average_percent);

    let grades: Vec<String> = summary
        .grade_counts
        .iter()
        .map(|(grade, count)| format!("{grade}: {count}"))
        .collect();
    println!("Grades: {}", grades.join("  "));

    Ok(())
}
