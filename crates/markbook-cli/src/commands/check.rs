//! The `markbook check` command.

use anyhow::Result;

use markbook_core::format;

use crate::config::Config;

pub fn execute(config: &Config) -> Result<()> {
    let text = match std::fs::read_to_string(&config.marks_file) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            println!("Marks file {} does not exist.", config.marks_file.display());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let records = format::parse_marks(&text)?;
    println!(
        "Marks file: {} ({} record(s))",
        config.marks_file.display(),
        records.len()
    );

    let warnings = format::audit(&text)?;
    for w in &warnings {
        let prefix = w
            .record_id
            .as_ref()
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Marks file is clean.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
