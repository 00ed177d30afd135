//! The `markbook remove` command.

use anyhow::Result;

use crate::commands::open_store;
use crate::config::Config;

pub fn execute(config: &Config, key: &str) -> Result<()> {
    let mut store = open_store(config)?;
    let removed = store.remove(key)?;

    if removed == 0 {
        println!("No matching record found for '{key}'.");
    } else {
        println!("Removed {removed} record(s) matching '{key}'.");
    }
    Ok(())
}
