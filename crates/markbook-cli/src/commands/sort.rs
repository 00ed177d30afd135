//! The `markbook sort` command.

use anyhow::Result;

use crate::commands::{open_store, record_table};
use crate::config::Config;

pub fn execute(config: &Config, descending: bool) -> Result<()> {
    let mut store = open_store(config)?;
    if store.is_empty() {
        println!("No records to sort.");
        return Ok(());
    }

    store.sort_by_name(!descending)?;
    println!(
        "Sorted {} record(s) by name, {}.",
        store.len(),
        if descending { "Z to A" } else { "A to Z" }
    );
    println!("{}", record_table(store.records()));
    Ok(())
}
