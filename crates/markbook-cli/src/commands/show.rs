//! The `markbook show` command.

use anyhow::Result;

use crate::commands::{open_store, record_table};
use crate::config::Config;

pub fn execute(config: &Config, name: &str) -> Result<()> {
    let store = open_store(config)?;
    let rec = store.find_by_name(name)?;
    println!("{}", record_table(std::slice::from_ref(rec)));
    Ok(())
}
