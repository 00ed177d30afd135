//! The `markbook best` and `markbook worst` commands.

use anyhow::Result;

use crate::commands::{open_store, record_table};
use crate::config::Config;

#[derive(Debug, Clone, Copy)]
pub enum Which {
    Best,
    Worst,
}

pub fn execute(config: &Config, which: Which) -> Result<()> {
    let store = open_store(config)?;
    let (label, rec) = match which {
        Which::Best => ("Highest", store.best()?),
        Which::Worst => ("Lowest", store.worst()?),
    };

    println!("{label} scorer:");
    println!("{}", record_table(std::slice::from_ref(rec)));
    Ok(())
}
