//! The `markbook joke` command.

use anyhow::{Context, Result};

use markbook_jokes::JokeBook;

use crate::config::Config;

pub fn execute(config: &Config) -> Result<()> {
    let book = JokeBook::load(&config.jokes_file)?;
    let mut rng = rand::thread_rng();
    let joke = book.pick(&mut rng).context("joke book is empty")?;

    println!("{}", joke.setup);
    println!();
    println!("{}", joke.punchline);
    Ok(())
}
