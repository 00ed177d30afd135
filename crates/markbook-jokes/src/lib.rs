//! markbook-jokes — Joke file loading and random selection.
//!
//! The joke file is UTF-8 text with one joke per line, setup and punchline
//! separated by a single `|`. Lines that don't split into two non-empty
//! parts are skipped rather than failing the load, matching how sloppy
//! these files are in practice.

use std::path::{Path, PathBuf};

use rand::Rng;
use thiserror::Error;

/// Errors from loading a joke file.
#[derive(Debug, Error)]
pub enum JokeError {
    /// The joke file does not exist.
    #[error("joke file not found: {0}")]
    FileNotFound(PathBuf),

    /// The file exists but yielded no usable jokes.
    #[error("no jokes found in {0}")]
    Empty(PathBuf),

    /// An underlying I/O failure.
    #[error("joke file I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A setup/punchline pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Joke {
    pub setup: String,
    pub punchline: String,
}

/// A loaded collection of jokes.
#[derive(Debug, Clone)]
pub struct JokeBook {
    jokes: Vec<Joke>,
}

impl JokeBook {
    /// Load a joke file. A missing file is [`JokeError::FileNotFound`]; a
    /// file with no parseable jokes is [`JokeError::Empty`].
    pub fn load(path: &Path) -> Result<Self, JokeError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(JokeError::FileNotFound(path.to_path_buf()));
            }
            Err(e) => return Err(e.into()),
        };

        let book = Self::parse(&text);
        if book.is_empty() {
            return Err(JokeError::Empty(path.to_path_buf()));
        }
        tracing::debug!(path = %path.display(), jokes = book.len(), "loaded joke file");
        Ok(book)
    }

    /// Parse joke text, skipping malformed lines.
    pub fn parse(text: &str) -> Self {
        let mut jokes = Vec::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match line.split_once('|') {
                Some((setup, punchline))
                    if !setup.trim().is_empty() && !punchline.trim().is_empty() =>
                {
                    jokes.push(Joke {
                        setup: setup.trim().to_string(),
                        punchline: punchline.trim().to_string(),
                    });
                }
                _ => tracing::debug!(line, "skipping malformed joke line"),
            }
        }
        Self { jokes }
    }

    pub fn jokes(&self) -> &[Joke] {
        &self.jokes
    }

    pub fn len(&self) -> usize {
        self.jokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jokes.is_empty()
    }

    /// Pick a random joke, or `None` from an empty book.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> Option<&Joke> {
        if self.jokes.is_empty() {
            return None;
        }
        Some(&self.jokes[rng.gen_range(0..self.jokes.len())])
    }
}
