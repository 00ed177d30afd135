//! CLI configuration.
//!
//! A small TOML file naming the data files the commands work against. The
//! config itself is optional: no `markbook.toml` means the defaults below.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Config file looked for in the working directory when `--config` is not
/// given.
pub const DEFAULT_CONFIG_FILE: &str = "markbook.toml";

/// Paths the CLI operates on.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// The marks file backing the record store.
    #[serde(default = "default_marks_file")]
    pub marks_file: PathBuf,
    /// The joke file for `markbook joke`.
    #[serde(default = "default_jokes_file")]
    pub jokes_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marks_file: default_marks_file(),
            jokes_file: default_jokes_file(),
        }
    }
}

fn default_marks_file() -> PathBuf {
    PathBuf::from("studentMarks.txt")
}

fn default_jokes_file() -> PathBuf {
    PathBuf::from("jokes.txt")
}

impl Config {
    /// Load an explicit config file, or `markbook.toml` from the working
    /// directory if present, or the defaults. An explicit path that cannot
    /// be read is an error; a missing default file is not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.marks_file, PathBuf::from("studentMarks.txt"));
        assert_eq!(config.jokes_file, PathBuf::from("jokes.txt"));
    }

    #[test]
    fn parse_full_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("markbook.toml");
        std::fs::write(&path, "marks_file = \"class-a.txt\"\njokes_file = \"funny.txt\"\n")
            .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.marks_file, PathBuf::from("class-a.txt"));
        assert_eq!(config.jokes_file, PathBuf::from("funny.txt"));
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("markbook.toml");
        std::fs::write(&path, "marks_file = \"class-a.txt\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.marks_file, PathBuf::from("class-a.txt"));
        assert_eq!(config.jokes_file, PathBuf::from("jokes.txt"));
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(Some(&dir.path().join("absent.toml"))).is_err());
    }
}
