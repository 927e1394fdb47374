//! Configuration
//!
//! Environment-driven settings with defaults. `SHOPNOTES_DB` overrides
//! where the database lives; otherwise it lands in the platform's
//! per-user data directory.

use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the SQLite database file.
    pub db_path: PathBuf,
}

impl Config {
    /// Build the configuration from the environment.
    pub fn from_env() -> Self {
        let db_path = env::var_os("SHOPNOTES_DB")
            .map(PathBuf::from)
            .unwrap_or_else(default_db_path);
        Self { db_path }
    }
}

fn default_db_path() -> PathBuf {
    data_dir().join("shopnotes").join("shopnotes.db")
}

/// Per-user data directory, best effort across platforms.
fn data_dir() -> PathBuf {
    if let Some(dir) = env::var_os("XDG_DATA_HOME") {
        return PathBuf::from(dir);
    }
    if let Some(dir) = env::var_os("APPDATA") {
        return PathBuf::from(dir);
    }
    if let Some(home) = env::var_os("HOME") {
        return PathBuf::from(home).join(".local").join("share");
    }
    PathBuf::from(".")
}
