//! Store Error Types
//!
//! Error kinds for the item store. Store operations are expected to
//! succeed under normal device conditions; everything here is the backing
//! engine misbehaving, not the caller.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors that can occur during item store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing engine cannot be reached: the connection lock was
    /// poisoned or the storage task was torn down mid-flight.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Could not create the directory that holds the database file.
    #[error("failed to create data directory '{path}': {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Could not open the database file.
    #[error("failed to open database at '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// The database carries a schema version this build does not know.
    #[error("schema version mismatch: expected {expected}, found {found}")]
    SchemaVersion { expected: i32, found: i32 },

    /// Any other SQLite failure.
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}
