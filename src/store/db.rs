//! Database Connection and Schema
//!
//! Opens the SQLite database and applies the fixed schema. The schema is
//! version 1 and has never changed, so there is no migration machinery:
//! a fresh database gets the table and the version stamp, anything else
//! must already be at version 1.

use std::fs;
use std::path::Path;

use rusqlite::Connection;
use tracing::debug;

use crate::store::error::{StoreError, StoreResult};

/// Schema version stamped into `PRAGMA user_version`.
pub(crate) const SCHEMA_VERSION: i32 = 1;

/// The shopping-list table. `AUTOINCREMENT` keeps ids monotonic and never
/// reused, even across deletes.
const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS shopping_items (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    name     TEXT NOT NULL,
    date     TEXT,
    quantity INTEGER NOT NULL DEFAULT 1
);
";

/// Open or create the database file, creating its parent directory first.
pub(crate) fn open_file(path: &Path) -> StoreResult<Connection> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir).map_err(|source| StoreError::DataDir {
                path: dir.to_owned(),
                source,
            })?;
        }
    }

    let conn = Connection::open(path).map_err(|source| StoreError::Open {
        path: path.to_owned(),
        source,
    })?;
    init_connection(&conn)?;
    debug!("opened database at {}", path.display());
    Ok(conn)
}

/// Create an in-memory database (for tests).
pub(crate) fn open_memory() -> StoreResult<Connection> {
    let conn = Connection::open_in_memory()?;
    init_connection(&conn)?;
    debug!("created in-memory database");
    Ok(conn)
}

fn init_connection(conn: &Connection) -> StoreResult<()> {
    // The version stamp is checked before anything else; a database this
    // build does not know goes back unmodified, journal mode included.
    let found: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    if found != 0 && found != SCHEMA_VERSION {
        return Err(StoreError::SchemaVersion {
            expected: SCHEMA_VERSION,
            found,
        });
    }

    configure_pragmas(conn)?;

    if found == 0 {
        conn.execute_batch(SCHEMA_SQL)?;
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
        debug!("created schema at version {SCHEMA_VERSION}");
    }
    Ok(())
}

fn configure_pragmas(conn: &Connection) -> StoreResult<()> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA foreign_keys = ON;
        ",
    )?;
    Ok(())
}
