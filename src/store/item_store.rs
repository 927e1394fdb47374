//! Item Store
//!
//! The durable shopping-list table and its operations. Every effective
//! mutation republishes the complete item set to subscribers, so a
//! screen never reads rows directly.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{params, Connection};
use tokio::sync::broadcast;
use tokio::task;
use tracing::debug;

use crate::domain::ShoppingItem;
use crate::store::db;
use crate::store::error::{StoreError, StoreResult};
use crate::store::subscription::ItemSubscription;

/// Capacity of the snapshot channel. Every emission is the complete set,
/// so a subscriber that falls this far behind just resumes from a newer
/// snapshot.
const FEED_CAPACITY: usize = 64;

/// Handle to the shopping-list store.
///
/// Cloning is cheap; all clones share one connection. A handle is injected
/// wherever store access is needed; there is no global instance.
#[derive(Debug, Clone)]
pub struct ItemStore {
    inner: Arc<StoreInner>,
}

#[derive(Debug)]
struct StoreInner {
    conn: Mutex<Connection>,
    feed_tx: broadcast::Sender<Vec<ShoppingItem>>,
}

impl ItemStore {
    /// Open or create the store at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        Self::from_connection(db::open_file(path.as_ref())?)
    }

    /// Create an in-memory store (for tests).
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::from_connection(db::open_memory()?)
    }

    fn from_connection(conn: Connection) -> StoreResult<Self> {
        let (feed_tx, _) = broadcast::channel(FEED_CAPACITY);
        Ok(Self {
            inner: Arc::new(StoreInner {
                conn: Mutex::new(conn),
                feed_tx,
            }),
        })
    }

    /// Insert a new item; the store assigns the id.
    ///
    /// A row identical in name, date and quantity to an existing one is
    /// silently ignored, and nothing reports whether the insert took
    /// effect. Runs on the blocking pool so the calling task never waits
    /// on SQLite.
    pub async fn insert(
        &self,
        name: String,
        date: Option<String>,
        quantity: i32,
    ) -> StoreResult<()> {
        let inner = Arc::clone(&self.inner);
        run_blocking(move || inner.insert_row(&name, date.as_deref(), quantity)).await
    }

    /// Delete the row matching `item` exactly (id, name, date and
    /// quantity all equal).
    ///
    /// Deleting a row that is not present is a no-op, not an error.
    pub async fn delete(&self, item: ShoppingItem) -> StoreResult<()> {
        let inner = Arc::clone(&self.inner);
        run_blocking(move || inner.delete_row(&item)).await
    }

    /// Subscribe to the live item set.
    ///
    /// The subscription yields the current snapshot immediately, then the
    /// full set again after every effective insert or delete, in commit
    /// order.
    pub fn subscribe(&self) -> StoreResult<ItemSubscription> {
        // Taking the lock first means no emission can slip between the
        // receiver registration and the initial snapshot.
        let conn = self.inner.lock_conn()?;
        let rx = self.inner.feed_tx.subscribe();
        let initial = all_items(&conn)?;
        Ok(ItemSubscription::new(initial, rx))
    }
}

/// Dispatch a store operation to the blocking pool.
async fn run_blocking<F>(op: F) -> StoreResult<()>
where
    F: FnOnce() -> StoreResult<()> + Send + 'static,
{
    task::spawn_blocking(op)
        .await
        .map_err(|e| StoreError::Unavailable(format!("storage task aborted: {e}")))?
}

impl StoreInner {
    fn lock_conn(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| StoreError::Unavailable("connection lock poisoned".to_string()))
    }

    fn insert_row(&self, name: &str, date: Option<&str>, quantity: i32) -> StoreResult<()> {
        let conn = self.lock_conn()?;
        // `date IS ?2` compares NULL dates as equal, so a duplicate with
        // no date is ignored like any other duplicate.
        let inserted = conn.execute(
            "INSERT INTO shopping_items (name, date, quantity)
             SELECT ?1, ?2, ?3
             WHERE NOT EXISTS (
                 SELECT 1 FROM shopping_items
                 WHERE name = ?1 AND date IS ?2 AND quantity = ?3
             )",
            params![name, date, quantity],
        )?;

        if inserted > 0 {
            debug!(name, quantity, "inserted item");
            self.publish(&conn)?;
        }
        Ok(())
    }

    fn delete_row(&self, item: &ShoppingItem) -> StoreResult<()> {
        let conn = self.lock_conn()?;
        let removed = conn.execute(
            "DELETE FROM shopping_items
             WHERE id = ?1 AND name = ?2 AND date IS ?3 AND quantity = ?4",
            params![item.id, item.name, item.date, item.quantity],
        )?;

        if removed > 0 {
            debug!(id = item.id, "deleted item");
            self.publish(&conn)?;
        }
        Ok(())
    }

    /// Republish the full item set. Runs while the connection lock is
    /// held so emissions reach the channel in commit order.
    fn publish(&self, conn: &Connection) -> StoreResult<()> {
        let items = all_items(conn)?;
        // Nobody listening is fine.
        let _ = self.feed_tx.send(items);
        Ok(())
    }
}

/// Read the complete table. List order is not part of the contract.
fn all_items(conn: &Connection) -> StoreResult<Vec<ShoppingItem>> {
    let mut stmt = conn.prepare_cached("SELECT id, name, date, quantity FROM shopping_items")?;
    let rows = stmt.query_map([], row_to_item)?;
    let mut items = Vec::new();
    for row in rows {
        items.push(row?);
    }
    Ok(items)
}

fn row_to_item(row: &rusqlite::Row<'_>) -> rusqlite::Result<ShoppingItem> {
    Ok(ShoppingItem {
        id: row.get(0)?,
        name: row.get(1)?,
        date: row.get(2)?,
        quantity: row.get(3)?,
    })
}
