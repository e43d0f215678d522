//! SQLite-backed store implementation.

use std::time::Duration;

use parking_lot::Mutex;
use relkv_core::{Driver, KvStore, StoreError, StoreResult};
use rusqlite::{params, Connection};
use tracing::{debug, trace};

use crate::digest::key_digest;
use crate::schema;

/// How long a statement waits on a locked database before failing.
///
/// Lets concurrent writers from other connections queue behind the engine's
/// lock instead of surfacing an immediate busy error.
const BUSY_TIMEOUT: Duration = Duration::from_millis(5_000);

/// A key-value store persisted in a single SQLite table.
///
/// One handle owns one connection, guarded by a mutex so the handle can be
/// shared across threads; in-process callers serialize on the mutex while
/// cross-connection write races resolve inside the engine's atomic upsert.
///
/// # Durability
///
/// Every operation is a single auto-committed statement; there is no
/// write buffering in this layer.
///
/// # Example
///
/// ```no_run
/// use relkv_core::KvStore;
/// use relkv_sqlite::SqliteStore;
///
/// let store = SqliteStore::open("relkv.db").unwrap();
/// store.set("foo", b"bar").unwrap();
/// store.close().unwrap();
/// ```
#[derive(Debug)]
pub struct SqliteStore {
    /// `None` once the handle has been closed.
    conn: Mutex<Option<Connection>>,
}

impl SqliteStore {
    /// Opens a store backed by the database at `info`.
    ///
    /// `info` is whatever SQLite natively accepts: a filesystem path
    /// (created if missing) or `:memory:`. The backing table is provisioned
    /// on every open with create-if-not-exists semantics, so reopening an
    /// already-provisioned database is safe.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the database cannot be opened,
    /// and [`StoreError::Schema`] if table creation fails for a reason other
    /// than "already exists". On bootstrap failure the freshly opened
    /// session is released before the error returns.
    pub fn open(info: &str) -> StoreResult<Self> {
        let conn = Connection::open(info)
            .map_err(|err| StoreError::connection(err.to_string()))?;
        if let Err(err) = Self::provision(&conn) {
            let _ = conn.close();
            return Err(err);
        }
        debug!(info, "opened sqlite store");
        Ok(Self {
            conn: Mutex::new(Some(conn)),
        })
    }

    fn provision(conn: &Connection) -> StoreResult<()> {
        conn.busy_timeout(BUSY_TIMEOUT)
            .map_err(|err| StoreError::connection(err.to_string()))?;
        schema::bootstrap(conn)
    }
}

impl KvStore for SqliteStore {
    fn set(&self, key: &str, value: &[u8]) -> StoreResult<()> {
        let guard = self.conn.lock();
        let conn = guard.as_ref().ok_or(StoreError::Closed)?;
        trace!(key, value_len = value.len(), "set");
        conn.execute(
            "INSERT INTO kvstore (key, key_digest, value) VALUES (?1, ?2, ?3) \
             ON CONFLICT(key_digest) DO UPDATE SET value = excluded.value",
            params![key, key_digest(key), value],
        )
        .map_err(StoreError::backend)?;
        Ok(())
    }

    fn get(&self, key: &str) -> StoreResult<Vec<u8>> {
        let guard = self.conn.lock();
        let conn = guard.as_ref().ok_or(StoreError::Closed)?;
        trace!(key, "get");
        let (stored_key, value): (String, Vec<u8>) = conn
            .query_row(
                "SELECT key, value FROM kvstore WHERE key_digest = ?1",
                params![key_digest(key)],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .map_err(map_lookup_error)?;
        // The digest is the physical uniqueness constraint, not the logical
        // one: verify the raw key so a digest collision surfaces as an error
        // instead of another key's value.
        if stored_key != key {
            return Err(StoreError::backend_message(format!(
                "digest collision: row for digest {} holds key {:?}, not {:?}",
                key_digest(key),
                stored_key,
                key
            )));
        }
        Ok(value)
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        let guard = self.conn.lock();
        let conn = guard.as_ref().ok_or(StoreError::Closed)?;
        trace!(key, "delete");
        // Zero affected rows is success: deleting an absent key is a no-op.
        conn.execute(
            "DELETE FROM kvstore WHERE key_digest = ?1",
            params![key_digest(key)],
        )
        .map_err(StoreError::backend)?;
        Ok(())
    }

    fn close(&self) -> StoreResult<()> {
        let mut guard = self.conn.lock();
        match guard.take() {
            Some(conn) => match conn.close() {
                Ok(()) => {
                    debug!("closed sqlite store");
                    Ok(())
                }
                Err((_, err)) => Err(StoreError::backend(err)),
            },
            // Already closed.
            None => Ok(()),
        }
    }
}

/// The single classification step this adapter performs: the engine's
/// "no rows" condition becomes the absence sentinel, every other engine
/// error passes through with its diagnostic intact.
fn map_lookup_error(err: rusqlite::Error) -> StoreError {
    match err {
        rusqlite::Error::QueryReturnedNoRows => StoreError::NotFound,
        other => StoreError::backend(other),
    }
}

/// [`Driver`] implementation that opens [`SqliteStore`] handles.
#[derive(Debug, Default)]
pub struct SqliteDriver;

impl Driver for SqliteDriver {
    fn open(&self, info: &str) -> StoreResult<Box<dyn KvStore>> {
        Ok(Box::new(SqliteStore::open(info)?))
    }
}
