//! Backing table definition and bootstrap.

use relkv_core::{StoreError, StoreResult};
use rusqlite::Connection;

/// Maximum key length accepted by the backing table, in characters.
///
/// Enforced by the engine through a CHECK constraint; an oversized key is
/// rejected by the statement that carries it, never truncated.
pub const MAX_KEY_LEN: usize = 256;

/// Idempotent creation statement for the backing table.
///
/// `id` exists only to satisfy the engine's rowid/primary-key conventions;
/// the logical identity of a row is its `key_digest`.
const CREATE_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS kvstore (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    key        TEXT NOT NULL CHECK (length(key) <= 256),
    key_digest TEXT NOT NULL UNIQUE,
    value      BLOB NOT NULL
)";

/// Ensures the backing table exists.
///
/// Safe to run on every open: the statement is a no-op against an
/// already-provisioned database.
///
/// # Errors
///
/// Returns [`StoreError::Schema`] if the engine rejects the creation
/// statement (for example, insufficient privileges on the database file).
pub(crate) fn bootstrap(conn: &Connection) -> StoreResult<()> {
    conn.execute_batch(CREATE_TABLE)
        .map_err(|err| StoreError::schema(err.to_string()))
}
