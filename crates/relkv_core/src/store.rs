//! Store trait definition.

use crate::error::StoreResult;

/// A point-operation key-value store.
///
/// Stores map string keys to **opaque byte values**. No interpretation,
/// encoding, or partial update is applied to values; a `set` replaces the
/// stored bytes wholesale.
///
/// # Invariants
///
/// - At most one live entry exists per distinct key (upsert semantics)
/// - `get` after `set` returns exactly the bytes that were stored
/// - Absence is reported as [`StoreError::NotFound`], never as an empty value
/// - `delete` of an absent key succeeds
/// - Handles must be `Send + Sync` for concurrent access
///
/// # Concurrency
///
/// Operations are synchronous and may block for a backend round trip.
/// Concurrent `set` calls for the same key serialize at the backend such
/// that the final stored value is exactly one of the submitted values,
/// never a torn mix. A concurrent `get` observes either the pre- or
/// post-mutation state.
///
/// # Implementors
///
/// - [`super::MemoryStore`] - For testing
/// - `relkv_sqlite::SqliteStore` - For persistent storage
///
/// [`StoreError::NotFound`]: crate::StoreError::NotFound
pub trait KvStore: Send + Sync + std::fmt::Debug {
    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// This is a single atomic insert-or-update; concurrent calls for the
    /// same key cannot produce duplicate entries.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StoreError::Closed`] on a closed handle, or
    /// [`crate::StoreError::Backend`] for any backend failure (including
    /// rejection of oversized keys or values - this layer never truncates).
    fn set(&self, key: &str, value: &[u8]) -> StoreResult<()>;

    /// Returns the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StoreError::NotFound`] when no entry exists,
    /// [`crate::StoreError::Closed`] on a closed handle, and
    /// [`crate::StoreError::Backend`] for any other backend failure.
    fn get(&self, key: &str) -> StoreResult<Vec<u8>>;

    /// Removes the entry stored under `key`, if any.
    ///
    /// Deleting an absent key is success, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StoreError::Closed`] on a closed handle, or
    /// [`crate::StoreError::Backend`] if the backend fails to execute
    /// the removal.
    fn delete(&self, key: &str) -> StoreResult<()>;

    /// Releases the underlying backend session.
    ///
    /// Idempotent: closing an already-closed handle is a no-op returning
    /// `Ok(())`. Operations after close fail with
    /// [`crate::StoreError::Closed`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::StoreError::Backend`] if the backend reports a
    /// failure while releasing the session.
    fn close(&self) -> StoreResult<()>;
}
