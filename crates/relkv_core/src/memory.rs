//! In-memory store for testing.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::registry::Driver;
use crate::store::KvStore;

/// An in-memory key-value store.
///
/// This store keeps all entries in a process-local map and is suitable for:
/// - Unit tests
/// - Integration tests
/// - Ephemeral stores that don't need persistence
///
/// # Thread Safety
///
/// This store is thread-safe and can be shared across threads. A closed
/// store stays closed; `close` is idempotent.
///
/// # Example
///
/// ```rust
/// use relkv_core::{KvStore, MemoryStore};
///
/// let store = MemoryStore::new();
/// store.set("foo", b"bar").unwrap();
/// assert_eq!(store.get("foo").unwrap(), b"bar");
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// `None` once the store has been closed.
    entries: RwLock<Option<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    /// Creates a new empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Some(HashMap::new())),
        }
    }

    /// Returns the number of live entries.
    ///
    /// Useful for testing and debugging. Returns 0 on a closed store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().as_ref().map_or(0, HashMap::len)
    }

    /// Returns `true` if the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KvStore for MemoryStore {
    fn set(&self, key: &str, value: &[u8]) -> StoreResult<()> {
        let mut guard = self.entries.write();
        let entries = guard.as_mut().ok_or(StoreError::Closed)?;
        entries.insert(key.to_owned(), value.to_vec());
        Ok(())
    }

    fn get(&self, key: &str) -> StoreResult<Vec<u8>> {
        let guard = self.entries.read();
        let entries = guard.as_ref().ok_or(StoreError::Closed)?;
        entries.get(key).cloned().ok_or(StoreError::NotFound)
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        let mut guard = self.entries.write();
        let entries = guard.as_mut().ok_or(StoreError::Closed)?;
        entries.remove(key);
        Ok(())
    }

    fn close(&self) -> StoreResult<()> {
        self.entries.write().take();
        Ok(())
    }
}

/// [`Driver`] that opens fresh [`MemoryStore`] handles.
///
/// The connection descriptor is ignored; every open yields an empty store.
#[derive(Debug, Default)]
pub struct MemoryDriver;

impl Driver for MemoryDriver {
    fn open(&self, _info: &str) -> StoreResult<Box<dyn KvStore>> {
        Ok(Box::new(MemoryStore::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_set_get_round_trip() {
        let store = MemoryStore::new();
        store.set("foo", b"bar").unwrap();
        assert_eq!(store.get("foo").unwrap(), b"bar");
    }

    #[test]
    fn memory_get_missing_is_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(store.get("missing"), Err(StoreError::NotFound)));
    }

    #[test]
    fn memory_overwrite_replaces_value() {
        let store = MemoryStore::new();
        store.set("k", b"v1").unwrap();
        store.set("k", b"v2").unwrap();
        assert_eq!(store.get("k").unwrap(), b"v2");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn memory_delete_absent_is_ok() {
        let store = MemoryStore::new();
        store.delete("missing").unwrap();
        store.delete("missing").unwrap();
    }

    #[test]
    fn memory_delete_removes_entry() {
        let store = MemoryStore::new();
        store.set("foo", b"bar").unwrap();
        store.delete("foo").unwrap();
        assert!(matches!(store.get("foo"), Err(StoreError::NotFound)));
        assert!(store.is_empty());
    }

    #[test]
    fn memory_empty_value_round_trip() {
        let store = MemoryStore::new();
        store.set("empty", b"").unwrap();
        assert_eq!(store.get("empty").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn memory_close_is_idempotent() {
        let store = MemoryStore::new();
        store.set("foo", b"bar").unwrap();
        store.close().unwrap();
        store.close().unwrap();
    }

    #[test]
    fn memory_ops_after_close_fail() {
        let store = MemoryStore::new();
        store.close().unwrap();
        assert!(matches!(store.set("k", b"v"), Err(StoreError::Closed)));
        assert!(matches!(store.get("k"), Err(StoreError::Closed)));
        assert!(matches!(store.delete("k"), Err(StoreError::Closed)));
    }

    #[test]
    fn memory_driver_opens_empty_store() {
        let driver = MemoryDriver;
        let store = driver.open("ignored").unwrap();
        assert!(matches!(store.get("anything"), Err(StoreError::NotFound)));
    }
}
