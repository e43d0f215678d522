//! Explicit driver registry.
//!
//! There is no process-global registration: callers construct a [`Registry`],
//! mount the drivers they want, and pass it where stores are opened. This
//! keeps backend selection testable and free of hidden initialization order.

use std::collections::HashMap;

use crate::error::{StoreError, StoreResult};
use crate::store::KvStore;

/// A factory for store handles of one backend kind.
///
/// # Implementors
///
/// - [`super::MemoryDriver`] - opens in-memory stores
/// - `relkv_sqlite::SqliteDriver` - opens SQLite-backed stores
pub trait Driver: Send + Sync {
    /// Opens a store handle from an opaque connection descriptor.
    ///
    /// The descriptor format is backend-specific (a path, a DSN, ...) and
    /// passed through uninterpreted.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if a session cannot be
    /// established, or [`StoreError::Schema`] if backend provisioning fails.
    fn open(&self, info: &str) -> StoreResult<Box<dyn KvStore>>;
}

/// Maps backend names to [`Driver`] factories.
///
/// # Example
///
/// ```rust
/// use relkv_core::{KvStore, MemoryDriver, Registry};
///
/// let mut registry = Registry::new();
/// registry.register("memory", Box::new(MemoryDriver));
/// let store = registry.open("memory", "").unwrap();
/// store.set("foo", b"bar").unwrap();
/// ```
#[derive(Default)]
pub struct Registry {
    drivers: HashMap<String, Box<dyn Driver>>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounts `driver` under `name`, replacing any previous driver with
    /// the same name.
    pub fn register(&mut self, name: impl Into<String>, driver: Box<dyn Driver>) {
        self.drivers.insert(name.into(), driver);
    }

    /// Returns `true` if a driver is mounted under `name`.
    #[must_use]
    pub fn is_registered(&self, name: &str) -> bool {
        self.drivers.contains_key(name)
    }

    /// Opens a store through the driver mounted under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownBackend`] if no driver is mounted under
    /// `name`; otherwise whatever the driver's open returns.
    pub fn open(&self, name: &str, info: &str) -> StoreResult<Box<dyn KvStore>> {
        let driver = self
            .drivers
            .get(name)
            .ok_or_else(|| StoreError::UnknownBackend {
                name: name.to_owned(),
            })?;
        driver.open(info)
    }
}
