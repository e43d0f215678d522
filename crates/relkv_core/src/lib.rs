//! # relkv Core
//!
//! Backend-agnostic key-value store abstraction for relkv.
//!
//! This crate defines the contract every relkv backend implements.
//! Backends are **opaque byte stores** keyed by strings - they do not
//! interpret the values they hold.
//!
//! ## Design Principles
//!
//! - Backends expose exactly four point operations (set, get, delete, close)
//! - Absence of a key is a first-class state ([`StoreError::NotFound`]),
//!   distinct from operation failure
//! - Backends perform exactly one error classification step ("no matching
//!   entry" becomes the sentinel); everything else passes through unmodified
//! - Handles must be `Send + Sync` for concurrent access
//!
//! ## Available Backends
//!
//! - [`MemoryStore`] - For testing and ephemeral storage
//! - `relkv_sqlite::SqliteStore` - For persistent storage in a relational table
//!
//! ## Example
//!
//! ```rust
//! use relkv_core::{KvStore, MemoryStore, StoreError};
//!
//! let store = MemoryStore::new();
//! store.set("foo", b"bar").unwrap();
//! assert_eq!(store.get("foo").unwrap(), b"bar");
//! store.delete("foo").unwrap();
//! assert!(matches!(store.get("foo"), Err(StoreError::NotFound)));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod memory;
mod registry;
mod store;

pub use error::{StoreError, StoreResult};
pub use memory::{MemoryDriver, MemoryStore};
pub use registry::{Driver, Registry};
pub use store::KvStore;
