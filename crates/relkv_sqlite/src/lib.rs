//! # relkv SQLite
//!
//! SQLite adapter for the relkv key-value store.
//!
//! Entries live in a single relational table. The raw key column is too wide
//! for a unique index, so each row carries a fixed-width digest of its key
//! and the engine enforces uniqueness on the digest instead. Writes go
//! through a single atomic upsert keyed by that digest, which pushes all
//! same-key write races down to SQLite's own statement execution.
//!
//! ## Example
//!
//! ```rust
//! use relkv_core::{KvStore, StoreError};
//! use relkv_sqlite::SqliteStore;
//!
//! let store = SqliteStore::open(":memory:").unwrap();
//! store.set("foo", b"bar").unwrap();
//! assert_eq!(store.get("foo").unwrap(), b"bar");
//! store.delete("foo").unwrap();
//! assert!(matches!(store.get("foo"), Err(StoreError::NotFound)));
//! store.close().unwrap();
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod digest;
mod schema;
mod store;

pub use digest::{key_digest, DIGEST_HEX_LEN};
pub use schema::MAX_KEY_LEN;
pub use store::{SqliteDriver, SqliteStore};
