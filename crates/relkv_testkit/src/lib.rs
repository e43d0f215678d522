//! # relkv Testkit
//!
//! Test utilities for relkv.
//!
//! This crate provides:
//! - A reusable store-contract suite that any [`relkv_core::KvStore`]
//!   implementation must pass
//! - Fixtures for temporary on-disk databases and boundary-sized inputs
//! - Property-based test generators using proptest
//!
//! ## Usage
//!
//! ```rust
//! use relkv_core::MemoryStore;
//! use relkv_testkit::contract;
//!
//! let store = MemoryStore::new();
//! contract::check_point_operations(&store);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod contract;
pub mod fixtures;
pub mod generators;

pub use contract::*;
pub use fixtures::*;
pub use generators::*;
