//! Reusable store-contract suite.
//!
//! Every [`KvStore`] implementation must pass these checks; backend test
//! suites call them so the contract is asserted once and exercised
//! everywhere.

use std::sync::Arc;
use std::thread;

use relkv_core::{KvStore, StoreError};

use crate::fixtures::{key_of_len, value_of_len, MAX_KEY_LEN, MAX_VALUE_LEN};

/// Asserts the full point-operation contract on an empty store.
///
/// Covers the set/get round trip, overwrite semantics, the absence
/// sentinel, and idempotent delete.
///
/// # Panics
///
/// Panics if the store violates any part of the contract.
pub fn check_point_operations(store: &dyn KvStore) {
    // Round trip.
    store.set("foo", b"bar").expect("set foo");
    assert_eq!(store.get("foo").expect("get foo"), b"bar");

    // Delete makes the key absent, and absence is the sentinel.
    store.delete("foo").expect("delete foo");
    assert!(
        matches!(store.get("foo"), Err(StoreError::NotFound)),
        "get after delete must return the NotFound sentinel"
    );

    // Deleting an absent key is success, repeatedly.
    store.delete("missing").expect("delete of absent key");
    store.delete("missing").expect("repeated delete of absent key");

    // Overwrite replaces the value in place.
    store.set("k", b"v1").expect("first set");
    store.set("k", b"v2").expect("second set");
    assert_eq!(store.get("k").expect("get after overwrite"), b"v2");

    // Zero-length values round-trip.
    store.set("empty", b"").expect("set empty value");
    assert_eq!(store.get("empty").expect("get empty value"), Vec::<u8>::new());
}

/// Asserts that a never-set key reports absence, not failure.
///
/// # Panics
///
/// Panics if the store returns anything but the sentinel.
pub fn check_never_set_key(store: &dyn KvStore) {
    let err = store.get("never-set").expect_err("get of never-set key");
    assert!(err.is_not_found(), "expected NotFound, got: {err}");
}

/// Asserts byte-for-byte round trips at the size boundaries.
///
/// Uses a key at the maximum permitted length and a value of
/// [`MAX_VALUE_LEN`] bytes.
///
/// # Panics
///
/// Panics if either boundary entry fails to round-trip exactly.
pub fn check_boundary_round_trip(store: &dyn KvStore) {
    let max_key = key_of_len(MAX_KEY_LEN);
    store.set(&max_key, b"value at max key").expect("set max-length key");
    assert_eq!(store.get(&max_key).expect("get max-length key"), b"value at max key");

    let max_value = value_of_len(MAX_VALUE_LEN);
    store.set("big", &max_value).expect("set max-length value");
    assert_eq!(store.get("big").expect("get max-length value"), max_value);

    store.delete(&max_key).expect("delete max-length key");
    store.delete("big").expect("delete max-length value");
}

/// Asserts close idempotence and failure of operations after close.
///
/// Consumes the store: it is unusable afterwards.
///
/// # Panics
///
/// Panics if close is not idempotent or post-close operations do not fail
/// with [`StoreError::Closed`].
pub fn check_close_contract(store: &dyn KvStore) {
    store.set("foo", b"bar").expect("set before close");
    store.close().expect("first close");
    store.close().expect("second close must be a no-op");

    assert!(matches!(store.set("k", b"v"), Err(StoreError::Closed)));
    assert!(matches!(store.get("k"), Err(StoreError::Closed)));
    assert!(matches!(store.delete("k"), Err(StoreError::Closed)));
}

/// Asserts last-committed-wins for concurrent sets of one key.
///
/// Spawns `writers` threads that race to set the same key; the surviving
/// value must be exactly one of the submitted values.
///
/// # Panics
///
/// Panics if any writer fails or the final value is not one of the
/// submitted values.
pub fn check_concurrent_set(store: &Arc<dyn KvStore>, writers: usize) {
    let mut handles = Vec::with_capacity(writers);
    for i in 0..writers {
        let store = Arc::clone(store);
        handles.push(thread::spawn(move || {
            store
                .set("contended", format!("value-{i}").as_bytes())
                .expect("concurrent set");
        }));
    }
    for handle in handles {
        handle.join().expect("writer thread panicked");
    }

    let survivor = store.get("contended").expect("get after concurrent sets");
    let is_submitted = (0..writers).any(|i| survivor == format!("value-{i}").into_bytes());
    assert!(
        is_submitted,
        "final value must be one of the submitted values, got: {survivor:?}"
    );
}
