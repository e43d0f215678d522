//! Integration tests for the SQLite-backed store.
//!
//! Runs the shared store-contract suite against on-disk databases, then
//! covers the behaviors only a persistent relational backend exhibits:
//! reopening an already-provisioned database, durability across handles,
//! and writer races resolved by the engine's upsert.

use std::sync::Arc;

use relkv_core::{KvStore, MemoryDriver, Registry, StoreError};
use relkv_sqlite::{SqliteDriver, SqliteStore};
use relkv_testkit::{contract, fixtures};

#[test]
fn contract_suite_passes_on_disk() {
    let (_dir, path) = fixtures::temp_db_path();
    let store = SqliteStore::open(&path).unwrap();
    contract::check_never_set_key(&store);
    contract::check_point_operations(&store);
    contract::check_boundary_round_trip(&store);
}

#[test]
fn contract_suite_passes_in_memory() {
    let store = SqliteStore::open(":memory:").unwrap();
    contract::check_never_set_key(&store);
    contract::check_point_operations(&store);
}

#[test]
fn close_contract_holds() {
    let (_dir, path) = fixtures::temp_db_path();
    let store = SqliteStore::open(&path).unwrap();
    contract::check_close_contract(&store);
}

#[test]
fn concurrent_sets_resolve_to_one_submitted_value() {
    let (_dir, path) = fixtures::temp_db_path();
    let store: Arc<dyn KvStore> = Arc::new(SqliteStore::open(&path).unwrap());
    contract::check_concurrent_set(&store, 16);
}

#[test]
fn entries_survive_reopen() {
    let (_dir, path) = fixtures::temp_db_path();

    {
        let store = SqliteStore::open(&path).unwrap();
        store.set("durable", b"still here").unwrap();
        store.close().unwrap();
    }

    let store = SqliteStore::open(&path).unwrap();
    assert_eq!(store.get("durable").unwrap(), b"still here");
}

#[test]
fn reopen_of_provisioned_database_is_safe() {
    let (_dir, path) = fixtures::temp_db_path();

    // Repeated opens must all succeed against the same database, and a
    // handle opened later sees writes committed through an earlier one.
    let first = SqliteStore::open(&path).unwrap();
    let second = SqliteStore::open(&path).unwrap();
    first.set("shared", b"from first").unwrap();
    assert_eq!(second.get("shared").unwrap(), b"from first");
}

#[test]
fn open_fails_with_connection_error_for_unusable_path() {
    let (dir, _path) = fixtures::temp_db_path();
    // A directory is not a database file.
    let err = SqliteStore::open(&dir.path().to_string_lossy()).unwrap_err();
    assert!(matches!(err, StoreError::Connection { .. }), "got: {err}");
}

#[test]
fn registry_wires_both_backends() {
    let (_dir, path) = fixtures::temp_db_path();

    let mut registry = Registry::new();
    registry.register("sqlite", Box::new(SqliteDriver));
    registry.register("memory", Box::new(MemoryDriver));

    let store = registry.open("sqlite", &path).unwrap();
    store.set("foo", b"bar").unwrap();
    assert_eq!(store.get("foo").unwrap(), b"bar");

    let ephemeral = registry.open("memory", "").unwrap();
    assert!(ephemeral.get("foo").unwrap_err().is_not_found());

    assert!(matches!(
        registry.open("postgres", ""),
        Err(StoreError::UnknownBackend { .. })
    ));
}
