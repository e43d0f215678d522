//! Test fixtures and helpers.
//!
//! Provides temporary database locations and boundary-sized keys and
//! values shared by backend test suites.

use tempfile::TempDir;

/// Maximum key length accepted by the relational backend, in characters.
pub const MAX_KEY_LEN: usize = 256;

/// Largest value size exercised by the boundary tests, in bytes (1 MiB).
pub const MAX_VALUE_LEN: usize = 1024 * 1024;

/// Returns a temporary database location for a file-backed store.
///
/// The [`TempDir`] must be kept alive for the duration of the test; the
/// returned string is the path handed to the backend's open.
#[must_use]
pub fn temp_db_path() -> (TempDir, String) {
    let dir = TempDir::new().expect("failed to create temp directory");
    let path = dir
        .path()
        .join("relkv_test.db")
        .to_string_lossy()
        .into_owned();
    (dir, path)
}

/// Builds a key of exactly `len` characters.
#[must_use]
pub fn key_of_len(len: usize) -> String {
    "K".repeat(len)
}

/// Builds a value of exactly `len` bytes.
#[must_use]
pub fn value_of_len(len: usize) -> Vec<u8> {
    vec![b'V'; len]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_sizes_are_exact() {
        assert_eq!(key_of_len(MAX_KEY_LEN).len(), MAX_KEY_LEN);
        assert_eq!(value_of_len(MAX_VALUE_LEN).len(), MAX_VALUE_LEN);
        assert!(key_of_len(0).is_empty());
    }

    #[test]
    fn temp_db_path_is_usable() {
        let (dir, path) = temp_db_path();
        assert!(path.starts_with(dir.path().to_string_lossy().as_ref()));
    }
}
