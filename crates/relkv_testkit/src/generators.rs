//! Property-based test generators using proptest.
//!
//! Provides strategies for generating keys and values that stay within the
//! relational backend's bounds.

use proptest::prelude::*;

use crate::fixtures::MAX_KEY_LEN;

/// Strategy for generating valid store keys.
///
/// Printable ASCII, one character up to the backend's key-column width.
pub fn key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(&format!("[ -~]{{1,{MAX_KEY_LEN}}}")).expect("Invalid regex")
}

/// Strategy for generating arbitrary byte values, empty included.
pub fn value_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..4096)
}

/// Strategy for generating a batch of distinct key-value pairs.
pub fn entries_strategy(max_entries: usize) -> impl Strategy<Value = Vec<(String, Vec<u8>)>> {
    prop::collection::btree_map(key_strategy(), value_strategy(), 0..max_entries)
        .prop_map(|map| map.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig { cases: 64, ..ProptestConfig::default() })]

        #[test]
        fn keys_stay_within_bounds(key in key_strategy()) {
            prop_assert!(!key.is_empty());
            prop_assert!(key.chars().count() <= MAX_KEY_LEN);
            prop_assert!(key.chars().all(|c| (' '..='~').contains(&c)));
        }

        #[test]
        fn entries_have_distinct_keys(entries in entries_strategy(16)) {
            let mut keys: Vec<_> = entries.iter().map(|(k, _)| k.clone()).collect();
            keys.sort();
            keys.dedup();
            prop_assert_eq!(keys.len(), entries.len());
        }
    }
}
