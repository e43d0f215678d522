//! Surrogate key derivation.

use sha2::{Digest, Sha256};

/// Width of a key digest in hex characters (a 128-bit digest, hex encoded).
pub const DIGEST_HEX_LEN: usize = 32;

/// Derives the fixed-width surrogate key for `key`.
///
/// The backing table cannot index the full key column, so uniqueness is
/// enforced on this digest instead: SHA-256 of the key bytes, truncated to
/// 128 bits and lowercase hex encoded. Deterministic across processes and
/// releases.
///
/// Collisions between distinct keys are possible in principle but not at
/// the table cardinalities this store targets; reads verify the stored raw
/// key against the requested one, so a collision surfaces as an error
/// rather than as the wrong value.
///
/// Changing the algorithm or width invalidates every stored digest and must
/// be treated as a breaking schema change.
#[must_use]
pub fn key_digest(key: &str) -> String {
    let digest = Sha256::digest(key.as_bytes());
    digest[..DIGEST_HEX_LEN / 2]
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}
