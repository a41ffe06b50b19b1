//! Stable fingerprint of a pattern set, for cheap snapshot comparison.

use std::collections::BTreeSet;

use crate::types::Fingerprint;

/// Compute a stable fingerprint from a pattern set.
///
/// Patterns are hashed in sorted order with a separator byte that cannot
/// appear in UTF-8 text, so `{"ab"}` and `{"a", "b"}` differ.
pub fn compute(patterns: &BTreeSet<String>) -> Fingerprint {
  let mut hasher = blake3::Hasher::new();
  for pattern in patterns {
    hasher.update(pattern.as_bytes());
    hasher.update(&[0xff]);
  }
  let hex = hasher.finalize().to_hex();
  Fingerprint(hex[..32].to_string())
}
