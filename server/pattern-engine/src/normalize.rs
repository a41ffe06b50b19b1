//! Phase 1: reduce raw keys to normalized patterns and count them.

use crate::config::{DELIMITER, DIGIT_RUN};
use crate::escape::escape_literal;
use crate::types::{NormalizedPattern, PatternCounts};

/// True iff `segment` is non-empty and made only of ASCII `0`-`9`.
pub fn is_numeral(segment: &str) -> bool {
  !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// Normalize one key. Returns `None` for empty or whitespace-only keys.
///
/// Empty segments (from leading, trailing or doubled delimiters) are kept as
/// empty literals.
pub fn normalize_key(key: &str) -> Option<NormalizedPattern> {
  if key.trim().is_empty() {
    return None;
  }
  let tokens = key.split(DELIMITER).map(|segment| {
    if is_numeral(segment) {
      DIGIT_RUN.to_string()
    } else {
      escape_literal(segment)
    }
  });
  Some(NormalizedPattern::from_tokens(tokens))
}

/// Build the histogram for a batch of keys.
///
/// Returns the counts together with the number of blank keys skipped.
pub fn extract_basic_patterns<I, S>(keys: I) -> (PatternCounts, u64)
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  let mut counts = PatternCounts::new();
  let mut discarded = 0u64;
  for key in keys {
    match normalize_key(key.as_ref()) {
      Some(pattern) => *counts.entry(pattern).or_insert(0) += 1,
      None => discarded += 1,
    }
  }
  (counts, discarded)
}
