//! Entry points: run both phases over one batch of keys.

use std::collections::BTreeSet;

use tracing::debug;

use crate::fingerprint;
use crate::generalize;
use crate::normalize;
use crate::types::ExtractionReport;

/// Generalize a batch of keys into a set of regex patterns.
///
/// Blank keys are ignored and do not count toward coverage. An empty or
/// all-blank batch yields an empty set.
pub fn extract_generalized_patterns<I, S>(keys: I) -> BTreeSet<String>
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  extract_report(keys).patterns
}

/// Same as [`extract_generalized_patterns`], keeping per-group diagnostics.
pub fn extract_report<I, S>(keys: I) -> ExtractionReport
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  let (counts, discarded_keys) = normalize::extract_basic_patterns(keys);
  let total_keys: u64 = counts.values().sum();
  debug!(
    total_keys,
    discarded_keys,
    distinct_patterns = counts.len(),
    "phase 1 complete"
  );

  let groups = if total_keys == 0 {
    Vec::new()
  } else {
    let partition = generalize::group_by_prefix(&counts);
    generalize::decide_all(&partition, total_keys)
  };
  let patterns = generalize::collect_patterns(&groups);
  debug!(groups = groups.len(), patterns = patterns.len(), "phase 2 complete");

  ExtractionReport {
    total_keys,
    discarded_keys,
    distinct_patterns: counts.len(),
    fingerprint: fingerprint::compute(&patterns),
    groups,
    patterns,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::Decision;

  #[test]
  fn empty_input_gives_empty_set() {
    assert!(extract_generalized_patterns(Vec::<String>::new()).is_empty());
    assert!(extract_generalized_patterns(["", " ", "\t"]).is_empty());
  }

  #[test]
  fn report_counts_discarded_keys() {
    let report = extract_report(["", "  ", "valid.1.key"]);
    assert_eq!(report.total_keys, 1);
    assert_eq!(report.discarded_keys, 2);
    assert_eq!(report.distinct_patterns, 1);
    assert_eq!(report.groups.len(), 1);
    assert_eq!(report.groups[0].decision, Decision::Singleton);
    assert_eq!(report.groups[0].coverage, 100.0);
  }

  #[test]
  fn report_fingerprint_matches_pattern_set() {
    let report = extract_report(["users.0.id", "users.1.id"]);
    assert_eq!(report.fingerprint, fingerprint::compute(&report.patterns));
  }

  #[test]
  fn accepts_owned_and_borrowed_keys() {
    let owned: Vec<String> = vec!["a.1".into(), "b.2".into()];
    let from_ref = extract_generalized_patterns(&owned);
    let from_owned = extract_generalized_patterns(owned);
    assert_eq!(from_ref, from_owned);
  }
}
