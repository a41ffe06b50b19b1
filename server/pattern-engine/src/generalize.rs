//! Phase 2: group normalized patterns by prefix and apply the coverage bands.

use indexmap::IndexMap;
use std::collections::BTreeSet;
use tracing::trace;

use crate::config::{coverage_percent, CoverageBand, ESCAPED_DELIMITER, WORD_RUN};
use crate::types::*;

/// Partition the histogram by prefix (all tokens but the last).
///
/// Groups and their members keep first-arrival order.
pub fn group_by_prefix(counts: &PatternCounts) -> Vec<PrefixGroup> {
  let mut groups: IndexMap<GroupKey, Vec<GroupMember>> = IndexMap::new();
  for (pattern, &count) in counts {
    let key = match pattern.prefix() {
      Some(prefix) => GroupKey::Prefix(prefix.to_string()),
      None => GroupKey::Bare(pattern.as_str().to_string()),
    };
    groups.entry(key).or_default().push(GroupMember {
      pattern: pattern.as_str().to_string(),
      final_token: pattern.final_token().to_string(),
      count,
    });
  }
  groups
    .into_iter()
    .map(|(key, members)| PrefixGroup { key, members })
    .collect()
}

/// Decide what one group emits, given the batch's non-blank key count.
pub fn decide(group: &PrefixGroup, total_keys: u64) -> GroupDecision {
  let key_count = group.key_count();
  let members_unchanged = || -> Vec<String> {
    group.members.iter().map(|m| m.pattern.clone()).collect()
  };

  let (decision, emitted) = if group.members.len() == 1 {
    (Decision::Singleton, members_unchanged())
  } else {
    match CoverageBand::classify(key_count, total_keys) {
      CoverageBand::Divergent => (Decision::Divergent, members_unchanged()),
      CoverageBand::Established => (Decision::Established, members_unchanged()),
      CoverageBand::Generalizable => match group.prefix() {
        Some(prefix) if !prefix.is_empty() => (
          Decision::Generalized,
          vec![format!("{}{}{}", prefix, ESCAPED_DELIMITER, WORD_RUN)],
        ),
        _ => (Decision::EmptyPrefix, members_unchanged()),
      },
    }
  };

  let coverage = (coverage_percent(key_count, total_keys) * 100.0).round() / 100.0;
  trace!(
    prefix = group.prefix().unwrap_or(""),
    members = group.members.len(),
    coverage,
    ?decision,
    "group decided"
  );

  GroupDecision {
    prefix: group.prefix().map(str::to_string),
    members: group.members.clone(),
    key_count,
    coverage,
    decision,
    emitted,
  }
}

/// Decide every group in order.
pub fn decide_all(groups: &[PrefixGroup], total_keys: u64) -> Vec<GroupDecision> {
  groups.iter().map(|g| decide(g, total_keys)).collect()
}

/// Union of everything the decisions emit. Duplicates collapse.
pub fn collect_patterns(decisions: &[GroupDecision]) -> BTreeSet<String> {
  decisions
    .iter()
    .flat_map(|d| d.emitted.iter().cloned())
    .collect()
}

/// Phase 2 end to end: histogram + denominator -> final pattern set.
pub fn apply_frequency_generalization(counts: &PatternCounts, total_keys: u64) -> BTreeSet<String> {
  let groups = group_by_prefix(counts);
  collect_patterns(&decide_all(&groups, total_keys))
}

/// Debugging helper: only the multi-segment groups, keyed by prefix.
pub fn analyze_pattern_groups(counts: &PatternCounts) -> IndexMap<String, Vec<GroupMember>> {
  group_by_prefix(counts)
    .into_iter()
    .filter_map(|g| match g.key {
      GroupKey::Prefix(prefix) => Some((prefix, g.members)),
      GroupKey::Bare(_) => None,
    })
    .collect()
}
