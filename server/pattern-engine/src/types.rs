//! Core types for the pattern engine (JSON contracts + internal models).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::config::ESCAPED_DELIMITER;

// ---------------------------------------------------------------------------
// Inbound types (JSON contract: what the caller sends)
// ---------------------------------------------------------------------------

/// One JSON object read from stdin. Unknown fields are silently ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Input {
  #[serde(default)]
  pub keys: Vec<String>,
}

// ---------------------------------------------------------------------------
// Normalized patterns (phase 1)
// ---------------------------------------------------------------------------

/// A key reduced to regex tokens joined by the escaped delimiter.
///
/// The joined text is kept together with the byte offset of its last
/// separator, so the prefix and final token are recovered by slicing rather
/// than by re-splitting the regex text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPattern {
  text: String,
  /// Byte offset of the last `\.` separator; `None` for a single token.
  split: Option<usize>,
}

impl NormalizedPattern {
  /// Join tokens with the escaped delimiter.
  pub fn from_tokens<I, S>(tokens: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let mut text = String::new();
    let mut split = None;
    for (i, token) in tokens.into_iter().enumerate() {
      if i > 0 {
        split = Some(text.len());
        text.push_str(ESCAPED_DELIMITER);
      }
      text.push_str(token.as_ref());
    }
    Self { text, split }
  }

  /// The full pattern text.
  pub fn as_str(&self) -> &str {
    &self.text
  }

  /// Every token but the last, joined; `None` when the key had one segment.
  pub fn prefix(&self) -> Option<&str> {
    self.split.map(|at| &self.text[..at])
  }

  /// The last token; empty for single-segment patterns.
  pub fn final_token(&self) -> &str {
    match self.split {
      Some(at) => &self.text[at + ESCAPED_DELIMITER.len()..],
      None => "",
    }
  }
}

/// Histogram of normalized pattern -> number of keys that reduced to it.
/// Insertion order follows first arrival.
pub type PatternCounts = IndexMap<NormalizedPattern, u64>;

// ---------------------------------------------------------------------------
// Prefix groups (phase 2)
// ---------------------------------------------------------------------------

/// Partition key for phase 2.
///
/// Single-segment patterns get their own `Bare` key so they never share a
/// group with multi-segment patterns whose prefix spells the same text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupKey {
  Bare(String),
  Prefix(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupMember {
  pub pattern: String,
  pub final_token: String,
  pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixGroup {
  pub key: GroupKey,
  pub members: Vec<GroupMember>,
}

impl PrefixGroup {
  /// Number of input keys the group represents.
  pub fn key_count(&self) -> u64 {
    self.members.iter().map(|m| m.count).sum()
  }

  /// Prefix text, if the group is keyed by one.
  pub fn prefix(&self) -> Option<&str> {
    match &self.key {
      GroupKey::Prefix(p) => Some(p),
      GroupKey::Bare(_) => None,
    }
  }
}

// ---------------------------------------------------------------------------
// Decisions and report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
  /// Only one pattern in the group; emitted as is.
  Singleton,
  /// Coverage below 75%; members kept separate.
  Divergent,
  /// Coverage 95% or above; members kept separate.
  Established,
  /// Coverage in [75%, 95%); trailing segment replaced by `\w+`.
  Generalized,
  /// Would generalize, but the prefix is empty; members kept separate.
  EmptyPrefix,
}

/// Outcome for one prefix group.
#[derive(Debug, Clone, Serialize)]
pub struct GroupDecision {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub prefix: Option<String>,
  pub members: Vec<GroupMember>,
  pub key_count: u64,
  /// Percentage of all non-blank keys, rounded to two decimals.
  pub coverage: f64,
  pub decision: Decision,
  pub emitted: Vec<String>,
}

/// A stable hex string identifying a pattern set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(pub String);

/// Full result of one extraction, with diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionReport {
  /// Non-blank keys; the coverage denominator.
  pub total_keys: u64,
  /// Empty or whitespace-only keys that were skipped.
  pub discarded_keys: u64,
  /// Size of the phase-1 histogram.
  pub distinct_patterns: usize,
  pub groups: Vec<GroupDecision>,
  pub patterns: BTreeSet<String>,
  pub fingerprint: Fingerprint,
}

// ---------------------------------------------------------------------------
// Output types (JSON contract: what we emit)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct Output {
  pub patterns: Vec<String>,
  pub total_keys: u64,
  pub fingerprint: Fingerprint,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub groups: Option<Vec<GroupDecision>>,
}

impl Output {
  pub fn from_report(report: ExtractionReport, explain: bool) -> Self {
    Self {
      patterns: report.patterns.into_iter().collect(),
      total_keys: report.total_keys,
      fingerprint: report.fingerprint,
      groups: explain.then_some(report.groups),
    }
  }
}

/// Structured error output for unreadable input.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
    }
  }
}
