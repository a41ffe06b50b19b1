//! Generalization policy constants and binary runtime configuration.
//!
//! The coverage thresholds and wildcard tokens are fixed policy, not tunables.

use clap::ValueEnum;

/// Separator between key segments.
pub const DELIMITER: char = '.';

/// Separator between pattern tokens.
pub const ESCAPED_DELIMITER: &str = r"\.";

/// Token replacing a numeral segment.
pub const DIGIT_RUN: &str = r"\d+";

/// Token replacing the trailing segment of a generalized group.
pub const WORD_RUN: &str = r"\w+";

/// Lowest coverage (percent, inclusive) at which a group is generalized.
pub const GENERALIZE_MIN_COVERAGE: u64 = 75;

/// Lowest coverage (percent, inclusive) at which a group is treated as an
/// established shape and kept separate.
pub const KEEP_SEPARATE_MIN_COVERAGE: u64 = 95;

/// Which side of the three-band policy a prefix group falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverageBand {
  /// Below 75%: members look like unrelated fields.
  Divergent,
  /// 75% up to (not including) 95%: trailing segment looks dynamic.
  Generalizable,
  /// 95% and above: a stable, deliberate key shape.
  Established,
}

impl CoverageBand {
  /// Classify `group_keys` out of `total_keys`.
  ///
  /// Compares by cross-multiplication so the 75% and 95% boundaries are exact.
  pub fn classify(group_keys: u64, total_keys: u64) -> Self {
    let scaled = u128::from(group_keys) * 100;
    let total = u128::from(total_keys);
    if scaled < total * u128::from(GENERALIZE_MIN_COVERAGE) {
      CoverageBand::Divergent
    } else if scaled >= total * u128::from(KEEP_SEPARATE_MIN_COVERAGE) {
      CoverageBand::Established
    } else {
      CoverageBand::Generalizable
    }
  }
}

/// Coverage as a percentage, for diagnostics only. Returns 0 for an empty total.
pub fn coverage_percent(group_keys: u64, total_keys: u64) -> f64 {
  if total_keys == 0 {
    return 0.0;
  }
  group_keys as f64 / total_keys as f64 * 100.0
}

/// How the binary reads keys from stdin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InputFormat {
  /// One JSON object: `{"keys": [...]}`.
  #[default]
  Json,
  /// One key per line.
  Lines,
}

/// How the binary writes patterns to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
  /// One JSON object with patterns, totals and fingerprint.
  #[default]
  Json,
  /// One pattern per line, sorted.
  Text,
}

/// Runtime options for the `pattern-engine` binary.
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
  pub input: InputFormat,
  pub output: OutputFormat,
  /// Include per-group decisions in JSON output.
  pub explain: bool,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn exact_lower_boundary_generalizes() {
    // 3 of 4 = 75.0%
    assert_eq!(CoverageBand::classify(3, 4), CoverageBand::Generalizable);
    // 74.999...%
    assert_eq!(CoverageBand::classify(74_999, 100_000), CoverageBand::Divergent);
  }

  #[test]
  fn exact_upper_boundary_keeps_separate() {
    // 19 of 20 = 95.0%
    assert_eq!(CoverageBand::classify(19, 20), CoverageBand::Established);
    assert_eq!(CoverageBand::classify(95_001, 100_000), CoverageBand::Established);
    assert_eq!(CoverageBand::classify(94_999, 100_000), CoverageBand::Generalizable);
  }

  #[test]
  fn full_coverage_is_established() {
    assert_eq!(CoverageBand::classify(10, 10), CoverageBand::Established);
  }

  #[test]
  fn large_counts_do_not_overflow() {
    assert_eq!(
      CoverageBand::classify(u64::MAX, u64::MAX),
      CoverageBand::Established
    );
  }

  #[test]
  fn coverage_percent_handles_zero_total() {
    assert_eq!(coverage_percent(5, 0), 0.0);
    assert!((coverage_percent(10, 13) - 76.923).abs() < 0.001);
  }
}
