//! Regex-safe escaping of literal key segments.

/// Characters with special meaning in a regex outside a character class.
const METACHARS: &[char] = &[
  '\\', '.', '^', '$', '*', '+', '?', '{', '}', '[', ']', '|', '(', ')',
];

pub fn is_metachar(c: char) -> bool {
  METACHARS.contains(&c)
}

/// Escape a literal segment for embedding in a pattern.
///
/// Each metacharacter gains a leading backslash; everything else is copied
/// through untouched (no trimming, no case folding).
pub fn escape_literal(segment: &str) -> String {
  let mut out = String::with_capacity(segment.len());
  for c in segment.chars() {
    if is_metachar(c) {
      out.push('\\');
    }
    out.push(c);
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_metachar_gets_one_backslash() {
    for &c in METACHARS {
      let escaped = escape_literal(&c.to_string());
      assert_eq!(escaped, format!("\\{}", c), "escaping {:?}", c);
    }
  }

  #[test]
  fn plain_characters_pass_through() {
    assert_eq!(escape_literal("normal"), "normal");
    assert_eq!(escape_literal("first-name"), "first-name");
    assert_eq!(escape_literal("Ünïcode #1"), "Ünïcode #1");
    assert_eq!(escape_literal(""), "");
  }

  #[test]
  fn mixed_segments() {
    assert_eq!(escape_literal("api[v1]"), r"api\[v1\]");
    assert_eq!(escape_literal("cache(redis)"), r"cache\(redis\)");
    assert_eq!(escape_literal("logs+debug"), r"logs\+debug");
    assert_eq!(escape_literal("data.nested"), r"data\.nested");
    assert_eq!(escape_literal("query*"), r"query\*");
  }

  #[test]
  fn backslash_is_doubled() {
    assert_eq!(escape_literal(r"a\b"), r"a\\b");
    assert_eq!(escape_literal(r"\"), r"\\");
  }

  #[test]
  fn escaping_is_not_idempotent() {
    let once = escape_literal("a+b");
    assert_eq!(escape_literal(&once), r"a\\\+b");
  }
}
