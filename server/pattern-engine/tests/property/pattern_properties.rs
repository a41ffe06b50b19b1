use pattern_engine::escape::escape_literal;
use pattern_engine::extract_generalized_patterns;
use pattern_engine::normalize::is_numeral;
use proptest::prelude::*;
use regex::Regex;

fn full_match(pattern: &str) -> Regex {
  Regex::new(&format!("^(?:{})$", pattern)).unwrap()
}

/// Keys whose last segment is made of word characters, so a `\w+` tail
/// always applies. Inner segments may hold any metacharacter.
fn key_strategy() -> impl Strategy<Value = String> {
  let inner = prop_oneof![
    "[0-9]{1,4}",
    "[a-z]{1,6}",
    r"[a-z\[\]\(\)\{\}\^\$\*\+\?\|\\-]{0,6}",
  ];
  (
    prop::collection::vec(inner, 0..4),
    "[a-z_0-9]{1,8}",
  )
    .prop_map(|(mut segments, last)| {
      segments.push(last);
      segments.join(".")
    })
}

proptest! {
  #[test]
  fn every_key_matches_some_pattern(keys in prop::collection::vec(key_strategy(), 1..40)) {
    let patterns: Vec<Regex> = extract_generalized_patterns(&keys)
      .iter()
      .map(|p| full_match(p))
      .collect();
    for key in keys.iter().filter(|k| !k.trim().is_empty()) {
      prop_assert!(
        patterns.iter().any(|re| re.is_match(key)),
        "no pattern matches {:?}",
        key
      );
    }
  }

  #[test]
  fn escaped_literal_matches_itself(s in "\\PC{0,20}") {
    let re = full_match(&escape_literal(&s));
    prop_assert!(re.is_match(&s));
  }

  #[test]
  fn output_is_deterministic(keys in prop::collection::vec(key_strategy(), 0..30)) {
    prop_assert_eq!(
      extract_generalized_patterns(&keys),
      extract_generalized_patterns(&keys)
    );
  }

  #[test]
  fn empty_iff_all_blank(keys in prop::collection::vec("[ a-z.0-9]{0,6}", 0..10)) {
    let all_blank = keys.iter().all(|k| k.trim().is_empty());
    prop_assert_eq!(extract_generalized_patterns(&keys).is_empty(), all_blank);
  }

  #[test]
  fn ascii_digit_strings_are_numerals(s in "[0-9]{1,12}") {
    prop_assert!(is_numeral(&s));
  }

  #[test]
  fn strings_with_a_non_digit_are_literals(a in "[0-9]{0,4}", c in "[^0-9]", b in "[0-9]{0,4}") {
    let s = format!("{}{}{}", a, c, b);
    prop_assert!(!is_numeral(&s));
  }
}
