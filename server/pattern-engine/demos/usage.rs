//! Usage demos: `cargo run -p pattern-engine --example usage`.

use pattern_engine::{extract_generalized_patterns, extract_report};

fn print_keys(keys: &[&str]) {
  println!("Input keys:");
  for key in keys {
    println!("  {}", key);
  }
}

fn basic_usage() {
  println!("=== Basic Usage ===");
  let keys = [
    "users.0.id",
    "users.1.name",
    "users.2.email",
    "orders.0.items.3.price",
    "orders.0.items.3.quantity",
    "orders.2.total",
    "products.10.name",
    "products.12.price",
    "users.10.id",
  ];
  print_keys(&keys);

  println!("\nGenerated patterns:");
  for pattern in extract_generalized_patterns(keys) {
    println!("  {}", pattern);
  }
}

fn advanced_generalization() {
  println!("\n=== Frequency Generalization ===");
  let keys = [
    "users.1.name",
    "users.1.email",
    "users.1.age",
    "users.1.phone",
    "users.1.address",
    "users.1.country",
    "users.1.postal_code",
    "users.1.preferences",
    "users.1.is_active",
    "users.1.metadata",
    "orders.3.total",
    "orders.3.currency",
    "orders.3.created_at",
  ];
  print_keys(&keys);

  let report = extract_report(keys);
  println!("\nGroups (of {} keys):", report.total_keys);
  for group in &report.groups {
    println!(
      "  {:<16} {:>3} keys {:>6.1}%  {:?}",
      group.prefix.as_deref().unwrap_or("<bare>"),
      group.key_count,
      group.coverage,
      group.decision
    );
  }

  println!("\nGenerated patterns:");
  for pattern in &report.patterns {
    println!("  {}", pattern);
  }
}

fn special_characters() {
  println!("\n=== Special Characters ===");
  let keys = [
    "api[v1].users.0.data",
    "cache(redis).keys.1.value",
    "logs+debug.2.message",
    "query*.results.5.item",
  ];
  print_keys(&keys);

  println!("\nGenerated patterns (escaped):");
  for pattern in extract_generalized_patterns(keys) {
    println!("  {}", pattern);
  }
}

fn main() {
  basic_usage();
  advanced_generalization();
  special_characters();
}
