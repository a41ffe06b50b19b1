//! Key Pattern Generalization Engine: deterministic, rule-based.
//!
//! Turns dot-delimited keys (`users.0.id`, `orders.12.total`) into a small set
//! of regex patterns. Phase 1 replaces numeral segments with `\d+` and escapes
//! literals; phase 2 groups patterns by prefix and, when a group covers 75% up
//! to 95% of all keys, generalizes its trailing segment to `\w+`.
//!
//! No DB, no network; pure computation, no state between calls.

pub mod config;
pub mod engine;
pub mod error;
pub mod escape;
pub mod fingerprint;
pub mod generalize;
pub mod normalize;
pub mod types;

pub use config::RunConfig;
pub use engine::{extract_generalized_patterns, extract_report};
pub use error::EngineError;
pub use types::{ExtractionReport, Fingerprint, Input, Output};
