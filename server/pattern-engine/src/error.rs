//! Structured error types for the binary's I/O surface.
//!
//! Pattern extraction itself is total; only reading and writing can fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
  #[error("io: {0}")]
  Io(#[from] std::io::Error),

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),

  #[error("input: {0}")]
  Input(String),
}

impl EngineError {
  pub fn input(msg: impl Into<String>) -> Self {
    Self::Input(msg.into())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn json_errors_convert() {
    let err: EngineError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
    assert!(err.to_string().starts_with("json: "));
  }

  #[test]
  fn input_error_message() {
    assert_eq!(EngineError::input("no keys").to_string(), "input: no keys");
  }
}
