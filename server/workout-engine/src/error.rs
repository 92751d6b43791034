//! Structured error types for the workout engine.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkoutError {
  #[error("unknown activity type: {code}")]
  UnknownActivityType { code: String },

  #[error("invalid reading data for {code}: {reason}")]
  InvalidReadingData { code: String, reason: String },

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),
}

impl WorkoutError {
  pub fn unknown(code: &str) -> Self {
    Self::UnknownActivityType {
      code: code.to_string(),
    }
  }

  pub fn invalid(code: &str, reason: impl Into<String>) -> Self {
    Self::InvalidReadingData {
      code: code.to_string(),
      reason: reason.into(),
    }
  }
}
