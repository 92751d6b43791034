//! Core types for the workout engine (JSON contracts + internal models).

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Inbound types (JSON contract — what the sensor feed sends)
// ---------------------------------------------------------------------------

/// One raw sensor package: an activity code and its positional values.
///
/// On the wire this is a two-element array, e.g. `["SWM", [720, 1, 80, 25, 40]]`.
/// Values stay as raw JSON until dispatch so a non-numeric entry is reported
/// against its field instead of failing the whole line.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "(String, Vec<Value>)")]
pub struct Package {
  pub code: String,
  pub values: Vec<Value>,
}

impl Package {
  pub fn new(code: &str, values: &[f64]) -> Self {
    Self {
      code: code.to_string(),
      values: values.iter().map(|v| Value::from(*v)).collect(),
    }
  }

  pub fn from_json(line: &str) -> Result<Self, serde_json::Error> {
    serde_json::from_str(line)
  }
}

impl From<(String, Vec<Value>)> for Package {
  fn from((code, values): (String, Vec<Value>)) -> Self {
    Self { code, values }
  }
}

// ---------------------------------------------------------------------------
// Activity kinds
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
  Running,
  SportsWalking,
  Swimming,
}

impl ActivityKind {
  pub const ALL: [ActivityKind; 3] = [Self::Running, Self::SportsWalking, Self::Swimming];

  /// Exact, case-sensitive lookup of a sensor code.
  pub fn from_code(code: &str) -> Option<Self> {
    match code {
      "RUN" => Some(Self::Running),
      "WLK" => Some(Self::SportsWalking),
      "SWM" => Some(Self::Swimming),
      _ => None,
    }
  }

  pub fn code(self) -> &'static str {
    match self {
      Self::Running => "RUN",
      Self::SportsWalking => "WLK",
      Self::Swimming => "SWM",
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      Self::Running => "Running",
      Self::SportsWalking => "SportsWalking",
      Self::Swimming => "Swimming",
    }
  }

  /// Positional field names, in wire order.
  pub fn fields(self) -> &'static [&'static str] {
    match self {
      Self::Running => &["action_count", "duration_hours", "weight_kg"],
      Self::SportsWalking => &["action_count", "duration_hours", "weight_kg", "height_cm"],
      Self::Swimming => &[
        "action_count",
        "duration_hours",
        "weight_kg",
        "pool_length_m",
        "pool_count",
      ],
    }
  }

  pub fn arity(self) -> usize {
    self.fields().len()
  }
}

// ---------------------------------------------------------------------------
// Internal validated readings
// ---------------------------------------------------------------------------

/// Validated sensor reading. Constructed only through dispatch, so
/// `duration_hours` is always finite and positive.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkoutReading {
  Running {
    action_count: u64,
    duration_hours: f64,
    weight_kg: f64,
  },
  SportsWalking {
    action_count: u64,
    duration_hours: f64,
    weight_kg: f64,
    height_cm: f64,
  },
  Swimming {
    action_count: u64,
    duration_hours: f64,
    weight_kg: f64,
    pool_length_m: f64,
    pool_count: u64,
  },
}

impl WorkoutReading {
  pub fn kind(&self) -> ActivityKind {
    match self {
      Self::Running { .. } => ActivityKind::Running,
      Self::SportsWalking { .. } => ActivityKind::SportsWalking,
      Self::Swimming { .. } => ActivityKind::Swimming,
    }
  }

  pub fn action_count(&self) -> u64 {
    match self {
      Self::Running { action_count, .. }
      | Self::SportsWalking { action_count, .. }
      | Self::Swimming { action_count, .. } => *action_count,
    }
  }

  pub fn duration_hours(&self) -> f64 {
    match self {
      Self::Running { duration_hours, .. }
      | Self::SportsWalking { duration_hours, .. }
      | Self::Swimming { duration_hours, .. } => *duration_hours,
    }
  }

  pub fn weight_kg(&self) -> f64 {
    match self {
      Self::Running { weight_kg, .. }
      | Self::SportsWalking { weight_kg, .. }
      | Self::Swimming { weight_kg, .. } => *weight_kg,
    }
  }
}

// ---------------------------------------------------------------------------
// Output types (JSON contract — what we emit)
// ---------------------------------------------------------------------------

/// Computed statistics for one workout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutResult {
  pub activity_type: String,
  pub duration_hours: f64,
  pub distance_km: f64,
  pub mean_speed_kmh: f64,
  pub calories_kcal: f64,
}
