//! Turn raw sensor packages into validated readings.

use serde_json::Value;

use crate::error::WorkoutError;
use crate::types::{ActivityKind, Package, WorkoutReading};

/// Read one package: resolve its activity code and validate its values.
pub fn read_package(package: &Package) -> Result<WorkoutReading, WorkoutError> {
  let code = package.code.as_str();
  let kind = ActivityKind::from_code(code).ok_or_else(|| WorkoutError::unknown(code))?;

  if package.values.len() != kind.arity() {
    return Err(WorkoutError::invalid(
      code,
      format!(
        "expected {} values ({}), got {}",
        kind.arity(),
        kind.fields().join(", "),
        package.values.len()
      ),
    ));
  }

  let fields = Fields {
    code,
    names: kind.fields(),
    values: &package.values,
  };

  let action_count = fields.count(0)?;
  let duration_hours = fields.positive(1)?;
  let weight_kg = fields.positive(2)?;

  let reading = match kind {
    ActivityKind::Running => WorkoutReading::Running {
      action_count,
      duration_hours,
      weight_kg,
    },
    ActivityKind::SportsWalking => WorkoutReading::SportsWalking {
      action_count,
      duration_hours,
      weight_kg,
      height_cm: fields.positive(3)?,
    },
    ActivityKind::Swimming => WorkoutReading::Swimming {
      action_count,
      duration_hours,
      weight_kg,
      pool_length_m: fields.positive(3)?,
      pool_count: fields.count(4)?,
    },
  };
  Ok(reading)
}

/// Positional view over a package's values, arity already checked.
struct Fields<'a> {
  code: &'a str,
  names: &'static [&'static str],
  values: &'a [Value],
}

impl Fields<'_> {
  fn number(&self, idx: usize) -> Result<f64, WorkoutError> {
    let name = self.names[idx];
    let v = self.values[idx]
      .as_f64()
      .ok_or_else(|| WorkoutError::invalid(self.code, format!("{}: expected a number", name)))?;
    if !v.is_finite() {
      return Err(WorkoutError::invalid(self.code, format!("{}: must be finite", name)));
    }
    Ok(v)
  }

  fn positive(&self, idx: usize) -> Result<f64, WorkoutError> {
    let v = self.number(idx)?;
    if v <= 0.0 {
      return Err(WorkoutError::invalid(
        self.code,
        format!("{}: must be greater than zero, got {}", self.names[idx], v),
      ));
    }
    Ok(v)
  }

  /// Non-negative whole number (step, stroke and lap counts).
  fn count(&self, idx: usize) -> Result<u64, WorkoutError> {
    let name = self.names[idx];
    if let Some(n) = self.values[idx].as_u64() {
      return Ok(n);
    }
    let v = self.number(idx)?;
    if v < 0.0 || v.fract() != 0.0 || v >= u64::MAX as f64 {
      return Err(WorkoutError::invalid(
        self.code,
        format!("{}: expected a non-negative whole number, got {}", name, v),
      ));
    }
    Ok(v as u64)
  }
}
