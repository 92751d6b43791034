//! Per-activity distance, mean speed and calorie formulas.
//!
//! Every function here is pure. Callers pass readings built by `dispatch`, so
//! durations (and walking heights) are known to be positive.

use crate::types::{ActivityKind, WorkoutReading, WorkoutResult};

const M_IN_KM: f64 = 1000.0;
const MIN_IN_HOUR: f64 = 60.0;

/// Step length in metres shared by running and walking.
const LEN_STEP: f64 = 0.65;

mod running {
  pub const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
  pub const CALORIES_SPEED_SHIFT: f64 = 20.0;
}

mod walking {
  pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
  pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
  pub const SPEED_POW: f64 = 2.0;
}

mod swimming {
  /// Stroke length in metres.
  pub const LEN_STEP: f64 = 1.38;
  pub const CALORIES_SPEED_SHIFT: f64 = 1.1;
  pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;
}

/// Floor division with Python `//` semantics on floats.
///
/// The quotient is derived from `fmod` rather than `(a / b).floor()`, so
/// `floor_div(1.0, 0.1) == 9.0`. `b` must be non-zero.
pub fn floor_div(a: f64, b: f64) -> f64 {
  let m = a % b;
  let mut div = (a - m) / b;
  if m != 0.0 && ((b < 0.0) != (m < 0.0)) {
    div -= 1.0;
  }
  if div != 0.0 {
    let floored = div.floor();
    if div - floored > 0.5 {
      floored + 1.0
    } else {
      floored
    }
  } else {
    0.0_f64.copysign(a / b)
  }
}

fn step_length(kind: ActivityKind) -> f64 {
  match kind {
    ActivityKind::Swimming => swimming::LEN_STEP,
    ActivityKind::Running | ActivityKind::SportsWalking => LEN_STEP,
  }
}

/// Distance in km: action count times the per-activity step length.
pub fn distance_km(reading: &WorkoutReading) -> f64 {
  reading.action_count() as f64 * step_length(reading.kind()) / M_IN_KM
}

/// Mean speed in km/h over the whole duration.
///
/// Swimming uses pool length × pool count instead of the step-based distance.
pub fn mean_speed_kmh(reading: &WorkoutReading) -> f64 {
  match reading {
    WorkoutReading::Swimming {
      duration_hours,
      pool_length_m,
      pool_count,
      ..
    } => pool_length_m * *pool_count as f64 / M_IN_KM / duration_hours,
    _ => distance_km(reading) / reading.duration_hours(),
  }
}

/// Calories burned in kcal.
pub fn spent_calories(reading: &WorkoutReading) -> f64 {
  let speed = mean_speed_kmh(reading);
  let minutes = reading.duration_hours() * MIN_IN_HOUR;
  match reading {
    WorkoutReading::Running { weight_kg, .. } => {
      let per_kilo =
        running::CALORIES_SPEED_MULTIPLIER * speed - running::CALORIES_SPEED_SHIFT;
      per_kilo * weight_kg / M_IN_KM * minutes
    }
    WorkoutReading::SportsWalking {
      weight_kg,
      height_cm,
      ..
    } => {
      // Floor division is part of the reference formula.
      let speed_to_height = floor_div(speed.powf(walking::SPEED_POW), *height_cm);
      let per_kilo = walking::CALORIES_WEIGHT_MULTIPLIER
        + speed_to_height * walking::CALORIES_SPEED_HEIGHT_MULTIPLIER;
      weight_kg * per_kilo * minutes
    }
    WorkoutReading::Swimming { weight_kg, .. } => {
      (speed + swimming::CALORIES_SPEED_SHIFT) * swimming::CALORIES_WEIGHT_MULTIPLIER * weight_kg
    }
  }
}

/// Compute the full result record for a reading.
pub fn summarize(reading: &WorkoutReading) -> WorkoutResult {
  WorkoutResult {
    activity_type: reading.kind().label().to_string(),
    duration_hours: reading.duration_hours(),
    distance_km: distance_km(reading),
    mean_speed_kmh: mean_speed_kmh(reading),
    calories_kcal: spent_calories(reading),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const EPS: f64 = 1e-9;

  fn running(action_count: u64, duration_hours: f64, weight_kg: f64) -> WorkoutReading {
    WorkoutReading::Running {
      action_count,
      duration_hours,
      weight_kg,
    }
  }

  #[test]
  fn floor_div_matches_python_semantics() {
    assert_eq!(floor_div(7.0, 2.0), 3.0);
    assert_eq!(floor_div(-7.0, 2.0), -4.0);
    assert_eq!(floor_div(7.0, -2.0), -4.0);
    assert_eq!(floor_div(1.0, 0.1), 9.0);
    assert_eq!(floor_div(34.2225, 180.0), 0.0);
    assert!(floor_div(-0.5, 180.0) == -1.0);
  }

  #[test]
  fn running_reference_values() {
    let r = running(15000, 1.0, 75.0);
    assert!((distance_km(&r) - 9.75).abs() < EPS);
    assert!((mean_speed_kmh(&r) - 9.75).abs() < EPS);
    assert!((spent_calories(&r) - 699.75).abs() < EPS);
  }

  #[test]
  fn running_calories_follow_formula_for_other_durations() {
    for (action, hours, weight) in [(8000, 0.5, 60.0), (20000, 1.75, 82.5), (1, 0.01, 40.0)] {
      let r = running(action, hours, weight);
      let speed = action as f64 * 0.65 / 1000.0 / hours;
      let expected = (18.0 * speed - 20.0) * weight / 1000.0 * hours * 60.0;
      assert!(
        (spent_calories(&r) - expected).abs() < EPS,
        "action={} hours={} weight={}",
        action,
        hours,
        weight
      );
    }
  }

  #[test]
  fn walking_uses_floor_division() {
    let r = WorkoutReading::SportsWalking {
      action_count: 9000,
      duration_hours: 1.0,
      weight_kg: 75.0,
      height_cm: 180.0,
    };
    assert!((distance_km(&r) - 5.85).abs() < EPS);
    assert!((mean_speed_kmh(&r) - 5.85).abs() < EPS);
    // 5.85^2 / 180 = 0.19..., floored to 0.
    assert!((spent_calories(&r) - 157.5).abs() < EPS);
  }

  #[test]
  fn walking_floor_term_kicks_in_at_high_speed() {
    // 30000 steps in 1h = 19.5 km/h; 19.5^2 = 380.25; // 180 = 2.
    let r = WorkoutReading::SportsWalking {
      action_count: 30000,
      duration_hours: 1.0,
      weight_kg: 70.0,
      height_cm: 180.0,
    };
    let expected = (0.035 * 70.0 + 2.0 * 0.029 * 70.0) * 60.0;
    assert!((spent_calories(&r) - expected).abs() < EPS);
  }

  #[test]
  fn swimming_speed_uses_pool_dimensions() {
    let r = WorkoutReading::Swimming {
      action_count: 720,
      duration_hours: 1.0,
      weight_kg: 80.0,
      pool_length_m: 25.0,
      pool_count: 40,
    };
    assert!((distance_km(&r) - 0.9936).abs() < EPS);
    assert!((mean_speed_kmh(&r) - 1.0).abs() < EPS);
    assert!((spent_calories(&r) - 336.0).abs() < EPS);
  }

  #[test]
  fn swimming_speed_ignores_stroke_distance() {
    let r = WorkoutReading::Swimming {
      action_count: 5000,
      duration_hours: 2.0,
      weight_kg: 70.0,
      pool_length_m: 50.0,
      pool_count: 30,
    };
    assert!((mean_speed_kmh(&r) - 0.75).abs() < EPS);
    assert!((mean_speed_kmh(&r) - distance_km(&r) / 2.0).abs() > 1.0);
  }

  #[test]
  fn summarize_labels_by_kind() {
    let result = summarize(&running(15000, 1.0, 75.0));
    assert_eq!(result.activity_type, "Running");
    assert_eq!(result.duration_hours, 1.0);
    assert!((result.calories_kcal - 699.75).abs() < EPS);
  }
}
