//! Human-readable workout summary line.

use std::fmt;

use crate::types::WorkoutResult;

/// Renders a result with the fixed summary template.
pub struct InfoMessage<'a>(pub &'a WorkoutResult);

impl fmt::Display for InfoMessage<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let r = self.0;
    write!(
      f,
      "Activity: {}; Duration: {:.3} h; Distance: {:.3} km; Mean speed: {:.3} km/h; Calories burned: {:.3}.",
      r.activity_type, r.duration_hours, r.distance_km, r.mean_speed_kmh, r.calories_kcal
    )
  }
}

impl fmt::Display for WorkoutResult {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&InfoMessage(self), f)
  }
}

pub fn render(result: &WorkoutResult) -> String {
  InfoMessage(result).to_string()
}
