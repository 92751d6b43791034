//! Core engine: package in, computed result out.

use tracing::{debug, warn};

use crate::config::{BatchPolicy, Config};
use crate::dispatch;
use crate::error::WorkoutError;
use crate::formulas;
use crate::types::{Package, WorkoutResult};

/// Process a single package: dispatch, validate, compute.
pub fn process(package: &Package) -> Result<WorkoutResult, WorkoutError> {
  let reading = match dispatch::read_package(package) {
    Ok(r) => r,
    Err(e) => {
      warn!(code = %package.code, error = %e, "rejected package");
      return Err(e);
    }
  };
  debug!(kind = reading.kind().label(), ?reading, "dispatched package");

  let result = formulas::summarize(&reading);
  if let Some(field) = non_finite_field(&result) {
    let e = WorkoutError::invalid(&package.code, format!("{}: result is not finite", field));
    warn!(code = %package.code, error = %e, "rejected package");
    return Err(e);
  }
  debug!(
    distance_km = result.distance_km,
    mean_speed_kmh = result.mean_speed_kmh,
    calories_kcal = result.calories_kcal,
    "computed workout"
  );
  Ok(result)
}

/// Extreme but finite inputs can still overflow the formulas.
fn non_finite_field(result: &WorkoutResult) -> Option<&'static str> {
  [
    ("distance_km", result.distance_km),
    ("mean_speed_kmh", result.mean_speed_kmh),
    ("calories_kcal", result.calories_kcal),
  ]
  .into_iter()
  .find(|(_, v)| !v.is_finite())
  .map(|(name, _)| name)
}

/// Process packages in input order.
///
/// With `BatchPolicy::Halt` the run stops after the first failure, which is
/// then the last entry of the returned list.
pub fn run_batch(packages: &[Package], config: &Config) -> Vec<Result<WorkoutResult, WorkoutError>> {
  let mut out = Vec::with_capacity(packages.len());
  for package in packages {
    let result = process(package);
    let failed = result.is_err();
    out.push(result);
    if failed && config.batch_policy == BatchPolicy::Halt {
      debug!(processed = out.len(), total = packages.len(), "batch halted");
      break;
    }
  }
  out
}

/// The built-in sample packages.
pub fn sample_packages() -> Vec<Package> {
  vec![
    Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    Package::new("RUN", &[15000.0, 1.0, 75.0]),
    Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
  ]
}
