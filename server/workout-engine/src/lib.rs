//! PushLog Workout Engine — deterministic workout statistics.
//!
//! Reads raw sensor packages (activity code + positional values), computes
//! distance, mean speed and calories with fixed per-activity formulas, and
//! renders a one-line summary per workout.
//!
//! No DB, no network; pure computation.

pub mod config;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod formulas;
pub mod message;
pub mod types;

pub use config::{BatchPolicy, Config};
pub use engine::{process, run_batch, sample_packages};
pub use error::WorkoutError;
pub use message::render;
pub use types::{ActivityKind, Package, WorkoutReading, WorkoutResult};
