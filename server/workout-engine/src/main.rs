//! Binary entrypoint: one summary line per package on stdout.
//!
//! When stdin is piped, each non-blank line is a JSON package such as
//! `["RUN", [15000, 1, 75]]`. When stdin is a terminal the built-in sample
//! packages are used instead. Failures go to stderr and do not stop the run;
//! the exit status is 1 if any package failed.

use std::io::{self, BufRead, IsTerminal, Write};

use tracing_subscriber::EnvFilter;
use workout_engine::{render, run_batch, sample_packages, Config, Package, WorkoutError};

fn main() {
  // Logs go to stderr; stdout carries result lines only. Rejections are
  // already reported below, so the default filter leaves out warnings.
  let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
  tracing_subscriber::fmt()
    .compact()
    .with_writer(io::stderr)
    .with_ansi(false)
    .with_target(false)
    .with_env_filter(env_filter)
    .init();

  let mut failed = false;
  let stdin = io::stdin();
  let packages: Vec<Package> = if stdin.is_terminal() {
    tracing::debug!("stdin is a terminal; using sample packages");
    sample_packages()
  } else {
    let mut packages = Vec::new();
    for line in stdin.lock().lines() {
      let line = match line {
        Ok(l) => l,
        Err(e) => {
          let _ = writeln!(io::stderr(), "workout-engine: read error: {}", e);
          std::process::exit(1);
        }
      };

      // Skip blank lines.
      let trimmed = line.trim();
      if trimmed.is_empty() {
        continue;
      }

      match Package::from_json(trimmed) {
        Ok(p) => packages.push(p),
        Err(e) => {
          failed = true;
          let _ = writeln!(io::stderr(), "workout-engine: {}", WorkoutError::from(e));
        }
      }
    }
    packages
  };

  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());

  for result in run_batch(&packages, &Config::default()) {
    match result {
      Ok(summary) => {
        let _ = writeln!(out, "{}", render(&summary));
      }
      Err(e) => {
        failed = true;
        let _ = writeln!(io::stderr(), "workout-engine: {}", e);
      }
    }
  }

  let _ = out.flush();
  if failed {
    std::process::exit(1);
  }
}
