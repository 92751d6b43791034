//! Engine configuration with sane defaults.

/// What a batch run does after a package fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchPolicy {
  /// Report the failure and keep going with the remaining packages.
  #[default]
  Continue,
  /// Stop at the first failure.
  Halt,
}

/// Caller policy for batch runs. Formula constants are fixed and not part of it.
#[derive(Debug, Clone, Default)]
pub struct Config {
  pub batch_policy: BatchPolicy,
}
