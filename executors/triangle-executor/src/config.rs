//! Classifier configuration with sane defaults.

use std::f64::consts::FRAC_PI_2;

/// Tunable thresholds for triangle classification.
#[derive(Debug, Clone)]
pub struct Config {
  /// Every |angle| must be strictly below this (radians) for the triangle to be acute.
  pub acute_limit: f64,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      acute_limit: FRAC_PI_2,
    }
  }
}
