//! Input/output types for the triangle executor (JSON contract with the runner).

use serde::{Deserialize, Serialize};

/// Input: one JSON object from the runner. Unknown fields are silently ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TrialInput {
  pub sample: Sample,
}

/// The sampled triangle: three vertices as flat coordinate fields.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Sample {
  pub x0: f64,
  pub y0: f64,
  pub x1: f64,
  pub y1: f64,
  pub x2: f64,
  pub y2: f64,
}

impl Sample {
  /// Vertices in the order they were supplied.
  pub fn points(&self) -> [Point; 3] {
    [
      Point::new(self.x0, self.y0),
      Point::new(self.x1, self.y1),
      Point::new(self.x2, self.y2),
    ]
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
  pub x: f64,
  pub y: f64,
}

impl Point {
  pub fn new(x: f64, y: f64) -> Self {
    Self { x, y }
  }
}

/// Output: one JSON object to stdout for the runner to parse.
///
/// Field order is part of the contract: `replicate`, `preds`, `aux`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrialOutput {
  /// Always null; the runner owns replication.
  pub replicate: Option<serde_json::Value>,
  pub preds: Preds,
  pub aux: Aux,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preds {
  pub acute: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aux {
  /// Signed angle per vertex, radians, vertex order.
  pub angles: [f64; 3],
}
