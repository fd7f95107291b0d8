//! Acute-triangle classification: per-vertex angles and the threshold predicate.

use tracing::debug;

use crate::angle::signed_angle;
use crate::config::Config;
use crate::types::{Aux, Preds, Sample, TrialOutput};

/// Classifies sampled triangles against a configured angle limit.
pub struct Classifier {
  config: Config,
}

impl Classifier {
  pub fn new(config: Config) -> Self {
    Self { config }
  }

  pub fn with_defaults() -> Self {
    Self::new(Config::default())
  }

  /// Compute the three vertex angles and the acute verdict (no I/O).
  pub fn classify(&self, sample: &Sample) -> TrialOutput {
    let angles = vertex_angles(sample);
    let acute = is_acute(&angles, self.config.acute_limit);
    debug!(?angles, acute, "classified triangle");

    TrialOutput {
      replicate: None,
      preds: Preds { acute },
      aux: Aux { angles },
    }
  }
}

/// Classify with the default right-angle limit.
pub fn classify(sample: &Sample) -> TrialOutput {
  Classifier::with_defaults().classify(sample)
}

/// Signed angle at each vertex, in vertex order.
///
/// Vertices 1 and 2 both take point 0 as their left neighbour; vertex 0 takes
/// point 1. Reordering changes the signs of the output.
pub fn vertex_angles(sample: &Sample) -> [f64; 3] {
  let [p0, p1, p2] = sample.points();
  debug!(?p0, ?p1, ?p2, "triangle vertices");
  [
    signed_angle(p0, p1, p2),
    signed_angle(p1, p0, p2),
    signed_angle(p2, p0, p1),
  ]
}

/// True when every angle's magnitude is strictly below `limit`.
pub fn is_acute(angles: &[f64], limit: f64) -> bool {
  angles.iter().all(|a| a.abs() < limit)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, PI};

  fn sample(pts: [(f64, f64); 3]) -> Sample {
    Sample {
      x0: pts[0].0,
      y0: pts[0].1,
      x1: pts[1].0,
      y1: pts[1].1,
      x2: pts[2].0,
      y2: pts[2].1,
    }
  }

  #[test]
  fn equilateral_is_acute() {
    let s = sample([(0.0, 0.0), (1.0, 0.0), (0.5, 3f64.sqrt() / 2.0)]);
    let out = classify(&s);
    for a in out.aux.angles {
      assert!((a.abs() - FRAC_PI_3).abs() < 1e-9, "angle {}", a);
    }
    assert!(out.preds.acute);
    assert!(out.replicate.is_none());
  }

  #[test]
  fn right_triangle_is_not_acute() {
    let s = sample([(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
    let out = classify(&s);
    let right = out
      .aux
      .angles
      .iter()
      .filter(|a| (a.abs() - FRAC_PI_2).abs() < 1e-9)
      .count();
    assert_eq!(right, 1);
    assert!(!out.preds.acute);
  }

  #[test]
  fn obtuse_triangle_is_not_acute() {
    let s = sample([(0.0, 0.0), (4.0, 0.0), (1.0, 1.0)]);
    let out = classify(&s);
    assert!(out.aux.angles.iter().any(|a| a.abs() > FRAC_PI_2));
    assert!(!out.preds.acute);
  }

  #[test]
  fn neighbour_order_sets_signs() {
    // Counterclockwise right triangle: vertex 0 sweeps p1 -> p2 (CCW, +),
    // vertices 1 and 2 sweep from p0 and come out with opposite orientation.
    let s = sample([(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
    let [a0, a1, a2] = vertex_angles(&s);
    assert!((a0 - FRAC_PI_2).abs() < 1e-12);
    assert!((a1 + PI / 4.0).abs() < 1e-12);
    assert!((a2 - PI / 4.0).abs() < 1e-12);
  }

  #[test]
  fn angles_stay_in_half_open_range() {
    let triangles = [
      [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)],
      [(0.0, 0.0), (0.0, 1.0), (1.0, 0.0)],
      [(-3.0, 2.0), (5.0, -1.0), (0.5, 7.0)],
      [(2.0, 2.0), (-1.0, -4.0), (-6.0, 3.0)],
      [(0.0, 0.0), (4.0, 0.0), (1.0, 1.0)],
    ];
    for t in triangles {
      for a in vertex_angles(&sample(t)) {
        assert!(a > -PI && a <= PI, "angle {} out of range for {:?}", a, t);
      }
    }
  }

  #[test]
  fn collinear_points_pass_through_unguarded() {
    let s = sample([(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
    let out = classify(&s);
    assert!(out.aux.angles.iter().all(|a| a.is_finite()));
    // Middle vertex sees its neighbours in opposite directions.
    assert!((out.aux.angles[1].abs() - PI).abs() < 1e-12);
    assert!(!out.preds.acute);
  }

  #[test]
  fn limit_is_strict() {
    assert!(!is_acute(&[FRAC_PI_2, 0.1, 0.1], FRAC_PI_2));
    assert!(!is_acute(&[0.1, -FRAC_PI_2, 0.1], FRAC_PI_2));
    assert!(is_acute(&[1.0, -1.0, 1.0], FRAC_PI_2));
  }

  #[test]
  fn custom_limit_is_respected() {
    let classifier = Classifier::new(Config { acute_limit: 1.0 });
    let s = sample([(0.0, 0.0), (1.0, 0.0), (0.5, 3f64.sqrt() / 2.0)]);
    assert!(!classifier.classify(&s).preds.acute);
  }
}
