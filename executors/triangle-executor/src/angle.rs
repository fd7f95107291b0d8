//! Signed vertex angles from atan2 bearings.

use std::f64::consts::{PI, TAU};

use crate::types::Point;

/// Wraps a bearing difference into (−π, π] with a single ±2π adjustment.
///
/// Inputs are differences of two `atan2` results and so lie in [−2π, 2π];
/// nothing outside that range is corrected further.
#[inline]
pub fn normalize_signed(angle: f64) -> f64 {
  let mut norm = angle;
  if norm > PI {
    norm -= TAU;
  }
  if norm < -PI {
    norm += TAU;
  }
  norm
}

/// Signed angle at `center` sweeping from the bearing of `left` to the
/// bearing of `right`. Counterclockwise is positive.
///
/// Swapping `left` and `right` flips the sign.
#[inline]
pub fn signed_angle(center: Point, left: Point, right: Point) -> f64 {
  let to_right = (right.y - center.y).atan2(right.x - center.x);
  let to_left = (left.y - center.y).atan2(left.x - center.x);
  tracing::trace!(to_left, to_right, "bearings");
  normalize_signed(to_right - to_left)
}
