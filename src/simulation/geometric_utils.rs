//! Geometric utility functions for distance calculations and angle handling.

use std::f32::consts::{PI, TAU};

use geo::algorithm::Distance;
use geo::{Euclidean, Point};

/// Euclidean distance between two points.
pub fn point_distance(a: Point<f32>, b: Point<f32>) -> f32 {
    Euclidean.distance(a, b)
}

/// Bearing from `from` towards `to`, in radians within `(-π, π]`.
pub fn bearing(from: Point<f32>, to: Point<f32>) -> f32 {
    (to.y() - from.y()).atan2(to.x() - from.x())
}

/// Wraps an angle into `[0, 2π)`.
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Signed difference `target - reference`, normalised into `[-π, π)`.
pub fn angle_difference(target: f32, reference: f32) -> f32 {
    (target - reference + PI).rem_euclid(TAU) - PI
}

/// Clamps a point into the rectangle spanned by the given ranges.
pub fn clamp_point(point: Point<f32>, x_range: (f32, f32), y_range: (f32, f32)) -> Point<f32> {
    Point::new(
        point.x().clamp(x_range.0, x_range.1),
        point.y().clamp(y_range.0, y_range.1),
    )
}
