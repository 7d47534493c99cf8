//! Angle and ray math used by the visibility sweep.
//!
//! Everything here is pure: no allocation beyond the returned vectors and no
//! shared state.

use std::cmp::Ordering;
use std::f32::consts::TAU;

use crate::types::{Point, Segment, PARALLEL_EPSILON};

/// A ray sample: the ray's angle around the origin and where it stopped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnglePoint {
    /// Normalized to `[0, 2π)`.
    pub angle: f32,
    pub point: Point,
}

impl AnglePoint {
    pub fn new(angle: f32, point: Point) -> Self {
        Self {
            angle: normalize_angle(angle),
            point,
        }
    }
}

/// Map an angle into `[0, 2π)`.
///
/// ```
/// use std::f32::consts::PI;
/// use tile_sight_core::angle::normalize_angle;
///
/// assert_eq!(normalize_angle(0.0), 0.0);
/// assert!((normalize_angle(-PI / 2.0) - 3.0 * PI / 2.0).abs() < 1e-6);
/// assert!(normalize_angle(-1e-9) < 2.0 * PI);
/// ```
pub fn normalize_angle(angle: f32) -> f32 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid rounds tiny negative inputs up to exactly TAU and keeps the
    // sign of -0.0; both map to +0.0 so equal angles sort as ties.
    if a >= TAU || a == 0.0 {
        0.0
    } else {
        a
    }
}

/// Orders samples by normalized angle only; equal angles compare equal.
pub fn compare_by_angle(a: &AnglePoint, b: &AnglePoint) -> Ordering {
    normalize_angle(a.angle).total_cmp(&normalize_angle(b.angle))
}

/// Stable ascending sort by angle. Samples with equal angles keep their
/// generation order.
pub fn sort_by_angle(samples: &mut [AnglePoint]) {
    samples.sort_by(compare_by_angle);
}

/// Ray parameter `t` at which `origin + direction * t` crosses `segment`.
///
/// Returns `None` when the ray is (near-)parallel to the segment
/// (`|cross(direction, segment)| < parallel_epsilon`), when the crossing is
/// behind or at the origin (`t <= 0`), or when it falls outside the segment
/// (`u` outside `[0, 1]`).
pub fn ray_parameter(
    origin: Point,
    direction: Point,
    segment: &Segment,
    parallel_epsilon: f32,
) -> Option<f32> {
    let edge = segment.direction();
    let to_start = segment.start - origin;

    let denominator = direction.cross(edge);
    if denominator.abs() < parallel_epsilon {
        return None;
    }

    let t = to_start.cross(edge) / denominator;
    let u = to_start.cross(direction) / denominator;

    (t > 0.0 && (0.0..=1.0).contains(&u)).then_some(t)
}

/// Intersection point of a ray with a segment, if any.
pub fn intersect(origin: Point, direction: Point, segment: &Segment) -> Option<Point> {
    ray_parameter(origin, direction, segment, PARALLEL_EPSILON).map(|t| origin + direction * t)
}

/// Cast a unit-length ray and return the closest hit within `max_distance`,
/// or the point at `max_distance` along the ray when nothing is hit.
pub fn cast_ray(
    origin: Point,
    direction: Point,
    segments: &[Segment],
    max_distance: f32,
    parallel_epsilon: f32,
) -> Point {
    let closest = segments
        .iter()
        .filter_map(|s| ray_parameter(origin, direction, s, parallel_epsilon))
        .filter(|&t| t < max_distance)
        .min_by(f32::total_cmp)
        .unwrap_or(max_distance);
    origin + direction * closest
}

/// Drop every sample closer than `threshold` to the previously kept sample.
///
/// The first and last samples are never compared with each other.
pub fn dedup_by_distance(samples: &[AnglePoint], threshold: f32) -> Vec<AnglePoint> {
    let mut kept: Vec<AnglePoint> = Vec::with_capacity(samples.len());
    for sample in samples {
        match kept.last() {
            Some(last) if last.point.distance(sample.point) < threshold => {}
            _ => kept.push(*sample),
        }
    }
    kept
}
