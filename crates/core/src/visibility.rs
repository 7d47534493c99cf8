//! Visibility sweep - the star-shaped region seen from a point
//!
//! Rays are cast at every occluder endpoint (plus two rays `±ε` to either side
//! so both faces of a corner are resolved), the hits are sorted by angle,
//! near-duplicates are merged and the result is closed into a triangle fan
//! around the origin.
//!
//! # Pipeline
//!
//! 1. sample: `3` rays per endpoint farther than `min_ray_distance`
//! 2. cast: closest hit with `t > 0`, `0 <= u <= 1`, else `max_distance`
//! 3. normalize angles to `[0, 2π)`
//! 4. stable sort by angle
//! 5. drop points closer than `dedup_distance` to the previous kept point
//! 6. fan: `(origin, p[i], p[i + 1])` plus the closing `(origin, p[n - 1], p[0])`
//!
//! With no occluders (and no seeded bounds) nothing is sampled and the fan is
//! empty.

use log::debug;

use crate::angle::{cast_ray, dedup_by_distance, sort_by_angle, AnglePoint};
use crate::config::VisibilityConfig;
use crate::error::{Result, SightError};
use crate::types::{Point, Segment, Triangle};

fn validate(origin: Point, max_distance: f32) -> Result<()> {
    if !origin.is_finite() {
        return Err(SightError::InvalidOrigin {
            x: origin.x,
            y: origin.y,
        });
    }
    if !max_distance.is_finite() || max_distance <= 0.0 {
        return Err(SightError::InvalidMaxDistance(max_distance));
    }
    Ok(())
}

/// Cast all sample rays, in generation order (bounds corners first, then
/// segment endpoints in segment order, `start` before `end`, `-ε, 0, +ε`).
pub fn sample_rays(
    origin: Point,
    segments: &[Segment],
    max_distance: f32,
    config: &VisibilityConfig,
) -> Vec<AnglePoint> {
    let occluders: Vec<Segment> = segments
        .iter()
        .filter(|s| !s.is_degenerate())
        .copied()
        .collect();

    let seeded: Vec<Point> = config
        .bounds
        .map(|b| b.corners().to_vec())
        .unwrap_or_default();

    let mut samples = Vec::with_capacity(seeded.len() + occluders.len() * 6);
    let mut cast = |angle: f32| {
        let hit = cast_ray(
            origin,
            Point::from_angle(angle),
            &occluders,
            max_distance,
            config.parallel_epsilon,
        );
        samples.push(AnglePoint::new(angle, hit));
    };

    for &corner in &seeded {
        if corner.distance(origin) > config.min_ray_distance {
            cast(corner.angle_from(origin));
        }
    }

    let eps = config.angle_epsilon;
    for endpoint in occluders.iter().flat_map(|s| s.endpoints()) {
        if endpoint.distance(origin) < config.min_ray_distance {
            continue;
        }
        let base = endpoint.angle_from(origin);
        for angle in [base - eps, base, base + eps] {
            cast(angle);
        }
    }

    samples
}

/// Close angle-sorted points into a triangle fan around `origin`.
pub fn build_fan(origin: Point, points: &[Point]) -> Vec<Triangle> {
    let Some((&first, _)) = points.split_first() else {
        return Vec::new();
    };
    let mut fan: Vec<Triangle> = points
        .windows(2)
        .map(|w| Triangle::new(origin, w[0], w[1]))
        .collect();
    let last = points[points.len() - 1];
    fan.push(Triangle::new(origin, last, first));
    fan
}

/// Outline of the visible region: hit points sorted by angle, deduplicated.
pub fn sight_polygon(
    origin: Point,
    segments: &[Segment],
    max_distance: f32,
    config: &VisibilityConfig,
) -> Result<Vec<Point>> {
    validate(origin, max_distance)?;

    let mut samples = sample_rays(origin, segments, max_distance, config);
    sort_by_angle(&mut samples);
    let kept = dedup_by_distance(&samples, config.dedup_distance);

    debug!(
        "sight polygon: origin={}, segments={}, range={}, rays={}, points={}",
        origin,
        segments.len(),
        max_distance,
        samples.len(),
        kept.len()
    );
    Ok(kept.into_iter().map(|s| s.point).collect())
}

/// Compute the visibility fan for `origin`.
///
/// Returns a fresh triangle sequence; an empty sequence means nothing was
/// sampled (no occluders and no seeded bounds), not an error. Only a non-finite
/// origin or a non-positive sight range is an error.
pub fn compute_visibility(
    origin: Point,
    segments: &[Segment],
    max_distance: f32,
    config: &VisibilityConfig,
) -> Result<Vec<Triangle>> {
    let outline = sight_polygon(origin, segments, max_distance, config)?;
    Ok(build_fan(origin, &outline))
}

/// Whether `point` lies inside any triangle of `fan`.
pub fn fan_contains(fan: &[Triangle], point: Point) -> bool {
    fan.iter().any(|t| t.contains(point))
}

/// Cached visibility result.
///
/// The sweep is a pure function of its inputs, so the previous fan is reused
/// while the origin stays within `origin_epsilon` and the edge generation,
/// sight range and configuration are unchanged.
#[derive(Debug, Clone)]
pub struct SightCache {
    origin_epsilon: f32,
    key: Option<CacheKey>,
    fan: Vec<Triangle>,
    hits: u64,
    misses: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct CacheKey {
    origin: Point,
    generation: u64,
    max_distance: f32,
    config: VisibilityConfig,
}

impl Default for SightCache {
    fn default() -> Self {
        Self::new(0.01)
    }
}

impl SightCache {
    pub fn new(origin_epsilon: f32) -> Self {
        Self {
            origin_epsilon,
            key: None,
            fan: Vec::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Return the fan for these inputs, recomputing only when they changed.
    ///
    /// `generation` must change whenever `segments` does.
    pub fn get_or_compute(
        &mut self,
        origin: Point,
        generation: u64,
        segments: &[Segment],
        max_distance: f32,
        config: &VisibilityConfig,
    ) -> Result<&[Triangle]> {
        let fresh = self.key.is_some_and(|k| {
            k.generation == generation
                && k.max_distance == max_distance
                && k.config == *config
                && k.origin.distance(origin) <= self.origin_epsilon
        });

        if fresh {
            self.hits += 1;
        } else {
            self.fan = compute_visibility(origin, segments, max_distance, config)?;
            self.key = Some(CacheKey {
                origin,
                generation,
                max_distance,
                config: *config,
            });
            self.misses += 1;
        }
        Ok(&self.fan)
    }

    pub fn invalidate(&mut self) {
        self.key = None;
    }

    /// (hits, misses) since creation.
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}
