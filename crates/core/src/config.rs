//! Tunable visibility parameters.
//!
//! The defaults reproduce the constants in `tile_sight_types`. They are
//! empirically chosen for rooms with 32-unit cells, so they can be overridden
//! from the environment for experiments at other scales.

use std::env;

use log::warn;

use crate::types::{
    Rect, ANGLE_EPSILON, DEDUP_DISTANCE, MIN_RAY_DISTANCE, PARALLEL_EPSILON,
};

/// Visibility sweep configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityConfig {
    /// Offset (radians) of the side rays cast around each endpoint.
    pub angle_epsilon: f32,
    /// Consecutive fan points closer than this are merged.
    pub dedup_distance: f32,
    /// Endpoints closer than this to the origin are skipped.
    pub min_ray_distance: f32,
    /// Ray/segment pairs below this cross product are treated as parallel.
    pub parallel_epsilon: f32,
    /// When set, one ray is also cast at each corner of this rectangle
    /// (typically the viewport in world space). With no occluders this turns
    /// the otherwise empty result into a fan bounded by the sight range.
    /// [`crate::Room`] fills this with its grid bounds when unset.
    pub bounds: Option<Rect>,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            angle_epsilon: ANGLE_EPSILON,
            dedup_distance: DEDUP_DISTANCE,
            min_ray_distance: MIN_RAY_DISTANCE,
            parallel_epsilon: PARALLEL_EPSILON,
            bounds: None,
        }
    }
}

impl VisibilityConfig {
    /// Create from environment variables
    ///
    /// - `TILE_SIGHT_ANGLE_EPSILON`
    /// - `TILE_SIGHT_DEDUP_DISTANCE`
    /// - `TILE_SIGHT_MIN_RAY_DISTANCE`
    ///
    /// Missing variables keep their defaults; unparseable or non-positive
    /// values are logged and ignored.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            angle_epsilon: env_f32("TILE_SIGHT_ANGLE_EPSILON", defaults.angle_epsilon),
            dedup_distance: env_f32("TILE_SIGHT_DEDUP_DISTANCE", defaults.dedup_distance),
            min_ray_distance: env_f32("TILE_SIGHT_MIN_RAY_DISTANCE", defaults.min_ray_distance),
            ..defaults
        }
    }

    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = Some(bounds);
        self
    }
}

/// Read a positive float from the environment, falling back to `default`.
pub fn env_f32(key: &str, default: f32) -> f32 {
    match env::var(key) {
        Ok(raw) => parse_positive(&raw).unwrap_or_else(|| {
            warn!("ignoring {key}={raw:?}: expected a positive number");
            default
        }),
        Err(_) => default,
    }
}

fn parse_positive(raw: &str) -> Option<f32> {
    raw.trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shared_constants() {
        let config = VisibilityConfig::default();
        assert_eq!(config.angle_epsilon, 0.0001);
        assert_eq!(config.dedup_distance, 1.0);
        assert_eq!(config.min_ray_distance, 0.1);
        assert_eq!(config.bounds, None);
    }

    #[test]
    fn parse_positive_rejects_junk() {
        assert_eq!(parse_positive(" 0.5 "), Some(0.5));
        assert_eq!(parse_positive("0"), None);
        assert_eq!(parse_positive("-1"), None);
        assert_eq!(parse_positive("inf"), None);
        assert_eq!(parse_positive("abc"), None);
    }

    #[test]
    fn env_f32_falls_back_when_unset() {
        assert_eq!(env_f32("TILE_SIGHT_TEST_UNSET_VARIABLE", 2.5), 2.5);
    }
}
