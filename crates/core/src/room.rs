//! Room - a grid plus its derived occluder set
//!
//! The room is the single owner of the mutable grid and of the segments derived
//! from it. Every edit marks the segments dirty; they are rebuilt wholesale
//! before the next visibility query, so a query never sees stale edges.
//!
//! A room always samples its own bounds corners (see
//! [`VisibilityConfig::bounds`]): without them, an origin that no wall
//! surrounds would leave an angular gap wider than π and the closing fan
//! triangle would cover the wrong side. Configs that already carry bounds keep
//! them.

use log::{debug, trace};

use crate::config::VisibilityConfig;
use crate::edges::extract_edges;
use crate::error::Result;
use crate::grid::Grid;
use crate::types::{Point, Segment, TileType, Triangle};
use crate::visibility::{compute_visibility, sight_polygon, SightCache};

#[derive(Debug, Clone)]
pub struct Room {
    grid: Grid,
    segments: Vec<Segment>,
    edges_dirty: bool,
    /// Bumped on every rebuild; keys the sight cache.
    generation: u64,
    config: VisibilityConfig,
    cache: SightCache,
}

impl Room {
    /// Wrap a grid and build its edges.
    pub fn new(grid: Grid) -> Self {
        let config = VisibilityConfig::default().with_bounds(grid.bounds());
        let mut room = Self {
            grid,
            segments: Vec::new(),
            edges_dirty: true,
            generation: 0,
            config,
            cache: SightCache::default(),
        };
        room.rebuild_edges();
        room
    }

    pub fn with_config(mut self, config: VisibilityConfig) -> Self {
        self.set_config(config);
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &VisibilityConfig {
        &self.config
    }

    /// Replace the sweep configuration. Missing bounds default to the grid's.
    pub fn set_config(&mut self, config: VisibilityConfig) {
        self.config = VisibilityConfig {
            bounds: config.bounds.or(Some(self.grid.bounds())),
            ..config
        };
    }

    /// Current segments. Stale while [`Room::edges_dirty`] is true.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn edges_dirty(&self) -> bool {
        self.edges_dirty
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Set a cell's tile. Out-of-bounds edits are ignored and return false.
    pub fn set_cell_type(&mut self, col: i32, row: i32, tile: TileType) -> bool {
        let previous = self.grid.tile_at(col, row);
        if !self.grid.set_cell_type(col, row, tile) {
            trace!("ignored edit outside room at ({col}, {row})");
            return false;
        }
        if previous != Some(tile) {
            self.edges_dirty = true;
        }
        true
    }

    /// Flip the cell between floor and wall.
    pub fn toggle_cell(&mut self, col: i32, row: i32) -> Option<TileType> {
        let tile = self.grid.toggle_cell(col, row);
        match tile {
            Some(_) => self.edges_dirty = true,
            None => trace!("ignored toggle outside room at ({col}, {row})"),
        }
        tile
    }

    /// Re-extract all segments from the grid.
    pub fn rebuild_edges(&mut self) {
        self.segments = extract_edges(&self.grid);
        self.edges_dirty = false;
        self.generation += 1;
        debug!(
            "rebuilt room edges: {} segments, generation {}",
            self.segments.len(),
            self.generation
        );
    }

    /// Rebuild only if an edit happened since the last rebuild.
    pub fn ensure_edges(&mut self) -> &[Segment] {
        if self.edges_dirty {
            self.rebuild_edges();
        }
        &self.segments
    }

    /// Fresh visibility fan from `origin`.
    pub fn visibility(&mut self, origin: Point, max_distance: f32) -> Result<Vec<Triangle>> {
        self.ensure_edges();
        compute_visibility(origin, &self.segments, max_distance, &self.config)
    }

    /// Visibility fan, reusing the previous one when nothing relevant changed.
    pub fn cached_visibility(&mut self, origin: Point, max_distance: f32) -> Result<&[Triangle]> {
        self.ensure_edges();
        self.cache.get_or_compute(
            origin,
            self.generation,
            &self.segments,
            max_distance,
            &self.config,
        )
    }

    /// Outline of the visible region from `origin`.
    pub fn sight_polygon(&mut self, origin: Point, max_distance: f32) -> Result<Vec<Point>> {
        self.ensure_edges();
        sight_polygon(origin, &self.segments, max_distance, &self.config)
    }

    /// (hits, misses) of the visibility cache.
    pub fn cache_stats(&self) -> (u64, u64) {
        self.cache.stats()
    }
}
