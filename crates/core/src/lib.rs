//! Core visibility logic - pure, deterministic, and testable
//!
//! This crate turns a tile grid into occluding segments and computes the region
//! visible from a point as a triangle fan. It has **no dependencies** on
//! terminals, windows or input, making it:
//!
//! - **Deterministic**: the same grid and origin always give the same fan
//! - **Testable**: every stage is a plain function over owned values
//! - **Portable**: callable from any renderer (terminal, GPU, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size tile grid with bounds-checked reads and edits
//! - [`edges`]: two-pass boundary tracing with run-length merging
//! - [`angle`]: angle normalization, ray/segment intersection, sort and dedup
//! - [`visibility`]: angular sweep producing the triangle fan, plus a result cache
//! - [`room`]: grid + derived segments with dirty tracking
//! - [`loader`]: ASCII and JSON room formats
//! - [`config`]: tunable sweep parameters
//!
//! # Example
//!
//! ```
//! use tile_sight_core::{Grid, Room};
//! use tile_sight_types::{Point, TileType};
//!
//! let mut grid = Grid::new(8, 8, 32.0).unwrap();
//! grid.fill_border(TileType::Wall);
//! let mut room = Room::new(grid);
//!
//! // Drop a pillar into the room; edges are rebuilt on the next query.
//! room.set_cell_type(3, 3, TileType::Wall);
//!
//! let fan = room.visibility(Point::new(64.0, 200.0), 300.0).unwrap();
//! assert!(!fan.is_empty());
//! assert!(fan.iter().all(|t| t.p1 == Point::new(64.0, 200.0)));
//! ```
//!
//! # Frame Loop
//!
//! Edit the room, then query. [`Room`] rebuilds edges lazily, so the ordering
//! rule "rebuild before the next visibility query" holds without the caller
//! tracking it. Callers that drive the stages by hand must call
//! [`edges::extract_edges`] after every grid mutation.

pub mod angle;
pub mod config;
pub mod edges;
pub mod error;
pub mod grid;
pub mod loader;
pub mod room;
pub mod visibility;

pub use tile_sight_types as types;

// Re-export commonly used types for convenience
pub use angle::{normalize_angle, AnglePoint};
pub use config::VisibilityConfig;
pub use edges::{extract_boundaries, extract_edges, Boundary};
pub use error::{Result, SightError};
pub use grid::{Cell, Grid};
pub use loader::{demo_room, load_room, parse_ascii, RoomFile};
pub use room::Room;
pub use visibility::{compute_visibility, fan_contains, sight_polygon, SightCache};
