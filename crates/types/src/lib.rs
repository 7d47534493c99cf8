//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (edge extraction, visibility, terminal rendering).
//!
//! # Coordinates
//!
//! World space is measured in world units with `x` growing to the right and `y`
//! growing downwards, matching the tile grid:
//!
//! - Cell `(col, row)` covers `[col * size, (col + 1) * size) x [row * size, (row + 1) * size)`
//! - Angles come from `atan2(dy, dx)`, so `π/2` points *down* the screen
//!
//! # Visibility Tuning Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `ANGLE_EPSILON` | 0.0001 rad | Offset of the two side rays cast around each corner |
//! | `DEDUP_DISTANCE` | 1.0 | Hits closer than this to the previous kept hit are dropped |
//! | `MIN_RAY_DISTANCE` | 0.1 | Endpoints closer than this to the origin are not sampled |
//! | `PARALLEL_EPSILON` | 1e-4 | Ray/segment pairs with a smaller cross product are parallel |
//!
//! The first three are defaults; the core crate's `VisibilityConfig` can override them.
//!
//! # Examples
//!
//! ```
//! use tile_sight_types::{Point, Segment, Side, TileType};
//!
//! let wall = Segment::new(Point::new(0.0, 0.0), Point::new(64.0, 0.0));
//! assert_eq!(wall.length(), 64.0);
//!
//! assert_eq!(Side::from_str("n"), Some(Side::North));
//! assert!(TileType::Wall.is_solid());
//! assert_eq!(TileType::from_glyph('.'), Some(TileType::Floor));
//! ```

use std::ops::{Add, Mul, Sub};

/// Default tile edge length in world units.
pub const DEFAULT_CELL_SIZE: f32 = 32.0;

/// Default room width in cells.
pub const DEFAULT_ROOM_WIDTH: u16 = 16;

/// Default room height in cells.
pub const DEFAULT_ROOM_HEIGHT: u16 = 16;

/// Angular offset (radians) of the side rays cast around each sampled endpoint.
pub const ANGLE_EPSILON: f32 = 0.0001;

/// Minimum distance between consecutive fan points.
pub const DEDUP_DISTANCE: f32 = 1.0;

/// Endpoints closer than this to the origin have no usable angle.
pub const MIN_RAY_DISTANCE: f32 = 0.1;

/// Below this `|cross(direction, segment)|` a ray is treated as parallel.
pub const PARALLEL_EPSILON: f32 = 1e-4;

/// Default sight range in world units.
pub const DEFAULT_SIGHT_RANGE: f32 = 300.0;

/// Viewer body size (width, height) in world units.
pub const VIEWER_SIZE: (f32, f32) = (16.0, 32.0);

/// Distance the demo viewer moves per key press.
pub const VIEWER_STEP: f32 = 8.0;

/// Sight range change per key press.
pub const SIGHT_RANGE_STEP: f32 = 32.0;

/// A point (or vector) in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing at `angle` radians.
    pub fn from_angle(angle: f32) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    pub fn distance(self, other: Point) -> f32 {
        (other - self).length()
    }

    /// 2D cross product (z component of the 3D cross product).
    pub fn cross(self, other: Point) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Raw `atan2` angle of `self` as seen from `origin`, in `(-π, π]`.
    pub fn angle_from(self, origin: Point) -> f32 {
        let d = self - origin;
        d.y.atan2(d.x)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point {
    type Output = Point;

    fn mul(self, rhs: f32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// An occluding line segment in world space.
///
/// Segments produced by the edge extractor are axis-aligned with `start` at the
/// top/left end, but the visibility code accepts any orientation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Direction vector from `start` to `end` (not normalized).
    pub fn direction(&self) -> Point {
        self.end - self.start
    }

    pub fn length(&self) -> f32 {
        self.direction().length()
    }

    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    pub fn endpoints(&self) -> [Point; 2] {
        [self.start, self.end]
    }
}

/// One triangle of a visibility fan. `p1` is always the fan origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Triangle {
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl Triangle {
    pub const fn new(p1: Point, p2: Point, p3: Point) -> Self {
        Self { p1, p2, p3 }
    }

    /// Signed doubled area; positive when `p1 -> p2 -> p3` turns clockwise on screen.
    pub fn signed_area2(&self) -> f32 {
        (self.p2 - self.p1).cross(self.p3 - self.p1)
    }

    /// Point-in-triangle test, inclusive of the edges.
    ///
    /// Zero-area triangles contain nothing.
    pub fn contains(&self, p: Point) -> bool {
        if self.signed_area2().abs() <= f32::EPSILON {
            return false;
        }
        let d1 = (p - self.p1).cross(self.p2 - self.p1);
        let d2 = (p - self.p2).cross(self.p3 - self.p2);
        let d3 = (p - self.p3).cross(self.p1 - self.p3);

        let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
        let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
        !(has_neg && has_pos)
    }
}

/// Axis-aligned rectangle in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    pub fn from_origin_size(origin: Point, width: f32, height: f32) -> Self {
        Self::new(origin, Point::new(origin.x + width, origin.y + height))
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }

    /// Corners in order: top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self) -> [Point; 4] {
        [
            self.min,
            Point::new(self.max.x, self.min.y),
            self.max,
            Point::new(self.min.x, self.max.y),
        ]
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }
}

/// Side of a solid cell on which a boundary lies.
///
/// - **North**: top edge, neighbor at `row - 1`
/// - **South**: bottom edge, neighbor at `row + 1`
/// - **East**: right edge, neighbor at `col + 1`
/// - **West**: left edge, neighbor at `col - 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    North,
    South,
    East,
    West,
}

impl Side {
    /// All sides, in the slot order used by per-cell edge references.
    pub const ALL: [Side; 4] = [Side::North, Side::South, Side::East, Side::West];

    /// Slot index in `[0, 4)`.
    pub fn index(self) -> usize {
        match self {
            Side::North => 0,
            Side::South => 1,
            Side::East => 2,
            Side::West => 3,
        }
    }

    /// `(dcol, drow)` offset of the neighbor across this side.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Side::North => (0, -1),
            Side::South => (0, 1),
            Side::East => (1, 0),
            Side::West => (-1, 0),
        }
    }

    /// Whether runs on this side extend horizontally (along a row).
    pub fn is_horizontal(self) -> bool {
        matches!(self, Side::North | Side::South)
    }

    /// Parse side from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "north" | "n", "south" | "s", "east" | "e", "west" | "w"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "north" | "n" => Some(Side::North),
            "south" | "s" => Some(Side::South),
            "east" | "e" => Some(Side::East),
            "west" | "w" => Some(Side::West),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::North => "north",
            Side::South => "south",
            Side::East => "east",
            Side::West => "west",
        }
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale each channel by `num / den`.
    pub const fn scaled(self, num: u16, den: u16) -> Self {
        Self {
            r: (self.r as u16 * num / den) as u8,
            g: (self.g as u16 * num / den) as u8,
            b: (self.b as u16 * num / den) as u8,
        }
    }
}

/// Tile kinds a room cell can hold.
///
/// Raw indices (as stored by room loaders) are `Floor = 0`, `Wall = 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileType {
    #[default]
    Floor,
    Wall,
}

impl TileType {
    pub const ALL: [TileType; 2] = [TileType::Floor, TileType::Wall];

    /// Decode a raw tile index.
    ///
    /// Unknown indices are rejected instead of falling back to `Floor`.
    ///
    /// ```
    /// use tile_sight_types::TileType;
    ///
    /// assert_eq!(TileType::from_index(1), Some(TileType::Wall));
    /// assert_eq!(TileType::from_index(7), None);
    /// ```
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(TileType::Floor),
            1 => Some(TileType::Wall),
            _ => None,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            TileType::Floor => 0,
            TileType::Wall => 1,
        }
    }

    /// Parse from an ASCII room glyph: `.` or space for floor, `#` for wall.
    pub fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '.' | ' ' => Some(TileType::Floor),
            '#' => Some(TileType::Wall),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            TileType::Floor => '.',
            TileType::Wall => '#',
        }
    }

    /// Parse tile type from its name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "floor" => Some(TileType::Floor),
            "wall" => Some(TileType::Wall),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        tile_properties(*self).name
    }

    pub fn is_solid(self) -> bool {
        tile_properties(self).solid
    }

    pub fn color(self) -> Rgb {
        tile_properties(self).color
    }

    /// The other tile kind (editor toggle).
    pub fn toggled(self) -> Self {
        match self {
            TileType::Floor => TileType::Wall,
            TileType::Wall => TileType::Floor,
        }
    }
}

/// Static per-kind tile properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileProperties {
    pub kind: TileType,
    pub color: Rgb,
    /// Solid tiles block sight and produce boundary edges.
    pub solid: bool,
    pub name: &'static str,
}

/// Lookup table for tile properties.
pub fn tile_properties(kind: TileType) -> TileProperties {
    match kind {
        TileType::Floor => TileProperties {
            kind,
            color: Rgb::new(0, 117, 44),
            solid: false,
            name: "floor",
        },
        TileType::Wall => TileProperties {
            kind,
            color: Rgb::new(80, 80, 80),
            solid: true,
            name: "wall",
        },
    }
}

/// Actions the interactive demo can apply to a room.
///
/// Viewer movement and cursor movement are the stand-ins for the external
/// player and mouse collaborators; `ToggleCell` is the editor mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    /// Move the viewer one step in a direction
    MoveViewer(Side),
    /// Move the edit cursor one cell in a direction
    MoveCursor(Side),
    /// Flip the cell under the cursor between floor and wall
    ToggleCell,
    /// Increase sight range
    WidenSight,
    /// Decrease sight range
    NarrowSight,
    /// Show or hide the segment overlay
    ToggleEdges,
}

impl EditorAction {
    /// Parse action from string
    ///
    /// ```
    /// use tile_sight_types::{EditorAction, Side};
    ///
    /// assert_eq!(EditorAction::from_str("toggleCell"), Some(EditorAction::ToggleCell));
    /// assert_eq!(EditorAction::from_str("moveViewer:n"), Some(EditorAction::MoveViewer(Side::North)));
    /// assert_eq!(EditorAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        if let Some((verb, side)) = lower.split_once(':') {
            let side = Side::from_str(side)?;
            return match verb {
                "moveviewer" => Some(EditorAction::MoveViewer(side)),
                "movecursor" => Some(EditorAction::MoveCursor(side)),
                _ => None,
            };
        }
        match lower.as_str() {
            "togglecell" => Some(EditorAction::ToggleCell),
            "widensight" => Some(EditorAction::WidenSight),
            "narrowsight" => Some(EditorAction::NarrowSight),
            "toggleedges" => Some(EditorAction::ToggleEdges),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_tuning_defaults() {
        assert_eq!(ANGLE_EPSILON, 0.0001);
        assert_eq!(DEDUP_DISTANCE, 1.0);
        assert_eq!(MIN_RAY_DISTANCE, 0.1);
        assert_eq!(PARALLEL_EPSILON, 1e-4);
        assert_eq!(DEFAULT_CELL_SIZE, 32.0);
    }

    #[test]
    fn tile_lookup_is_total() {
        for kind in TileType::ALL {
            let props = tile_properties(kind);
            assert_eq!(props.kind, kind);
            assert_eq!(TileType::from_index(kind.index()), Some(kind));
            assert_eq!(TileType::from_glyph(kind.glyph()), Some(kind));
            assert_eq!(TileType::from_str(props.name), Some(kind));
        }
        assert!(!TileType::Floor.is_solid());
        assert!(TileType::Wall.is_solid());
        assert_eq!(TileType::from_index(2), None);
        assert_eq!(TileType::from_glyph('x'), None);
    }

    #[test]
    fn side_slots_are_distinct() {
        let mut seen = [false; 4];
        for side in Side::ALL {
            assert!(!seen[side.index()]);
            seen[side.index()] = true;
            assert_eq!(Side::from_str(side.as_str()), Some(side));
        }
    }

    #[test]
    fn triangle_contains_interior_and_edges() {
        let tri = Triangle::new(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 10.0),
        );
        assert!(tri.contains(Point::new(2.0, 2.0)));
        assert!(tri.contains(Point::new(5.0, 0.0)));
        assert!(!tri.contains(Point::new(8.0, 8.0)));

        let flat = Triangle::new(Point::ZERO, Point::new(5.0, 0.0), Point::new(10.0, 0.0));
        assert!(!flat.contains(Point::new(2.0, 0.0)));
    }

    #[test]
    fn rect_corners_are_clockwise_from_top_left() {
        let r = Rect::from_origin_size(Point::new(1.0, 2.0), 3.0, 4.0);
        assert_eq!(
            r.corners(),
            [
                Point::new(1.0, 2.0),
                Point::new(4.0, 2.0),
                Point::new(4.0, 6.0),
                Point::new(1.0, 6.0),
            ]
        );
        assert_eq!(r.center(), Point::new(2.5, 4.0));
    }
}
