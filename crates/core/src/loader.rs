//! Room loading
//!
//! Rooms are described as ASCII rows (`#` wall, `.` or space floor), either as
//! plain text or wrapped in a small JSON document:
//!
//! ```json
//! { "cell_size": 32.0, "rows": ["#####", "#...#", "#####"] }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SightError};
use crate::grid::Grid;
use crate::types::{TileType, DEFAULT_CELL_SIZE};

/// The room the demo starts in: a walled 16x16 room with a few pillars.
pub const DEMO_ROOM: &str = "\
################
#..............#
#..............#
#...##.........#
#...##.....#...#
#..........#...#
#..........#...#
#..............#
#......###.....#
#..............#
#..............#
#..##..........#
#..##.....##...#
#.........##...#
#..............#
################
";

/// JSON room document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomFile {
    #[serde(default = "default_cell_size")]
    pub cell_size: f32,
    pub rows: Vec<String>,
}

fn default_cell_size() -> f32 {
    DEFAULT_CELL_SIZE
}

impl RoomFile {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            cell_size: grid.cell_size(),
            rows: grid.to_ascii().lines().map(str::to_owned).collect(),
        }
    }

    pub fn into_grid(self) -> Result<Grid> {
        parse_rows(&self.rows, self.cell_size)
    }
}

/// Parse ASCII room text. Blank lines are ignored.
pub fn parse_ascii(text: &str, cell_size: f32) -> Result<Grid> {
    let rows: Vec<&str> = text
        .lines()
        .map(|l| l.trim_end_matches('\r'))
        .filter(|l| !l.trim().is_empty())
        .collect();
    parse_rows(&rows, cell_size)
}

fn parse_rows<S: AsRef<str>>(rows: &[S], cell_size: f32) -> Result<Grid> {
    let width = rows.first().map(|r| r.as_ref().chars().count()).unwrap_or(0);
    let mut tiles = Vec::with_capacity(width * rows.len());

    for (row, line) in rows.iter().enumerate() {
        let line = line.as_ref();
        let count = line.chars().count();
        if count != width {
            return Err(SightError::RaggedRow {
                row,
                expected: width,
                actual: count,
            });
        }
        for (col, glyph) in line.chars().enumerate() {
            let tile = TileType::from_glyph(glyph)
                .ok_or(SightError::UnknownTileGlyph { glyph, col, row })?;
            tiles.push(tile);
        }
    }

    let w = u16::try_from(width)
        .map_err(|_| SightError::RoomFile(format!("room is {width} cells wide")))?;
    let h = u16::try_from(rows.len())
        .map_err(|_| SightError::RoomFile(format!("room is {} cells tall", rows.len())))?;
    Grid::from_tiles(w, h, cell_size, tiles)
}

/// Load a room from disk. `.json` files are parsed as [`RoomFile`], anything
/// else as ASCII text with the default cell size.
pub fn load_room(path: &Path) -> Result<Grid> {
    let text = fs::read_to_string(path)
        .map_err(|e| SightError::RoomFile(format!("{}: {e}", path.display())))?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => RoomFile::from_json(&text)?.into_grid(),
        _ => parse_ascii(&text, DEFAULT_CELL_SIZE),
    }
}

/// The built-in demo room.
pub fn demo_room() -> Result<Grid> {
    parse_ascii(DEMO_ROOM, DEFAULT_CELL_SIZE)
}
