//! Grid module - owns the room's tiles
//!
//! The grid is a `width x height` array of cells, each holding a tile type and
//! its top-left world position. Uses a flat vector in row-major order.
//! Coordinates: (col, row) where col grows left to right and row grows top to bottom.
//! Signed coordinates are accepted everywhere so neighbor probes never need
//! their own bounds arithmetic.

use crate::error::{Result, SightError};
use crate::types::{Point, Rect, TileType};

/// One tile of the room.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub tile: TileType,
    /// Top-left corner in world units.
    pub position: Point,
}

impl Cell {
    pub fn is_solid(&self) -> bool {
        self.tile.is_solid()
    }
}

/// Tile grid with a fixed size.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: u16,
    height: u16,
    cell_size: f32,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid filled with floor.
    pub fn new(width: u16, height: u16, cell_size: f32) -> Result<Self> {
        let len = (width as usize) * (height as usize);
        Self::from_tiles(width, height, cell_size, vec![TileType::Floor; len])
    }

    /// Create a grid from row-major tile types.
    pub fn from_tiles(width: u16, height: u16, cell_size: f32, tiles: Vec<TileType>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SightError::EmptyGrid { width, height });
        }
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(SightError::InvalidCellSize(cell_size));
        }
        let expected = (width as usize) * (height as usize);
        if tiles.len() != expected {
            return Err(SightError::TileCountMismatch {
                expected,
                actual: tiles.len(),
            });
        }

        let cells = tiles
            .into_iter()
            .enumerate()
            .map(|(i, tile)| {
                let col = (i % width as usize) as f32;
                let row = (i / width as usize) as f32;
                Cell {
                    tile,
                    position: Point::new(col * cell_size, row * cell_size),
                }
            })
            .collect();

        Ok(Self {
            width,
            height,
            cell_size,
            cells,
        })
    }

    /// Create a grid from raw tile indices (`0` floor, `1` wall).
    ///
    /// Unknown indices are an error rather than silently becoming floor.
    pub fn from_indices(width: u16, height: u16, cell_size: f32, indices: &[u8]) -> Result<Self> {
        let tiles = indices
            .iter()
            .map(|&i| TileType::from_index(i).ok_or(SightError::UnknownTileIndex(i)))
            .collect::<Result<Vec<_>>>()?;
        Self::from_tiles(width, height, cell_size, tiles)
    }

    #[inline(always)]
    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if self.is_out_of_bounds(col, row) {
            return None;
        }
        Some((row as usize) * (self.width as usize) + (col as usize))
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// World-space rectangle covered by the grid.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(
            Point::ZERO,
            self.width as f32 * self.cell_size,
            self.height as f32 * self.cell_size,
        )
    }

    pub fn is_out_of_bounds(&self, col: i32, row: i32) -> bool {
        col < 0 || col >= self.width as i32 || row < 0 || row >= self.height as i32
    }

    /// Get the cell at (col, row).
    /// Returns None if out of bounds
    pub fn cell_at(&self, col: i32, row: i32) -> Option<&Cell> {
        self.index(col, row).map(|idx| &self.cells[idx])
    }

    pub fn tile_at(&self, col: i32, row: i32) -> Option<TileType> {
        self.cell_at(col, row).map(|cell| cell.tile)
    }

    /// Set the tile type at (col, row).
    /// Returns false (and changes nothing) if out of bounds
    pub fn set_cell_type(&mut self, col: i32, row: i32, tile: TileType) -> bool {
        match self.index(col, row) {
            Some(idx) => {
                self.cells[idx].tile = tile;
                true
            }
            None => false,
        }
    }

    /// Flip floor and wall at (col, row). Returns the new tile, or None if out of bounds.
    pub fn toggle_cell(&mut self, col: i32, row: i32) -> Option<TileType> {
        let idx = self.index(col, row)?;
        let tile = self.cells[idx].tile.toggled();
        self.cells[idx].tile = tile;
        Some(tile)
    }

    /// Check if position is solid (within bounds and blocking)
    pub fn is_solid(&self, col: i32, row: i32) -> bool {
        matches!(self.cell_at(col, row), Some(cell) if cell.is_solid())
    }

    /// Map a world point to the (col, row) containing it.
    pub fn cell_coords_at(&self, point: Point) -> Option<(i32, i32)> {
        if !point.is_finite() {
            return None;
        }
        let col = (point.x / self.cell_size).floor();
        let row = (point.y / self.cell_size).floor();
        if col < 0.0 || row < 0.0 || col >= self.width as f32 || row >= self.height as f32 {
            return None;
        }
        Some((col as i32, row as i32))
    }

    /// Cell under a world point (mouse picking).
    pub fn cell_at_world(&self, point: Point) -> Option<&Cell> {
        let (col, row) = self.cell_coords_at(point)?;
        self.cell_at(col, row)
    }

    /// Set every cell on the outer ring to `tile`.
    pub fn fill_border(&mut self, tile: TileType) {
        let (w, h) = (self.width as i32, self.height as i32);
        for col in 0..w {
            self.set_cell_type(col, 0, tile);
            self.set_cell_type(col, h - 1, tile);
        }
        for row in 0..h {
            self.set_cell_type(0, row, tile);
            self.set_cell_type(w - 1, row, tile);
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn solid_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_solid()).count()
    }

    /// Render as ASCII rows (`#` wall, `.` floor).
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for row in self.cells.chunks(self.width as usize) {
            out.extend(row.iter().map(|cell| cell.tile.glyph()));
            out.push('\n');
        }
        out
    }
}
