//! Error type for conditions the core refuses to compute through.
//!
//! Expected conditions (out-of-bounds edits, rays that hit nothing, empty
//! occluder sets) are ordinary return values and never show up here.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SightError {
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    EmptyGrid { width: u16, height: u16 },

    #[error("cell size must be finite and positive, got {0}")]
    InvalidCellSize(f32),

    #[error("tile buffer holds {actual} cells, expected {expected}")]
    TileCountMismatch { expected: usize, actual: usize },

    #[error("unknown tile index {0}")]
    UnknownTileIndex(u8),

    #[error("unknown tile glyph {glyph:?} at row {row}, column {col}")]
    UnknownTileGlyph { glyph: char, col: usize, row: usize },

    #[error("room row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("origin must be finite, got ({x}, {y})")]
    InvalidOrigin { x: f32, y: f32 },

    #[error("max distance must be finite and positive, got {0}")]
    InvalidMaxDistance(f32),

    #[error("malformed room file: {0}")]
    RoomFile(String),
}

impl From<serde_json::Error> for SightError {
    fn from(err: serde_json::Error) -> Self {
        SightError::RoomFile(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SightError>;
