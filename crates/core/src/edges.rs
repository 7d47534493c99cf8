//! Edge extraction - turns solid cells into merged occluding segments
//!
//! Two passes over the grid in row-major order:
//!
//! 1. **Tracing**: every solid cell side that faces a non-solid or out-of-bounds
//!    neighbor gets a segment id. North/south sides reuse the id of the west
//!    neighbor's same side, east/west sides reuse the id of the north neighbor's
//!    same side, so a straight run shares one id.
//! 2. **Resolution**: the first cell carrying an id opens the segment at its own
//!    corners; each later cell stretches the segment's end to its far corner.
//!
//! Both neighbors consulted in pass 1 precede the current cell in scan order, and
//! the cells of a run are visited start to end in pass 2, so `start` is always
//! the top/left end of a segment.

use arrayvec::ArrayVec;
use log::debug;

use crate::grid::Grid;
use crate::types::{Point, Segment, Side};

/// A merged boundary run and the side of the solid cells it borders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundary {
    pub side: Side,
    pub segment: Segment,
}

/// Per-cell segment ids, one slot per side (indexed by `Side::index`).
type EdgeRefs = [Option<usize>; 4];

/// Sides of a solid cell at (col, row) that need a boundary.
pub fn exposed_sides(grid: &Grid, col: i32, row: i32) -> ArrayVec<Side, 4> {
    let mut sides = ArrayVec::new();
    if !grid.is_solid(col, row) {
        return sides;
    }
    for side in Side::ALL {
        let (dc, dr) = side.offset();
        if !grid.is_solid(col + dc, row + dr) {
            sides.push(side);
        }
    }
    sides
}

/// The unit segment along `side` of the cell whose top-left corner is `pos`.
fn cell_side(pos: Point, size: f32, side: Side) -> Segment {
    let (x, y) = (pos.x, pos.y);
    match side {
        Side::North => Segment::new(Point::new(x, y), Point::new(x + size, y)),
        Side::South => Segment::new(Point::new(x, y + size), Point::new(x + size, y + size)),
        Side::West => Segment::new(Point::new(x, y), Point::new(x, y + size)),
        Side::East => Segment::new(Point::new(x + size, y), Point::new(x + size, y + size)),
    }
}

/// Extract merged boundary runs with their sides.
pub fn extract_boundaries(grid: &Grid) -> Vec<Boundary> {
    let width = grid.width() as usize;
    let cols = grid.width() as i32;
    let rows = grid.height() as i32;
    let idx = |col: i32, row: i32| (row as usize) * width + (col as usize);

    let mut refs: Vec<EdgeRefs> = vec![[None; 4]; grid.cells().len()];
    let mut run_sides: Vec<Side> = Vec::new();

    for row in 0..rows {
        for col in 0..cols {
            for side in exposed_sides(grid, col, row) {
                let (pc, pr) = if side.is_horizontal() {
                    (col - 1, row)
                } else {
                    (col, row - 1)
                };
                let inherited = if grid.is_solid(pc, pr) {
                    refs[idx(pc, pr)][side.index()]
                } else {
                    None
                };
                let id = match inherited {
                    Some(id) => id,
                    None => {
                        run_sides.push(side);
                        run_sides.len() - 1
                    }
                };
                refs[idx(col, row)][side.index()] = Some(id);
            }
        }
    }

    let size = grid.cell_size();
    let mut runs: Vec<Option<Segment>> = vec![None; run_sides.len()];

    for (cell, cell_refs) in grid.cells().iter().zip(&refs) {
        for side in Side::ALL {
            let Some(id) = cell_refs[side.index()] else {
                continue;
            };
            let unit = cell_side(cell.position, size, side);
            if let Some(run) = runs[id].as_mut() {
                run.end = unit.end;
            } else {
                runs[id] = Some(unit);
            }
        }
    }

    let boundaries: Vec<Boundary> = run_sides
        .into_iter()
        .zip(runs)
        .filter_map(|(side, segment)| segment.map(|segment| Boundary { side, segment }))
        .collect();

    debug!(
        "extracted {} segments from {}x{} grid",
        boundaries.len(),
        grid.width(),
        grid.height()
    );
    boundaries
}

/// Extract the occluding segment set for `grid`.
pub fn extract_edges(grid: &Grid) -> Vec<Segment> {
    extract_boundaries(grid)
        .into_iter()
        .map(|b| b.segment)
        .collect()
}
