//! RoomView: maps a room, its visibility fan and the viewer into a terminal
//! framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Each terminal character samples the world at its own centre; floor
//! characters outside the fan are drawn shaded. This is the demo's light mask:
//! it consumes the fan exactly as a GPU renderer would, one point-in-triangle
//! test per sample.

use crate::core::{fan_contains, Grid};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Point, Rect, Segment, TileType, Triangle};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Everything one frame needs, borrowed from the caller.
#[derive(Debug, Clone, Copy)]
pub struct RoomScene<'a> {
    pub grid: &'a Grid,
    pub segments: &'a [Segment],
    pub fan: &'a [Triangle],
    /// Viewer body in world units.
    pub viewer: Rect,
    /// Edit cursor (col, row).
    pub cursor: (i32, i32),
    pub sight_range: f32,
    /// Mark segment endpoints.
    pub show_edges: bool,
    /// (hits, misses) of the sight cache.
    pub cache_stats: (u64, u64),
}

const PANEL_WIDTH: u16 = 22;

const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const PANEL: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const VIEWER: CellStyle = CellStyle::new(Rgb::new(255, 70, 70), Rgb::new(0, 117, 44));
const CURSOR_BG: Rgb = Rgb::new(200, 30, 30);
const EDGE_MARK: CellStyle = CellStyle::new(Rgb::new(255, 220, 0), Rgb::new(80, 80, 80));

/// A lightweight terminal renderer for a lit room.
pub struct RoomView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for RoomView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl RoomView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Size of the bordered room frame in terminal cells.
    pub fn frame_size(&self, grid: &Grid) -> (u16, u16) {
        (
            grid.width().saturating_mul(self.cell_w).saturating_add(2),
            grid.height().saturating_mul(self.cell_h).saturating_add(2),
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, scene: &RoomScene<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size(scene.grid);
        let start_x = viewport.width.saturating_sub(frame_w.saturating_add(PANEL_WIDTH)) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;
        let (inner_x, inner_y) = (start_x.saturating_add(1), start_y.saturating_add(1));

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);
        self.draw_tiles(fb, scene, inner_x, inner_y);

        if scene.show_edges {
            for p in scene.segments.iter().flat_map(|s| s.endpoints()) {
                if let Some((x, y)) = self.project(scene.grid, p) {
                    let (fx, fy) = (inner_x.saturating_add(x), inner_y.saturating_add(y));
                    fb.set(fx, fy, EDGE_MARK.cell('+'));
                }
            }
        }

        if let Some((x, y)) = self.project(scene.grid, scene.viewer.center()) {
            let (fx, fy) = (inner_x.saturating_add(x), inner_y.saturating_add(y));
            fb.set(fx, fy, VIEWER.bold().cell('@'));
        }

        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        self.draw_side_panel(fb, scene, viewport, panel_x, start_y);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, scene: &RoomScene<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(scene, viewport, &mut fb);
        fb
    }

    /// World point -> character offset inside the frame.
    ///
    /// Offsets past `u16::MAX` (rooms wider than the terminal could ever be)
    /// are not drawable and give `None`.
    fn project(&self, grid: &Grid, p: Point) -> Option<(u16, u16)> {
        let size = grid.cell_size();
        let x = (p.x / size * self.cell_w as f32).floor();
        let y = (p.y / size * self.cell_h as f32).floor();
        let max_x = (u32::from(grid.width()) * u32::from(self.cell_w)) as f32;
        let max_y = (u32::from(grid.height()) * u32::from(self.cell_h)) as f32;
        // Points on the far room edge land on the last character.
        let x = x.min(max_x - 1.0);
        let y = y.min(max_y - 1.0);
        let limit = f32::from(u16::MAX);
        (x >= 0.0 && y >= 0.0 && x <= limit && y <= limit).then_some((x as u16, y as u16))
    }

    /// World point sampled by the character at (x, y) inside the frame.
    fn sample_point(&self, grid: &Grid, x: u32, y: u32) -> Point {
        let size = grid.cell_size();
        Point::new(
            (x as f32 + 0.5) / self.cell_w as f32 * size,
            (y as f32 + 0.5) / self.cell_h as f32 * size,
        )
    }

    fn draw_tiles(&self, fb: &mut FrameBuffer, scene: &RoomScene<'_>, inner_x: u16, inner_y: u16) {
        let grid = scene.grid;
        for row in 0..grid.height() {
            for col in 0..grid.width() {
                let tile = grid.tile_at(col as i32, row as i32).unwrap_or_default();
                let cursor = scene.cursor == (col as i32, row as i32);

                for dy in 0..self.cell_h {
                    for dx in 0..self.cell_w {
                        let x = u32::from(col) * u32::from(self.cell_w) + u32::from(dx);
                        let y = u32::from(row) * u32::from(self.cell_h) + u32::from(dy);
                        let (Ok(sx), Ok(sy)) = (
                            u16::try_from(u32::from(inner_x) + x),
                            u16::try_from(u32::from(inner_y) + y),
                        ) else {
                            continue;
                        };
                        if sx >= fb.width() || sy >= fb.height() {
                            continue;
                        }
                        let lit = fan_contains(scene.fan, self.sample_point(grid, x, y));
                        let (ch, mut style) = tile_look(tile, lit);
                        if cursor {
                            style.bg = CURSOR_BG;
                        }
                        fb.set(sx, sy, style.cell(ch));
                    }
                }
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);
        for cx in x + 1..right {
            fb.set(cx, y, BORDER.cell('─'));
            fb.set(cx, bottom, BORDER.cell('─'));
        }
        for cy in y + 1..bottom {
            fb.set(x, cy, BORDER.cell('│'));
            fb.set(right, cy, BORDER.cell('│'));
        }
        fb.set(x, y, BORDER.cell('┌'));
        fb.set(right, y, BORDER.cell('┐'));
        fb.set(x, bottom, BORDER.cell('└'));
        fb.set(right, bottom, BORDER.cell('┘'));
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        scene: &RoomScene<'_>,
        viewport: Viewport,
        x: u16,
        y: u16,
    ) {
        if x.saturating_add(PANEL_WIDTH) > viewport.width {
            return;
        }
        let (col, row) = scene.cursor;
        let under_cursor = scene
            .grid
            .tile_at(col, row)
            .map(|t| t.as_str())
            .unwrap_or("-");
        let (hits, misses) = scene.cache_stats;

        let lines = [
            "TILE SIGHT".to_string(),
            String::new(),
            format!("RANGE   {:.0}", scene.sight_range),
            format!("EDGES   {}", scene.segments.len()),
            format!("TRIS    {}", scene.fan.len()),
            format!("CACHE   {hits}/{misses}"),
            format!("CURSOR  {col},{row} {under_cursor}"),
            String::new(),
            "wasd  move".to_string(),
            "ijkl  cursor".to_string(),
            "space toggle".to_string(),
            "+/-   range".to_string(),
            "g     edges".to_string(),
            "q     quit".to_string(),
        ];
        for (i, line) in lines.iter().enumerate() {
            let style = if i == 0 { PANEL.bold() } else { PANEL };
            fb.put_str(x, y.saturating_add(i as u16), line, style);
        }
    }
}

/// Glyph and style for a tile; floors outside the fan are shaded.
fn tile_look(tile: TileType, lit: bool) -> (char, CellStyle) {
    let color = tile.color();
    match tile {
        TileType::Wall => ('█', CellStyle::new(color, color)),
        TileType::Floor => {
            let style = CellStyle::new(Rgb::new(120, 200, 140), color);
            if lit {
                ('·', style)
            } else {
                (' ', style.shaded(1, 4))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lit_and_shadowed_floor_differ() {
        let (lit_ch, lit) = tile_look(TileType::Floor, true);
        let (dark_ch, dark) = tile_look(TileType::Floor, false);
        assert_ne!(lit_ch, dark_ch);
        assert_ne!(lit.bg, dark.bg);
        assert_eq!(tile_look(TileType::Wall, true), tile_look(TileType::Wall, false));
    }

    #[test]
    fn project_clamps_far_edge() {
        let grid = Grid::new(4, 4, 32.0).unwrap();
        let view = RoomView::default();
        assert_eq!(view.project(&grid, Point::new(0.0, 0.0)), Some((0, 0)));
        assert_eq!(view.project(&grid, Point::new(48.0, 40.0)), Some((3, 1)));
        assert_eq!(view.project(&grid, Point::new(128.0, 128.0)), Some((7, 3)));
        assert_eq!(view.project(&grid, Point::new(-1.0, 0.0)), None);
    }

    #[test]
    fn very_wide_rooms_render_without_overflow() {
        let grid = Grid::new(40_000, 2, 32.0).unwrap();
        let scene = RoomScene {
            grid: &grid,
            segments: &[],
            fan: &[],
            viewer: Rect::from_origin_size(Point::new(1_279_000.0, 8.0), 16.0, 32.0),
            cursor: (39_999, 1),
            sight_range: 300.0,
            show_edges: true,
            cache_stats: (0, 0),
        };
        let fb = RoomView::default().render(&scene, Viewport::new(20, 4));
        assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
        assert_eq!(fb.get(1, 1).unwrap().ch, ' ');
        assert_eq!(
            RoomView::default().project(&grid, Point::new(1_279_000.0, 8.0)),
            None
        );
    }
}
