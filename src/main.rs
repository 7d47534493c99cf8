//! Tile sight demo (default binary).
//!
//! Walk a viewer around a walled room, toggle cells with the edit cursor and
//! watch the visibility fan follow. Rendering uses the framebuffer-based
//! terminal renderer from `tile_sight::term`.

mod config;

use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tile_sight::core::{demo_room, load_room, Grid, Room};
use tile_sight::input::{handle_key_event, should_quit};
use tile_sight::term::{FrameBuffer, RoomScene, RoomView, TerminalRenderer, Viewport};
use tile_sight::types::{
    EditorAction, Point, Rect, Side, Triangle, SIGHT_RANGE_STEP, VIEWER_SIZE, VIEWER_STEP,
};

use crate::config::{init_logging, log_path_from_env, DemoConfig};

const FRAME: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    init_logging(log_path_from_env().as_ref())?;
    let config = DemoConfig::from_env();

    let grid = match &config.room_path {
        Some(path) => load_room(path).with_context(|| format!("loading {}", path.display()))?,
        None => demo_room()?,
    };
    info!(
        "room {}x{} (cell size {}), sight range {}",
        grid.width(),
        grid.height(),
        grid.cell_size(),
        config.sight_range
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, grid, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Interactive state on top of the room.
struct Demo {
    room: Room,
    viewer: Rect,
    cursor: (i32, i32),
    sight_range: f32,
    show_edges: bool,
}

impl Demo {
    fn new(grid: Grid, config: &DemoConfig) -> Self {
        let spawn = spawn_point(&grid);
        let (w, h) = VIEWER_SIZE;
        let cursor = grid.cell_coords_at(spawn).unwrap_or((0, 0));
        Self {
            room: Room::new(grid).with_config(config.visibility),
            viewer: Rect::from_origin_size(spawn - Point::new(w / 2.0, h / 2.0), w, h),
            cursor,
            sight_range: config.sight_range,
            show_edges: false,
        }
    }

    fn apply(&mut self, action: EditorAction) {
        match action {
            EditorAction::MoveViewer(side) => self.move_viewer(side),
            EditorAction::MoveCursor(side) => {
                let grid = self.room.grid();
                let (dx, dy) = side.offset();
                let col = (self.cursor.0 + dx).clamp(0, grid.width() as i32 - 1);
                let row = (self.cursor.1 + dy).clamp(0, grid.height() as i32 - 1);
                self.cursor = (col, row);
            }
            EditorAction::ToggleCell => {
                let (col, row) = self.cursor;
                if let Some(tile) = self.room.toggle_cell(col, row) {
                    info!("cell ({col}, {row}) is now {}", tile.as_str());
                }
            }
            EditorAction::WidenSight => self.sight_range += SIGHT_RANGE_STEP,
            EditorAction::NarrowSight => {
                self.sight_range = (self.sight_range - SIGHT_RANGE_STEP).max(SIGHT_RANGE_STEP);
            }
            EditorAction::ToggleEdges => self.show_edges = !self.show_edges,
        }
    }

    /// Step the viewer unless its centre would land in a wall or leave the room.
    fn move_viewer(&mut self, side: Side) {
        let (dx, dy) = side.offset();
        let step = Point::new(dx as f32, dy as f32) * VIEWER_STEP;
        let moved = Rect::from_origin_size(
            self.viewer.min + step,
            self.viewer.width(),
            self.viewer.height(),
        );
        let open = self
            .room
            .grid()
            .cell_at_world(moved.center())
            .is_some_and(|cell| !cell.is_solid());
        if open {
            self.viewer = moved;
        }
    }
}

/// Centre of the first open cell, or the room centre if every cell is solid.
fn spawn_point(grid: &Grid) -> Point {
    let half = grid.cell_size() / 2.0;
    grid.cells()
        .iter()
        .find(|cell| !cell.is_solid())
        .map(|cell| cell.position + Point::new(half, half))
        .unwrap_or_else(|| grid.bounds().center())
}

fn run(term: &mut TerminalRenderer, grid: Grid, config: &DemoConfig) -> Result<()> {
    let mut demo = Demo::new(grid, config);
    let view = RoomView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut fan: Vec<Triangle> = Vec::new();

    loop {
        // Visibility (reused while nothing moved or changed).
        let origin = demo.viewer.center();
        fan.clear();
        fan.extend_from_slice(demo.room.cached_visibility(origin, demo.sight_range)?);

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let scene = RoomScene {
            grid: demo.room.grid(),
            segments: demo.room.segments(),
            fan: &fan,
            viewer: demo.viewer,
            cursor: demo.cursor,
            sight_range: demo.sight_range,
            show_edges: demo.show_edges,
            cache_stats: demo.room.cache_stats(),
        };
        view.render_into(&scene, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input.
        if !event::poll(FRAME)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    demo.apply(action);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
