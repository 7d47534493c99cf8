//! Terminal renderer for the tile-sight demo.
//!
//! Rooms are drawn into a plain framebuffer (no widget toolkit) which is then
//! diffed and flushed to the terminal. Each grid cell spans two characters by
//! default to keep cells roughly square.

pub mod fb;
pub mod renderer;
pub mod room_view;

pub use tile_sight_core as core;
pub use tile_sight_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use room_view::{RoomScene, RoomView, Viewport};
