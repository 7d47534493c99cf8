//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::EditorAction`]. This is the
//! demo's stand-in for the player-movement and mouse-editing collaborators; it
//! holds no state of its own.

pub mod map;

pub use tile_sight_types as types;

pub use map::{handle_key_event, should_quit};
