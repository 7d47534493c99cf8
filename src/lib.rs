//! Tile sight (workspace facade crate).
//!
//! Re-exports the workspace crates as `tile_sight::{core,input,term,types}` so
//! the demo binary, integration tests and benches share one import path.

pub use tile_sight_core as core;
pub use tile_sight_input as input;
pub use tile_sight_term as term;
pub use tile_sight_types as types;
