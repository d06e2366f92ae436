//! Board representation.
//!
//! The `Board` owns every piece in play. It is the only place pieces are
//! created, moved and removed, so the grid and the live-piece collections
//! cannot drift apart.

pub mod grid;
pub mod render;

pub use grid::{
    is_playable, playable_cells, Board, BOARD_HEIGHT, BOARD_WIDTH, FOX_START, INITIAL_GEESE,
};
pub use render::render_labelled;
