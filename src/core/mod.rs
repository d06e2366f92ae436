//! Core types: coordinates, pieces, moves, RNG, configuration, errors.
//!
//! Everything here is plain data. Rules live in `rules`, the grid in
//! `board`, and turn sequencing in `game`.

pub mod config;
pub mod error;
pub mod moves;
pub mod piece;
pub mod position;
pub mod rng;

pub use config::{
    GameConfig, DEFAULT_AI_DELAY, DEFAULT_MAX_MOVES_WITHOUT_CAPTURE, ENV_AI_DELAY_MS,
    ENV_MAX_MOVES, ENV_SEED,
};
pub use error::{ConfigError, GameError, IllegalReason};
pub use moves::{Move, MoveRecord};
pub use piece::{Piece, PieceId, PieceKind};
pub use position::{Direction, ParsePositionError, Position};
pub use rng::GameRng;
