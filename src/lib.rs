//! # fox-geese
//!
//! Rules engine for Fox and Geese, played on the 41 playable cells of a
//! 9×9 grid. One Fox tries to capture Geese by jumping over them; thirteen
//! Geese try to hem the Fox in.
//!
//! ## Modules
//!
//! - `core`: coordinates, pieces, moves, RNG, configuration, errors
//! - `board`: the grid, its piece collections and text rendering
//! - `rules`: legal-move generation and terminal detection
//! - `game`: game state, turn engine, observers, async driver
//! - `players`: human relay and random strategies
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use fox_geese::{GameConfig, PieceKind, RandomStrategy, TurnEngineBuilder};
//!
//! let mut engine = TurnEngineBuilder::new()
//!     .config(GameConfig::headless(42))
//!     .fox(Arc::new(RandomStrategy::seeded(PieceKind::Fox, 42)))
//!     .geese(Arc::new(RandomStrategy::seeded(PieceKind::Goose, 42)))
//!     .build()
//!     .unwrap();
//!
//! engine.start();
//! let outcome = engine.status().outcome().unwrap();
//! println!("{outcome}");
//! ```

pub mod board;
pub mod core;
pub mod game;
pub mod players;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, Direction, GameConfig, GameError, GameRng, IllegalReason, Move, MoveRecord,
    Piece, PieceId, PieceKind, Position,
};

pub use crate::board::{render_labelled, Board};

pub use crate::rules::{MoveValidator, Outcome};

pub use crate::game::{
    ChannelObserver, GameDriver, GameEvent, GameObserver, GameState, GameStatus, NullObserver,
    TurnEngine, TurnEngineBuilder, TurnReport,
};

pub use crate::players::{HumanRelay, RandomStrategy, Strategy};
