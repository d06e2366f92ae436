//! Error types.
//!
//! Out-of-range or non-playable coordinates are deliberately not errors:
//! board lookups fail closed and report "no piece". A side without legal
//! moves is not an error either; the turn engine treats it as a terminal
//! trigger (Fox) or a pass (Geese).

use super::piece::PieceKind;
use super::position::Position;
use crate::rules::Outcome;

/// Why a candidate move was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IllegalReason {
    #[error("no piece on the origin cell")]
    NoPiece,

    #[error("piece belongs to the {0} side")]
    WrongSide(PieceKind),

    #[error("not a legal move for this piece")]
    NotLegal,
}

/// Errors raised by the turn engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("illegal move {from} -> {to}: {reason}")]
    IllegalMove {
        from: Position,
        to: Position,
        reason: IllegalReason,
    },

    #[error("game is already over: {0}")]
    GameOver(Outcome),

    #[error("the {0} side is not played by a human")]
    NotHumanTurn(PieceKind),

    #[error("the {0} side is played by a human")]
    NotAutomatedTurn(PieceKind),

    #[error("move was computed for a position that no longer exists")]
    StaleMove,

    #[error("engine fault: {0}")]
    EngineFault(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl GameError {
    /// Whether this error is a refused move (as opposed to a fault).
    #[must_use]
    pub fn is_illegal_move(&self) -> bool {
        matches!(self, GameError::IllegalMove { .. })
    }
}

/// Invalid game configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unsupported board size {width}x{height}: only 9x9 has a starting layout")]
    UnsupportedBoardSize { width: i32, height: i32 },

    #[error("max moves without capture must be at least 1")]
    ZeroMoveLimit,

    #[error("strategy for the {expected} side plays the {found} side")]
    StrategySide { expected: PieceKind, found: PieceKind },

    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}
