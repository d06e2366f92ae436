//! Piece identity and type.
//!
//! ## PieceKind
//!
//! The two piece types, which double as the two sides of the game: the
//! Fox side moves the Fox, the Geese side moves the Geese.
//!
//! ## PieceId
//!
//! Board-unique identity allocated when a piece is added. A piece's position
//! changes every time it moves, so removal and lookup go through the id.

use serde::{Deserialize, Serialize};

use super::position::Position;

/// Piece type, and by extension the side that controls it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Fox,
    Goose,
}

impl PieceKind {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PieceKind::Fox => PieceKind::Goose,
            PieceKind::Goose => PieceKind::Fox,
        }
    }

    /// Name of the side controlling this kind of piece.
    #[must_use]
    pub const fn side_name(self) -> &'static str {
        match self {
            PieceKind::Fox => "Fox",
            PieceKind::Goose => "Geese",
        }
    }

    /// Single-character board symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Fox => 'F',
            PieceKind::Goose => 'G',
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.side_name())
    }
}

/// Unique identifier of a piece on one board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u16);

impl PieceId {
    /// Create a new piece ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece({})", self.0)
    }
}

/// A piece on the board.
///
/// Only the `Board` hands out pieces, and it keeps `position` equal to the
/// cell the piece occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    /// Identity of this piece.
    pub id: PieceId,
    /// Fox or Goose.
    pub kind: PieceKind,
    /// Current cell.
    pub position: Position,
}

impl Piece {
    #[must_use]
    pub const fn new(id: PieceId, kind: PieceKind, position: Position) -> Self {
        Self { id, kind, position }
    }

    #[must_use]
    pub const fn is_fox(&self) -> bool {
        matches!(self.kind, PieceKind::Fox)
    }

    #[must_use]
    pub const fn is_goose(&self) -> bool {
        matches!(self.kind, PieceKind::Goose)
    }
}
