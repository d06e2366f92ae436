//! Move representation and history records.
//!
//! A `Move` is a pure value: building one never touches the board. Moves
//! become real only when the turn engine commits them, at which point a
//! `MoveRecord` is appended to the game history.

use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceId, PieceKind};
use super::position::Position;

/// A candidate or committed move.
///
/// ## Example
///
/// ```
/// use fox_geese::core::{Move, Piece, PieceId, PieceKind, Position};
///
/// let fox = Piece::new(PieceId::new(13), PieceKind::Fox, Position::new(4, 4));
///
/// let step = Move::new(&fox, Position::new(3, 5), false);
/// let jump = Move::new(&fox, Position::new(6, 6), true);
///
/// assert_eq!(step.from, Position::new(4, 4));
/// assert_eq!(jump.jumped(), Some(Position::new(5, 5)));
/// assert_eq!(step.jumped(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The piece being moved.
    pub piece: PieceId,

    /// Type of the moving piece.
    pub kind: PieceKind,

    /// Origin cell.
    pub from: Position,

    /// Destination cell.
    pub to: Position,

    /// Whether this move jumps over (and removes) a Goose.
    pub capture: bool,
}

impl Move {
    /// Create a move for `piece` from its current position.
    #[must_use]
    pub const fn new(piece: &Piece, to: Position, capture: bool) -> Self {
        Self {
            piece: piece.id,
            kind: piece.kind,
            from: piece.position,
            to,
            capture,
        }
    }

    /// Cell of the jumped Goose for a capture, `None` otherwise.
    #[must_use]
    pub const fn jumped(&self) -> Option<Position> {
        if self.capture {
            Some(self.from.midpoint(self.to))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sep = if self.capture { "x" } else { "-" };
        write!(f, "{} {}{}{}", self.kind.symbol(), self.from, sep, self.to)
    }
}

/// A committed move with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Turn number at which the move was committed (1-based).
    pub turn: u32,

    /// The move played.
    pub mv: Move,

    /// Cell the captured Goose was removed from, if any.
    pub captured: Option<Position>,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(turn: u32, mv: Move, captured: Option<Position>) -> Self {
        Self { turn, mv, captured }
    }

    /// Side that played the move.
    #[must_use]
    pub fn side(&self) -> PieceKind {
        self.mv.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fox_at(x: i32, y: i32) -> Piece {
        Piece::new(PieceId::new(13), PieceKind::Fox, Position::new(x, y))
    }

    #[test]
    fn test_move_from_piece() {
        let fox = fox_at(4, 8);
        let mv = Move::new(&fox, Position::new(3, 7), false);

        assert_eq!(mv.piece, PieceId::new(13));
        assert_eq!(mv.kind, PieceKind::Fox);
        assert_eq!(mv.from, Position::new(4, 8));
        assert_eq!(mv.to, Position::new(3, 7));
        assert!(!mv.capture);
    }

    #[test]
    fn test_jumped_cell() {
        let fox = fox_at(4, 4);
        assert_eq!(Move::new(&fox, Position::new(4, 2), true).jumped(), Some(Position::new(4, 3)));
        assert_eq!(Move::new(&fox, Position::new(2, 6), true).jumped(), Some(Position::new(3, 5)));
        assert_eq!(Move::new(&fox, Position::new(5, 5), false).jumped(), None);
    }

    #[test]
    fn test_move_equality_includes_capture_flag() {
        let fox = fox_at(4, 4);
        let a = Move::new(&fox, Position::new(6, 6), true);
        let b = Move::new(&fox, Position::new(6, 6), false);
        assert_ne!(a, b);
    }

    #[test]
    fn test_display() {
        let fox = fox_at(4, 4);
        assert_eq!(format!("{}", Move::new(&fox, Position::new(6, 6), true)), "F (4,4)x(6,6)");
        assert_eq!(format!("{}", Move::new(&fox, Position::new(5, 5), false)), "F (4,4)-(5,5)");
    }

    #[test]
    fn test_move_record() {
        let fox = fox_at(4, 4);
        let mv = Move::new(&fox, Position::new(6, 6), true);
        let record = MoveRecord::new(3, mv, mv.jumped());

        assert_eq!(record.turn, 3);
        assert_eq!(record.side(), PieceKind::Fox);
        assert_eq!(record.captured, Some(Position::new(5, 5)));
    }

    #[test]
    fn test_move_record_serialization() {
        let fox = fox_at(4, 4);
        let record = MoveRecord::new(1, Move::new(&fox, Position::new(3, 5), false), None);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
