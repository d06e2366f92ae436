//! Legal-move generation and confirmation.
//!
//! `MoveValidator` is the single authority on legality. It borrows a board
//! and holds no other state, so a validator is created wherever one is
//! needed and dropped right after.
//!
//! ## Move shapes
//!
//! - Fox step: one cell in any of the 8 directions onto a free cell.
//! - Fox jump: over an adjacent Goose onto the free cell right behind it.
//!   One jump per move, no chaining.
//! - Goose step: one cell forward (N, NW, NE) onto a free cell. Geese never
//!   capture.
//!
//! The Fox is never forced to capture. Generated moves list all steps
//! (direction order) before all jumps.
//!
//! Legality of a candidate is decided by full enumeration: a candidate is
//! legal iff a generated move has the same destination and capture flag.

use smallvec::SmallVec;

use crate::board::Board;
use crate::core::moves::Move;
use crate::core::piece::{Piece, PieceKind};
use crate::core::position::{Direction, Position};

/// Moves of a single piece. A Fox has at most 16 (8 steps, 8 jumps).
pub type MoveList = SmallVec<[Move; 16]>;

/// Rule engine over one board.
#[derive(Clone, Copy, Debug)]
pub struct MoveValidator<'a> {
    board: &'a Board,
}

impl<'a> MoveValidator<'a> {
    /// Create a validator for `board`.
    #[must_use]
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// All legal moves of `piece`: steps first, then jumps.
    #[must_use]
    pub fn valid_moves(&self, piece: &Piece) -> MoveList {
        let mut moves = MoveList::new();
        match piece.kind {
            PieceKind::Fox => {
                self.push_steps(piece, &Direction::ALL, &mut moves);
                self.push_jumps(piece, &mut moves);
            }
            PieceKind::Goose => {
                self.push_steps(piece, &Direction::GOOSE_FORWARD, &mut moves);
            }
        }
        moves
    }

    /// Whether `candidate` is legal on this board.
    ///
    /// The moving piece is looked up by id. It must still stand on the
    /// candidate's origin; destination and capture flag must both match a
    /// generated move. A jump destination claimed as a plain step (or the
    /// other way round) is rejected.
    #[must_use]
    pub fn is_valid_move(&self, candidate: &Move) -> bool {
        let Some(piece) = self.board.piece(candidate.piece) else {
            return false;
        };
        if piece.position != candidate.from || piece.kind != candidate.kind {
            return false;
        }

        self.valid_moves(piece)
            .iter()
            .any(|mv| mv.to == candidate.to && mv.capture == candidate.capture)
    }

    /// All legal moves of every live piece of `side`, in collection order.
    #[must_use]
    pub fn side_moves(&self, side: PieceKind) -> Vec<Move> {
        self.board
            .pieces_of(side)
            .flat_map(|piece| self.valid_moves(piece))
            .collect()
    }

    /// Whether any piece of `side` can move.
    #[must_use]
    pub fn has_moves(&self, side: PieceKind) -> bool {
        self.board
            .pieces_of(side)
            .any(|piece| !self.valid_moves(piece).is_empty())
    }

    fn push_steps(&self, piece: &Piece, directions: &[Direction], out: &mut MoveList) {
        for &dir in directions {
            let to = piece.position.step(dir);
            if self.board.is_free(to) {
                out.push(Move::new(piece, to, false));
            }
        }
    }

    fn push_jumps(&self, piece: &Piece, out: &mut MoveList) {
        for dir in Direction::ALL {
            let jumped = piece.position.step(dir);
            let landing = piece.position.jump(dir);
            if self.can_jump(jumped, landing) {
                out.push(Move::new(piece, landing, true));
            }
        }
    }

    fn can_jump(&self, jumped: Position, landing: Position) -> bool {
        let over_goose = self
            .board
            .piece_at(jumped)
            .is_some_and(|piece| piece.is_goose());
        over_goose && self.board.is_free(landing)
    }
}
