//! Uniform random strategy with capture priority.

use std::sync::{Mutex, PoisonError};

use tracing::debug;

use crate::board::Board;
use crate::core::moves::Move;
use crate::core::piece::PieceKind;
use crate::core::rng::GameRng;
use crate::rules::MoveValidator;

use super::strategy::Strategy;

/// Picks a legal move at random.
///
/// If any capture is available, one of the captures is chosen uniformly;
/// otherwise any legal move is chosen uniformly. Only the Fox ever has
/// captures.
#[derive(Debug)]
pub struct RandomStrategy {
    side: PieceKind,
    rng: Mutex<GameRng>,
}

impl RandomStrategy {
    /// Create a random strategy for `side` drawing from `rng`.
    pub fn new(side: PieceKind, rng: GameRng) -> Self {
        Self {
            side,
            rng: Mutex::new(rng),
        }
    }

    /// Create a random strategy with a stream derived from `seed` and the
    /// side, so both sides of a seeded game draw independent sequences.
    pub fn seeded(side: PieceKind, seed: u64) -> Self {
        let context = match side {
            PieceKind::Fox => "fox",
            PieceKind::Goose => "geese",
        };
        Self::new(side, GameRng::new(seed).for_context(context))
    }
}

impl Strategy for RandomStrategy {
    fn side(&self) -> PieceKind {
        self.side
    }

    fn is_automated(&self) -> bool {
        true
    }

    fn select_move(&self, board: &Board) -> Option<Move> {
        let moves = MoveValidator::new(board).side_moves(self.side);
        if moves.is_empty() {
            debug!(side = %self.side, "no legal moves to choose from");
            return None;
        }

        let captures: Vec<Move> = moves.iter().copied().filter(|m| m.capture).collect();
        let pool = if captures.is_empty() { &moves } else { &captures };

        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let chosen = rng.choose(pool).copied();
        if let Some(mv) = &chosen {
            debug!(side = %self.side, candidates = pool.len(), chosen = %mv, "random move selected");
        }
        chosen
    }

    fn name(&self) -> &str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::position::Position;

    #[test]
    fn test_selects_legal_move() {
        let board = Board::initial();
        let strategy = RandomStrategy::seeded(PieceKind::Goose, 42);

        for _ in 0..20 {
            let mv = strategy.select_move(&board).unwrap();
            assert_eq!(mv.kind, PieceKind::Goose);
            assert!(MoveValidator::new(&board).is_valid_move(&mv));
        }
    }

    #[test]
    fn test_prefers_captures() {
        let mut board = Board::empty();
        board.add_piece(PieceKind::Fox, Position::new(4, 4));
        board.add_piece(PieceKind::Goose, Position::new(5, 5));
        board.add_piece(PieceKind::Goose, Position::new(3, 3));

        let strategy = RandomStrategy::seeded(PieceKind::Fox, 7);
        for _ in 0..20 {
            let mv = strategy.select_move(&board).unwrap();
            assert!(mv.capture);
            assert!(mv.to == Position::new(6, 6) || mv.to == Position::new(2, 2));
        }
    }

    #[test]
    fn test_no_moves_yields_none() {
        let mut board = Board::empty();
        board.add_piece(PieceKind::Fox, Position::new(0, 8));
        board.add_piece(PieceKind::Goose, Position::new(1, 7));
        board.add_piece(PieceKind::Goose, Position::new(2, 6));

        let strategy = RandomStrategy::seeded(PieceKind::Fox, 1);
        assert!(strategy.select_move(&board).is_none());
    }

    #[test]
    fn test_same_seed_same_choices() {
        let board = Board::initial();
        let a = RandomStrategy::seeded(PieceKind::Goose, 1234);
        let b = RandomStrategy::seeded(PieceKind::Goose, 1234);

        for _ in 0..10 {
            assert_eq!(a.select_move(&board), b.select_move(&board));
        }
    }

    #[test]
    fn test_metadata() {
        let strategy = RandomStrategy::seeded(PieceKind::Fox, 0);
        assert_eq!(strategy.side(), PieceKind::Fox);
        assert!(strategy.is_automated());
        assert_eq!(strategy.name(), "random");
    }
}
