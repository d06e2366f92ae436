//! Human relay strategy.

use crate::board::Board;
use crate::core::moves::Move;
use crate::core::piece::PieceKind;

use super::strategy::Strategy;

/// Stand-in for a person at the front end.
///
/// Never selects a move; the front end forwards the person's moves to the
/// engine as `(origin, destination)` pairs.
#[derive(Clone, Debug)]
pub struct HumanRelay {
    side: PieceKind,
}

impl HumanRelay {
    /// Create a relay for `side`.
    pub fn new(side: PieceKind) -> Self {
        Self { side }
    }
}

impl Strategy for HumanRelay {
    fn side(&self) -> PieceKind {
        self.side
    }

    fn is_automated(&self) -> bool {
        false
    }

    fn select_move(&self, _board: &Board) -> Option<Move> {
        None
    }
}
