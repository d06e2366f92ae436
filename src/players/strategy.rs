//! Player strategy trait.

use crate::board::Board;
use crate::core::moves::Move;
use crate::core::piece::PieceKind;

/// Decision policy for one side.
///
/// Automated strategies pick a move from a board snapshot. Selection may
/// run on another thread than the one that owns the game, so strategies
/// must be `Send + Sync` and must not assume the snapshot is still current
/// when their move is applied: the turn engine re-validates it.
///
/// Human-relay strategies never select; their moves arrive through
/// `TurnEngine::submit_human_move`.
pub trait Strategy: Send + Sync {
    /// The side this strategy plays.
    fn side(&self) -> PieceKind;

    /// Whether the engine should ask this strategy for moves.
    fn is_automated(&self) -> bool;

    /// Choose a move for `side()` on `board`.
    ///
    /// Returns `None` if no piece of the side can move, and always for
    /// human relays.
    fn select_move(&self, board: &Board) -> Option<Move>;

    /// Display name for logs and front ends.
    fn name(&self) -> &str {
        if self.is_automated() {
            "computer"
        } else {
            "human"
        }
    }
}
