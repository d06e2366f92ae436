//! Terminal-state detection.
//!
//! Conditions are checked in a fixed priority order, first match wins:
//!
//! 1. No Fox on the board: [`Outcome::FoxRemoved`]
//! 2. The Fox has no legal move: [`Outcome::FoxTrapped`]
//! 3. At most [`FOX_WINS_AT_GEESE`] Geese left: [`Outcome::GeeseDecimated`]
//! 4. Capture-free counter at the limit: [`Outcome::Draw`]
//!
//! The Geese running out of moves is not a terminal condition.

use crate::board::Board;

use super::outcome::Outcome;
use super::validator::MoveValidator;

/// The Fox wins once the Goose count drops to this value.
pub const FOX_WINS_AT_GEESE: usize = 4;

/// Evaluate whether the game is over.
///
/// Returns `Some(outcome)` if the game has ended, `None` if it continues.
#[must_use]
pub fn evaluate(
    board: &Board,
    moves_without_capture: u32,
    max_moves_without_capture: u32,
) -> Option<Outcome> {
    let Some(fox) = board.fox() else {
        return Some(Outcome::FoxRemoved);
    };

    if MoveValidator::new(board).valid_moves(fox).is_empty() {
        return Some(Outcome::FoxTrapped);
    }

    if board.goose_count() <= FOX_WINS_AT_GEESE {
        return Some(Outcome::GeeseDecimated);
    }

    if moves_without_capture >= max_moves_without_capture {
        return Some(Outcome::Draw);
    }

    None
}
