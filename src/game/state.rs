//! Mutable game state and the commit path.
//!
//! `GameState` is changed only through `commit` and `pass`. A refused
//! commit leaves every field untouched: the move is validated first and
//! applied to a scratch copy of the board that replaces the live one only
//! on success.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Board;
use crate::core::error::{GameError, IllegalReason};
use crate::core::moves::{Move, MoveRecord};
use crate::core::piece::PieceKind;
use crate::rules::{evaluate, MoveValidator, Outcome};

/// Whether the game is still being played.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Over(Outcome),
}

impl GameStatus {
    /// Outcome of a finished game.
    #[must_use]
    pub const fn outcome(self) -> Option<Outcome> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Over(outcome) => Some(outcome),
        }
    }

    /// Whether the game has ended.
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Over(_))
    }
}

/// Result of a committed move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// The history entry appended for this move.
    pub record: MoveRecord,

    /// Set if the move ended the game.
    pub outcome: Option<Outcome>,
}

/// Board, mover, counters and history of one game.
///
/// ## Example
///
/// ```
/// use fox_geese::core::{Move, PieceKind, Position};
/// use fox_geese::game::GameState;
///
/// let mut state = GameState::new();
/// assert_eq!(state.to_move(), PieceKind::Goose);
///
/// let goose = *state.board().piece_at(Position::new(4, 2)).unwrap();
/// let mv = Move::new(&goose, Position::new(3, 3), false);
/// let report = state.commit(&mv, 50).unwrap();
///
/// assert_eq!(report.record.turn, 1);
/// assert_eq!(state.to_move(), PieceKind::Fox);
/// assert_eq!(state.moves_without_capture(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    to_move: PieceKind,
    moves_without_capture: u32,
    turn: u32,
    status: GameStatus,
    history: Vec<MoveRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Standard starting position, Geese to move.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::initial(), PieceKind::Goose)
    }

    /// Start from an arbitrary position.
    #[must_use]
    pub fn from_board(board: Board, to_move: PieceKind) -> Self {
        Self {
            board,
            to_move,
            moves_without_capture: 0,
            turn: 0,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Preset the capture-free counter.
    #[must_use]
    pub fn with_moves_without_capture(mut self, moves: u32) -> Self {
        self.moves_without_capture = moves;
        self
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side allowed to move next.
    #[must_use]
    pub const fn to_move(&self) -> PieceKind {
        self.to_move
    }

    /// Consecutive moves since the last capture.
    #[must_use]
    pub const fn moves_without_capture(&self) -> u32 {
        self.moves_without_capture
    }

    /// Completed turns, passes included.
    #[must_use]
    pub const fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Committed moves, oldest first. Passes are not recorded.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    // === Mutation ===

    /// Validate and apply `mv` for the side to move.
    ///
    /// On success the mover swaps unless the move ended the game.
    pub fn commit(&mut self, mv: &Move, max_moves_without_capture: u32) -> Result<TurnReport, GameError> {
        if let GameStatus::Over(outcome) = self.status {
            return Err(GameError::GameOver(outcome));
        }
        if mv.kind != self.to_move {
            return Err(illegal(mv, IllegalReason::WrongSide(mv.kind)));
        }
        if !MoveValidator::new(&self.board).is_valid_move(mv) {
            return Err(illegal(mv, IllegalReason::NotLegal));
        }

        let mut next = self.board.clone();
        let captured = mv.jumped();
        if let Some(cell) = captured {
            if next.remove(cell).is_none() {
                return Err(GameError::EngineFault(format!("no goose to capture at {cell}")));
            }
        }
        if !next.place(mv.piece, mv.to) {
            return Err(GameError::EngineFault(format!("could not move {} to {}", mv.piece, mv.to)));
        }
        self.board = next;

        self.moves_without_capture = if captured.is_some() {
            0
        } else {
            self.moves_without_capture.saturating_add(1)
        };
        self.turn += 1;

        let record = MoveRecord::new(self.turn, *mv, captured);
        self.history.push(record.clone());
        debug!(turn = self.turn, side = %mv.kind, mv = %mv, "move committed");

        let outcome = self.refresh_status(max_moves_without_capture);
        if outcome.is_none() {
            self.to_move = self.to_move.opponent();
        }

        Ok(TurnReport { record, outcome })
    }

    /// Hand the turn to the other side without moving.
    ///
    /// The capture-free counter is left alone.
    pub fn pass(&mut self) -> Result<(), GameError> {
        if let GameStatus::Over(outcome) = self.status {
            return Err(GameError::GameOver(outcome));
        }
        debug!(turn = self.turn + 1, side = %self.to_move, "side passes");
        self.turn += 1;
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    /// Run terminal detection on the current position.
    ///
    /// Marks the game over if a terminal condition holds. A finished game
    /// keeps its outcome.
    pub fn refresh_status(&mut self, max_moves_without_capture: u32) -> Option<Outcome> {
        if let GameStatus::Over(outcome) = self.status {
            return Some(outcome);
        }
        let outcome = evaluate(&self.board, self.moves_without_capture, max_moves_without_capture)?;
        self.status = GameStatus::Over(outcome);
        Some(outcome)
    }
}

fn illegal(mv: &Move, reason: IllegalReason) -> GameError {
    GameError::IllegalMove {
        from: mv.from,
        to: mv.to,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::position::Position;

    fn capture_board() -> Board {
        let mut board = Board::empty();
        board.add_piece(PieceKind::Fox, Position::new(4, 4));
        for (x, y) in [(5, 5), (0, 0), (2, 0), (6, 0), (8, 0), (1, 1)] {
            board.add_piece(PieceKind::Goose, Position::new(x, y));
        }
        board
    }

    fn fox_move(state: &GameState, to: Position, capture: bool) -> Move {
        let fox = state.board().fox().unwrap();
        Move::new(fox, to, capture)
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new();
        assert_eq!(state.to_move(), PieceKind::Goose);
        assert_eq!(state.turn(), 0);
        assert_eq!(state.moves_without_capture(), 0);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert!(state.history().is_empty());
        assert_eq!(state.board(), &Board::initial());
    }

    #[test]
    fn test_capture_commit() {
        let mut state = GameState::from_board(capture_board(), PieceKind::Fox).with_moves_without_capture(7);
        let mv = fox_move(&state, Position::new(6, 6), true);

        let report = state.commit(&mv, 50).unwrap();

        assert_eq!(report.record.captured, Some(Position::new(5, 5)));
        assert_eq!(report.outcome, None);
        assert!(state.board().piece_at(Position::new(4, 4)).is_none());
        assert!(state.board().piece_at(Position::new(5, 5)).is_none());
        assert!(state.board().piece_at(Position::new(6, 6)).is_some_and(|p| p.is_fox()));
        assert_eq!(state.board().goose_count(), 5);
        assert_eq!(state.moves_without_capture(), 0);
        assert_eq!(state.to_move(), PieceKind::Goose);
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn test_wrong_side_refused() {
        let mut state = GameState::from_board(capture_board(), PieceKind::Goose);
        let before = state.clone();
        let mv = fox_move(&state, Position::new(3, 5), false);

        let err = state.commit(&mv, 50).unwrap_err();
        assert_eq!(
            err,
            GameError::IllegalMove {
                from: Position::new(4, 4),
                to: Position::new(3, 5),
                reason: IllegalReason::WrongSide(PieceKind::Fox),
            }
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_step_claimed_as_capture_refused() {
        let mut state = GameState::from_board(capture_board(), PieceKind::Fox);
        let before = state.clone();
        let mv = fox_move(&state, Position::new(3, 5), true);

        let err = state.commit(&mv, 50).unwrap_err();
        assert!(err.is_illegal_move());
        assert_eq!(state, before);
    }

    #[test]
    fn test_capture_to_four_geese_ends_game() {
        let mut board = Board::empty();
        board.add_piece(PieceKind::Fox, Position::new(4, 4));
        for (x, y) in [(5, 5), (0, 0), (2, 0), (6, 0), (8, 0)] {
            board.add_piece(PieceKind::Goose, Position::new(x, y));
        }
        let mut state = GameState::from_board(board, PieceKind::Fox);
        let mv = fox_move(&state, Position::new(6, 6), true);

        let report = state.commit(&mv, 50).unwrap();
        assert_eq!(report.outcome, Some(Outcome::GeeseDecimated));
        assert_eq!(state.status(), GameStatus::Over(Outcome::GeeseDecimated));
        // Mover does not swap once the game is over
        assert_eq!(state.to_move(), PieceKind::Fox);

        let again = fox_move(&state, Position::new(7, 7), false);
        assert_eq!(
            state.commit(&again, 50).unwrap_err(),
            GameError::GameOver(Outcome::GeeseDecimated)
        );
    }

    #[test]
    fn test_pass_keeps_counter() {
        let mut state = GameState::new().with_moves_without_capture(3);
        state.pass().unwrap();

        assert_eq!(state.to_move(), PieceKind::Fox);
        assert_eq!(state.turn(), 1);
        assert_eq!(state.moves_without_capture(), 3);
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_refresh_status_detects_missing_fox() {
        let mut board = Board::empty();
        board.add_piece(PieceKind::Goose, Position::new(0, 0));
        let mut state = GameState::from_board(board, PieceKind::Goose);

        assert_eq!(state.refresh_status(50), Some(Outcome::FoxRemoved));
        assert!(state.is_over());
        assert_eq!(state.pass().unwrap_err(), GameError::GameOver(Outcome::FoxRemoved));
    }

    #[test]
    fn test_serialization() {
        let mut state = GameState::new();
        state.pass().unwrap();

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
