//! Turn sequencing.
//!
//! `TurnEngine` owns the game state, one strategy per side and the
//! observer. Every mutation goes through `&mut self`, so one engine is one
//! serialized game.
//!
//! ## Automated turns
//!
//! An automated turn is split in three steps so that selection can run
//! away from the engine:
//!
//! 1. `automated_request` snapshots the board and issues a [`TurnTicket`]
//! 2. the request's strategy selects a move from the snapshot
//! 3. `apply_automated` checks the ticket and commits through the same
//!    path as human moves
//!
//! A ticket goes stale when the game advances, ends or is reset. In inline
//! mode the engine runs the three steps itself right after each change of
//! mover; `GameDriver` turns inline mode off and runs them asynchronously.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::core::config::GameConfig;
use crate::core::error::{ConfigError, GameError, IllegalReason};
use crate::core::moves::Move;
use crate::core::piece::PieceKind;
use crate::core::position::Position;
use crate::core::rng::GameRng;
use crate::board::Board;
use crate::players::{HumanRelay, RandomStrategy, Strategy};
use crate::rules::{MoveValidator, Outcome};

use super::observer::{GameObserver, NullObserver};
use super::state::{GameState, GameStatus, TurnReport};

/// Message shown when a human picks an empty cell or an opponent piece.
pub const WRONG_PIECE_MESSAGE: &str = "You can't move that piece!";

/// Message shown when a human move is not legal.
pub const ILLEGAL_MOVE_MESSAGE: &str = "Illegal move!";

/// Identifies the position an automated selection was computed against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TurnTicket {
    /// Bumped by every reset.
    pub generation: u64,
    /// Completed turns at issue time.
    pub turn: u32,
}

/// Everything needed to select an automated move off the engine.
#[derive(Clone)]
pub struct AutomatedRequest {
    pub ticket: TurnTicket,
    pub board: Board,
    pub strategy: Arc<dyn Strategy>,
}

impl AutomatedRequest {
    /// Side to move.
    #[must_use]
    pub fn side(&self) -> PieceKind {
        self.strategy.side()
    }

    /// Run the strategy on the snapshot.
    #[must_use]
    pub fn select(&self) -> Option<Move> {
        self.strategy.select_move(&self.board)
    }
}

impl std::fmt::Debug for AutomatedRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutomatedRequest")
            .field("ticket", &self.ticket)
            .field("side", &self.side())
            .field("strategy", &self.strategy.name())
            .finish_non_exhaustive()
    }
}

/// What an automated turn did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnProgress {
    /// A move was committed.
    Moved(TurnReport),
    /// The side had no legal move and passed.
    Passed(PieceKind),
}

/// Builder for a [`TurnEngine`].
///
/// Defaults: standard configuration, human Fox, random Geese, no observer,
/// standard starting position, inline automation on.
///
/// ```
/// use fox_geese::core::{GameConfig, PieceKind};
/// use fox_geese::game::TurnEngineBuilder;
/// use fox_geese::players::RandomStrategy;
/// use std::sync::Arc;
///
/// let mut engine = TurnEngineBuilder::new()
///     .config(GameConfig::headless(7))
///     .fox(Arc::new(RandomStrategy::seeded(PieceKind::Fox, 7)))
///     .build()
///     .unwrap();
///
/// engine.start();
/// assert!(engine.state().is_over());
/// ```
pub struct TurnEngineBuilder {
    config: GameConfig,
    fox: Option<Arc<dyn Strategy>>,
    geese: Option<Arc<dyn Strategy>>,
    observer: Option<Box<dyn GameObserver>>,
    state: Option<GameState>,
    inline_automation: bool,
}

impl Default for TurnEngineBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            fox: None,
            geese: None,
            observer: None,
            state: None,
            inline_automation: true,
        }
    }
}

impl TurnEngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn fox(mut self, strategy: Arc<dyn Strategy>) -> Self {
        self.fox = Some(strategy);
        self
    }

    pub fn geese(mut self, strategy: Arc<dyn Strategy>) -> Self {
        self.geese = Some(strategy);
        self
    }

    pub fn observer(mut self, observer: impl GameObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Start from `state` instead of the standard position.
    pub fn state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }

    /// Whether automated turns run inside the engine calls.
    pub fn inline_automation(mut self, enabled: bool) -> Self {
        self.inline_automation = enabled;
        self
    }

    /// Validate the configuration and strategy sides, then build.
    pub fn build(self) -> Result<TurnEngine, ConfigError> {
        self.config.validate()?;

        let seed = self.config.seed.unwrap_or_else(|| GameRng::from_entropy().seed());
        let fox = self
            .fox
            .unwrap_or_else(|| Arc::new(HumanRelay::new(PieceKind::Fox)));
        let geese = self
            .geese
            .unwrap_or_else(|| Arc::new(RandomStrategy::seeded(PieceKind::Goose, seed)));

        check_side(PieceKind::Fox, fox.as_ref())?;
        check_side(PieceKind::Goose, geese.as_ref())?;

        Ok(TurnEngine {
            config: self.config,
            fox,
            geese,
            observer: self.observer.unwrap_or_else(|| Box::new(NullObserver)),
            state: self.state.unwrap_or_default(),
            generation: 0,
            inline_automation: self.inline_automation,
        })
    }
}

fn check_side(expected: PieceKind, strategy: &dyn Strategy) -> Result<(), ConfigError> {
    let found = strategy.side();
    if found != expected {
        return Err(ConfigError::StrategySide { expected, found });
    }
    Ok(())
}

/// Runs one game: turn order, commits, terminal checks, notifications.
pub struct TurnEngine {
    config: GameConfig,
    fox: Arc<dyn Strategy>,
    geese: Arc<dyn Strategy>,
    observer: Box<dyn GameObserver>,
    state: GameState,
    generation: u64,
    inline_automation: bool,
}

impl std::fmt::Debug for TurnEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurnEngine")
            .field("config", &self.config)
            .field("fox", &self.fox.name())
            .field("geese", &self.geese.name())
            .field("state", &self.state)
            .field("generation", &self.generation)
            .field("inline_automation", &self.inline_automation)
            .finish_non_exhaustive()
    }
}

impl TurnEngine {
    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Number of resets so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Strategy playing `side`.
    #[must_use]
    pub fn strategy(&self, side: PieceKind) -> &Arc<dyn Strategy> {
        match side {
            PieceKind::Fox => &self.fox,
            PieceKind::Goose => &self.geese,
        }
    }

    /// Ticket for the current position.
    #[must_use]
    pub fn ticket(&self) -> TurnTicket {
        TurnTicket {
            generation: self.generation,
            turn: self.state.turn(),
        }
    }

    pub(crate) fn set_inline_automation(&mut self, enabled: bool) {
        self.inline_automation = enabled;
    }

    // === Lifecycle ===

    /// Show the position and announce the first mover.
    ///
    /// A position that is already terminal is reported as game over.
    pub fn start(&mut self) {
        info!(
            fox = self.fox.name(),
            geese = self.geese.name(),
            generation = self.generation,
            "game started"
        );
        self.observer.on_board_changed(self.state.board());

        match self.state.refresh_status(self.config.max_moves_without_capture) {
            Some(outcome) => self.announce_game_over(outcome),
            None => {
                self.begin_turn();
                self.run_inline_automation();
            }
        }
    }

    /// Restore the starting position and start again.
    ///
    /// Every outstanding ticket becomes stale.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = GameState::new();
        info!(generation = self.generation, "game reset");
        self.start();
    }

    // === Human input ===

    /// Apply a human move given as origin and destination.
    ///
    /// The capture flag is inferred: a plain step is tried first, then a
    /// jump. Refused moves are reported to the observer and change nothing.
    pub fn submit_human_move(&mut self, from: Position, to: Position) -> Result<TurnReport, GameError> {
        if let GameStatus::Over(outcome) = self.state.status() {
            return Err(GameError::GameOver(outcome));
        }

        let side = self.state.to_move();
        if self.strategy(side).is_automated() {
            return Err(GameError::NotHumanTurn(side));
        }

        let piece = match self.state.board().piece_at(from).copied() {
            Some(piece) if piece.kind == side => piece,
            Some(piece) => return Err(self.refuse(from, to, IllegalReason::WrongSide(piece.kind))),
            None => return Err(self.refuse(from, to, IllegalReason::NoPiece)),
        };

        let validator = MoveValidator::new(self.state.board());
        let candidate = [false, true]
            .into_iter()
            .map(|capture| Move::new(&piece, to, capture))
            .find(|mv| validator.is_valid_move(mv));

        let Some(mv) = candidate else {
            return Err(self.refuse(from, to, IllegalReason::NotLegal));
        };

        let report = self.apply_move(&mv)?;
        self.run_inline_automation();
        Ok(report)
    }

    // === Automated turns ===

    /// Snapshot for an automated turn, if one is due.
    ///
    /// `None` when the game is over or the side to move is human.
    #[must_use]
    pub fn automated_request(&self) -> Option<AutomatedRequest> {
        if self.state.is_over() {
            return None;
        }
        let strategy = self.strategy(self.state.to_move());
        if !strategy.is_automated() {
            return None;
        }
        Some(AutomatedRequest {
            ticket: self.ticket(),
            board: self.state.board().clone(),
            strategy: Arc::clone(strategy),
        })
    }

    /// Commit the result of an automated selection.
    ///
    /// `None` means the strategy found nothing to play; if the side indeed
    /// has no legal move it passes. Human sides are refused. A move that is illegal on the live
    /// board, or a missing move while moves exist, is an engine fault and
    /// leaves the game untouched.
    pub fn apply_automated(&mut self, ticket: TurnTicket, selected: Option<Move>) -> Result<TurnProgress, GameError> {
        if ticket != self.ticket() {
            warn!(
                ?ticket,
                current = ?self.ticket(),
                "discarding automated move for a stale position"
            );
            return Err(GameError::StaleMove);
        }
        if let GameStatus::Over(outcome) = self.state.status() {
            return Err(GameError::GameOver(outcome));
        }

        let side = self.state.to_move();
        if !self.strategy(side).is_automated() {
            return Err(GameError::NotAutomatedTurn(side));
        }
        match selected {
            None if MoveValidator::new(self.state.board()).has_moves(side) => {
                Err(self.report_fault(format!("{side} strategy returned no move although moves exist")))
            }
            None => {
                self.pass(side)?;
                Ok(TurnProgress::Passed(side))
            }
            Some(mv) => match self.apply_move(&mv) {
                Ok(report) => Ok(TurnProgress::Moved(report)),
                Err(err) if err.is_illegal_move() => {
                    Err(self.report_fault(format!("{side} strategy chose an illegal move {mv}: {err}")))
                }
                Err(err) => Err(err),
            },
        }
    }

    /// Select and apply one automated turn on the calling thread.
    ///
    /// Returns `Ok(None)` if no automated turn is due.
    pub fn play_automated_turn(&mut self) -> Result<Option<TurnProgress>, GameError> {
        let Some(request) = self.automated_request() else {
            return Ok(None);
        };

        let selected = match panic::catch_unwind(AssertUnwindSafe(|| request.select())) {
            Ok(selected) => selected,
            Err(_) => {
                return Err(self.report_fault(format!("{} strategy panicked", request.side())));
            }
        };

        self.apply_automated(request.ticket, selected).map(Some)
    }

    /// Report a failed automated turn. The game state is not touched.
    pub fn report_fault(&mut self, message: String) -> GameError {
        warn!(side = %self.state.to_move(), %message, "automated turn failed");
        self.observer.on_message(&format!("Computer player error: {message}"));
        GameError::EngineFault(message)
    }

    fn run_inline_automation(&mut self) {
        if !self.inline_automation {
            return;
        }
        while self.automated_request().is_some() {
            if !self.config.ai_delay.is_zero() {
                std::thread::sleep(self.config.ai_delay);
            }
            if let Err(err) = self.play_automated_turn() {
                debug!(%err, "inline automation stopped");
                break;
            }
        }
    }

    // === Commit path ===

    fn apply_move(&mut self, mv: &Move) -> Result<TurnReport, GameError> {
        let report = self.state.commit(mv, self.config.max_moves_without_capture)?;
        self.observer.on_board_changed(self.state.board());

        match report.outcome {
            Some(outcome) => self.announce_game_over(outcome),
            None => self.begin_turn(),
        }
        Ok(report)
    }

    fn pass(&mut self, side: PieceKind) -> Result<(), GameError> {
        self.state.pass()?;
        info!(%side, turn = self.state.turn(), "no legal moves, turn passes");
        self.observer
            .on_message(&format!("{side} have no legal moves. The turn passes."));
        self.announce_turn();
        Ok(())
    }

    fn refuse(&mut self, from: Position, to: Position, reason: IllegalReason) -> GameError {
        let message = match reason {
            IllegalReason::NoPiece | IllegalReason::WrongSide(_) => WRONG_PIECE_MESSAGE,
            IllegalReason::NotLegal => ILLEGAL_MOVE_MESSAGE,
        };
        debug!(%from, %to, %reason, "human move refused");
        self.observer.on_message(message);
        GameError::IllegalMove { from, to, reason }
    }

    fn announce_turn(&mut self) {
        self.observer.on_turn_announced(self.state.to_move());
    }

    /// Announce the mover and pass at once for a human side that cannot
    /// move. A Fox without moves is terminal, so at most one pass follows.
    fn begin_turn(&mut self) {
        self.announce_turn();

        let side = self.state.to_move();
        if self.strategy(side).is_automated() || MoveValidator::new(self.state.board()).has_moves(side) {
            return;
        }
        if let Err(err) = self.pass(side) {
            warn!(%side, %err, "could not pass for a blocked side");
        }
    }

    fn announce_game_over(&mut self, outcome: Outcome) {
        info!(
            %outcome,
            winner = outcome.winner().map(PieceKind::side_name),
            turns = self.state.turn(),
            "game over"
        );
        self.observer.on_message(outcome.message());
        self.observer.on_game_over(outcome);
    }
}
