//! Async driver around a shared `TurnEngine`.
//!
//! The engine sits behind a `tokio::sync::Mutex`. Automated selection runs
//! on a blocking task against a board snapshot, outside the lock, and its
//! result re-enters through `TurnEngine::apply_automated`. A result that
//! comes back after the game moved on is discarded.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::core::error::GameError;
use crate::core::position::Position;

use super::engine::TurnEngine;
use super::state::{GameState, TurnReport};

/// Cloneable handle that schedules automated turns.
#[derive(Clone, Debug)]
pub struct GameDriver {
    engine: Arc<Mutex<TurnEngine>>,
}

impl GameDriver {
    /// Take over `engine`. Inline automation is switched off.
    pub fn new(mut engine: TurnEngine) -> Self {
        engine.set_inline_automation(false);
        Self {
            engine: Arc::new(Mutex::new(engine)),
        }
    }

    /// Shared engine.
    pub fn handle(&self) -> Arc<Mutex<TurnEngine>> {
        Arc::clone(&self.engine)
    }

    /// Copy of the current game state.
    pub async fn snapshot(&self) -> GameState {
        self.engine.lock().await.state().clone()
    }

    /// Start the game and play automated turns until a human is to move or
    /// the game ends.
    pub async fn start(&self) -> Result<(), GameError> {
        self.engine.lock().await.start();
        self.drive_automation().await
    }

    /// Apply a human move, then play any automated replies.
    pub async fn submit_human_move(&self, from: Position, to: Position) -> Result<TurnReport, GameError> {
        let report = self.engine.lock().await.submit_human_move(from, to)?;
        self.drive_automation().await?;
        Ok(report)
    }

    /// Reset the game and start again.
    pub async fn reset(&self) -> Result<(), GameError> {
        self.engine.lock().await.reset();
        self.drive_automation().await
    }

    /// Play automated turns while one is due.
    ///
    /// Stale results are dropped and the next due turn is requested again.
    /// Faults stop the loop and are returned.
    pub async fn drive_automation(&self) -> Result<(), GameError> {
        loop {
            let (request, delay) = {
                let engine = self.engine.lock().await;
                match engine.automated_request() {
                    Some(request) => (request, engine.config().ai_delay),
                    None => return Ok(()),
                }
            };

            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            let ticket = request.ticket;
            let side = request.side();
            let selected = match tokio::task::spawn_blocking(move || request.select()).await {
                Ok(selected) => selected,
                Err(err) => {
                    let mut engine = self.engine.lock().await;
                    if engine.ticket() != ticket {
                        debug!(%side, "selection failed for a stale position");
                        continue;
                    }
                    return Err(engine.report_fault(format!("{side} move selection failed: {err}")));
                }
            };

            let mut engine = self.engine.lock().await;
            match engine.apply_automated(ticket, selected) {
                Ok(_) => {}
                Err(GameError::StaleMove) => {
                    debug!(%side, "stale automated move dropped");
                }
                Err(err) => {
                    warn!(%side, %err, "automated play stopped");
                    return Err(err);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::core::piece::PieceKind;
    use crate::game::engine::TurnEngineBuilder;
    use crate::players::RandomStrategy;

    fn ai_vs_ai(seed: u64) -> TurnEngine {
        TurnEngineBuilder::new()
            .config(GameConfig::headless(seed))
            .fox(Arc::new(RandomStrategy::seeded(PieceKind::Fox, seed)))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_driver_plays_to_the_end() {
        let driver = GameDriver::new(ai_vs_ai(11));
        driver.start().await.unwrap();

        let state = driver.snapshot().await;
        assert!(state.is_over());
        assert!(!state.history().is_empty());
    }

    #[tokio::test]
    async fn test_same_seed_same_game() {
        let a = GameDriver::new(ai_vs_ai(99));
        let b = GameDriver::new(ai_vs_ai(99));
        a.start().await.unwrap();
        b.start().await.unwrap();

        assert_eq!(a.snapshot().await, b.snapshot().await);
    }
}
