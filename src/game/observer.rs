//! Outbound notifications to a presentation layer.

use tokio::sync::mpsc;
use tracing::trace;

use crate::board::Board;
use crate::core::piece::PieceKind;
use crate::rules::Outcome;

/// Receives what a front end needs to display.
///
/// Callbacks run on whatever context committed the change, while the
/// engine is borrowed; implementations should hand work off rather than
/// block.
pub trait GameObserver: Send {
    /// The board changed (or is shown for the first time).
    fn on_board_changed(&mut self, board: &Board);

    /// `side` is now to move.
    fn on_turn_announced(&mut self, side: PieceKind);

    /// Human-readable status text: refusals, passes, the final result.
    fn on_message(&mut self, message: &str);

    /// The game reached a terminal state.
    fn on_game_over(&mut self, _outcome: Outcome) {}
}

/// Observer that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {
    fn on_board_changed(&mut self, _board: &Board) {}

    fn on_turn_announced(&mut self, _side: PieceKind) {}

    fn on_message(&mut self, _message: &str) {}
}

/// Notification forwarded by `ChannelObserver`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// Snapshot of the board after a change.
    BoardChanged(Board),
    /// Side now to move.
    TurnAnnounced(PieceKind),
    /// Status text.
    Message(String),
    /// Game ended.
    GameOver(Outcome),
}

/// Forwards every notification as a [`GameEvent`] over an unbounded channel.
///
/// Sending never blocks. Events sent after the receiver is dropped are
/// discarded.
#[derive(Clone, Debug)]
pub struct ChannelObserver {
    tx: mpsc::UnboundedSender<GameEvent>,
}

impl ChannelObserver {
    /// Wrap an existing sender.
    pub fn new(tx: mpsc::UnboundedSender<GameEvent>) -> Self {
        Self { tx }
    }

    /// Create an observer together with its receiving end.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<GameEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    fn send(&self, event: GameEvent) {
        if self.tx.send(event).is_err() {
            trace!("observer channel closed, event dropped");
        }
    }
}

impl GameObserver for ChannelObserver {
    fn on_board_changed(&mut self, board: &Board) {
        self.send(GameEvent::BoardChanged(board.clone()));
    }

    fn on_turn_announced(&mut self, side: PieceKind) {
        self.send(GameEvent::TurnAnnounced(side));
    }

    fn on_message(&mut self, message: &str) {
        self.send(GameEvent::Message(message.to_owned()));
    }

    fn on_game_over(&mut self, outcome: Outcome) {
        self.send(GameEvent::GameOver(outcome));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_forwards_in_order() {
        let (mut observer, mut rx) = ChannelObserver::channel();
        let board = Board::initial();

        observer.on_board_changed(&board);
        observer.on_turn_announced(PieceKind::Goose);
        observer.on_message("hello");
        observer.on_game_over(Outcome::Draw);

        assert_eq!(rx.try_recv().unwrap(), GameEvent::BoardChanged(board));
        assert_eq!(rx.try_recv().unwrap(), GameEvent::TurnAnnounced(PieceKind::Goose));
        assert_eq!(rx.try_recv().unwrap(), GameEvent::Message("hello".into()));
        assert_eq!(rx.try_recv().unwrap(), GameEvent::GameOver(Outcome::Draw));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_closed_channel_is_ignored() {
        let (mut observer, rx) = ChannelObserver::channel();
        drop(rx);
        observer.on_message("nobody listening");
    }

    #[test]
    fn test_null_observer_default_game_over() {
        let mut observer = NullObserver;
        observer.on_game_over(Outcome::FoxTrapped);
        observer.on_message("ignored");
    }
}
