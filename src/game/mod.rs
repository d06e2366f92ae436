//! Game flow: state, turn engine, observers and the async driver.
//!
//! ```text
//! Strategy / human input -> Move -> MoveValidator -> GameState::commit
//!        -> terminal check -> GameObserver -> next mover
//! ```

pub mod driver;
pub mod engine;
pub mod observer;
pub mod state;

pub use driver::GameDriver;
pub use engine::{
    AutomatedRequest, TurnEngine, TurnEngineBuilder, TurnProgress, TurnTicket,
    ILLEGAL_MOVE_MESSAGE, WRONG_PIECE_MESSAGE,
};
pub use observer::{ChannelObserver, GameEvent, GameObserver, NullObserver};
pub use state::{GameState, GameStatus, TurnReport};
