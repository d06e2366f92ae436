//! Game rules.
//!
//! - `validator`: legal moves for each piece type and candidate checking
//! - `terminal`: end-of-game detection in priority order
//! - `outcome`: how a game ended and who won
//!
//! Everything here is a pure function of a `Board` (plus the capture-free
//! counter for the draw rule); the turn engine owns all mutation.

pub mod outcome;
pub mod terminal;
pub mod validator;

pub use outcome::Outcome;
pub use terminal::{evaluate, FOX_WINS_AT_GEESE};
pub use validator::{MoveList, MoveValidator};
