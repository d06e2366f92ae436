//! Player strategies.
//!
//! A game has one `Strategy` per side. Two implementations ship:
//! - `HumanRelay`: moves come from a person through the front end
//! - `RandomStrategy`: uniform random legal move, captures first

mod human;
mod random;
mod strategy;

pub use human::HumanRelay;
pub use random::RandomStrategy;
pub use strategy::Strategy;
