//! Board coordinates and compass directions.
//!
//! ## Position
//!
//! A plain `(x, y)` pair, 0-indexed, with `y` growing towards the Fox's
//! starting row. Positions carry no board knowledge: whether a coordinate
//! is on the board (and playable) is decided by `Board::is_playable`.
//!
//! ## Direction
//!
//! The eight unit steps, enumerated in a fixed order that move generation
//! relies on for deterministic output.
//!
//! ```
//! use fox_geese::core::{Direction, Position};
//!
//! let origin = Position::new(4, 4);
//! assert_eq!(origin.step(Direction::NorthEast), Position::new(5, 5));
//! assert_eq!(origin.jump(Direction::South), Position::new(4, 2));
//! assert_eq!("(3,7)".parse::<Position>().unwrap(), Position::new(3, 7));
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A cell coordinate.
///
/// Coordinates may lie outside the board; such positions are simply never
/// playable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Column, 0-based.
    pub x: i32,
    /// Row, 0-based. Geese start at low rows, the Fox at the top row.
    pub y: i32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position one step away in `direction`.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Position two steps away in `direction` (a jump landing cell).
    #[must_use]
    pub const fn jump(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + 2 * dx, self.y + 2 * dy)
    }

    /// Integer midpoint between two positions.
    ///
    /// Exact only when both coordinates differ by an even amount, which is
    /// always the case for a jump.
    #[must_use]
    pub const fn midpoint(self, other: Position) -> Self {
        Self::new((self.x + other.x) / 2, (self.y + other.y) / 2)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Error returned when parsing a [`Position`] from text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParsePositionError {
    #[error("expected two comma-separated coordinates, got {0:?}")]
    Shape(String),

    #[error("invalid coordinate {0:?}")]
    Coordinate(String),
}

impl FromStr for Position {
    type Err = ParsePositionError;

    /// Accepts `x,y` with optional surrounding parentheses and whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);

        let mut parts = inner.split(',');
        let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ParsePositionError::Shape(s.to_string()));
        };

        let parse = |part: &str| {
            part.trim()
                .parse::<i32>()
                .map_err(|_| ParsePositionError::Coordinate(part.trim().to_string()))
        };

        Ok(Position::new(parse(x)?, parse(y)?))
    }
}

/// One of the eight unit directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    West,
    East,
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Direction {
    /// All directions in enumeration order.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
        Direction::NorthWest,
        Direction::NorthEast,
        Direction::SouthWest,
        Direction::SouthEast,
    ];

    /// The directions a Goose may step in.
    pub const GOOSE_FORWARD: [Direction; 3] =
        [Direction::North, Direction::NorthWest, Direction::NorthEast];

    /// `(dx, dy)` offset of a single step.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
            Direction::NorthWest => (-1, 1),
            Direction::NorthEast => (1, 1),
            Direction::SouthWest => (-1, -1),
            Direction::SouthEast => (1, -1),
        }
    }
}
