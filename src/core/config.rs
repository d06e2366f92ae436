//! Game configuration.
//!
//! `GameConfig` is read-only once a game is constructed. Values come from
//! `Default`, the `with_*` builder methods, environment variables
//! (`from_env`), or a serialized file; `validate` is run by the turn engine
//! before a game starts.
//!
//! The board dimensions are fields for completeness only. The starting
//! layout is fixed to the 9×9 board, and any other size is rejected.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::board::{BOARD_HEIGHT, BOARD_WIDTH};

use super::error::ConfigError;

/// Default number of consecutive non-capturing moves before a draw.
pub const DEFAULT_MAX_MOVES_WITHOUT_CAPTURE: u32 = 50;

/// Default cosmetic pause before an automated move.
pub const DEFAULT_AI_DELAY: Duration = Duration::from_millis(1000);

/// Environment variable overriding `max_moves_without_capture`.
pub const ENV_MAX_MOVES: &str = "FOX_GEESE_MAX_MOVES_WITHOUT_CAPTURE";

/// Environment variable overriding `ai_delay` (milliseconds).
pub const ENV_AI_DELAY_MS: &str = "FOX_GEESE_AI_DELAY_MS";

/// Environment variable setting the RNG seed.
pub const ENV_SEED: &str = "FOX_GEESE_SEED";

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board width. Only 9 is supported.
    pub board_width: i32,

    /// Board height. Only 9 is supported.
    pub board_height: i32,

    /// Consecutive moves without a capture that end the game in a draw.
    pub max_moves_without_capture: u32,

    /// Pause before each automated move. Pacing only; zero in headless runs.
    #[serde(with = "duration_millis")]
    pub ai_delay: Duration,

    /// Seed for automated players. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            max_moves_without_capture: DEFAULT_MAX_MOVES_WITHOUT_CAPTURE,
            ai_delay: DEFAULT_AI_DELAY,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for tests and headless runs: no delay, fixed seed.
    pub fn headless(seed: u64) -> Self {
        Self::default().with_ai_delay(Duration::ZERO).with_seed(seed)
    }

    /// Load from environment variables, falling back to defaults.
    ///
    /// Values that are present but unparseable are reported rather than
    /// silently ignored.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(moves) = read_env::<u32>(ENV_MAX_MOVES)? {
            config.max_moves_without_capture = moves;
        }
        if let Some(ms) = read_env::<u64>(ENV_AI_DELAY_MS)? {
            config.ai_delay = Duration::from_millis(ms);
        }
        if let Some(seed) = read_env::<u64>(ENV_SEED)? {
            config.seed = Some(seed);
        }

        Ok(config)
    }

    /// Set the draw threshold.
    #[must_use]
    pub fn with_max_moves_without_capture(mut self, moves: u32) -> Self {
        self.max_moves_without_capture = moves;
        self
    }

    /// Set the automated-move delay.
    #[must_use]
    pub fn with_ai_delay(mut self, delay: Duration) -> Self {
        self.ai_delay = delay;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the board dimensions. Anything but 9×9 fails validation.
    #[must_use]
    pub fn with_board_size(mut self, width: i32, height: i32) -> Self {
        self.board_width = width;
        self.board_height = height;
        self
    }

    /// Check that the configuration can be played.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_width != BOARD_WIDTH || self.board_height != BOARD_HEIGHT {
            return Err(ConfigError::UnsupportedBoardSize {
                width: self.board_width,
                height: self.board_height,
            });
        }
        if self.max_moves_without_capture == 0 {
            return Err(ConfigError::ZeroMoveLimit);
        }
        Ok(())
    }
}

fn read_env<T: std::str::FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
        Err(_) => Ok(None),
    }
}

mod duration_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
