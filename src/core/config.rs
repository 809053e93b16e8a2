//! Per-game configuration.
//!
//! Rules are fixed; only the deal size and the RNG seed vary per game.

use serde::{Deserialize, Serialize};

/// Cards dealt to each player by `start`.
pub const DEFAULT_HAND_SIZE: usize = 7;

/// Configuration for one game instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cards dealt to each seat when the game starts.
    pub initial_hand_size: usize,

    /// Seed for the draw RNG.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_hand_size: DEFAULT_HAND_SIZE,
            seed: 0,
        }
    }
}

impl GameConfig {
    /// Start building a config from the defaults.
    #[must_use]
    pub fn builder() -> GameConfigBuilder {
        GameConfigBuilder::default()
    }
}

/// Builder for `GameConfig`.
///
/// ```
/// use uno_engine::core::GameConfig;
///
/// let config = GameConfig::builder().seed(42).initial_hand_size(5).build();
/// assert_eq!(config.seed, 42);
/// assert_eq!(config.initial_hand_size, 5);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameConfigBuilder {
    config: GameConfig,
}

impl GameConfigBuilder {
    pub fn initial_hand_size(mut self, size: usize) -> Self {
        self.config.initial_hand_size = size;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn build(self) -> GameConfig {
        self.config
    }
}
