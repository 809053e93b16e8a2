//! Core engine types: identities, players, actions, errors, RNG, configuration.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{Action, ActionRecord};
pub use config::{GameConfig, GameConfigBuilder, DEFAULT_HAND_SIZE};
pub use error::GameError;
pub use player::{Player, Seat, Uid};
pub use rng::{GameRng, GameRngState};
