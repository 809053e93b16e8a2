//! # uno-engine
//!
//! A server-side UNO engine. Each game session is an isolated, synchronous
//! state machine; many sessions share one process through a registry.
//!
//! ## Design Principles
//!
//! 1. **Typed Operations**: One method per action, each returning a value or
//!    a `GameError`. Nothing is dispatched dynamically.
//!
//! 2. **Card Conservation**: After a reset the 108 cards are always split
//!    across the draw pile, the discard pile and the hands, never duplicated.
//!
//! 3. **Reproducible Draws**: Every random draw goes through a seeded
//!    `GameRng` over a sorted index list.
//!
//! ## Modules
//!
//! - `core`: Identities, players, actions, errors, RNG, configuration
//! - `cards`: Card values, the standard catalog, card sets
//! - `game`: The per-session engine and its status snapshot
//! - `registry`: Session table with per-game locking
//!
//! Transport, authentication and request parsing belong to the host
//! service; it hands the engine an authenticated `Uid` and a resolved game.

pub mod cards;
pub mod core;
pub mod game;
pub mod registry;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, GameConfig, GameError, GameRng, GameRngState, Player, Seat, Uid,
};

pub use crate::cards::{standard_deck, Card, CardColor, CardIndex, CardKind, CardSet, DECK_SIZE};

pub use crate::game::{is_legal_play, Direction, GameSnapshot, PlayerSummary, SnapshotError, UnoGame};

pub use crate::registry::{GameRegistry, RegistryConfig, RegistryError, SessionId};
