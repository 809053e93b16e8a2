//! The game engine: one self-contained UNO state machine per session.
//!
//! ## Key Types
//!
//! - `UnoGame`: Roster, piles, turn pointer and direction, plus every action
//! - `Direction`: Forward or backward turn order
//! - `GameSnapshot`: Public status projection for display
//! - `is_legal_play`: The matching rule between a card and the last card

mod engine;
mod rules;
mod snapshot;
mod turn;

pub use engine::UnoGame;
pub use rules::is_legal_play;
pub use snapshot::{GameSnapshot, PlayerSummary, SnapshotError};
pub use turn::Direction;
