//! Card system: card values, the standard catalog, and card sets.
//!
//! ## Key Types
//!
//! - `CardIndex`: Identifies one physical card within a deck
//! - `Card`: Immutable color/kind/value triple plus its index
//! - `CardSet`: Keyed bag used for the draw pile, discard pile and hands
//! - `standard_deck`: Builds the canonical 108 cards

pub mod card;
pub mod catalog;
pub mod set;

pub use card::{Card, CardColor, CardIndex, CardKind};
pub use catalog::{standard_deck, DECK_SIZE};
pub use set::CardSet;
