//! Card values.
//!
//! A `Card` is an immutable value. Its `index` is unique within a deck, so
//! the index alone identifies a physical card; color, kind and value are
//! what the legality check compares.

use serde::{Deserialize, Serialize};

/// Unique identifier for one physical card in a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardIndex(pub u16);

impl CardIndex {
    /// Create a new card index.
    #[must_use]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for CardIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Card color. Wild cards carry `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardColor {
    None,
    Red,
    Yellow,
    Green,
    Blue,
}

impl CardColor {
    /// The four playable colors, in catalog order.
    pub const ALL: [CardColor; 4] = [CardColor::Red, CardColor::Yellow, CardColor::Green, CardColor::Blue];
}

/// What a card does when played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Number,
    Reverse,
    Skip,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl CardKind {
    /// Wild and WildDrawFour match anything.
    #[must_use]
    pub const fn is_wild(self) -> bool {
        matches!(self, CardKind::Wild | CardKind::WildDrawFour)
    }
}

/// A single card.
///
/// `value` is the rank for Number cards, 0 for colored specials, and 0-3
/// for the individual copies of Wild and WildDrawFour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub index: CardIndex,
    pub color: CardColor,
    pub kind: CardKind,
    pub value: u8,
}

impl Card {
    #[must_use]
    pub const fn new(index: CardIndex, color: CardColor, kind: CardKind, value: u8) -> Self {
        Self { index, color, kind, value }
    }

    /// Same color, kind and value, ignoring the index.
    #[must_use]
    pub fn same_face(&self, other: &Card) -> bool {
        self.color == other.color && self.kind == other.kind && self.value == other.value
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            CardKind::Number => write!(f, "{:?} {}", self.color, self.value),
            CardKind::DrawTwo => write!(f, "{:?} Draw Two", self.color),
            CardKind::Reverse | CardKind::Skip => write!(f, "{:?} {:?}", self.color, self.kind),
            CardKind::Wild => write!(f, "Wild"),
            CardKind::WildDrawFour => write!(f, "Wild Draw Four"),
        }
    }
}
