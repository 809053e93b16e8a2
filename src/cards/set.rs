//! Keyed bag of cards: a draw pile, a discard pile, or a hand.
//!
//! Keys are card indices, so a set never holds two copies of the same
//! physical card. Serializes as a list ordered by index.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardIndex};

/// A set of cards keyed by index.
///
/// ```
/// use uno_engine::cards::{Card, CardColor, CardIndex, CardKind, CardSet};
///
/// let mut hand = CardSet::new();
/// let card = Card::new(CardIndex::new(3), CardColor::Red, CardKind::Number, 1);
///
/// assert!(hand.add(card));
/// assert!(!hand.add(card)); // already present
/// assert!(hand.contains(&card));
/// assert_eq!(hand.remove(card.index), Some(card));
/// assert!(hand.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Card>", into = "Vec<Card>")]
pub struct CardSet {
    cards: FxHashMap<CardIndex, Card>,
}

impl CardSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card.
    ///
    /// Returns `false` and leaves the set unchanged if the index is
    /// already present.
    pub fn add(&mut self, card: Card) -> bool {
        if self.cards.contains_key(&card.index) {
            return false;
        }
        self.cards.insert(card.index, card);
        true
    }

    /// Remove and return the card with the given index.
    pub fn remove(&mut self, index: CardIndex) -> Option<Card> {
        self.cards.remove(&index)
    }

    /// Check that a card with this index is present and its face matches
    /// the stored copy.
    ///
    /// A caller cannot pass off a fabricated card by borrowing a valid index.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.get(&card.index).is_some_and(|stored| stored.same_face(card))
    }

    /// Check whether an index is present, regardless of face.
    #[must_use]
    pub fn contains_index(&self, index: CardIndex) -> bool {
        self.cards.contains_key(&index)
    }

    /// Look up a card by index.
    #[must_use]
    pub fn get(&self, index: CardIndex) -> Option<&Card> {
        self.cards.get(&index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remove every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Iterate over cards in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// All indices in ascending order.
    ///
    /// Random draws pick from this list so the outcome depends only on the
    /// RNG, not on hash map iteration order.
    #[must_use]
    pub fn sorted_indices(&self) -> Vec<CardIndex> {
        let mut indices: Vec<_> = self.cards.keys().copied().collect();
        indices.sort_unstable();
        indices
    }

    /// All cards in ascending index order.
    #[must_use]
    pub fn to_sorted_vec(&self) -> Vec<Card> {
        let mut cards: Vec<_> = self.cards.values().copied().collect();
        cards.sort_unstable_by_key(|c| c.index);
        cards
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut set = CardSet::new();
        for card in iter {
            set.add(card);
        }
        set
    }
}

impl From<Vec<Card>> for CardSet {
    fn from(cards: Vec<Card>) -> Self {
        cards.into_iter().collect()
    }
}

impl From<CardSet> for Vec<Card> {
    fn from(set: CardSet) -> Self {
        set.to_sorted_vec()
    }
}
