//! The canonical 108-card deck.

use super::card::{Card, CardColor, CardIndex, CardKind};

/// Total cards in a standard deck.
pub const DECK_SIZE: usize = 108;

/// Number of Wild and of WildDrawFour copies.
const WILD_COPIES: u8 = 4;

/// Build the standard deck in catalog order.
///
/// Per color: one 0, two each of 1-9, two Reverse, two Skip, two DrawTwo
/// (25 cards). Then four Wild and four WildDrawFour. Indices run 0..108 in
/// construction order, so the result is identical on every call.
///
/// ```
/// use uno_engine::cards::{standard_deck, DECK_SIZE};
///
/// let deck = standard_deck();
/// assert_eq!(deck.len(), DECK_SIZE);
/// assert_eq!(deck[0].index.raw(), 0);
/// ```
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    let mut push = |color: CardColor, kind: CardKind, value: u8| {
        let index = CardIndex::new(cards.len() as u16);
        cards.push(Card::new(index, color, kind, value));
    };

    for color in CardColor::ALL {
        push(color, CardKind::Number, 0);
        for value in 1..=9 {
            push(color, CardKind::Number, value);
            push(color, CardKind::Number, value);
        }
        for kind in [CardKind::Reverse, CardKind::Skip, CardKind::DrawTwo] {
            push(color, kind, 0);
            push(color, kind, 0);
        }
    }

    for kind in [CardKind::Wild, CardKind::WildDrawFour] {
        for copy in 0..WILD_COPIES {
            push(CardColor::None, kind, copy);
        }
    }

    cards
}
