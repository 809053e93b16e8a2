//! Legality, card effects, and the per-turn actions.
//!
//! ## Turn Flow
//!
//! The current seat either plays a legal card from hand (`play_card`) or
//! resolves the pending penalty (`resolve_penalty`). Both always advance
//! the turn. Every refused call leaves the game untouched.

use smallvec::SmallVec;
use tracing::debug;

use super::engine::UnoGame;
use crate::cards::{Card, CardIndex, CardKind, CardSet};
use crate::core::{Action, ActionRecord, GameError, Seat, Uid};

/// Whether `card` may be played on `last`.
///
/// Anything goes on an empty discard pile. Wild cards are always legal.
/// Otherwise color, kind or value must match.
///
/// ```
/// use uno_engine::cards::{Card, CardColor, CardIndex, CardKind};
/// use uno_engine::game::is_legal_play;
///
/// let red_five = Card::new(CardIndex::new(0), CardColor::Red, CardKind::Number, 5);
/// let blue_five = Card::new(CardIndex::new(1), CardColor::Blue, CardKind::Number, 5);
/// let blue_skip = Card::new(CardIndex::new(2), CardColor::Blue, CardKind::Skip, 0);
///
/// assert!(is_legal_play(&blue_five, Some(&red_five)));
/// assert!(!is_legal_play(&blue_skip, Some(&red_five)));
/// assert!(is_legal_play(&blue_skip, None));
/// ```
#[must_use]
pub fn is_legal_play(card: &Card, last: Option<&Card>) -> bool {
    let Some(last) = last else {
        return true;
    };
    if card.kind.is_wild() {
        return true;
    }
    card.color == last.color || card.kind == last.kind || card.value == last.value
}

impl UnoGame {
    /// Whether `card` may be played on the current last card.
    #[must_use]
    pub fn is_legal(&self, card: &Card) -> bool {
        is_legal_play(card, self.last_played.as_ref())
    }

    /// Resolve a just-played card, then advance the turn.
    ///
    /// Draw cards add to the pending penalty, Reverse flips direction,
    /// Skip passes over one extra seat.
    pub fn apply_effect(&mut self, card: &Card) {
        match card.kind {
            CardKind::WildDrawFour => self.pending_draw += 4,
            CardKind::DrawTwo => self.pending_draw += 2,
            CardKind::Reverse => self.direction = self.direction.flipped(),
            CardKind::Skip => self.next_player(),
            CardKind::Number | CardKind::Wild => {}
        }
        self.next_player();
    }

    /// Seat of `uid` if it is their turn.
    fn ensure_turn(&self, uid: Uid) -> Result<Seat, GameError> {
        match self.current_player() {
            Some(player) if player.uid() == uid => Ok(self.current_seat),
            _ => Err(GameError::NotYourTurn(uid)),
        }
    }

    fn ensure_active(&self) -> Result<(), GameError> {
        if self.active {
            Ok(())
        } else {
            Err(GameError::NotStarted)
        }
    }

    fn record(&mut self, uid: Uid, action: Action, drawn: usize) {
        let sequence = self.history.len() as u32;
        self.history.push_back(ActionRecord::new(uid, action, drawn, sequence));
    }

    /// Play the card with this index from the current player's hand.
    ///
    /// Returns the played card, which is now the last card.
    pub fn play_card(&mut self, uid: Uid, index: CardIndex) -> Result<Card, GameError> {
        let seat = self.ensure_turn(uid)?;
        self.ensure_active()?;
        let card = self.players[seat.index()]
            .hand()
            .get(index)
            .copied()
            .ok_or(GameError::CardNotFound(index))?;
        self.play_claimed_card(uid, &card)
    }

    /// Play a card described in full by the caller.
    ///
    /// The hand must hold a card with the same index and face, so a caller
    /// cannot relabel a card it owns.
    pub fn play_claimed_card(&mut self, uid: Uid, card: &Card) -> Result<Card, GameError> {
        let seat = self.ensure_turn(uid)?;
        self.ensure_active()?;

        let hand = self.players[seat.index()].hand();
        if !hand.contains(card) {
            return Err(GameError::CardNotFound(card.index));
        }
        if !self.is_legal(card) {
            return Err(GameError::IllegalCard(card.index));
        }

        let played = self.players[seat.index()]
            .hand_mut()
            .remove(card.index)
            .ok_or(GameError::CardNotFound(card.index))?;
        self.last_played = Some(played);
        self.discard_pile.add(played);
        self.apply_effect(&played);
        self.record(uid, Action::Play(played.index), 0);

        debug!(
            %uid,
            card = %played,
            pending = self.pending_draw,
            next = %self.current_seat,
            "card played"
        );
        Ok(played)
    }

    /// Draw one card plus the pending penalty, clear it, and pass the turn.
    ///
    /// Returns the number of cards drawn. Nothing is drawn if the draw pile
    /// cannot cover all of them.
    pub fn resolve_penalty(&mut self, uid: Uid) -> Result<usize, GameError> {
        let seat = self.ensure_turn(uid)?;
        self.ensure_active()?;

        let count = 1 + self.pending_draw as usize;
        self.ensure_draw_pile(count)?;
        for _ in 0..count {
            self.deal_to(seat)?;
        }
        self.pending_draw = 0;
        self.next_player();
        self.record(uid, Action::ResolvePenalty, count);

        debug!(%uid, drawn = count, next = %self.current_seat, "penalty resolved");
        Ok(count)
    }

    /// The acting player's own hand. Other seats see nothing.
    pub fn get_hand(&self, uid: Uid) -> Result<&CardSet, GameError> {
        let seat = self.ensure_turn(uid)?;
        Ok(self.players[seat.index()].hand())
    }

    /// Dispatch an action to `play_card` or `resolve_penalty`.
    ///
    /// Returns the number of cards drawn (0 for a play).
    pub fn apply_action(&mut self, uid: Uid, action: &Action) -> Result<usize, GameError> {
        match *action {
            Action::Play(index) => self.play_card(uid, index).map(|_| 0),
            Action::ResolvePenalty => self.resolve_penalty(uid),
        }
    }

    /// Actions `uid` may take right now.
    ///
    /// Empty unless the game is active and it is their turn. Otherwise one
    /// `Play` per legal card in ascending index order, then `ResolvePenalty`.
    #[must_use]
    pub fn legal_actions(&self, uid: Uid) -> SmallVec<[Action; 8]> {
        let mut actions = SmallVec::new();
        if !self.active {
            return actions;
        }
        let Ok(hand) = self.get_hand(uid) else {
            return actions;
        };

        actions.extend(
            hand.to_sorted_vec()
                .into_iter()
                .filter(|card| self.is_legal(card))
                .map(|card| Action::Play(card.index)),
        );
        actions.push(Action::ResolvePenalty);
        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardColor, DECK_SIZE};
    use crate::core::GameConfig;
    use crate::game::Direction;

    fn card(index: u16, color: CardColor, kind: CardKind, value: u8) -> Card {
        Card::new(CardIndex::new(index), color, kind, value)
    }

    /// Started game with `count` players (uids 1..=count).
    fn started(count: u64) -> UnoGame {
        let mut game = UnoGame::new(GameConfig::builder().seed(7).build());
        game.reset();
        for uid in 1..=count {
            game.add_player(format!("P{uid}"), Uid::new(uid)).unwrap();
        }
        game.start().unwrap();
        game
    }

    /// Move a specific card from the draw pile into a seat's hand.
    fn give(game: &mut UnoGame, seat: usize, card: Card) {
        let taken = game.draw_pile.remove(card.index).expect("card in draw pile");
        game.players[seat].hand_mut().add(taken);
    }

    /// First card in the draw pile matching a predicate.
    fn find_in_draw_pile(game: &UnoGame, pred: impl Fn(&Card) -> bool) -> Card {
        game.draw_pile.to_sorted_vec().into_iter().find(|c| pred(c)).expect("matching card")
    }

    #[test]
    fn test_legality_rules() {
        let red_five = card(0, CardColor::Red, CardKind::Number, 5);

        assert!(is_legal_play(&card(1, CardColor::Red, CardKind::Number, 2), Some(&red_five)));
        assert!(is_legal_play(&card(2, CardColor::Green, CardKind::Number, 5), Some(&red_five)));
        assert!(is_legal_play(&card(3, CardColor::Green, CardKind::Number, 7), Some(&red_five)));
        assert!(!is_legal_play(&card(8, CardColor::Green, CardKind::Reverse, 0), Some(&red_five)));
        assert!(is_legal_play(&card(4, CardColor::None, CardKind::Wild, 2), Some(&red_five)));
        assert!(is_legal_play(&card(5, CardColor::None, CardKind::WildDrawFour, 0), Some(&red_five)));

        let blue_skip = card(6, CardColor::Blue, CardKind::Skip, 0);
        assert!(is_legal_play(&card(7, CardColor::Yellow, CardKind::Skip, 0), Some(&blue_skip)));
        assert!(!is_legal_play(&card(9, CardColor::Red, CardKind::Number, 3), Some(&blue_skip)));

        // After a wild only another wild or a matching copy number goes.
        let wild = card(10, CardColor::None, CardKind::Wild, 2);
        assert!(is_legal_play(&card(11, CardColor::Red, CardKind::Number, 2), Some(&wild)));
        assert!(!is_legal_play(&card(12, CardColor::Red, CardKind::Number, 5), Some(&wild)));
    }

    #[test]
    fn test_number_card_has_no_penalty() {
        let mut game = started(2);
        let three = card(200, CardColor::Red, CardKind::Number, 3);
        game.apply_effect(&three);
        assert_eq!(game.pending_draw_count(), 0);
        assert_eq!(game.current_seat(), Seat::new(1));
    }

    #[test]
    fn test_effects() {
        let mut game = started(3);

        game.apply_effect(&card(200, CardColor::Red, CardKind::DrawTwo, 0));
        assert_eq!(game.pending_draw_count(), 2);
        assert_eq!(game.current_seat(), Seat::new(1));

        game.apply_effect(&card(201, CardColor::None, CardKind::WildDrawFour, 0));
        assert_eq!(game.pending_draw_count(), 6);
        assert_eq!(game.current_seat(), Seat::new(2));

        game.apply_effect(&card(202, CardColor::Red, CardKind::Skip, 0));
        assert_eq!(game.current_seat(), Seat::new(1));

        game.apply_effect(&card(203, CardColor::Red, CardKind::Reverse, 0));
        assert_eq!(game.direction(), Direction::Backward);
        assert_eq!(game.current_seat(), Seat::new(0));

        game.apply_effect(&card(204, CardColor::None, CardKind::Wild, 1));
        assert_eq!(game.current_seat(), Seat::new(2));
        assert_eq!(game.pending_draw_count(), 6);
    }

    #[test]
    fn test_play_card_moves_to_discard() {
        let mut game = started(2);
        let red_two = find_in_draw_pile(&game, |c| c.kind == CardKind::Number && c.color == CardColor::Red);
        give(&mut game, 0, red_two);

        let played = game.play_card(Uid::new(1), red_two.index).unwrap();

        assert_eq!(played, red_two);
        assert_eq!(game.last_played_card(), Some(&red_two));
        assert!(game.discard_pile().contains(&red_two));
        assert_eq!(game.players()[0].hand().len(), 7);
        assert_eq!(game.current_seat(), Seat::new(1));
        assert_eq!(game.total_cards(), DECK_SIZE);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_play_out_of_turn() {
        let mut game = started(2);
        let index = game.players()[1].hand().sorted_indices()[0];
        let before = game.players()[1].hand().len();

        assert_eq!(game.play_card(Uid::new(2), index), Err(GameError::NotYourTurn(Uid::new(2))));
        assert_eq!(game.play_card(Uid::new(99), index), Err(GameError::NotYourTurn(Uid::new(99))));
        assert_eq!(game.players()[1].hand().len(), before);
        assert_eq!(game.current_seat(), Seat::new(0));
        assert!(game.discard_pile().is_empty());
    }

    #[test]
    fn test_play_card_not_in_hand() {
        let mut game = started(2);
        let foreign = game.draw_pile().sorted_indices()[0];

        assert_eq!(game.play_card(Uid::new(1), foreign), Err(GameError::CardNotFound(foreign)));
        assert_eq!(game.players()[0].hand().len(), 7);
    }

    #[test]
    fn test_claimed_card_must_match_face() {
        let mut game = started(2);
        let real = game.players()[0].hand().to_sorted_vec()[0];
        let forged = Card::new(real.index, CardColor::None, CardKind::WildDrawFour, 0);

        assert_eq!(
            game.play_claimed_card(Uid::new(1), &forged),
            Err(GameError::CardNotFound(real.index))
        );
        assert!(game.players()[0].hand().contains(&real));
    }

    #[test]
    fn test_illegal_card_rejected() {
        let mut game = started(2);
        let red_five = find_in_draw_pile(&game, |c| {
            c.color == CardColor::Red && c.kind == CardKind::Number && c.value == 5
        });
        let blue_skip = find_in_draw_pile(&game, |c| c.color == CardColor::Blue && c.kind == CardKind::Skip);
        give(&mut game, 0, red_five);
        give(&mut game, 1, blue_skip);

        game.play_card(Uid::new(1), red_five.index).unwrap();
        assert_eq!(
            game.play_card(Uid::new(2), blue_skip.index),
            Err(GameError::IllegalCard(blue_skip.index))
        );
        assert!(game.players()[1].hand().contains(&blue_skip));
        assert_eq!(game.current_seat(), Seat::new(1));
    }

    #[test]
    fn test_play_before_start() {
        let mut game = UnoGame::default();
        game.reset();
        game.add_player("A", Uid::new(1)).unwrap();

        let index = CardIndex::new(0);
        assert_eq!(game.play_card(Uid::new(1), index), Err(GameError::NotStarted));
        assert_eq!(game.resolve_penalty(Uid::new(1)), Err(GameError::NotStarted));
        assert!(game.get_hand(Uid::new(1)).unwrap().is_empty());
    }

    #[test]
    fn test_draw_two_then_resolve_penalty() {
        let mut game = started(2);
        let draw_two = find_in_draw_pile(&game, |c| c.kind == CardKind::DrawTwo);
        give(&mut game, 0, draw_two);

        game.play_card(Uid::new(1), draw_two.index).unwrap();
        assert_eq!(game.pending_draw_count(), 2);

        let before = game.players()[1].hand().len();
        assert_eq!(game.resolve_penalty(Uid::new(2)), Ok(3));
        assert_eq!(game.players()[1].hand().len(), before + 3);
        assert_eq!(game.pending_draw_count(), 0);
        assert_eq!(game.current_seat(), Seat::new(0));
        assert_eq!(game.total_cards(), DECK_SIZE);
    }

    #[test]
    fn test_resolve_penalty_out_of_turn() {
        let mut game = started(2);
        assert_eq!(game.resolve_penalty(Uid::new(2)), Err(GameError::NotYourTurn(Uid::new(2))));
        assert_eq!(game.players()[1].hand().len(), 7);
    }

    #[test]
    fn test_resolve_penalty_insufficient_cards() {
        let mut game = started(2);
        game.pending_draw = 200;
        let before = game.draw_pile().len();

        assert_eq!(
            game.resolve_penalty(Uid::new(1)),
            Err(GameError::InsufficientCards { needed: 201, available: before })
        );
        assert_eq!(game.draw_pile().len(), before);
        assert_eq!(game.pending_draw_count(), 200);
        assert_eq!(game.current_seat(), Seat::new(0));
    }

    #[test]
    fn test_get_hand_only_on_own_turn() {
        let game = started(2);
        assert_eq!(game.get_hand(Uid::new(1)).map(CardSet::len), Ok(7));
        assert_eq!(game.get_hand(Uid::new(2)).err(), Some(GameError::NotYourTurn(Uid::new(2))));
    }

    #[test]
    fn test_apply_action_dispatch() {
        let mut game = started(2);
        let wild = find_in_draw_pile(&game, |c| c.kind == CardKind::Wild);
        give(&mut game, 0, wild);

        assert_eq!(game.apply_action(Uid::new(1), &Action::Play(wild.index)), Ok(0));
        assert_eq!(game.apply_action(Uid::new(2), &Action::ResolvePenalty), Ok(1));

        let actions: Vec<_> = game.history().iter().map(|r| r.action).collect();
        assert_eq!(actions, vec![Action::Play(wild.index), Action::ResolvePenalty]);
        assert_eq!(game.history()[1].drawn, 1);
        assert_eq!(game.history()[1].sequence, 1);
    }

    #[test]
    fn test_legal_actions() {
        let game = started(2);

        // Nothing played yet: every card is legal.
        let actions = game.legal_actions(Uid::new(1));
        assert_eq!(actions.len(), 8);
        assert_eq!(actions.last(), Some(&Action::ResolvePenalty));

        assert!(game.legal_actions(Uid::new(2)).is_empty());
    }

    #[test]
    fn test_legal_actions_filter_by_last_card() {
        let mut game = started(2);
        let red_five = find_in_draw_pile(&game, |c| {
            c.color == CardColor::Red && c.kind == CardKind::Number && c.value == 5
        });
        give(&mut game, 0, red_five);
        game.play_card(Uid::new(1), red_five.index).unwrap();

        let hand = game.players()[1].hand().to_sorted_vec();
        let expected: Vec<_> = hand
            .iter()
            .filter(|c| is_legal_play(c, Some(&red_five)))
            .map(|c| Action::Play(c.index))
            .chain(std::iter::once(Action::ResolvePenalty))
            .collect();

        assert_eq!(game.legal_actions(Uid::new(2)).to_vec(), expected);
    }
}
