//! Game state and lifecycle: reset, seating, dealing.
//!
//! ## Lifecycle
//!
//! 1. `UnoGame::new` creates an empty game
//! 2. `reset` rebuilds the full deck into the draw pile
//! 3. `add_player` seats players while the game is inactive
//! 4. `start` deals opening hands and activates the game
//!
//! ## Card Conservation
//!
//! Once reset, every one of the 108 indices is in exactly one of: the draw
//! pile, the discard pile, or a hand. Cards only ever move between sets.

use im::Vector;
use rustc_hash::FxHashMap;
use tracing::debug;

use super::turn::Direction;
use crate::cards::{standard_deck, Card, CardSet};
use crate::core::{ActionRecord, GameConfig, GameError, GameRng, Player, Seat, Uid};

/// One game session's complete state.
///
/// Not internally synchronized. The owner must serialize mutating calls
/// (see `registry::GameRegistry`).
///
/// ```
/// use uno_engine::{GameConfig, UnoGame, Uid};
///
/// let mut game = UnoGame::new(GameConfig::default());
/// game.reset();
/// game.add_player("A", Uid::new(1)).unwrap();
/// game.add_player("B", Uid::new(2)).unwrap();
/// game.start().unwrap();
///
/// assert_eq!(game.get_hand(Uid::new(1)).unwrap().len(), 7);
/// assert_eq!(game.draw_pile().len(), 94);
/// ```
#[derive(Clone, Debug)]
pub struct UnoGame {
    pub(super) config: GameConfig,
    pub(super) rng: GameRng,
    pub(super) active: bool,

    /// Players in seat order.
    pub(super) players: Vec<Player>,
    pub(super) seats: FxHashMap<Uid, Seat>,

    pub(super) current_seat: Seat,
    pub(super) direction: Direction,

    pub(super) draw_pile: CardSet,
    pub(super) discard_pile: CardSet,
    pub(super) last_played: Option<Card>,
    pub(super) pending_draw: u32,

    pub(super) history: Vector<ActionRecord>,
}

impl Default for UnoGame {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl UnoGame {
    /// Create an empty, inactive game with no cards.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            rng: GameRng::new(config.seed),
            config,
            active: false,
            players: Vec::new(),
            seats: FxHashMap::default(),
            current_seat: Seat::new(0),
            direction: Direction::Forward,
            draw_pile: CardSet::new(),
            discard_pile: CardSet::new(),
            last_played: None,
            pending_draw: 0,
            history: Vector::new(),
        }
    }

    /// Return to the pre-join state with a full draw pile.
    ///
    /// Clears the roster, both piles, the last card, the pending penalty and
    /// the history; direction goes back to forward. Safe to repeat.
    pub fn reset(&mut self) {
        self.active = false;
        self.players.clear();
        self.seats.clear();
        self.current_seat = Seat::new(0);
        self.direction = Direction::Forward;
        self.discard_pile.clear();
        self.last_played = None;
        self.pending_draw = 0;
        self.history = Vector::new();
        self.draw_pile = standard_deck().into_iter().collect();

        debug!(cards = self.draw_pile.len(), "game reset");
    }

    /// Seat a new player at the next free seat.
    pub fn add_player(&mut self, name: impl Into<String>, uid: Uid) -> Result<Seat, GameError> {
        if self.active {
            return Err(GameError::AlreadyStarted);
        }
        if self.seats.contains_key(&uid) {
            return Err(GameError::DuplicatePlayer(uid));
        }

        let seat = Seat::new(self.players.len());
        let player = Player::new(uid, name, seat);
        debug!(%uid, %seat, name = player.name(), "player joined");

        self.players.push(player);
        self.seats.insert(uid, seat);
        Ok(seat)
    }

    /// Activate the game and deal opening hands.
    ///
    /// Deals `initial_hand_size` rounds, one random card per seat per round
    /// in seat order. Nothing changes if the draw pile cannot cover the
    /// whole deal.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.active {
            return Err(GameError::AlreadyStarted);
        }
        if self.players.is_empty() {
            return Err(GameError::NoPlayers);
        }
        self.ensure_draw_pile(self.config.initial_hand_size * self.players.len())?;

        self.active = true;
        for _ in 0..self.config.initial_hand_size {
            for seat in 0..self.players.len() {
                self.deal_to(Seat::new(seat))?;
            }
        }

        debug!(
            players = self.players.len(),
            draw_pile = self.draw_pile.len(),
            "game started"
        );
        Ok(())
    }

    pub(super) fn ensure_draw_pile(&self, needed: usize) -> Result<(), GameError> {
        let available = self.draw_pile.len();
        if available < needed {
            return Err(GameError::InsufficientCards { needed, available });
        }
        Ok(())
    }

    /// Move one uniformly random card from the draw pile into a hand.
    pub(super) fn deal_to(&mut self, seat: Seat) -> Result<Card, GameError> {
        let indices = self.draw_pile.sorted_indices();
        let card = self
            .rng
            .pick_index(indices.len())
            .and_then(|pos| self.draw_pile.remove(indices[pos]))
            .ok_or(GameError::InsufficientCards { needed: 1, available: 0 })?;

        if let Some(player) = self.players.get_mut(seat.index()) {
            player.hand_mut().add(card);
        }
        Ok(card)
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, uid: Uid) -> Option<&Player> {
        self.seats.get(&uid).and_then(|seat| self.players.get(seat.index()))
    }

    #[must_use]
    pub fn seat_of(&self, uid: Uid) -> Option<Seat> {
        self.seats.get(&uid).copied()
    }

    #[must_use]
    pub fn current_seat(&self) -> Seat {
        self.current_seat
    }

    /// The player whose turn it is, if anyone is seated.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_seat.index())
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn draw_pile(&self) -> &CardSet {
        &self.draw_pile
    }

    #[must_use]
    pub fn discard_pile(&self) -> &CardSet {
        &self.discard_pile
    }

    #[must_use]
    pub fn last_played_card(&self) -> Option<&Card> {
        self.last_played.as_ref()
    }

    #[must_use]
    pub fn pending_draw_count(&self) -> u32 {
        self.pending_draw
    }

    /// Accepted actions since the last reset.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Cards across the draw pile, discard pile and all hands.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.draw_pile.len()
            + self.discard_pile.len()
            + self.players.iter().map(|p| p.hand().len()).sum::<usize>()
    }

    /// A seated player who has emptied their hand.
    ///
    /// Play is not stopped; announcing the result is up to the caller.
    #[must_use]
    pub fn winner(&self) -> Option<Uid> {
        if !self.active {
            return None;
        }
        self.players.iter().find(|p| p.hand().is_empty()).map(Player::uid)
    }
}
