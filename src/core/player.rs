//! Player identification and seating.
//!
//! ## Uid
//!
//! Externally supplied, already-authenticated caller identity. The engine
//! never validates credentials; it only compares uids.
//!
//! ## Seat
//!
//! A player's fixed position in turn order, assigned at join time.

use serde::{Deserialize, Serialize};

use crate::cards::CardSet;

/// Caller identity resolved by the surrounding service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Uid(pub u64);

impl Uid {
    /// Create a new uid.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw uid value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Uid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "uid:{}", self.0)
    }
}

/// Seat index (0-based) in turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Seat(pub usize);

impl Seat {
    /// Create a new seat.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// A seated player and the hand they own.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    uid: Uid,
    name: String,
    seat: Seat,
    hand: CardSet,
}

impl Player {
    /// Create a player with an empty hand.
    #[must_use]
    pub fn new(uid: Uid, name: impl Into<String>, seat: Seat) -> Self {
        Self {
            uid,
            name: name.into(),
            seat,
            hand: CardSet::new(),
        }
    }

    #[must_use]
    pub fn uid(&self) -> Uid {
        self.uid
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn seat(&self) -> Seat {
        self.seat
    }

    /// Read-only view of the hand.
    #[must_use]
    pub fn hand(&self) -> &CardSet {
        &self.hand
    }

    pub(crate) fn hand_mut(&mut self) -> &mut CardSet {
        &mut self.hand
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uid_and_seat_basics() {
        assert_eq!(Uid::new(10086).raw(), 10086);
        assert_eq!(format!("{}", Uid::new(7)), "uid:7");
        assert_eq!(Seat::new(2).index(), 2);
        assert_eq!(format!("{}", Seat::new(0)), "Seat 0");
    }

    #[test]
    fn test_new_player_has_empty_hand() {
        let player = Player::new(Uid::new(1), "A", Seat::new(0));

        assert_eq!(player.uid(), Uid::new(1));
        assert_eq!(player.name(), "A");
        assert_eq!(player.seat(), Seat::new(0));
        assert!(player.hand().is_empty());
    }

    #[test]
    fn test_player_serialization() {
        let player = Player::new(Uid::new(2), "B", Seat::new(1));
        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
