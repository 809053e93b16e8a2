//! Public status projection of a game.
//!
//! Hands are reduced to card counts; only `UnoGame::get_hand` reveals cards.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::engine::UnoGame;
use super::turn::Direction;
use crate::cards::Card;
use crate::core::{Player, Seat, Uid};

/// Failure encoding or decoding a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot encoding failed: {0}")]
    Encoding(#[from] bincode::Error),
}

/// One player as seen by everyone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub uid: Uid,
    pub name: String,
    pub seat: Seat,
    pub card_count: usize,
}

impl From<&Player> for PlayerSummary {
    fn from(player: &Player) -> Self {
        Self {
            uid: player.uid(),
            name: player.name().to_string(),
            seat: player.seat(),
            card_count: player.hand().len(),
        }
    }
}

/// Everything about a game that every participant may see.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub active: bool,
    pub direction: Direction,
    pub current_seat: Seat,
    pub last_played: Option<Card>,
    pub pending_draw_count: u32,
    pub draw_pile_size: usize,
    pub discard_pile_size: usize,
    pub players: Vec<PlayerSummary>,
}

impl GameSnapshot {
    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl UnoGame {
    /// Capture the public status of this game.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            active: self.active,
            direction: self.direction,
            current_seat: self.current_seat,
            last_played: self.last_played,
            pending_draw_count: self.pending_draw,
            draw_pile_size: self.draw_pile.len(),
            discard_pile_size: self.discard_pile.len(),
            players: self.players.iter().map(PlayerSummary::from).collect(),
        }
    }
}
