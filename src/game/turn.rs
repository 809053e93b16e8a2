//! Turn order.

use serde::{Deserialize, Serialize};

use super::engine::UnoGame;
use crate::core::Seat;

/// Which way the turn pointer moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

impl UnoGame {
    /// Move the turn one seat in the current direction, wrapping around.
    ///
    /// No-op with an empty roster.
    pub fn next_player(&mut self) {
        let count = self.players.len();
        if count == 0 {
            return;
        }

        let step = match self.direction {
            Direction::Forward => 1,
            Direction::Backward => count - 1,
        };
        self.current_seat = Seat::new((self.current_seat.index() + step) % count);
    }
}
