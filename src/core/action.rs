//! Player actions and the action history.
//!
//! A turn is either playing one card from hand or resolving the pending
//! penalty (drawing instead of playing). `UnoGame::apply_action` dispatches
//! an `Action` to the matching typed operation.

use serde::{Deserialize, Serialize};

use super::player::Uid;
use crate::cards::CardIndex;

/// One turn's worth of input from a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Play the card with this index from hand.
    Play(CardIndex),
    /// Draw one card plus any pending penalty, then pass.
    ResolvePenalty,
}

/// An accepted action, kept for replay and status display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub uid: Uid,

    /// The action taken.
    pub action: Action,

    /// Cards drawn as a result (0 for plays).
    pub drawn: usize,

    /// Sequence number since the last reset.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(uid: Uid, action: Action, drawn: usize, sequence: u32) -> Self {
        Self {
            uid,
            action,
            drawn,
            sequence,
        }
    }
}
