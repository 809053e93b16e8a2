//! Engine failure taxonomy.
//!
//! Every variant is an expected condition the caller translates into a
//! user-visible response. A failed operation leaves the game unchanged.

use thiserror::Error;

use super::player::Uid;
use crate::cards::CardIndex;

/// Why an engine operation was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("game already started")]
    AlreadyStarted,

    #[error("game has not started")]
    NotStarted,

    #[error("{0} already has a seat")]
    DuplicatePlayer(Uid),

    #[error("cannot start a game with no players")]
    NoPlayers,

    #[error("not {0}'s turn")]
    NotYourTurn(Uid),

    #[error("card {0} is not in the player's hand")]
    CardNotFound(CardIndex),

    #[error("card {0} cannot be played on the last card")]
    IllegalCard(CardIndex),

    #[error("draw pile has {available} cards, {needed} needed")]
    InsufficientCards { needed: usize, available: usize },
}
