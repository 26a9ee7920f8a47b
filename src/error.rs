//! Error type shared by the fallible parts of the crate (parsing, hand construction, dealing, and reporting)
//!
//! Classification itself never fails, so nothing in [crate::hand::refhand5] returns this type.

use thiserror::Error;

use crate::deck::Card;

/// Errors raised while building hands, dealing them out of a deck, or reporting results
#[derive(Debug, Error)]
pub enum Error {

    /// Text could not be parsed as a card, such as "1x" or "10h" (tens are written as 'T')
    #[error("invalid card '{text}': {reason}")]
    InvalidCard {
        text: String,
        reason: &'static str,
    },

    /// A hand was built from the wrong number of cards
    #[error("a hand holds exactly {expected} cards, but {found} were given")]
    WrongCardCount {
        expected: usize,
        found: usize,
    },

    /// The same card was given twice while building a hand
    #[error("card {0} appears more than once in the hand")]
    DuplicateCard(Card),

    /// The deck does not have enough undealt cards left
    #[error("deck has {remaining} cards left, but {requested} were requested")]
    NotEnoughCards {
        requested: usize,
        remaining: usize,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Shorthand for results carrying the crate [Error]
pub type Result<T> = std::result::Result<T, Error>;
