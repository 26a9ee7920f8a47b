//! A single round of the dealing game: shuffle one deck, deal hands out of it, and score each of them
//!
//! ## Game Rules
//!
//! A full 52-card deck is shuffled, and hands of 5 cards are dealt from the top, one whole hand at a time (5 hands by default, and at most 10, since that uses 50 of the 52 cards). Each hand is scored on its own according to its category, and the round's total is the sum of all the hand scores. Hands are never compared against each other, so there is no winner.
//!
//! | Category             | Score |
//! |----------------------|-------|
//! | Royal Straight Flush | 1000  |
//! | Straight Flush       | 750   |
//! | Four of a Kind       | 500   |
//! | Full House           | 300   |
//! | Flush                | 200   |
//! | Straight             | 150   |
//! | Three of a Kind      | 100   |
//! | Two Pair             | 50    |
//! | Pair                 | 25    |
//! | High Card            | top card, 2 to 14 (Ace) |
//!

pub mod cli;

use core::fmt;

use rand::Rng;
use serde::Serialize;

use crate::deck::Deck;
use crate::error::Result;
use crate::hand::{refhand5::RefHand5, Category, Hand, Hand5};

/// Default number of hands dealt in a round
pub const DEFAULT_HANDS: usize = 5;

/// A hand along with the category it was classified into, and the points that earned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scored {

    /// The hand, normalized (sorted by ascending rank)
    pub hand: Hand,

    pub category: Category,

    pub score: u32,
}

/// The outcome of a round: every hand with its score, and the sum of them all
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Round {

    /// All hands of the round, in the order they were dealt
    pub hands: Vec<Scored>,

    /// Sum of all hand scores
    pub total: u32,
}

impl Round {

    /// Shuffle a fresh deck with the given source of randomness, then deal and score `num` hands from it
    pub fn deal<R: Rng + ?Sized>(rng: &mut R, num: usize) -> Result<Self> {
        let mut deck = Deck::new();
        deck.shuffle(rng);

        let hands = deck.deal_hands(num)?;
        log::info!("dealt {} hands, {} cards left in the deck", hands.len(), deck.remaining());

        Ok(Self::score(hands))
    }

    /// Score hands that were dealt elsewhere, such as hands given on the command line
    pub fn score<I: IntoIterator<Item = Hand>>(hands: I) -> Self {
        let engine = RefHand5::new();

        let hands: Vec<Scored> = hands.into_iter()
            .map(|hand| {
                let hand = hand.normalized();
                let category = engine.hand5(hand);
                log::debug!("hand {} is a {} worth {}", hand, category, category.score());
                Scored { hand, category, score: category.score() }
            })
            .collect();

        let total = hands.iter().map(|scored| scored.score).sum();
        Self { hands, total }
    }

    /// Render the round as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, scored) in self.hands.iter().enumerate() {
            writeln!(f, "hand #{}: {}  {:<24} {:>4}", idx + 1, scored.hand, scored.category.to_string(), scored.score)?;
        }
        writeln!(f, "total score: {}", self.total)
    }
}
