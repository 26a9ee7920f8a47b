//! Five-card hands, their normalization, and the categories (with scores) they are classified into

use core::fmt;
use std::cmp::Ordering;
use std::str::FromStr;

use itertools::Itertools;
use serde::Serialize;

use crate::deck::{Card, CardMask, Rank};
use crate::error::{Error, Result};

pub mod refhand5;

use refhand5::RefHand5;

/// Number of cards in a hand
pub const HAND_SIZE: usize = 5;

/// A trait describing engines capable of classifying a 5-card hand into its best category
pub trait Hand5 {

    /// Classify the hand, which may be given in any order, into the single best category it satisfies
    fn hand5(&self, hand: Hand) -> Category;
}

/// A hand of exactly 5 distinct cards
///
/// The cards are kept in the order they were given until the hand is normalized, which sorts them by ascending rank (Ace low).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {

    /// Create a hand from 5 cards, which must all be different
    pub fn new(cards: [Card; HAND_SIZE]) -> Result<Self> {
        CardMask::try_from_cards(&cards).map_err(Error::DuplicateCard)?;
        Ok(Self { cards })
    }

    /// The cards of the hand, in their current order
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// The ranks of the hand, in the current order of the cards
    pub fn ranks(&self) -> [Rank; HAND_SIZE] {
        self.cards.map(Card::rank)
    }

    /// Sort the cards by ascending rank, in place
    ///
    /// Cards of the same rank keep their relative order. Sorting an already sorted hand leaves it unchanged.
    pub fn normalize(&mut self) {
        self.cards.sort_by_key(|card| card.rank());
    }

    /// A sorted copy of this hand, see [Hand::normalize]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Whether the cards are in ascending rank order
    pub fn is_normalized(&self) -> bool {
        self.cards.windows(2).all(|pair| pair[0].rank() <= pair[1].rank())
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = Error;
    fn try_from(cards: &[Card]) -> Result<Self> {
        let cards: [Card; HAND_SIZE] = cards.try_into().map_err(|_| Error::WrongCardCount {
            expected: HAND_SIZE,
            found: cards.len(),
        })?;
        Self::new(cards)
    }
}

fn parse_card(text: &str) -> Result<Card> {
    Card::from_str(text).map_err(|reason| Error::InvalidCard { text: text.to_string(), reason })
}

/// Parse a hand from its cards, either concatenated ("ThJhQhKhAh") or separated by commas and/or whitespace ("Th, Jh, Qh, Kh, Ah")
impl FromStr for Hand {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let cards = if s.contains(|c: char| c == ',' || c.is_whitespace()) {
            s.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|text| !text.is_empty())
                .map(parse_card)
                .collect::<Result<Vec<_>>>()?
        } else if s.is_ascii() {
            // every card is exactly 2 characters, so step through in pairs (a trailing single character fails to parse)
            (0..s.len()).step_by(2)
                .map(|i| parse_card(&s[i..(i + 2).min(s.len())]))
                .collect::<Result<Vec<_>>>()?
        } else {
            return Err(Error::InvalidCard { text: s.to_string(), reason: "cards are written with ASCII characters" });
        };
        Self::try_from(cards.as_slice())
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cards.iter().join(" "))
    }
}

/// The category a hand is classified into, from weakest to strongest
///
/// Each category is worth a fixed number of points, except for a high card, which is worth the value of its top card with the Ace counted as 14.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {

    /// Nothing else matched, so the hand is only worth its top card
    HighCard {
        top: Rank,
    },

    /// Two cards of the same rank
    Pair,

    /// Two pairs of two different ranks
    TwoPair,

    /// Three cards of the same rank
    ThreeOfAKind,

    /// Five consecutive ranks of mixed suits, where the Ace is either below the Two or above the King
    Straight,

    /// Five cards of the same suit
    Flush,

    /// Three cards of one rank and two of another
    FullHouse,

    /// Four cards of the same rank
    FourOfAKind,

    /// A straight where every card has the same suit
    StraightFlush,

    /// A straight flush from Ten to Ace
    RoyalStraightFlush,
}

impl Category {

    /// Points the category is worth
    pub const fn score(self) -> u32 {
        match self {
            Self::RoyalStraightFlush => 1000,
            Self::StraightFlush => 750,
            Self::FourOfAKind => 500,
            Self::FullHouse => 300,
            Self::Flush => 200,
            Self::Straight => 150,
            Self::ThreeOfAKind => 100,
            Self::TwoPair => 50,
            Self::Pair => 25,
            Self::HighCard { top } => top.high_value() as u32,
        }
    }

    /// Human-readable name of the category
    pub const fn name(self) -> &'static str {
        match self {
            Self::RoyalStraightFlush => "Royal Straight Flush",
            Self::StraightFlush => "Straight Flush",
            Self::FourOfAKind => "Four of a Kind",
            Self::FullHouse => "Full House",
            Self::Flush => "Flush",
            Self::Straight => "Straight",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::TwoPair => "Two Pair",
            Self::Pair => "Pair",
            Self::HighCard { .. } => "High Card",
        }
    }
}

// every category has a distinct score, and every high card scores below a pair, so the score is a total order consistent with equality
impl Ord for Category {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score().cmp(&other.score())
    }
}

impl PartialOrd for Category {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HighCard { top } => write!(f, "{} '{}'", self.name(), top),
            _ => write!(f, "{}", self.name()),
        }
    }
}

/// Sort a hand by ascending rank, see [Hand::normalize]
pub fn normalize(hand: Hand) -> Hand {
    hand.normalized()
}

/// Classify a hand (in any order) with the reference engine, returning its category and score
pub fn classify(hand: Hand) -> (Category, u32) {
    let category = RefHand5::new().hand5(hand);
    (category, category.score())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::deck::Suit;

    fn hand(text: &str) -> Hand {
        text.parse().unwrap()
    }

    #[test]
    fn hand_parse_formats() {
        let expected = Hand::new([
            Card::new(Rank::Ten, Suit::Hearts),
            Card::new(Rank::Jack, Suit::Hearts),
            Card::new(Rank::Queen, Suit::Hearts),
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::Ace, Suit::Hearts),
        ]).unwrap();
        assert_eq!(hand("ThJhQhKhAh"), expected);
        assert_eq!(hand("Th,Jh,Qh,Kh,Ah"), expected);
        assert_eq!(hand("Th Jh Qh Kh Ah"), expected);
        assert_eq!(hand(" Th, Jh, Qh, Kh, Ah "), expected);
    }

    #[test]
    fn hand_parse_invalid() {
        assert!(matches!("ThJhQhKh".parse::<Hand>(), Err(Error::WrongCardCount { expected: 5, found: 4 })));
        assert!(matches!("ThJhQhKhAh2h".parse::<Hand>(), Err(Error::WrongCardCount { expected: 5, found: 6 })));
        assert!(matches!("ThJhQhKhA".parse::<Hand>(), Err(Error::InvalidCard { .. })));
        assert!(matches!("10h Jh Qh Kh Ah".parse::<Hand>(), Err(Error::InvalidCard { .. })));
        assert!(matches!("ThJhQhKh♥h".parse::<Hand>(), Err(Error::InvalidCard { .. })));
        assert!(matches!("".parse::<Hand>(), Err(Error::WrongCardCount { expected: 5, found: 0 })));
    }

    #[test]
    fn hand_rejects_duplicates() {
        let err = "ThJhQhThAh".parse::<Hand>().unwrap_err();
        assert!(matches!(err, Error::DuplicateCard(card) if card == Card::new(Rank::Ten, Suit::Hearts)), "unexpected error: {err}");

        // same rank in different suits is fine
        assert!("ThTdQhKhAh".parse::<Hand>().is_ok());
    }

    #[test]
    fn hand_try_from_slice() {
        let cards = hand("2h3h4h5h6h").cards().to_vec();
        assert!(Hand::try_from(&cards[..]).is_ok());
        assert!(matches!(Hand::try_from(&cards[..3]), Err(Error::WrongCardCount { expected: 5, found: 3 })));
    }

    #[test]
    fn hand_display() {
        assert_eq!(hand("9h,2d,9c,5s,9d").to_string(), "9h 2d 9c 5s 9d");
        assert_eq!(hand("9h,2d,9c,5s,9d").normalized().to_string(), "2d 5s 9h 9c 9d");
    }

    #[test]
    fn normalize_sorts_ace_low() {
        let h = normalize(hand("KhAs5dTc2h"));
        assert!(h.is_normalized());
        assert_eq!(h.ranks(), [Rank::Ace, Rank::Two, Rank::Five, Rank::Ten, Rank::King]);
    }

    #[test]
    fn normalize_is_stable() {
        // ties keep their original order, so suits of equal ranks stay as given
        let h = hand("9s9h2d9c9d").normalized();
        assert_eq!(h.to_string(), "2d 9s 9h 9c 9d");
    }

    #[test]
    fn normalize_idempotent() {
        for text in ["KhAs5dTc2h", "9h2d9c5s9d", "2h3h4h5h6h", "AhKhQhJhTh", "4h4d4c8s8h"] {
            let once = normalize(hand(text));
            assert_eq!(normalize(once), once, "normalizing twice changed {}", text);
        }
    }

    #[test]
    fn normalize_in_place() {
        let mut h = hand("KhQhJhThAh");
        assert!(!h.is_normalized());
        h.normalize();
        assert!(h.is_normalized());
        assert_eq!(h.cards()[0], Card::new(Rank::Ace, Suit::Hearts));
    }

    #[test]
    fn category_scores() {
        assert_eq!(Category::RoyalStraightFlush.score(), 1000);
        assert_eq!(Category::StraightFlush.score(), 750);
        assert_eq!(Category::FourOfAKind.score(), 500);
        assert_eq!(Category::FullHouse.score(), 300);
        assert_eq!(Category::Flush.score(), 200);
        assert_eq!(Category::Straight.score(), 150);
        assert_eq!(Category::ThreeOfAKind.score(), 100);
        assert_eq!(Category::TwoPair.score(), 50);
        assert_eq!(Category::Pair.score(), 25);
        assert_eq!(Category::HighCard { top: Rank::Ace }.score(), 14);
        assert_eq!(Category::HighCard { top: Rank::King }.score(), 13);
        assert_eq!(Category::HighCard { top: Rank::Seven }.score(), 7);
    }

    #[test]
    fn category_order() {
        assert!(Category::HighCard { top: Rank::Ace } > Category::HighCard { top: Rank::King });
        assert!(Category::HighCard { top: Rank::Ace } < Category::Pair);
        assert!(Category::Pair < Category::TwoPair);
        assert!(Category::Flush < Category::FullHouse);
        assert!(Category::StraightFlush < Category::RoyalStraightFlush);
    }

    #[test]
    fn classify_free_function() {
        assert_eq!(classify(hand("ThJhQhKhAh")), (Category::RoyalStraightFlush, 1000));
        assert_eq!(classify(hand("2h5d9cJsAh")), (Category::HighCard { top: Rank::Ace }, 14));
    }
}
