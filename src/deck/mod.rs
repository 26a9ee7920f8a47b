//! Defines the standard deck of cards, the kinds it is made of (ranks, suits, and cards), and dealing from it
//!
//! Ranks are ordered as printed on the cards, so the Ace is the lowest rank (value 1) and the King is the highest (value 13). Treating the Ace as high is left to the hand evaluation, which knows when it matters.
//!

use rand::seq::SliceRandom;
use rand::Rng;

use core::fmt;
use std::fmt::Display;
use std::ops::BitOr;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;
use crate::hand::{Hand, HAND_SIZE};

// a helper that counts the number of items in a sequence of macro arguments
macro_rules! count_items {
    () => { 0 };
    ($head:ident $(, $tail:ident)*) => { 1 + count_items!($($tail),*) };
}

// a macro that defines a 'kind', which is a packed enumeration of items with associated data per each
// the data type must have a `text` field, which is used for parsing and display
macro_rules! make_kind {
    (
        $kind:ident($type:ident) : $repr:ident {
            $( $name:ident => $data:expr ),* $(,)?
        }
    ) => {
        #[repr($repr)]
        #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
        pub enum $kind {
            $( $name , )*
        }

        impl $kind {
            pub const NUM: usize = count_items!($( $name ),*);
            pub const ALL: [Self; Self::NUM] = [
                $( Self::$name , )*
            ];

            pub const DATA: &'static [$type; Self::NUM] = &[
                $( $data, )*
            ];

            pub const fn index(self) -> $repr {
                self as $repr
            }

            pub const fn from_index(index: $repr) -> Self {
                Self::ALL[index as usize]
            }

            pub const fn data(self) -> &'static $type {
                &Self::DATA[self.index() as usize]
            }
        }

        impl Display for $kind {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.data().text)
            }
        }

        impl FromStr for $kind {
            type Err = &'static str;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL.into_iter()
                    .find(|kind| kind.data().text == s)
                    .ok_or(concat!("invalid ", stringify!($kind)))
            }
        }
    };
}

/// Per-rank data
pub struct RankData {
    /// Single character used when reading and printing cards
    pub text: &'static str,

    /// Face value, with the Ace low (1)
    pub value: u8,

    /// Face value, with the Ace high (14)
    pub high: u8,
}

make_kind! {
    Rank(RankData) : u8 {
        Ace      => RankData { text: "A", value:  1, high: 14 },
        Two      => RankData { text: "2", value:  2, high:  2 },
        Three    => RankData { text: "3", value:  3, high:  3 },
        Four     => RankData { text: "4", value:  4, high:  4 },
        Five     => RankData { text: "5", value:  5, high:  5 },
        Six      => RankData { text: "6", value:  6, high:  6 },
        Seven    => RankData { text: "7", value:  7, high:  7 },
        Eight    => RankData { text: "8", value:  8, high:  8 },
        Nine     => RankData { text: "9", value:  9, high:  9 },
        Ten      => RankData { text: "T", value: 10, high: 10 },
        Jack     => RankData { text: "J", value: 11, high: 11 },
        Queen    => RankData { text: "Q", value: 12, high: 12 },
        King     => RankData { text: "K", value: 13, high: 13 },
    }
}

impl Rank {

    /// The face value of this rank, from 1 (Ace) to 13 (King)
    pub const fn value(self) -> u8 {
        self.data().value
    }

    /// The face value of this rank when the Ace plays high, from 2 to 14 (Ace)
    pub const fn high_value(self) -> u8 {
        self.data().high
    }
}

/// Per-suit data
pub struct SuitData {
    pub text: &'static str,
}

make_kind! {
    Suit(SuitData) : u8 {
        Hearts   => SuitData { text: "h" },
        Diamonds => SuitData { text: "d" },
        Clubs    => SuitData { text: "c" },
        Spades   => SuitData { text: "s" },
    }
}

/// A single playing card, packed as the product of its rank and suit into one byte
///
/// The packed index is `rank + suit * 13`, so [Card::ALL] runs through each suit in turn from Ace to King.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Card(u8);

impl Card {
    pub const NUM: usize = Rank::NUM * Suit::NUM;
    pub const ALL: [Self; Self::NUM] = {
        let mut all = [Self(0); Self::NUM];
        let mut i = 0;
        while i < Self::NUM {
            all[i] = Self::from_index(i as u8);
            i += 1;
        }
        all
    };

    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self::from_index(rank.index() + suit.index() * Rank::NUM as u8)
    }

    pub const fn from_index(index: u8) -> Self {
        assert!((index as usize) < Self::NUM, "card index out of range");
        Self(index)
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    pub const fn rank(self) -> Rank {
        Rank::ALL[self.0 as usize % Rank::NUM]
    }

    pub const fn suit(self) -> Suit {
        Suit::ALL[self.0 as usize / Rank::NUM]
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl FromStr for Card {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // both kinds are a single ASCII character, so anything else is not a card
        if s.len() == 2 && s.is_char_boundary(1) {
            Ok(Self::new(Rank::from_str(&s[..1])?, Suit::from_str(&s[1..])?))
        } else {
            Err("invalid card")
        }
    }
}

// cards are written out in their text form ("Th") rather than as their packed index
impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_str(&text).map_err(de::Error::custom)
    }
}

/// Unordered set of cards, one bit per card index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CardMask(u64);

impl CardMask {
    pub const NONE: Self = Self(0);
    pub const FULL: Self = Self((1u64 << Card::NUM) - 1);

    pub const fn bits(self) -> u64 {
        self.0
    }

    pub const fn count(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn contains(self, card: Card) -> bool {
        self.0 & (1u64 << card.index()) != 0
    }

    /// Collect cards into a mask, returning the first card that was already present if any repeat
    pub fn try_from_cards<'a, I: IntoIterator<Item = &'a Card>>(cards: I) -> Result<Self, Card> {
        let mut mask = Self::NONE;
        for &card in cards {
            if mask.contains(card) {
                return Err(card);
            }
            mask = mask | card.into();
        }
        Ok(mask)
    }
}

impl From<Card> for CardMask {
    fn from(card: Card) -> Self {
        Self(1u64 << card.index())
    }
}

impl BitOr for CardMask {
    type Output = Self;
    fn bitor(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

/// A single 52-card deck, dealt from the front
///
/// The cards live in a fixed array, and dealing only advances a cursor, so a card can never be dealt twice.
#[derive(Debug, Clone)]
pub struct Deck {

    /// All cards of the deck, where everything before `next` has been dealt already
    cards: [Card; Card::NUM],

    /// Position of the next card to deal
    next: usize,
}

impl Deck {

    /// Create a full deck in its factory order (each suit in turn, Ace to King)
    pub fn new() -> Self {
        Self { cards: Card::ALL, next: 0 }
    }

    /// Number of cards that have not been dealt yet
    pub fn remaining(&self) -> usize {
        Card::NUM - self.next
    }

    /// The undealt cards, in the order they will be dealt
    pub fn undealt(&self) -> &[Card] {
        &self.cards[self.next..]
    }

    /// Shuffle the undealt cards uniformly, using the given source of randomness
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards[self.next..].shuffle(rng);
    }

    /// Deal a single card off the top, if any remain
    pub fn draw(&mut self) -> Option<Card> {
        let card = self.cards.get(self.next).copied()?;
        self.next += 1;
        Some(card)
    }

    /// Deal the next `N` cards at once, or nothing at all if there are not enough
    fn take<const N: usize>(&mut self) -> crate::Result<[Card; N]> {
        if self.remaining() < N {
            return Err(Error::NotEnoughCards { requested: N, remaining: self.remaining() });
        }
        let start = self.next;
        let cards = std::array::from_fn(|i| self.cards[start + i]);
        self.next += N;
        Ok(cards)
    }

    /// Deal a single hand of 5 cards
    pub fn deal_hand(&mut self) -> crate::Result<Hand> {
        Hand::new(self.take::<HAND_SIZE>()?)
    }

    /// Deal `num` hands of 5 cards each, one full hand at a time
    ///
    /// If the deck cannot cover every hand, this fails without dealing any of them.
    pub fn deal_hands(&mut self, num: usize) -> crate::Result<Vec<Hand>> {
        // saturate, so an absurd request still counts as more than the deck holds
        let requested = num.saturating_mul(HAND_SIZE);
        if requested > self.remaining() {
            return Err(Error::NotEnoughCards { requested, remaining: self.remaining() });
        }
        (0..num).map(|_| self.deal_hand()).collect()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
