//! Reference implementation for 5-card hand classification, with readable and understandable code
//!
//! Every category has its own predicate, written against a normalized hand (sorted by ascending rank, Ace low), so each one only needs to compare neighbouring positions. The predicates overlap (four of a kind also contains a pair, for example), so they are only meaningful when checked strongest first, which is what [RefHand5::hand5] does.

use crate::deck::Rank;
use crate::hand::{Category, Hand, Hand5, HAND_SIZE};

/// Reference implementation for 5-card hand classification, which checks each category in turn
#[derive(Debug, Clone, Copy, Default)]
pub struct RefHand5 {}

impl RefHand5 {

    /// Create a new reference classifier, which is a no-op constructor
    pub fn new() -> Self {
        Self {}
    }

    // ranks of a normalized hand, which every predicate relies on
    fn sorted_ranks(hand: &Hand) -> [Rank; HAND_SIZE] {
        debug_assert!(hand.is_normalized(), "predicates require a normalized hand, got {}", hand);
        hand.ranks()
    }

    /// Check whether all 5 cards share the same suit
    pub fn is_flush(hand: &Hand) -> bool {
        let suit = hand.cards()[0].suit();
        hand.cards().iter().all(|card| card.suit() == suit)
    }

    /// Check whether the ranks form a run of 5
    ///
    /// The Ace sorts low, so a plain run covers the wheel (A2345). The only other way to use the Ace is on top of a TJQK run, and nothing wraps around the King (KA234 is not a straight).
    pub fn is_straight(hand: &Hand) -> bool {
        let values = Self::sorted_ranks(hand).map(Rank::value);
        if values.windows(2).all(|pair| pair[1] == pair[0] + 1) {
            return true;
        }
        values == [1, 10, 11, 12, 13]
    }

    /// Check for a straight and a flush at once
    pub fn is_straight_flush(hand: &Hand) -> bool {
        Self::is_flush(hand) && Self::is_straight(hand)
    }

    /// Check for the straight flush from Ten to Ace, where the Ace sorts to the front
    pub fn is_royal_straight_flush(hand: &Hand) -> bool {
        Self::is_straight_flush(hand)
            && Self::sorted_ranks(hand) == [Rank::Ace, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King]
    }

    /// Check whether the first four or the last four cards share a rank
    pub fn is_four_of_a_kind(hand: &Hand) -> bool {
        let r = Self::sorted_ranks(hand);
        r[0] == r[3] || r[1] == r[4]
    }

    /// Check for a trip and a pair, in either order (trip below pair, or pair below trip)
    pub fn is_full_house(hand: &Hand) -> bool {
        let r = Self::sorted_ranks(hand);
        (r[0] == r[2] && r[3] == r[4]) || (r[0] == r[1] && r[2] == r[4])
    }

    /// Check whether any three neighbouring cards share a rank
    pub fn is_three_of_a_kind(hand: &Hand) -> bool {
        Self::sorted_ranks(hand).windows(3).any(|trip| trip[0] == trip[2])
    }

    /// Check for exactly two disjoint pairs
    ///
    /// Once a pair is found, both of its cards are skipped, so a trip only counts as one pair. A full house or four of a kind also passes this check, and is expected to be caught before it.
    pub fn is_two_pair(hand: &Hand) -> bool {
        let r = Self::sorted_ranks(hand);
        let mut pairs = 0;
        let mut i = 0;
        while i + 1 < HAND_SIZE {
            if r[i] == r[i + 1] {
                pairs += 1;
                i += 2;
            } else {
                i += 1;
            }
        }
        pairs == 2
    }

    /// Check whether any two neighbouring cards share a rank
    pub fn is_pair(hand: &Hand) -> bool {
        Self::sorted_ranks(hand).windows(2).any(|pair| pair[0] == pair[1])
    }

    /// Find the top rank of the hand, where the Ace plays high
    pub fn high_card(hand: &Hand) -> Rank {
        let r = Self::sorted_ranks(hand);
        if r[0] == Rank::Ace {
            Rank::Ace
        } else {
            r[HAND_SIZE - 1]
        }
    }
}

impl Hand5 for RefHand5 {

    fn hand5(&self, hand: Hand) -> Category {
        // the predicates compare neighbouring ranks, so work on a sorted copy
        let hand = hand.normalized();

        // strongest first, since the weaker predicates also match stronger hands
        let category = if Self::is_royal_straight_flush(&hand) {
            Category::RoyalStraightFlush
        } else if Self::is_straight_flush(&hand) {
            Category::StraightFlush
        } else if Self::is_four_of_a_kind(&hand) {
            Category::FourOfAKind
        } else if Self::is_full_house(&hand) {
            Category::FullHouse
        } else if Self::is_flush(&hand) {
            Category::Flush
        } else if Self::is_straight(&hand) {
            Category::Straight
        } else if Self::is_three_of_a_kind(&hand) {
            Category::ThreeOfAKind
        } else if Self::is_two_pair(&hand) {
            Category::TwoPair
        } else if Self::is_pair(&hand) {
            Category::Pair
        } else {
            Category::HighCard { top: Self::high_card(&hand) }
        };

        log::trace!("classified {} as {}", hand, category);
        category
    }
}
