//! Rust toolkit for dealing five-card poker hands from a standard deck and scoring them by hand category.
//!
//! The core is the classification of a single hand (see [hand::classify]), which sorts the cards by rank and checks each category from strongest to weakest. Around it sit the deck and dealing utilities, and a small program that deals a round of hands and totals their scores.
//!

pub mod deck;
pub mod error;
pub mod hand;
pub mod round;

pub use error::{Error, Result};

use rand::prelude::*;
use rand_chacha::ChaCha20Rng;
use rand_seeder::Seeder;

/// Construct a random number generator from a seed string, or use a default-initialized one if no seed is provided
pub fn rng_from_seed<S: AsRef<[u8]>>(seed: Option<S>) -> Box<dyn RngCore> {
    match seed {
        // with a seed, create a ChaCha20Rng from the seed
        Some(seed) => Box::new(Seeder::from(seed.as_ref()).into_rng::<ChaCha20Rng>()),
        // without a seed, use the default random number generator
        None => Box::new(rand::rng()),
    }
}
