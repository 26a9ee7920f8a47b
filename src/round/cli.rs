//! Program to deal and score poker hands in a command-line interface (CLI), such as a terminal.
//!
//! Examples:
//!
//! ```shell
//! # default: shuffle a deck, deal 5 hands, and print each score and the total
//! $ cargo run --bin dealscore --
//!
//! # deterministic deal of 8 hands, printed as JSON
//! $ cargo run --bin dealscore -- --num 8 --seed hello --json
//!
//! # score specific hands instead of dealing
//! $ cargo run --bin dealscore -- --hand ThJhQhKhAh --hand "2h, 2d, 5c, 9s, 9h"
//! ```
//!

use clap::Parser;

use crate::{
    hand::Hand,
    rng_from_seed,
    round::{Round, DEFAULT_HANDS},
};

/// Arguments for the dealing CLI, which determine what gets dealt and how it is reported.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Number of hands to deal from a single shuffled deck (at most 10).
    #[arg(short, long, default_value_t = DEFAULT_HANDS)]
    pub num: usize,

    /// Randomness seed string for deterministic generation.
    ///
    /// If not provided, a default-initialized RNG will be used.
    #[arg(short, long)]
    pub seed: Option<String>,

    /// Score this hand instead of dealing, such as "ThJhQhKhAh" or "Th,Jh,Qh,Kh,Ah". Can be given multiple times.
    #[arg(long = "hand", value_name = "CARDS")]
    pub hands: Vec<Hand>,

    /// Print the round as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Log each hand as it is dealt and classified (overridden by RUST_LOG).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {

    /// Run the dealing CLI with parsed arguments, useful as an entrypoint for the program.
    pub fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let level = if self.verbose { "debug" } else { "warn" };
        // the logger may already be set up by an embedding program, which is fine
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).try_init();

        let round = if self.hands.is_empty() {
            // create the RNG from the provided seed (or, a default-initialized one if no seed is provided)
            let mut rng = rng_from_seed(self.seed);
            Round::deal(&mut rng, self.num)?
        } else {
            log::info!("scoring {} hands from the command line", self.hands.len());
            Round::score(self.hands)
        };

        if self.json {
            println!("{}", round.to_json()?);
        } else {
            print!("{}", round);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_defaults() {
        let args = Args::try_parse_from(["dealscore"]).unwrap();
        assert_eq!(args.num, 5);
        assert!(args.seed.is_none());
        assert!(args.hands.is_empty());
        assert!(!args.json);
        assert!(!args.verbose);
    }

    #[test]
    fn args_hands() {
        let args = Args::try_parse_from(["dealscore", "--hand", "ThJhQhKhAh", "--hand", "2h, 2d, 5c, 9s, 9h", "-s", "abc", "--json"]).unwrap();
        assert_eq!(args.hands.len(), 2);
        assert_eq!(args.hands[1].to_string(), "2h 2d 5c 9s 9h");
        assert_eq!(args.seed.as_deref(), Some("abc"));
        assert!(args.json);
    }

    #[test]
    fn args_invalid_hand() {
        assert!(Args::try_parse_from(["dealscore", "--hand", "ThJhQhKh"]).is_err());
        assert!(Args::try_parse_from(["dealscore", "--hand", "ThThQhKhAh"]).is_err());
        assert!(Args::try_parse_from(["dealscore", "--num", "many"]).is_err());
    }

    #[test]
    fn args_run() {
        let args = Args::try_parse_from(["dealscore", "--num", "3", "--seed", "run"]).unwrap();
        assert!(args.run().is_ok());

        let args = Args::try_parse_from(["dealscore", "--num", "11", "--seed", "run"]).unwrap();
        assert!(args.run().is_err());

        let huge = (usize::MAX / 5 + 1).to_string();
        let args = Args::try_parse_from(["dealscore", "--num", huge.as_str(), "--seed", "run"]).unwrap();
        assert!(args.run().is_err());
    }
}
