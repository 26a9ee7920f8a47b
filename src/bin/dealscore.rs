//! Simple program to deal poker hands from a shuffled deck and score them, uses the [dealscore::round::cli] module.

use clap::Parser;

use dealscore::round::cli;

/// Entrypoint for the dealing CLI program, which just parses and runs the CLI from the provided arguments.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    cli::Args::parse().run()
}
