//! Example demonstrating basic Sudoku puzzle generation.
//!
//! This example shows how to:
//! - Configure a `PuzzleGenerator` with a clue count
//! - Generate a random puzzle, or reproduce one from a seed
//! - Display the problem, solution, seed, and remaining digit counts
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Choose the number of pre-filled cells (default: 30):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --clues 45
//! ```
//!
//! Reproduce a previously generated puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64-hex-chars>
//! ```

use std::process;

use clap::Parser;
use numcarve_core::Digit;
use numcarve_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of pre-filled cells in the generated problem (1-81).
    #[arg(long, value_name = "COUNT", default_value_t = PuzzleGenerator::DEFAULT_CLUES)]
    clues: u8,

    /// Seed to reproduce a previous puzzle (64 hex characters).
    #[arg(long, value_name = "SEED")]
    seed: Option<PuzzleSeed>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let generator = match PuzzleGenerator::with_clues(args.clues) {
        Ok(generator) => generator,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    let puzzle = match args.seed {
        Some(seed) => generator.generate_with_seed(seed),
        None => generator.generate(),
    };
    print_puzzle(&puzzle);
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    println!("Problem:");
    println!("  {}", puzzle.problem);
    println!();
    println!("Solution:");
    println!("  {}", puzzle.solution);
    println!();

    println!("Remaining:");
    let counts = puzzle.counts();
    for digit in Digit::ALL {
        println!("  {digit}: {}", counts.remaining(digit));
    }
}
