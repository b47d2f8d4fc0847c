//! Sudoku puzzle generation for the Numcarve crates.
//!
//! Generation runs in two steps:
//!
//! 1. [`solution::generate`] fills an empty board with a complete, valid
//!    solution by randomized backtracking. Candidate digits for each cell are
//!    tried in a uniformly random order, so repeated runs produce varied
//!    boards.
//! 2. [`carve::carve`] removes randomly chosen cells from the solution until
//!    a target number of clues remains, producing the playable problem grid.
//!
//! [`PuzzleGenerator`] wraps both steps behind a seeded API: every puzzle
//! carries the [`PuzzleSeed`] that reproduces it exactly.
//!
//! # Examples
//!
//! ```
//! use numcarve_generator::PuzzleGenerator;
//!
//! let generator = PuzzleGenerator::new();
//! let puzzle = generator.generate();
//!
//! assert!(puzzle.solution.is_valid_solution());
//! assert_eq!(puzzle.problem.filled_count(), 30);
//!
//! // The seed makes the puzzle reproducible
//! let again = generator.generate_with_seed(puzzle.seed);
//! assert_eq!(again, puzzle);
//! ```

pub mod carve;
pub mod generator;
pub mod seed;
pub mod solution;

pub use self::{
    carve::InvalidClueCount,
    generator::{GeneratedPuzzle, PuzzleGenerator},
    seed::{ParsePuzzleSeedError, PuzzleSeed},
};
