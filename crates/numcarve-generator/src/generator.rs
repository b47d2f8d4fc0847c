//! The seeded high-level generation API.

use log::debug;
use numcarve_core::{DigitCounts, DigitGrid};

use crate::{
    carve::{self, InvalidClueCount},
    seed::PuzzleSeed,
    solution,
};

/// A generated puzzle: the playable problem, its solution, and the seed that
/// reproduces both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The playable grid, with the configured number of clue cells filled.
    pub problem: DigitGrid,
    /// The complete solution the problem was carved from. Ground truth for
    /// move validation.
    pub solution: DigitGrid,
    /// The seed that reproduces this puzzle via
    /// [`PuzzleGenerator::generate_with_seed`].
    pub seed: PuzzleSeed,
}

impl GeneratedPuzzle {
    /// Returns the per-digit remaining counts for the problem grid.
    #[must_use]
    pub fn counts(&self) -> DigitCounts {
        DigitCounts::from_grid(&self.problem)
    }
}

/// Generates Sudoku puzzles with a configurable clue count.
///
/// Each generated puzzle pairs a complete solution with a problem grid carved
/// from it, plus the seed that reproduces the pair.
///
/// # Examples
///
/// ```
/// use numcarve_generator::PuzzleGenerator;
///
/// let generator = PuzzleGenerator::with_clues(40).unwrap();
/// let puzzle = generator.generate();
///
/// assert!(puzzle.solution.is_valid_solution());
/// assert_eq!(puzzle.problem.filled_count(), 40);
///
/// // Clue counts outside 1-81 are rejected up front
/// assert!(PuzzleGenerator::with_clues(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleGenerator {
    clues: u8,
}

impl PuzzleGenerator {
    /// Number of clues used by [`PuzzleGenerator::new`].
    pub const DEFAULT_CLUES: u8 = 30;

    /// Creates a generator with [`Self::DEFAULT_CLUES`] clues.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            clues: Self::DEFAULT_CLUES,
        }
    }

    /// Creates a generator that leaves `clues` cells filled in each problem.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidClueCount`] if `clues` is 0 or greater than 81.
    pub const fn with_clues(clues: u8) -> Result<Self, InvalidClueCount> {
        if clues == 0 || clues > 81 {
            return Err(InvalidClueCount { count: clues });
        }
        Ok(Self { clues })
    }

    /// Returns the configured clue count.
    #[must_use]
    pub const fn clues(&self) -> u8 {
        self.clues
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// The same seed and clue count always produce the same puzzle.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = seed.rng();
        let solution = solution::generate(&mut rng);
        let problem = carve::carve(&solution, self.clues, &mut rng)
            .expect("clue count was validated at construction");
        debug!("generated puzzle: seed={seed}, clues={}", self.clues);
        GeneratedPuzzle {
            problem,
            solution,
            seed,
        }
    }
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}
