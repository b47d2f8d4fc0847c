//! The game session.

use derive_more::IsVariant;
use numcarve_core::{Digit, DigitCounts, DigitGrid, Position};
use numcarve_generator::GeneratedPuzzle;

use crate::{CellState, GameError};

/// The result of a legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum MoveOutcome {
    /// The entered digit matches the solution; the cell is now filled.
    Correct,
    /// The entered digit does not match the solution; the mistake counter
    /// was incremented and the cell is still empty.
    Incorrect,
}

/// A Sudoku game session.
///
/// Tracks cell states, validates player moves against the stored solution,
/// keeps the per-digit remaining counts in sync, and counts mistakes. After
/// [`Game::MISTAKE_LIMIT`] wrong entries the game is lost and rejects
/// further moves.
///
/// # Examples
///
/// ```
/// use numcarve_core::Position;
/// use numcarve_game::Game;
/// use numcarve_generator::PuzzleGenerator;
///
/// let puzzle = PuzzleGenerator::new().generate();
/// let mut game = Game::new(puzzle.clone());
///
/// // Solve the puzzle by entering every solution digit
/// for pos in Position::ALL {
///     if game.cell(pos).is_empty() {
///         let digit = puzzle.solution[pos].expect("solution is complete");
///         let outcome = game.enter_digit(pos, digit).unwrap();
///         assert!(outcome.is_correct());
///     }
/// }
/// assert!(game.is_won());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    cells: [CellState; 81],
    solution: DigitGrid,
    counts: DigitCounts,
    mistakes: u8,
}

impl Game {
    /// Wrong entries allowed before the game is lost.
    pub const MISTAKE_LIMIT: u8 = 3;

    /// Creates a new game from a generated puzzle.
    ///
    /// Cells filled in the problem grid become given cells; the rest start
    /// empty. The remaining counts are initialized from the problem grid.
    #[must_use]
    #[expect(clippy::needless_pass_by_value, clippy::missing_panics_doc)]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            problem,
            solution,
            seed: _,
        } = puzzle;
        Self::from_grids(&problem, &solution)
            .expect("generated problem grids always match their solution")
    }

    /// Creates a game from a problem grid and its solution.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PuzzleMismatch`] if the solution is incomplete or
    /// any filled problem cell differs from the solution cell.
    pub fn from_grids(problem: &DigitGrid, solution: &DigitGrid) -> Result<Self, GameError> {
        if !solution.is_complete() {
            return Err(GameError::PuzzleMismatch);
        }
        let mut cells = [CellState::Empty; 81];
        for pos in Position::ALL {
            if let Some(digit) = problem[pos] {
                if solution[pos] != Some(digit) {
                    return Err(GameError::PuzzleMismatch);
                }
                cells[pos.cell_index()] = CellState::Given(digit);
            }
        }
        Ok(Self {
            cells,
            solution: solution.clone(),
            counts: DigitCounts::from_grid(problem),
            mistakes: 0,
        })
    }

    /// Returns the state of the cell at the given position.
    #[must_use]
    pub fn cell(&self, pos: Position) -> &CellState {
        &self.cells[pos.cell_index()]
    }

    /// Returns the stored solution grid for this puzzle.
    #[must_use]
    pub fn solution(&self) -> &DigitGrid {
        &self.solution
    }

    /// Returns the per-digit remaining counts for the current board.
    #[must_use]
    pub fn counts(&self) -> &DigitCounts {
        &self.counts
    }

    /// Returns how many cells still need the given digit.
    #[must_use]
    pub fn remaining(&self, digit: Digit) -> u8 {
        self.counts.remaining(digit)
    }

    /// Returns the number of wrong entries so far.
    #[must_use]
    pub fn mistakes(&self) -> u8 {
        self.mistakes
    }

    /// Returns `true` if the mistake limit has been reached.
    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.mistakes >= Self::MISTAKE_LIMIT
    }

    /// Returns `true` if every cell is decided.
    ///
    /// Filled cells are validated on entry, so a fully decided board always
    /// matches the solution.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.cells.iter().all(CellState::is_decided)
    }

    /// Enters a digit at the given position.
    ///
    /// A digit matching the solution fills the cell, decrements that digit's
    /// remaining count, and returns [`MoveOutcome::Correct`]. A wrong digit
    /// leaves the cell empty, increments the mistake counter, and returns
    /// [`MoveOutcome::Incorrect`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::MistakeLimitReached`] if the game is already
    /// lost, [`GameError::CannotModifyGivenCell`] for given cells, and
    /// [`GameError::CellAlreadyFilled`] for cells already filled correctly.
    pub fn enter_digit(&mut self, pos: Position, digit: Digit) -> Result<MoveOutcome, GameError> {
        if self.is_lost() {
            return Err(GameError::MistakeLimitReached);
        }
        match self.cell(pos) {
            CellState::Given(_) => return Err(GameError::CannotModifyGivenCell),
            CellState::Filled(_) => return Err(GameError::CellAlreadyFilled),
            CellState::Empty => {}
        }

        if self.solution[pos] == Some(digit) {
            self.cells[pos.cell_index()] = CellState::Filled(digit);
            self.counts.decrement(digit);
            Ok(MoveOutcome::Correct)
        } else {
            self.mistakes += 1;
            Ok(MoveOutcome::Incorrect)
        }
    }
}
