//! Game session state for Numcarve Sudoku puzzles.
//!
//! This crate owns the state a UI controller needs while a player solves a
//! puzzle: the cell states (given, player-filled, or empty), the ground-truth
//! solution for move validation, the per-digit remaining counts, and the
//! mistake counter with its three-strikes loss rule.
//!
//! # Examples
//!
//! ```
//! use numcarve_game::Game;
//! use numcarve_generator::PuzzleGenerator;
//!
//! let puzzle = PuzzleGenerator::new().generate();
//! let game = Game::new(puzzle);
//!
//! assert!(!game.is_won());
//! assert!(!game.is_lost());
//! assert_eq!(game.mistakes(), 0);
//! ```

pub mod cell_state;
pub mod error;
pub mod game;

pub use self::{
    cell_state::CellState,
    error::GameError,
    game::{Game, MoveOutcome},
};
