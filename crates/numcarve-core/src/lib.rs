//! Core data structures for the Numcarve Sudoku crates.
//!
//! This crate provides the board vocabulary shared by puzzle generation and
//! game management:
//!
//! - [`digit`]: Type-safe representation of Sudoku digits 1-9
//! - [`position`]: Board position (x, y) coordinates
//! - [`grid`]: A 9x9 board of optional digits, the fundamental board type
//! - [`counts`]: Per-digit remaining-count bookkeeping
//!
//! # Examples
//!
//! ```
//! use numcarve_core::{Digit, DigitGrid, Position};
//!
//! let mut grid = DigitGrid::new();
//! grid.set(Position::new(4, 4), Some(Digit::D5));
//!
//! assert_eq!(grid[Position::new(4, 4)], Some(Digit::D5));
//! assert_eq!(grid.filled_count(), 1);
//! ```

pub mod counts;
pub mod digit;
pub mod grid;
pub mod position;

// Re-export commonly used types
pub use self::{
    counts::DigitCounts,
    digit::Digit,
    grid::{DigitGrid, ParseDigitGridError},
    position::Position,
};
