//! Per-cell state during a game.

use derive_more::IsVariant;
use numcarve_core::Digit;

/// The state of a single cell during a game.
///
/// Given cells come from the problem grid and never change; filled cells hold
/// digits the player entered (and had validated against the solution).
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum CellState {
    /// A clue cell, pre-filled by the generator.
    Given(Digit),
    /// A cell the player filled with the correct digit.
    Filled(Digit),
    /// An empty cell awaiting input.
    Empty,
}

impl CellState {
    /// Returns the digit in this cell, if it is decided (given or filled).
    #[must_use]
    pub const fn as_digit(&self) -> Option<Digit> {
        match self {
            Self::Given(digit) | Self::Filled(digit) => Some(*digit),
            Self::Empty => None,
        }
    }

    /// Returns `true` if the cell holds a digit.
    #[must_use]
    pub const fn is_decided(&self) -> bool {
        self.as_digit().is_some()
    }
}
