//! Game errors.

use derive_more::{Display, Error};

/// An error returned by game operations.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The targeted cell is a given (clue) cell and cannot be changed.
    #[display("cannot modify a given cell")]
    CannotModifyGivenCell,
    /// The targeted cell was already filled with the correct digit.
    #[display("cell is already filled")]
    CellAlreadyFilled,
    /// The mistake limit was reached; the game is over.
    #[display("mistake limit reached, the game is lost")]
    MistakeLimitReached,
    /// The problem grid contradicts the solution grid.
    #[display("problem grid does not match the solution grid")]
    PuzzleMismatch,
}
