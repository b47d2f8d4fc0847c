//! Puzzle carving: removing cells from a complete solution.

use derive_more::{Display, Error};
use numcarve_core::{DigitGrid, Position};
use rand::{Rng, RngExt as _};

/// An error returned when a clue count outside the range 1-81 is requested.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("clue count must be in 1-81, got {count}")]
pub struct InvalidClueCount {
    /// The rejected clue count.
    #[error(not(source))]
    pub count: u8,
}

/// Carves a playable problem grid out of a complete solution.
///
/// Exactly `81 - clues` cells of a copy of `solution` are cleared, chosen by
/// rejection sampling: a uniformly random cell is drawn and cleared if it is
/// still filled, otherwise redrawn. Every remaining filled cell equals the
/// corresponding solution cell. `clues == 81` returns the solution unchanged.
///
/// The expected number of draws grows as the clue count shrinks, but the loop
/// terminates for every valid clue count.
///
/// # Errors
///
/// Returns [`InvalidClueCount`] if `clues` is 0 or greater than 81. Rejecting
/// these up front keeps the removal loop from spinning forever (`clues > 81`
/// would underflow the removal budget; `clues == 0` would starve the board).
///
/// # Examples
///
/// ```
/// use numcarve_generator::{carve, solution};
///
/// let mut rng = rand::rng();
/// let board = solution::generate(&mut rng);
/// let problem = carve::carve(&board, 30, &mut rng).unwrap();
///
/// assert_eq!(problem.filled_count(), 30);
/// assert!(carve::carve(&board, 0, &mut rng).is_err());
/// ```
pub fn carve<R: Rng + ?Sized>(
    solution: &DigitGrid,
    clues: u8,
    rng: &mut R,
) -> Result<DigitGrid, InvalidClueCount> {
    if !(1..=81).contains(&clues) {
        return Err(InvalidClueCount { count: clues });
    }
    debug_assert!(solution.is_complete(), "carving expects a complete board");

    let mut problem = solution.clone();
    let mut cells_to_remove = 81 - usize::from(clues);
    while cells_to_remove > 0 {
        let x = rng.random_range(0..9_u8);
        let y = rng.random_range(0..9_u8);
        let pos = Position::new(x, y);
        if problem[pos].is_some() {
            problem.set(pos, None);
            cells_to_remove -= 1;
        }
    }
    Ok(problem)
}
