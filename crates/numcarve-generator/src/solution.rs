//! Complete-board generation by randomized backtracking.

use numcarve_core::{Digit, DigitGrid, Position};
use rand::{Rng, seq::SliceRandom as _};

/// Generates a complete, valid solution board.
///
/// Works by recursive backtracking: the first empty cell in row-major order
/// is filled with some digit that fits its row, column, and 3x3 box, then the
/// rest of the board is filled recursively; on a dead end the cell is cleared
/// and the next candidate is tried. Candidates are drawn in a uniformly
/// random order, which is where board variety comes from.
///
/// An empty 9x9 board is always completable, so this never fails.
///
/// # Examples
///
/// ```
/// use numcarve_generator::solution;
///
/// let board = solution::generate(&mut rand::rng());
/// assert!(board.is_valid_solution());
/// ```
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> DigitGrid {
    let mut grid = DigitGrid::new();
    let filled = fill_from(&mut grid, &mut |digits| digits.shuffle(rng));
    debug_assert!(filled, "an empty 9x9 board is always completable");
    debug_assert!(grid.is_valid_solution());
    grid
}

/// Fills every empty cell of `grid`, trying candidates for each cell in the
/// order produced by `permute`.
///
/// Returns `false` if the partial grid admits no completion; `grid` is then
/// restored to its state at entry.
fn fill_from<F>(grid: &mut DigitGrid, permute: &mut F) -> bool
where
    F: FnMut(&mut [Digit; 9]),
{
    let Some(pos) = grid.first_empty() else {
        // No empty cell left: the board is complete.
        return true;
    };
    let mut digits = Digit::ALL;
    permute(&mut digits);
    for digit in digits {
        if fits(grid, pos, digit) {
            grid.set(pos, Some(digit));
            if fill_from(grid, permute) {
                return true;
            }
            grid.set(pos, None);
        }
    }
    false
}

/// Returns `true` if placing `digit` at `pos` violates no row, column, or
/// box constraint.
fn fits(grid: &DigitGrid, pos: Position, digit: Digit) -> bool {
    for i in 0..9 {
        if grid.get(Position::new(i, pos.y())) == Some(digit)
            || grid.get(Position::new(pos.x(), i)) == Some(digit)
        {
            return false;
        }
    }
    let origin = pos.box_origin();
    for dy in 0..3 {
        for dx in 0..3 {
            if grid.get(Position::new(origin.x() + dx, origin.y() + dy)) == Some(digit) {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    #[test]
    fn test_generate_produces_valid_solution() {
        let mut rng = Pcg64::from_seed([7; 32]);
        for _ in 0..20 {
            let board = generate(&mut rng);
            assert!(board.is_complete());
            assert!(board.is_valid_solution());
        }
    }

    #[test]
    fn test_generate_varies_across_calls() {
        let mut rng = Pcg64::from_seed([42; 32]);
        let boards: Vec<_> = (0..10).map(|_| generate(&mut rng)).collect();
        let distinct = boards
            .iter()
            .filter(|board| **board != boards[0])
            .count();
        assert!(distinct > 0, "10 random boards should not all be identical");
    }

    #[test]
    fn test_fill_with_identity_permutation_still_valid() {
        // Candidate order only affects which solution is found, not whether
        // one is found: filling with digits always tried in ascending order
        // must still complete the board.
        let mut grid = DigitGrid::new();
        assert!(fill_from(&mut grid, &mut |_| {}));
        assert!(grid.is_valid_solution());

        // Ascending order from an empty board yields the canonical band grid
        let first_row: Vec<_> = (0..9)
            .map(|x| grid.get(Position::new(x, 0)).unwrap().value())
            .collect();
        assert_eq!(first_row, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_fill_restores_grid_on_failure() {
        // Force a contradiction: cell (0, 0) is empty but every digit
        // collides with its row or column.
        let mut grid = DigitGrid::new();
        for (i, digit) in (0_u8..8).zip(Digit::ALL) {
            grid.set(Position::new(i + 1, 0), Some(digit));
        }
        grid.set(Position::new(0, 5), Some(Digit::D9));
        let before = grid.clone();

        assert!(!fits(&grid, Position::new(0, 0), Digit::D9));
        assert!(!fill_from(&mut grid, &mut |_| {}));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_fits_checks_row_column_and_box() {
        let mut grid = DigitGrid::new();
        grid.set(Position::new(4, 4), Some(Digit::D5));

        // Same row, same column, same box
        assert!(!fits(&grid, Position::new(0, 4), Digit::D5));
        assert!(!fits(&grid, Position::new(4, 8), Digit::D5));
        assert!(!fits(&grid, Position::new(3, 3), Digit::D5));

        // Unrelated cell or different digit is fine
        assert!(fits(&grid, Position::new(0, 0), Digit::D5));
        assert!(fits(&grid, Position::new(0, 4), Digit::D6));
    }
}
