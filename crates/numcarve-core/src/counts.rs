//! Per-digit remaining-count bookkeeping.

use crate::{Digit, DigitGrid, Position};

/// Remaining placements per digit on a board.
///
/// Each digit appears exactly 9 times in a complete solution, so the count
/// for a digit starts at 9 and drops by one for each cell already holding
/// it. A UI typically renders these counts next to its digit keypad.
///
/// # Examples
///
/// ```
/// use numcarve_core::{Digit, DigitCounts, DigitGrid};
///
/// let puzzle: DigitGrid = format!("55{}", ".".repeat(79)).parse().unwrap();
/// let counts = DigitCounts::from_grid(&puzzle);
///
/// assert_eq!(counts.remaining(Digit::D5), 7);
/// assert_eq!(counts.remaining(Digit::D1), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitCounts {
    remaining: [u8; 9],
}

impl DigitCounts {
    /// Creates counts for an empty board: 9 remaining for every digit.
    #[must_use]
    pub const fn new() -> Self {
        Self { remaining: [9; 9] }
    }

    /// Creates counts for the given board.
    ///
    /// Starts from a baseline of 9 per digit and decrements once per filled
    /// cell holding that digit.
    #[must_use]
    pub fn from_grid(grid: &DigitGrid) -> Self {
        let mut counts = Self::new();
        for pos in Position::ALL {
            if let Some(digit) = grid.get(pos) {
                counts.decrement(digit);
            }
        }
        counts
    }

    /// Returns how many cells still need the given digit.
    #[must_use]
    #[inline]
    pub fn remaining(&self, digit: Digit) -> u8 {
        self.remaining[usize::from(digit.value() - 1)]
    }

    /// Records one placement of the given digit.
    ///
    /// Saturates at zero; a ninth placement exhausts the digit.
    #[inline]
    pub fn decrement(&mut self, digit: Digit) {
        let slot = &mut self.remaining[usize::from(digit.value() - 1)];
        *slot = slot.saturating_sub(1);
    }

    /// Returns the total number of placements still needed across all digits.
    #[must_use]
    pub fn total_remaining(&self) -> usize {
        self.remaining.iter().map(|count| usize::from(*count)).sum()
    }
}

impl Default for DigitCounts {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: &str =
        "185362947793148526246795183564239871931874265827516394318427659672951438459683712";

    #[test]
    fn test_empty_board_counts() {
        let counts = DigitCounts::from_grid(&DigitGrid::new());
        assert_eq!(counts, DigitCounts::new());
        for digit in Digit::ALL {
            assert_eq!(counts.remaining(digit), 9);
        }
        assert_eq!(counts.total_remaining(), 81);
    }

    #[test]
    fn test_complete_board_counts() {
        let solved: DigitGrid = SOLVED.parse().unwrap();
        let counts = DigitCounts::from_grid(&solved);
        for digit in Digit::ALL {
            assert_eq!(counts.remaining(digit), 0);
        }
        assert_eq!(counts.total_remaining(), 0);
    }

    #[test]
    fn test_counts_match_occurrences() {
        // Three 7s and one 2
        let text = format!("7.7..2{}7{}", ".".repeat(10), ".".repeat(64));
        let grid: DigitGrid = text.parse().unwrap();
        let counts = DigitCounts::from_grid(&grid);

        assert_eq!(counts.remaining(Digit::D7), 6);
        assert_eq!(counts.remaining(Digit::D2), 8);
        assert_eq!(counts.remaining(Digit::D1), 9);

        // Remaining counts plus filled cells always account for all 81 cells
        assert_eq!(counts.total_remaining() + grid.filled_count(), 81);
    }

    #[test]
    fn test_decrement_saturates() {
        let mut counts = DigitCounts::new();
        for _ in 0..12 {
            counts.decrement(Digit::D3);
        }
        assert_eq!(counts.remaining(Digit::D3), 0);
    }
}
