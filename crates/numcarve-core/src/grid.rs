//! The 9x9 board of optional digits.

use std::{fmt, ops::Index, str::FromStr};

use derive_more::{Display, Error};

use crate::{Digit, Position};

/// A 9x9 board where each cell holds an optional digit.
///
/// Empty cells are `None`. A grid with no empty cells whose rows, columns,
/// and 3x3 boxes each contain every digit exactly once is a valid solution.
///
/// The text form used by [`FromStr`] and [`std::fmt::Display`] is 81
/// characters in row-major order, `1`-`9` for digits and `.` for empty cells.
///
/// # Examples
///
/// ```
/// use numcarve_core::{Digit, DigitGrid, Position};
///
/// let grid: DigitGrid = format!("5{}", ".".repeat(80)).parse().unwrap();
/// assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
/// assert_eq!(grid.filled_count(), 1);
/// assert!(!grid.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl DigitGrid {
    /// Creates a grid with all 81 cells empty.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at the given position, or `None` if the cell is empty.
    #[must_use]
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.cell_index()]
    }

    /// Sets or clears the cell at the given position.
    #[inline]
    pub fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.cell_index()] = digit;
    }

    /// Returns the first empty cell in row-major scan order.
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        Position::ALL
            .into_iter()
            .find(|pos| self.get(*pos).is_none())
    }

    /// Returns the number of filled cells (0-81).
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` if no cell is empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns `true` if the grid is a complete, valid Sudoku solution.
    ///
    /// Every row, column, and 3x3 box must contain each digit 1-9 exactly
    /// once. An incomplete grid is never a valid solution.
    #[must_use]
    pub fn is_valid_solution(&self) -> bool {
        const FULL_MASK: u16 = 0x1ff;

        let mut rows = [0_u16; 9];
        let mut columns = [0_u16; 9];
        let mut boxes = [0_u16; 9];
        for pos in Position::ALL {
            let Some(digit) = self.get(pos) else {
                return false;
            };
            let bit = 1_u16 << (digit.value() - 1);
            let box_index = usize::from(pos.y() / 3 * 3 + pos.x() / 3);
            if rows[usize::from(pos.y())] & bit != 0
                || columns[usize::from(pos.x())] & bit != 0
                || boxes[box_index] & bit != 0
            {
                return false;
            }
            rows[usize::from(pos.y())] |= bit;
            columns[usize::from(pos.x())] |= bit;
            boxes[box_index] |= bit;
        }
        rows.into_iter()
            .chain(columns)
            .chain(boxes)
            .all(|mask| mask == FULL_MASK)
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    #[inline]
    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.cell_index()]
    }
}

/// An error returned when parsing a [`DigitGrid`] from its text form fails.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseDigitGridError {
    /// The input was not exactly 81 characters long.
    #[display("grid text must be 81 characters, got {_0}")]
    InvalidLength(#[error(not(source))] usize),
    /// The input contained a character other than `1`-`9` or `.`.
    #[display("invalid character {_0:?} in grid text")]
    InvalidCharacter(#[error(not(source))] char),
}

impl FromStr for DigitGrid {
    type Err = ParseDigitGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 81 {
            return Err(ParseDigitGridError::InvalidLength(len));
        }
        let mut grid = Self::new();
        for (pos, ch) in Position::ALL.into_iter().zip(s.chars()) {
            let digit = match ch {
                '.' => None,
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation)]
                    let value = ch.to_digit(10).unwrap_or_default() as u8;
                    Digit::try_from_value(value)
                }
                _ => return Err(ParseDigitGridError::InvalidCharacter(ch)),
            };
            grid.set(pos, digit);
        }
        Ok(grid)
    }
}

impl fmt::Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}
