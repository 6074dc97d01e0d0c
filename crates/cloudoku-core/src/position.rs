//! Cell coordinates on the 9×9 grid.

use std::fmt::{self, Display};

/// A cell coordinate: row and column, both in the range 0-8.
///
/// Positions are ordered row-major, the same order the hint scan and the
/// [`Position::ALL`] constant use.
///
/// # Examples
///
/// ```
/// use cloudoku_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.row(), 4);
/// assert_eq!(pos.col(), 7);
/// assert_eq!(pos.box_index(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// All 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Creates a new position, returning `None` when either coordinate is
    /// out of range.
    #[must_use]
    pub const fn try_new(row: u8, col: u8) -> Option<Self> {
        if row < 9 && col < 9 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Returns the row index (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the index of the containing 3×3 box (0-8, left to right,
    /// top to bottom).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.row / 3) * 3 + self.col / 3
    }

    /// Returns the nine positions of the containing 3×3 box in row-major
    /// order.
    #[must_use]
    pub fn box_positions(self) -> [Self; 9] {
        let base_row = self.row / 3 * 3;
        let base_col = self.col / 3 * 3;
        let mut positions = [Self { row: 0, col: 0 }; 9];
        for (i, pos) in positions.iter_mut().enumerate() {
            #[expect(clippy::cast_possible_truncation)]
            let i = i as u8;
            *pos = Self {
                row: base_row + i / 3,
                col: base_col + i % 3,
            };
        }
        positions
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_row_major() {
        assert_eq!(Position::ALL.len(), 81);
        assert_eq!(Position::ALL[0], Position::new(0, 0));
        assert_eq!(Position::ALL[1], Position::new(0, 1));
        assert_eq!(Position::ALL[9], Position::new(1, 0));
        assert_eq!(Position::ALL[80], Position::new(8, 8));
    }

    #[test]
    fn test_box_index() {
        assert_eq!(Position::new(0, 0).box_index(), 0);
        assert_eq!(Position::new(0, 8).box_index(), 2);
        assert_eq!(Position::new(4, 4).box_index(), 4);
        assert_eq!(Position::new(8, 0).box_index(), 6);
        assert_eq!(Position::new(8, 8).box_index(), 8);
    }

    #[test]
    fn test_box_positions() {
        let positions = Position::new(4, 7).box_positions();
        assert_eq!(positions[0], Position::new(3, 6));
        assert_eq!(positions[8], Position::new(5, 8));
        for pos in positions {
            assert_eq!(pos.box_index(), 5);
        }
    }

    #[test]
    fn test_try_new_bounds() {
        assert_eq!(Position::try_new(0, 0), Some(Position::new(0, 0)));
        assert_eq!(Position::try_new(8, 8), Some(Position::new(8, 8)));
        assert_eq!(Position::try_new(9, 0), None);
        assert_eq!(Position::try_new(0, 9), None);
    }

    #[test]
    #[should_panic(expected = "row < 9 && col < 9")]
    fn test_new_panics_out_of_range() {
        let _ = Position::new(9, 0);
    }
}
