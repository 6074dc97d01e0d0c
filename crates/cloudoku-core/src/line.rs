//! Word lines (rows and columns) and sets of them.

use std::fmt::{self, Display};
use std::iter::FusedIterator;

use crate::Position;

/// A word line: a full row or column of the grid.
///
/// Completed lines are what reveal words, so unlike a sudoku house there
/// is no box variant; boxes only matter for move validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    /// A row identified by its index (0-8).
    Row {
        /// Row index (0-8).
        index: u8,
    },
    /// A column identified by its index (0-8).
    Column {
        /// Column index (0-8).
        index: u8,
    },
}

impl Line {
    /// Array containing all rows (0-8).
    pub const ROWS: [Self; 9] = {
        let mut rows = [Self::Row { index: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            rows[i] = Self::Row { index: i as u8 };
            i += 1;
        }
        rows
    };

    /// Array containing all columns (0-8).
    pub const COLUMNS: [Self; 9] = {
        let mut columns = [Self::Column { index: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            columns[i] = Self::Column { index: i as u8 };
            i += 1;
        }
        columns
    };

    /// Array containing all 18 lines, rows first.
    pub const ALL: [Self; 18] = {
        let mut all = [Self::Row { index: 0 }; 18];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { index: i as u8 };
            all[i + 9] = Self::Column { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Converts a cell index within the line (0-8) into an absolute
    /// [`Position`].
    ///
    /// For rows the cell index walks columns left to right; for columns it
    /// walks rows top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    pub const fn position(self, i: u8) -> Position {
        match self {
            Line::Row { index } => Position::new(index, i),
            Line::Column { index } => Position::new(i, index),
        }
    }

    /// Returns the nine positions of this line in cell-index order.
    #[must_use]
    pub fn positions(self) -> [Position; 9] {
        let mut positions = [Position::new(0, 0); 9];
        for (i, pos) in positions.iter_mut().enumerate() {
            #[expect(clippy::cast_possible_truncation)]
            let i = i as u8;
            *pos = self.position(i);
        }
        positions
    }

    const fn bit(self) -> u32 {
        match self {
            Line::Row { index } => 1 << index,
            Line::Column { index } => 1 << (index + 9),
        }
    }
}

impl Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Row { index } => write!(f, "row {}", index + 1),
            Line::Column { index } => write!(f, "column {}", index + 1),
        }
    }
}

/// A set of [`Line`] identifiers, represented as an 18-bit bitset.
///
/// The engine uses this to record which lines have already revealed their
/// word. All 18 lines present means the puzzle is complete.
///
/// # Examples
///
/// ```
/// use cloudoku_core::{Line, LineSet};
///
/// let mut set = LineSet::new();
/// assert!(set.insert(Line::Row { index: 3 }));
/// assert!(!set.insert(Line::Row { index: 3 }));
/// assert!(set.contains(Line::Row { index: 3 }));
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LineSet {
    bits: u32,
}

impl LineSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing all 18 lines.
    pub const FULL: Self = Self {
        bits: (1 << 18) - 1,
    };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Inserts a line, returning `true` when it was not already present.
    pub const fn insert(&mut self, line: Line) -> bool {
        let bit = line.bit();
        let newly = self.bits & bit == 0;
        self.bits |= bit;
        newly
    }

    /// Returns `true` when the set contains `line`.
    #[must_use]
    pub const fn contains(self, line: Line) -> bool {
        self.bits & line.bit() != 0
    }

    /// Returns the number of lines in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` when the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns an iterator over the contained lines, rows first.
    pub fn iter(self) -> impl FusedIterator<Item = Line> {
        Line::ALL.into_iter().filter(move |line| self.contains(*line))
    }
}

impl FromIterator<Line> for LineSet {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Line>,
    {
        let mut set = Self::new();
        for line in iter {
            set.insert(line);
        }
        set
    }
}
