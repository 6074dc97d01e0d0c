//! Per-cell state of the puzzle grid.

use cloudoku_core::Symbol;

/// The state of a single grid cell.
///
/// Clue cells are seeded at game start and never change for the rest of
/// the session; filled cells hold player input and can be overwritten or
/// cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum CellState {
    /// No symbol placed.
    Empty,
    /// A pre-filled, immutable starting cell.
    Clue(Symbol),
    /// A player-placed symbol.
    Filled(Symbol),
}

impl CellState {
    /// Returns the symbol in this cell, if any.
    #[must_use]
    pub const fn symbol(self) -> Option<Symbol> {
        match self {
            CellState::Empty => None,
            CellState::Clue(symbol) | CellState::Filled(symbol) => Some(symbol),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_accessor() {
        assert_eq!(CellState::Empty.symbol(), None);
        assert_eq!(CellState::Clue(Symbol::S3).symbol(), Some(Symbol::S3));
        assert_eq!(CellState::Filled(Symbol::S9).symbol(), Some(Symbol::S9));
    }

    #[test]
    fn test_variant_predicates() {
        assert!(CellState::Empty.is_empty());
        assert!(CellState::Clue(Symbol::S1).is_clue());
        assert!(CellState::Filled(Symbol::S1).is_filled());
        assert!(!CellState::Filled(Symbol::S1).is_clue());
    }
}
