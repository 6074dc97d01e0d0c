//! The literal clue seed every session starts from.

use cloudoku_core::Symbol;

/// The 20 pre-filled cells, as `(row, col, symbol)` triples.
///
/// The coordinates are fixed across sessions and themes. The symbols spell
/// letters of the animals theme wherever the grid alphabet can express
/// them (A-G-R across ALLIGATOR's row, R and L in BUTTERFLY's, ...), and
/// the seed as a whole respects the sudoku uniqueness rules.
pub(crate) const CLUES: [(u8, u8, Symbol); 20] = [
    (0, 0, Symbol::S1), // A
    (0, 4, Symbol::S8), // G
    (0, 8, Symbol::S3), // R
    (1, 1, Symbol::S5), // T
    (1, 5, Symbol::S3), // R
    (1, 7, Symbol::S2), // L
    (2, 2, Symbol::S6), // O
    (2, 6, Symbol::S7), // I
    (3, 0, Symbol::S4), // D
    (3, 8, Symbol::S9), // Y
    (4, 2, Symbol::S5), // T
    (4, 6, Symbol::S8), // G
    (5, 1, Symbol::S2), // L
    (5, 7, Symbol::S6), // O
    (6, 3, Symbol::S1), // A
    (6, 5, Symbol::S6), // O
    (7, 0, Symbol::S8), // G
    (7, 4, Symbol::S5), // T
    (8, 0, Symbol::S2), // L
    (8, 8, Symbol::S7), // I
];

#[cfg(test)]
mod tests {
    use cloudoku_core::Position;

    use super::*;

    #[test]
    fn test_seed_has_twenty_distinct_cells() {
        assert_eq!(CLUES.len(), 20);
        for (i, &(row, col, _)) in CLUES.iter().enumerate() {
            assert!(row < 9 && col < 9);
            for &(r, c, _) in &CLUES[i + 1..] {
                assert!(row != r || col != c, "duplicate clue at ({row}, {col})");
            }
        }
    }

    #[test]
    fn test_seed_respects_uniqueness_rules() {
        for (i, &(row, col, symbol)) in CLUES.iter().enumerate() {
            let pos = Position::new(row, col);
            for &(r, c, s) in &CLUES[i + 1..] {
                if s != symbol {
                    continue;
                }
                let other = Position::new(r, c);
                assert_ne!(pos.row(), other.row(), "row conflict at {pos}/{other}");
                assert_ne!(pos.col(), other.col(), "column conflict at {pos}/{other}");
                assert_ne!(
                    pos.box_index(),
                    other.box_index(),
                    "box conflict at {pos}/{other}"
                );
            }
        }
    }
}
