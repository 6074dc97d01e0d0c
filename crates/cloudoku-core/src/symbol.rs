//! Grid symbols and the letter codec.

use std::fmt::{self, Display};

/// The nine letters a grid cell can display, in symbol order.
///
/// Symbol `S1` encodes `A`, `S2` encodes `L`, and so on. The mapping is
/// fixed and theme-independent: themes decide which word a row should
/// spell, while this alphabet decides how the nine grid values print.
pub const ALPHABET: [char; 9] = ['A', 'L', 'R', 'D', 'T', 'O', 'I', 'G', 'Y'];

/// A grid symbol in the range 1-9.
///
/// This is the value stored in a cell, subject to the usual sudoku
/// uniqueness rules. Each symbol has a fixed display letter drawn from
/// [`ALPHABET`].
///
/// # Examples
///
/// ```
/// use cloudoku_core::Symbol;
///
/// let symbol = Symbol::S5;
/// assert_eq!(symbol.value(), 5);
/// assert_eq!(symbol.letter(), 'T');
///
/// // The codec is a bijection
/// assert_eq!(Symbol::from_letter('T'), Some(Symbol::S5));
/// assert_eq!(Symbol::from_letter('Z'), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Symbol {
    /// The symbol 1, displayed as `A`.
    S1 = 1,
    /// The symbol 2, displayed as `L`.
    S2 = 2,
    /// The symbol 3, displayed as `R`.
    S3 = 3,
    /// The symbol 4, displayed as `D`.
    S4 = 4,
    /// The symbol 5, displayed as `T`.
    S5 = 5,
    /// The symbol 6, displayed as `O`.
    S6 = 6,
    /// The symbol 7, displayed as `I`.
    S7 = 7,
    /// The symbol 8, displayed as `G`.
    S8 = 8,
    /// The symbol 9, displayed as `Y`.
    S9 = 9,
}

impl Symbol {
    /// Array containing all symbols from 1 to 9.
    pub const ALL: [Self; 9] = [
        Self::S1,
        Self::S2,
        Self::S3,
        Self::S4,
        Self::S5,
        Self::S6,
        Self::S7,
        Self::S8,
        Self::S9,
    ];

    /// Creates a symbol from a u8 value in the range 1-9.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9. Use
    /// [`Symbol::try_from_value`] for untrusted input.
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        Self::try_from_value(value)
            .unwrap_or_else(|| panic!("Invalid symbol value: {value}"))
    }

    /// Creates a symbol from a u8 value, returning `None` when the value
    /// is outside 1-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use cloudoku_core::Symbol;
    ///
    /// assert_eq!(Symbol::try_from_value(1), Some(Symbol::S1));
    /// assert_eq!(Symbol::try_from_value(0), None);
    /// assert_eq!(Symbol::try_from_value(10), None);
    /// ```
    #[must_use]
    pub const fn try_from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::S1),
            2 => Some(Self::S2),
            3 => Some(Self::S3),
            4 => Some(Self::S4),
            5 => Some(Self::S5),
            6 => Some(Self::S6),
            7 => Some(Self::S7),
            8 => Some(Self::S8),
            9 => Some(Self::S9),
            _ => None,
        }
    }

    /// Returns the numeric value of this symbol (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the display letter for this symbol.
    ///
    /// # Examples
    ///
    /// ```
    /// use cloudoku_core::Symbol;
    ///
    /// assert_eq!(Symbol::S1.letter(), 'A');
    /// assert_eq!(Symbol::S9.letter(), 'Y');
    /// ```
    #[must_use]
    pub const fn letter(self) -> char {
        ALPHABET[self as usize - 1]
    }

    /// Creates a symbol from its display letter.
    ///
    /// Returns `None` for letters outside the grid alphabet. Themes may
    /// legitimately use such letters; the grid cannot represent them.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        let index = ALPHABET.iter().position(|&l| l == letter)?;
        let index = u8::try_from(index).ok()?;
        Self::try_from_value(index + 1)
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.letter(), f)
    }
}

impl From<Symbol> for u8 {
    fn from(symbol: Symbol) -> u8 {
        symbol.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(Symbol::from_value(1), Symbol::S1);
        assert_eq!(Symbol::from_value(9), Symbol::S9);
        assert_eq!(Symbol::S1.value(), 1);
        assert_eq!(Symbol::S9.value(), 9);

        assert_eq!(Symbol::ALL.len(), 9);
        assert_eq!(Symbol::ALL[0], Symbol::S1);
        assert_eq!(Symbol::ALL[8], Symbol::S9);

        for symbol in Symbol::ALL {
            assert_eq!(Symbol::from_value(symbol.value()), symbol);
        }

        let value: u8 = Symbol::S5.into();
        assert_eq!(value, 5);
    }

    #[test]
    fn test_codec_is_a_bijection() {
        for symbol in Symbol::ALL {
            assert_eq!(Symbol::from_letter(symbol.letter()), Some(symbol));
        }

        // Nine distinct letters
        for (i, a) in ALPHABET.iter().enumerate() {
            assert!(a.is_ascii_uppercase());
            for b in &ALPHABET[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_reference_mapping() {
        assert_eq!(Symbol::S1.letter(), 'A');
        assert_eq!(Symbol::S2.letter(), 'L');
        assert_eq!(Symbol::S3.letter(), 'R');
        assert_eq!(Symbol::S4.letter(), 'D');
        assert_eq!(Symbol::S5.letter(), 'T');
        assert_eq!(Symbol::S6.letter(), 'O');
        assert_eq!(Symbol::S7.letter(), 'I');
        assert_eq!(Symbol::S8.letter(), 'G');
        assert_eq!(Symbol::S9.letter(), 'Y');
    }

    #[test]
    fn test_from_letter_rejects_foreign_letters() {
        assert_eq!(Symbol::from_letter('B'), None);
        assert_eq!(Symbol::from_letter('Z'), None);
        assert_eq!(Symbol::from_letter('a'), None);
    }

    #[test]
    fn test_display_shows_letter() {
        assert_eq!(format!("{}", Symbol::S1), "A");
        assert_eq!(format!("{}", Symbol::S9), "Y");
    }

    #[test]
    #[should_panic(expected = "Invalid symbol value: 0")]
    fn test_from_value_zero_panics() {
        let _ = Symbol::from_value(0);
    }

    #[test]
    #[should_panic(expected = "Invalid symbol value: 10")]
    fn test_from_value_ten_panics() {
        let _ = Symbol::from_value(10);
    }
}
