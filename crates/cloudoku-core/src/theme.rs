//! Word themes: the nine target words a puzzle is built around.

use crate::Position;

/// Names of the built-in themes, in the order the UI offers them.
pub const BUILTIN_NAMES: [&str; 3] = ["animals", "colors", "countries"];

const ANIMALS: [&str; 9] = [
    "ALLIGATOR",
    "BUTTERFLY",
    "CROCODILE",
    "DRAGONFLY",
    "ELEPHANTS",
    "FLAMINGOS",
    "GIRAFFESS",
    "HEDGEHOGS",
    "JELLYFISH",
];

const COLORS: [&str; 9] = [
    "TURQUOISE",
    "ORANGERED",
    "LIMEGREEN",
    "GOLDENROD",
    "ROSYBROWN",
    "SLATEGRAY",
    "DARKKHAKI",
    "INDIANRED",
    "STEELBLUE",
];

const COUNTRIES: [&str; 9] = [
    "AUSTRALIA",
    "ARGENTINA",
    "SINGAPORE",
    "INDONESIA",
    "GUATEMALA",
    "LITHUANIA",
    "MAURITIUS",
    "NICARAGUA",
    "BARBADOSS",
];

/// An error raised when theme data is malformed.
///
/// Theme validation happens at configuration time, before a game starts;
/// a constructed [`Theme`] is always valid.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ThemeError {
    /// A word does not have exactly nine letters.
    #[display("theme word {index} has {length} letters, expected 9")]
    WordLength {
        /// Index of the offending word (0-8).
        index: usize,
        /// Actual character count of the word.
        length: usize,
    },
    /// A word contains a character outside `A`-`Z`.
    #[display("theme word {index} contains invalid letter {letter:?}")]
    InvalidLetter {
        /// Index of the offending word (0-8).
        index: usize,
        /// The character that is not an uppercase ASCII letter.
        letter: char,
    },
}

/// A word theme: nine 9-letter uppercase words, one per row.
///
/// `words[i]` is the word row `i` reveals when completed. Column words are
/// not part of the theme; they are whatever letters a finished column
/// happens to contain.
///
/// # Examples
///
/// ```
/// use cloudoku_core::{Position, Theme};
///
/// let theme = Theme::builtin("animals").unwrap();
/// assert_eq!(theme.word(0), "ALLIGATOR");
/// assert_eq!(theme.letter(Position::new(0, 4)), 'G');
///
/// assert!(Theme::builtin("planets").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    name: String,
    words: [String; 9],
}

impl Theme {
    /// Creates a theme from a name and nine words.
    ///
    /// # Errors
    ///
    /// Returns a [`ThemeError`] when any word is not exactly nine
    /// uppercase ASCII letters.
    pub fn new(name: &str, words: [&str; 9]) -> Result<Self, ThemeError> {
        for (index, word) in words.iter().enumerate() {
            if word.chars().count() != 9 {
                return Err(ThemeError::WordLength {
                    index,
                    length: word.chars().count(),
                });
            }
            if let Some(letter) = word.chars().find(|c| !c.is_ascii_uppercase()) {
                return Err(ThemeError::InvalidLetter { index, letter });
            }
        }
        Ok(Self {
            name: name.to_owned(),
            words: words.map(str::to_owned),
        })
    }

    /// Looks up a built-in theme by name.
    ///
    /// The available names are listed in [`BUILTIN_NAMES`]. Returns `None`
    /// for unknown names.
    #[must_use]
    pub fn builtin(name: &str) -> Option<Self> {
        let words = match name {
            "animals" => ANIMALS,
            "colors" => COLORS,
            "countries" => COUNTRIES,
            _ => return None,
        };
        // Built-in word lists are validated by tests.
        Some(Self {
            name: name.to_owned(),
            words: words.map(str::to_owned),
        })
    }

    /// Returns the theme name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the word for the given row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not in the range 0-8.
    #[must_use]
    pub fn word(&self, row: u8) -> &str {
        &self.words[usize::from(row)]
    }

    /// Returns the theme letter a fully solved grid shows at `pos`.
    #[must_use]
    pub fn letter(&self, pos: Position) -> char {
        // Words are validated as ASCII, so byte indexing is exact.
        char::from(self.word(pos.row()).as_bytes()[usize::from(pos.col())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_themes_are_valid() {
        for name in BUILTIN_NAMES {
            let theme = Theme::builtin(name).unwrap();
            assert_eq!(theme.name(), name);
            for row in 0..9 {
                let word = theme.word(row);
                assert_eq!(word.len(), 9, "{name} row {row}");
                assert!(word.chars().all(|c| c.is_ascii_uppercase()));
            }
        }
    }

    #[test]
    fn test_builtin_unknown_name() {
        assert_eq!(Theme::builtin("planets"), None);
        assert_eq!(Theme::builtin(""), None);
        assert_eq!(Theme::builtin("Animals"), None);
    }

    #[test]
    fn test_new_validates_word_length() {
        let mut words = ANIMALS;
        words[3] = "DRAGON";
        assert_eq!(
            Theme::new("broken", words),
            Err(ThemeError::WordLength {
                index: 3,
                length: 6
            })
        );
    }

    #[test]
    fn test_new_validates_letters() {
        let mut words = ANIMALS;
        words[0] = "alligator";
        assert_eq!(
            Theme::new("broken", words),
            Err(ThemeError::InvalidLetter {
                index: 0,
                letter: 'a'
            })
        );

        let mut words = ANIMALS;
        words[8] = "JELLYFIS!";
        assert_eq!(
            Theme::new("broken", words),
            Err(ThemeError::InvalidLetter {
                index: 8,
                letter: '!'
            })
        );
    }

    #[test]
    fn test_letter_lookup() {
        let theme = Theme::builtin("animals").unwrap();
        assert_eq!(theme.letter(Position::new(0, 0)), 'A');
        assert_eq!(theme.letter(Position::new(0, 1)), 'L');
        assert_eq!(theme.letter(Position::new(8, 8)), 'H');

        let colors = Theme::builtin("colors").unwrap();
        assert_eq!(colors.letter(Position::new(0, 0)), 'T');
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #[test]
            fn nine_uppercase_words_always_accepted(
                words in proptest::array::uniform9("[A-Z]{9}"),
            ) {
                let refs: [&str; 9] = std::array::from_fn(|i| words[i].as_str());
                let theme = Theme::new("generated", refs).unwrap();
                for row in 0..9u8 {
                    prop_assert_eq!(theme.word(row), refs[usize::from(row)]);
                }
            }

            #[test]
            fn wrong_length_always_rejected(
                word in "[A-Z]{0,8}|[A-Z]{10,12}",
                slot in 0usize..9,
            ) {
                let mut words: [&str; 9] = ANIMALS;
                words[slot] = &word;
                prop_assert_eq!(
                    Theme::new("generated", words),
                    Err(ThemeError::WordLength {
                        index: slot,
                        length: word.len(),
                    })
                );
            }
        }
    }

    #[test]
    fn test_error_messages_are_stable() {
        let err = ThemeError::WordLength {
            index: 3,
            length: 6,
        };
        assert_eq!(err.to_string(), "theme word 3 has 6 letters, expected 9");

        let err = ThemeError::InvalidLetter {
            index: 0,
            letter: 'a',
        };
        assert_eq!(
            err.to_string(),
            "theme word 0 contains invalid letter 'a'"
        );
    }
}
