use cloudoku_core::{Line, LineSet, Position, Symbol, Theme};
use log::{debug, info};

use crate::{CellState, ClearError, PlaceError, clues::CLUES};

/// Number of word lines a finished puzzle reveals (9 rows + 9 columns).
pub const TOTAL_WORDS: usize = 18;

/// A newly completed word line, as reported by
/// [`Game::scan_completed_lines`].
///
/// For rows, `word` is the theme's canonical word for that row. For
/// columns it is the decoded contents of the column, which need not match
/// any theme entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovery {
    /// The line that was completed.
    pub line: Line,
    /// The revealed word text.
    pub word: String,
}

/// A suggested next move, as computed by [`Game::hint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    /// The first empty cell in row-major order.
    pub position: Position,
    /// The theme letter that belongs at that cell.
    pub letter: char,
    /// The symbol encoding `letter`, or `None` when the letter lies
    /// outside the grid alphabet.
    pub symbol: Option<Symbol>,
}

/// A cloudoku game session.
///
/// Owns the 9×9 grid, the selected theme, the set of discovered word
/// lines, and the hints-used counter. All operations are synchronous and
/// total; mutation goes through `&mut self`, so a session has exactly one
/// mutator by construction.
///
/// Placement and word discovery are deliberately decoupled: `try_place`
/// only updates the grid, and the caller runs
/// [`scan_completed_lines`](Game::scan_completed_lines) whenever it is
/// ready to surface new words (for example, after an animation). Scanning
/// late never loses a discovery and scanning twice never repeats one.
///
/// # Example
///
/// ```
/// use cloudoku_core::Theme;
/// use cloudoku_game::Game;
///
/// let mut game = Game::new(Theme::builtin("animals").unwrap());
///
/// // Continue ALLIGATOR: the I belongs at row 0, column 3.
/// game.try_place(0, 3, 7).unwrap();
///
/// let discoveries = game.scan_completed_lines();
/// assert!(discoveries.is_empty()); // row 0 is not finished yet
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    grid: [CellState; 81],
    theme: Theme,
    discovered: LineSet,
    hints_used: u32,
}

impl Game {
    /// Starts a new session for the given theme.
    ///
    /// The grid starts empty apart from the fixed clue seed; counters and
    /// the discovered-word set start at zero. Starting a new session is
    /// also how a theme change works: prior progress is discarded
    /// wholesale.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        let mut grid = [CellState::Empty; 81];
        for (row, col, symbol) in CLUES {
            grid[grid_index(Position::new(row, col))] = CellState::Clue(symbol);
        }
        Self {
            grid,
            theme,
            discovered: LineSet::new(),
            hints_used: 0,
        }
    }

    /// Returns the state of the cell at the given position.
    #[must_use]
    pub fn cell(&self, pos: Position) -> CellState {
        self.grid[grid_index(pos)]
    }

    /// Returns the full grid in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[CellState; 81] {
        &self.grid
    }

    /// Returns the theme this session was started with.
    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Returns `true` when the cell is part of the original clue seed.
    #[must_use]
    pub fn is_clue(&self, pos: Position) -> bool {
        self.cell(pos).is_clue()
    }

    /// Returns `true` when the cell holds a symbol (clue or player input).
    #[must_use]
    pub fn is_revealed(&self, pos: Position) -> bool {
        !self.cell(pos).is_empty()
    }

    /// Returns the number of revealed (non-empty) cells.
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed_positions().count()
    }

    /// Returns the revealed cells in row-major order.
    ///
    /// Derived from the grid on demand; there is no separate set that
    /// could drift out of sync with cell contents.
    pub fn revealed_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(|&pos| !self.cell(pos).is_empty())
    }

    /// Returns the set of word lines discovered so far.
    #[must_use]
    pub fn discovered_lines(&self) -> LineSet {
        self.discovered
    }

    /// Returns the number of words discovered so far.
    ///
    /// Discovery is monotonic: this count never decreases, even when a
    /// cell of a previously completed line is cleared.
    #[must_use]
    pub fn words_found(&self) -> usize {
        self.discovered.len()
    }

    /// Returns the number of times [`hint`](Game::hint) has been called.
    #[must_use]
    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    /// Returns `true` once all 18 word lines have been discovered.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.discovered.len() == TOTAL_WORDS
    }

    /// Places a symbol value at `(row, col)`.
    ///
    /// Accepts raw coordinates and value so that a buggy caller surfaces
    /// as [`PlaceError::OutOfRange`] instead of a panic. A non-clue cell
    /// that already holds player input may be overwritten.
    ///
    /// Word discovery is not part of placement; call
    /// [`scan_completed_lines`](Game::scan_completed_lines) separately.
    ///
    /// # Errors
    ///
    /// - [`PlaceError::OutOfRange`] when `row`/`col` exceed 8 or `value`
    ///   is outside 1-9
    /// - [`PlaceError::CellLocked`] when the target is a clue
    /// - [`PlaceError::DuplicateInRow`], [`PlaceError::DuplicateInColumn`],
    ///   or [`PlaceError::DuplicateInBox`] when the value already occurs
    ///   elsewhere in the corresponding house (checked in that order)
    pub fn try_place(&mut self, row: u8, col: u8, value: u8) -> Result<(), PlaceError> {
        let (Some(pos), Some(symbol)) = (Position::try_new(row, col), Symbol::try_from_value(value))
        else {
            return Err(PlaceError::OutOfRange);
        };

        if self.cell(pos).is_clue() {
            return Err(PlaceError::CellLocked);
        }
        if let Some(conflict) = self.find_conflict(pos, symbol) {
            return Err(conflict);
        }

        self.grid[grid_index(pos)] = CellState::Filled(symbol);
        debug!("placed {symbol} at {pos}");
        Ok(())
    }

    /// Clears the player symbol at `(row, col)`.
    ///
    /// Clearing never un-discovers a word: lines already recorded stay
    /// recorded even when this breaks them.
    ///
    /// # Errors
    ///
    /// - [`ClearError::OutOfRange`] when `row`/`col` exceed 8
    /// - [`ClearError::CellLocked`] when the target is a clue
    /// - [`ClearError::CellAlreadyEmpty`] when there is nothing to clear
    pub fn clear(&mut self, row: u8, col: u8) -> Result<(), ClearError> {
        let Some(pos) = Position::try_new(row, col) else {
            return Err(ClearError::OutOfRange);
        };

        match self.cell(pos) {
            CellState::Clue(_) => Err(ClearError::CellLocked),
            CellState::Empty => Err(ClearError::CellAlreadyEmpty),
            CellState::Filled(symbol) => {
                self.grid[grid_index(pos)] = CellState::Empty;
                debug!("cleared {symbol} from {pos}");
                Ok(())
            }
        }
    }

    /// Finds lines completed since the last scan and records them.
    ///
    /// A row reveals the theme's canonical word for that row; the grid is
    /// guaranteed to be able to spell it only through the clue seed and
    /// uniqueness rules, so the word is looked up rather than decoded. A
    /// column reveals whatever its nine symbols decode to, matching theme
    /// words only by coincidence.
    ///
    /// The scan is idempotent: lines already in
    /// [`discovered_lines`](Game::discovered_lines) are never re-emitted,
    /// so the caller may scan as rarely or as often as it likes.
    pub fn scan_completed_lines(&mut self) -> Vec<Discovery> {
        let mut discoveries = Vec::new();
        for line in Line::ALL {
            if self.discovered.contains(line) {
                continue;
            }
            let Some(word) = self.line_word(line) else {
                continue;
            };
            self.discovered.insert(line);
            debug!("discovered {word} on {line}");
            discoveries.push(Discovery { line, word });
        }
        if self.is_complete() {
            info!("all {TOTAL_WORDS} words discovered");
        }
        discoveries
    }

    /// Suggests the next move: the first empty cell in row-major order
    /// together with the theme letter that belongs there.
    ///
    /// Returns `None` when the grid is full. Every call counts against
    /// [`hints_used`](Game::hints_used), whether or not the caller acts on
    /// the result.
    pub fn hint(&mut self) -> Option<Hint> {
        self.hints_used += 1;
        let position = Position::ALL
            .into_iter()
            .find(|&pos| self.cell(pos).is_empty())?;
        let letter = self.theme.letter(position);
        let hint = Hint {
            position,
            letter,
            symbol: Symbol::from_letter(letter),
        };
        debug!("hint: {letter} at {position}");
        Some(hint)
    }

    fn find_conflict(&self, pos: Position, symbol: Symbol) -> Option<PlaceError> {
        // The target cell itself is skipped, which is what makes
        // overwriting a filled cell with the same symbol legal.
        for col in 0..9 {
            let other = Position::new(pos.row(), col);
            if other != pos && self.cell(other).symbol() == Some(symbol) {
                return Some(PlaceError::DuplicateInRow);
            }
        }
        for row in 0..9 {
            let other = Position::new(row, pos.col());
            if other != pos && self.cell(other).symbol() == Some(symbol) {
                return Some(PlaceError::DuplicateInColumn);
            }
        }
        for other in pos.box_positions() {
            if other != pos && self.cell(other).symbol() == Some(symbol) {
                return Some(PlaceError::DuplicateInBox);
            }
        }
        None
    }

    fn line_word(&self, line: Line) -> Option<String> {
        let mut letters = String::with_capacity(9);
        for pos in line.positions() {
            letters.push(self.cell(pos).symbol()?.letter());
        }
        match line {
            Line::Row { index } => Some(self.theme.word(index).to_owned()),
            Line::Column { .. } => Some(letters),
        }
    }
}

fn grid_index(pos: Position) -> usize {
    usize::from(pos.row()) * 9 + usize::from(pos.col())
}
