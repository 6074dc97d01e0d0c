//! Game engine for cloudoku, a word-sudoku puzzle.
//!
//! A session is a 9×9 sudoku grid whose values print as letters; finishing
//! a row reveals the theme's word for that row, finishing a column reveals
//! whatever its letters happen to spell. This crate owns the rules: move
//! legality, the fixed clue seed, word-completion scanning, and hints.
//! Rendering and input are left to the consumer.
//!
//! # Overview
//!
//! - [`Game`] — the puzzle state and every operation on it
//! - [`CellState`] — empty / clue / player-filled cells
//! - [`PlaceError`], [`ClearError`] — enumerable rejection reasons with
//!   presenter-ready `Display` text
//! - [`Discovery`], [`Hint`] — the engine's outputs
//!
//! # Examples
//!
//! ```
//! use cloudoku_core::Theme;
//! use cloudoku_game::{Game, PlaceError};
//!
//! let mut game = Game::new(Theme::builtin("animals").unwrap());
//!
//! // The A of ALLIGATOR is a clue and cannot be touched.
//! assert_eq!(game.try_place(0, 0, 1), Err(PlaceError::CellLocked));
//!
//! // Ask the engine what belongs in the first open cell.
//! let hint = game.hint().unwrap();
//! assert_eq!(hint.letter, 'L');
//! assert_eq!(game.hints_used(), 1);
//! ```

mod cell;
mod clues;
mod error;
mod game;

pub use self::{
    cell::CellState,
    error::{ClearError, PlaceError},
    game::{Discovery, Game, Hint, TOTAL_WORDS},
};
