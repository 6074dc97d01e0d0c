//! Core data types for the cloudoku word-sudoku puzzle.
//!
//! This crate provides the vocabulary the game engine is written in. It
//! contains no game rules of its own; it defines what a grid value, a
//! coordinate, a word line, and a theme are.
//!
//! # Overview
//!
//! - [`symbol`]: the nine grid values and the fixed letter codec that maps
//!   them onto the grid alphabet
//! - [`position`]: (row, col) coordinates with 3×3 box arithmetic
//! - [`line`]: row/column word-line identifiers and [`LineSet`], an
//!   18-bit set over them
//! - [`theme`]: validated nine-word themes, including the built-ins
//!
//! # Examples
//!
//! ```
//! use cloudoku_core::{Position, Symbol, Theme};
//!
//! let theme = Theme::builtin("animals").unwrap();
//!
//! // Row 0 of the animals theme spells ALLIGATOR; its first letter is
//! // expressible on the grid.
//! let letter = theme.letter(Position::new(0, 0));
//! assert_eq!(letter, 'A');
//! assert_eq!(Symbol::from_letter(letter), Some(Symbol::S1));
//! ```

pub mod line;
pub mod position;
pub mod symbol;
pub mod theme;

pub use self::{
    line::{Line, LineSet},
    position::Position,
    symbol::Symbol,
    theme::{Theme, ThemeError},
};
