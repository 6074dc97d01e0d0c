//! Rejection reasons for engine operations.
//!
//! Every mutating operation returns a discriminated result instead of
//! panicking; the presenter turns these reasons into user-visible text
//! (the `Display` strings are stable and usable as-is).

/// Why a placement was rejected.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum PlaceError {
    /// Row or column outside 0-8, or value outside 1-9. A correct caller
    /// never produces this.
    #[display("coordinates or symbol value out of range")]
    OutOfRange,
    /// The target cell is a pre-filled clue.
    #[display("cannot change a pre-filled cell")]
    CellLocked,
    /// The symbol already occurs elsewhere in the same row.
    #[display("symbol already present in this row")]
    DuplicateInRow,
    /// The symbol already occurs elsewhere in the same column.
    #[display("symbol already present in this column")]
    DuplicateInColumn,
    /// The symbol already occurs elsewhere in the same 3×3 box.
    #[display("symbol already present in this box")]
    DuplicateInBox,
}

/// Why a clear was rejected.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum ClearError {
    /// Row or column outside 0-8.
    #[display("coordinates out of range")]
    OutOfRange,
    /// The target cell is a pre-filled clue.
    #[display("cannot clear a pre-filled cell")]
    CellLocked,
    /// The target cell holds no symbol.
    #[display("cell is already empty")]
    CellAlreadyEmpty,
}
