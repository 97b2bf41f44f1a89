//! Fundamental data types used throughout grook

use std::{
    fmt::Display,
    num::Wrapping,
    ops::{AddAssign, SubAssign},
};
use thiserror::Error;

/// Error type for cursor movement and tape access
#[derive(Debug, Clone, Copy, Error, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum CursorError {
    /// The cursor is to the left of cell 0.
    #[error("cursor moved left past the start of the tape")]
    BeforeTapeStart,
    /// The cursor is at or past the cell count of the tape.
    #[error("cursor moved right past the end of the tape")]
    PastTapeEnd,
}

/// Newtype for the tape cursor (the "location" register of a running
/// program).
///
/// Signed so that a shift off the left edge stays representable and can be
/// reported instead of wrapping an unsigned index.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Cursor(pub i64);

impl Cursor {
    pub fn new(val: i64) -> Self {
        Self(val)
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

impl From<i32> for Cursor {
    fn from(value: i32) -> Self {
        Self(value as i64)
    }
}

impl From<i64> for Cursor {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Cursor> for i64 {
    fn from(value: Cursor) -> Self {
        value.0
    }
}

impl TryFrom<Cursor> for usize {
    type Error = CursorError;

    fn try_from(value: Cursor) -> Result<Self, Self::Error> {
        if value.0 < 0 {
            Err(CursorError::BeforeTapeStart)
        } else {
            Ok(value.0 as Self)
        }
    }
}

impl AddAssign<i64> for Cursor {
    fn add_assign(&mut self, rhs: i64) {
        self.0 += rhs;
    }
}

impl SubAssign<i64> for Cursor {
    fn sub_assign(&mut self, rhs: i64) {
        self.0 -= rhs;
    }
}

impl Display for Cursor {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A grook memory cell (u8 with wrapping semantics).
///
/// Increment and decrement wrap modulo 256, and output writes the cell as a
/// raw byte, so every reachable cell value is a valid output value.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Cell(Wrapping<u8>);

impl AddAssign for Cell {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Cell {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Self(Wrapping::<u8>(value.rem_euclid(256) as u8))
    }
}

impl From<u8> for Cell {
    fn from(value: u8) -> Self {
        Self(Wrapping::<u8>(value))
    }
}

impl From<Cell> for u8 {
    fn from(value: Cell) -> Self {
        value.0 .0
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, Cursor, CursorError};

    #[test]
    fn test_cell_wrapping() {
        let mut cell = Cell::from(255u8);
        cell += 1.into();
        assert_eq!(cell, 0.into());
        cell -= 1.into();
        assert_eq!(cell, 255.into());
        assert_eq!(Cell::from(-1), 255.into());
        assert_eq!(u8::from(Cell::from(300)), 44);
    }

    #[test]
    fn test_cursor_conversions() {
        let mut cursor = Cursor::new(0);
        cursor -= 1;
        assert!(cursor.is_negative());
        assert_eq!(usize::try_from(cursor), Err(CursorError::BeforeTapeStart));
        cursor += 3;
        assert_eq!(usize::try_from(cursor), Ok(2));
    }
}
