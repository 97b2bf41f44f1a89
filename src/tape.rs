//! The grook memory tape

use crate::{Cell, Cursor, CursorError};

/// Cell count of the reference tape.
pub const DEFAULT_TAPE_LEN: usize = 100;

/// A fixed-length tape of zero-initialized cells.
///
/// The length is fixed for the lifetime of a run; no instruction resizes
/// it. All accessors bounds-check the cursor and report a [`CursorError`]
/// instead of wrapping around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: Vec<Cell>,
}

impl Tape {
    pub fn new(len: usize) -> Self {
        Self {
            cells: vec![Cell::default(); len],
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The full cell array, for inspecting the final state of a run.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn index(&self, cursor: Cursor) -> Result<usize, CursorError> {
        let idx: usize = cursor.try_into()?;
        if idx >= self.cells.len() {
            return Err(CursorError::PastTapeEnd);
        }
        Ok(idx)
    }

    /// Check that the cursor is on the tape without touching a cell.
    pub fn check(&self, cursor: Cursor) -> Result<(), CursorError> {
        self.index(cursor).map(|_| ())
    }

    pub fn try_get(&self, cursor: Cursor) -> Result<Cell, CursorError> {
        Ok(self.cells[self.index(cursor)?])
    }

    pub fn try_set(&mut self, cursor: Cursor, value: Cell) -> Result<(), CursorError> {
        let idx = self.index(cursor)?;
        self.cells[idx] = value;
        Ok(())
    }

    pub fn try_modify(&mut self, cursor: Cursor, diff: Cell) -> Result<(), CursorError> {
        let idx = self.index(cursor)?;
        self.cells[idx] += diff;
        Ok(())
    }
}

impl Default for Tape {
    fn default() -> Self {
        Self::new(DEFAULT_TAPE_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::{Tape, DEFAULT_TAPE_LEN};
    use crate::types::{Cursor, CursorError};

    #[test]
    fn test_tape_access() {
        let mut tape = Tape::default();
        assert_eq!(tape.len(), DEFAULT_TAPE_LEN);
        tape.try_set(2.into(), 5.into()).unwrap();
        assert_eq!(tape.try_get(2.into()), Ok(5.into()));
        tape.try_modify(2.into(), 255.into()).unwrap();
        assert_eq!(tape.try_get(2.into()), Ok(4.into()));
        assert_eq!(tape.try_get(0.into()), Ok(0.into()));
    }

    #[test]
    fn test_tape_bounds() {
        let mut tape = Tape::new(3);
        assert_eq!(
            tape.try_get((-1).into()),
            Err(CursorError::BeforeTapeStart)
        );
        assert_eq!(
            tape.try_set(3.into(), 1.into()),
            Err(CursorError::PastTapeEnd)
        );
        assert_eq!(
            tape.try_modify(7.into(), 1.into()),
            Err(CursorError::PastTapeEnd)
        );
        assert_eq!(tape.check(Cursor::new(2)), Ok(()));
        assert_eq!(tape.check(Cursor::new(3)), Err(CursorError::PastTapeEnd));
    }
}
