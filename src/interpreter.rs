//! Recursive AST interpreter.

use std::io::Read;
use std::io::Write;

use thiserror::Error;

use crate::ast::{Block, Op};
use crate::tape::Tape;
use crate::types::{Cursor, CursorError};

/// Error type for execution
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// The cursor left the tape.
    #[error("line {line}: {source}")]
    Cursor { line: usize, source: CursorError },
    /// Io error during program execution.
    #[error("unexpected IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PartialEq for ExecutionError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Io(l0), Self::Io(r0)) => l0.kind() == r0.kind(),
            (
                Self::Cursor {
                    line: l_line,
                    source: l_source,
                },
                Self::Cursor {
                    line: r_line,
                    source: r_source,
                },
            ) => l_line == r_line && l_source == r_source,
            _ => false,
        }
    }
}

fn at_line(line: usize) -> impl Fn(CursorError) -> ExecutionError {
    move |source| ExecutionError::Cursor { line, source }
}

/// Run a block against explicitly passed state. Recursion depth equals the
/// loop nesting depth of the program.
///
/// Cursor movement is checked the moment it happens; a program whose
/// cursor leaves the tape fails fast with the line of the offending shift.
/// A loop re-reads the cell under the cursor before every pass, so
/// non-terminating programs run until killed externally.
pub fn execute(
    code: &Block,
    tape: &mut Tape,
    cursor: &mut Cursor,
    input: &mut impl Read,
    output: &mut impl Write,
) -> Result<(), ExecutionError> {
    for node in &code.nodes {
        match &node.op {
            Op::Increment => tape
                .try_modify(*cursor, 1.into())
                .map_err(at_line(node.line))?,
            Op::Decrement => tape
                .try_modify(*cursor, (-1).into())
                .map_err(at_line(node.line))?,
            Op::ShiftLeft => {
                *cursor -= 1;
                tape.check(*cursor).map_err(at_line(node.line))?;
            }
            Op::ShiftRight => {
                *cursor += 1;
                tape.check(*cursor).map_err(at_line(node.line))?;
            }
            Op::Output => {
                let byte: u8 = tape.try_get(*cursor).map_err(at_line(node.line))?.into();
                output.write_all(&[byte])?;
            }
            Op::Input => {
                let mut tmp: [u8; 1] = [0; 1];
                // There may be a pending prompt in the output buffer.
                output.flush()?;
                let value = match input.read(&mut tmp)? {
                    0 => 0.into(),
                    _ => tmp[0].into(),
                };
                tape.try_set(*cursor, value).map_err(at_line(node.line))?;
            }
            Op::Loop(body) => {
                while tape.try_get(*cursor).map_err(at_line(node.line))? != 0.into() {
                    execute(body, tape, cursor, input, output)?;
                }
            }
        }
    }
    Ok(())
}
