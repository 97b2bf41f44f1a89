//! Helpers shared by the unit tests, the integration tests and the fuzz
//! targets.

use std::io::Read;

use crate::ast::Block;
use crate::interpreter::{execute, ExecutionError};
use crate::tape::Tape;
use crate::types::Cursor;

/// Everything observable about one finished run.
#[derive(Debug, PartialEq)]
pub struct ExecutionState {
    pub result: Option<Result<(), ExecutionError>>,
    pub tape: Tape,
    pub cursor: Cursor,
    pub output: Vec<u8>,
}

impl Default for ExecutionState {
    fn default() -> Self {
        Self {
            result: None,
            tape: Tape::default(),
            cursor: Cursor::default(),
            output: Vec::new(),
        }
    }
}

/// Run a program against a fresh default tape, capturing the full end
/// state.
pub fn test_execute(program: &Block, input: &mut impl Read) -> ExecutionState {
    let mut exec = ExecutionState::default();
    exec.result = Some(execute(
        program,
        &mut exec.tape,
        &mut exec.cursor,
        input,
        &mut exec.output,
    ));
    exec
}
