//! # Grook - an interpreter for the Groot-speak brainfuck derivative
//!
//! Eight instructions, each spelled as two "I am Groot" sentences whose
//! closing punctuation selects the instruction. This crate scans that
//! phrase text, parses it into a nested loop tree and interprets the tree
//! over a fixed-length tape of wrapping byte cells.
//!
//! **NOTE! This is a command line program. This library does NOT provide a
//! stable API, or even an API meant to be consumed by external code at
//! all.**
//!
//! You have been warned.

// Re-export some symbols.
pub use convert::from_brainfuck;
pub use interpreter::execute;
pub use interpreter::ExecutionError;
pub use lexer::tokenize;
pub use lexer::LexError;
pub use lexer::Lexer;
pub use lexer::Token;
pub use lexer::TokenKind;
pub use parser::parse;
pub use parser::parse_source;
pub use parser::ParseError;
pub use render::render_source;
pub use tape::Tape;
pub use tape::DEFAULT_TAPE_LEN;
pub use types::Cell;
pub use types::Cursor;
pub use types::CursorError;

pub mod ast;
mod convert;
mod interpreter;
mod lexer;
mod parser;
mod render;
pub mod tape;
#[doc(hidden)]
pub mod test_utils;
pub mod types;
