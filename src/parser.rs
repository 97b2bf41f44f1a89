//! Recursive descent parser for the phrase token stream.

use std::slice::Iter;

use thiserror::Error;

use crate::ast::{Block, Node, Op, Program};
use crate::lexer::{tokenize, LexError, Token, TokenKind};

/// Errors during parsing. All of these are hard failures: no program is
/// produced.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// A CloseLoop with no open loop to match it.
    #[error("loop closed on line {line} was never opened")]
    UnmatchedCloseLoop { line: usize },
    /// An OpenLoop that never gets its CloseLoop.
    #[error("loop opened on line {line} is never closed")]
    UnclosedLoop { line: usize },
    /// The grammar requires at least one command between the loop markers.
    #[error("loop opened on line {line} has an empty body")]
    EmptyLoop { line: usize },
    /// The grammar requires at least one command in a program.
    #[error("source text contains no commands")]
    EmptyProgram,
}

struct Parser<'a> {
    tokens: Iter<'a, Token>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens: tokens.iter(),
        }
    }

    fn parse_program(mut self) -> Result<Program, ParseError> {
        let block = self.parse_block(None)?;
        if block.nodes.is_empty() {
            return Err(ParseError::EmptyProgram);
        }
        Ok(block)
    }

    /// Parse commands until the end of the stream, or until the CloseLoop
    /// matching the OpenLoop on `open_line` when inside a loop.
    fn parse_block(&mut self, open_line: Option<usize>) -> Result<Block, ParseError> {
        let mut nodes = vec![];
        while let Some(token) = self.tokens.next() {
            let op = match token.kind {
                TokenKind::Increment => Op::Increment,
                TokenKind::Decrement => Op::Decrement,
                TokenKind::ShiftLeft => Op::ShiftLeft,
                TokenKind::ShiftRight => Op::ShiftRight,
                TokenKind::Output => Op::Output,
                TokenKind::Input => Op::Input,
                TokenKind::OpenLoop => {
                    let body = self.parse_block(Some(token.line))?;
                    if body.nodes.is_empty() {
                        return Err(ParseError::EmptyLoop { line: token.line });
                    }
                    Op::Loop(body)
                }
                TokenKind::CloseLoop => match open_line {
                    Some(_) => return Ok(Block { nodes }),
                    None => return Err(ParseError::UnmatchedCloseLoop { line: token.line }),
                },
            };
            nodes.push(Node {
                line: token.line,
                op,
            });
        }
        match open_line {
            Some(line) => Err(ParseError::UnclosedLoop { line }),
            None => Ok(Block { nodes }),
        }
    }
}

/// Parse a token stream into a program.
pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
    Parser::new(tokens).parse_program()
}

/// Scan and parse source text in one step. Lexical diagnostics are
/// recovered from and returned alongside the program for the caller to
/// surface.
pub fn parse_source(source: &str) -> Result<(Program, Vec<LexError>), ParseError> {
    let (tokens, diagnostics) = tokenize(source);
    Ok((parse(&tokens)?, diagnostics))
}
