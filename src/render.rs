//! Rendering programs back to canonical phrase text.

use crate::ast::{Block, Op};
use crate::lexer::TokenKind;

/// Render a program in canonical form: one phrase per instruction, single
/// spaces in between. Parsing the result yields a structurally identical
/// program.
pub fn render_source(program: &Block) -> String {
    let mut phrases = vec![];
    push_block(program, &mut phrases);
    phrases.join(" ")
}

fn push_block(block: &Block, out: &mut Vec<&'static str>) {
    for node in &block.nodes {
        match &node.op {
            Op::Increment => out.push(TokenKind::Increment.phrase()),
            Op::Decrement => out.push(TokenKind::Decrement.phrase()),
            Op::ShiftLeft => out.push(TokenKind::ShiftLeft.phrase()),
            Op::ShiftRight => out.push(TokenKind::ShiftRight.phrase()),
            Op::Output => out.push(TokenKind::Output.phrase()),
            Op::Input => out.push(TokenKind::Input.phrase()),
            Op::Loop(body) => {
                out.push(TokenKind::OpenLoop.phrase());
                push_block(body, out);
                out.push(TokenKind::CloseLoop.phrase());
            }
        }
    }
}
