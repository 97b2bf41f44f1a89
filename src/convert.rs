//! Conversion from brainfuck punctuation to grook phrases.

use crate::lexer::TokenKind;

/// Rewrite brainfuck source as grook phrase source.
///
/// Anything that is not one of the eight command characters is comment
/// noise in brainfuck and is dropped, so the result always scans without
/// diagnostics.
pub fn from_brainfuck(source: &str) -> String {
    let phrases: Vec<&'static str> = source
        .chars()
        .filter_map(|c| match c {
            '+' => Some(TokenKind::Increment.phrase()),
            '-' => Some(TokenKind::Decrement.phrase()),
            '<' => Some(TokenKind::ShiftLeft.phrase()),
            '>' => Some(TokenKind::ShiftRight.phrase()),
            '.' => Some(TokenKind::Output.phrase()),
            ',' => Some(TokenKind::Input.phrase()),
            '[' => Some(TokenKind::OpenLoop.phrase()),
            ']' => Some(TokenKind::CloseLoop.phrase()),
            _ => None,
        })
        .collect();
    phrases.join(" ")
}

#[cfg(test)]
mod tests {
    use super::from_brainfuck;
    use crate::lexer::{tokenize, TokenKind};

    #[test]
    fn test_commands_map_to_phrases() {
        assert_eq!(
            from_brainfuck("+."),
            "I am Groot. I am Groot. I am Groot! I am Groot?"
        );
    }

    #[test]
    fn test_comment_noise_is_dropped() {
        let converted = from_brainfuck("read one byte: , (then print it) .");
        let (tokens, errors) = tokenize(&converted);
        assert!(errors.is_empty());
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![TokenKind::Input, TokenKind::Output]
        );
    }
}
