//! Phrase scanner for grook source text.
//!
//! Every instruction is spelled as two Groot sentences; the pair of
//! sentence terminators selects the instruction. The scanner is tolerant of
//! formatting noise: words and sentences may be separated by any run of
//! whitespace, including line breaks, and anything that is not part of a
//! phrase is reported and skipped rather than aborting the scan.

use thiserror::Error;

/// The eight instruction kinds of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum TokenKind {
    /// Add one to the current cell
    Increment,
    /// Subtract one from the current cell
    Decrement,
    /// Move the cursor one cell left
    ShiftLeft,
    /// Move the cursor one cell right
    ShiftRight,
    /// Write the current cell to the output sink
    Output,
    /// Read one byte of input into the current cell
    Input,
    /// Start of a loop body
    OpenLoop,
    /// End of a loop body
    CloseLoop,
}

impl TokenKind {
    /// The canonical spelling of this instruction.
    pub fn phrase(self) -> &'static str {
        match self {
            TokenKind::Increment => "I am Groot. I am Groot.",
            TokenKind::Decrement => "I am Groot! I am Groot!",
            TokenKind::ShiftLeft => "I am Groot. I am Groot?",
            TokenKind::ShiftRight => "I am Groot? I am Groot.",
            TokenKind::Output => "I am Groot! I am Groot?",
            TokenKind::Input => "I am Groot? I am Groot!",
            TokenKind::OpenLoop => "I am Groot! I am Groot.",
            TokenKind::CloseLoop => "I am Groot. I am Groot!",
        }
    }

    /// Look up the instruction selected by a pair of sentence terminators.
    /// `??` selects nothing and is a lexical error.
    fn from_terminators(first: char, second: char) -> Option<Self> {
        match (first, second) {
            ('.', '.') => Some(Self::Increment),
            ('!', '!') => Some(Self::Decrement),
            ('.', '?') => Some(Self::ShiftLeft),
            ('?', '.') => Some(Self::ShiftRight),
            ('!', '?') => Some(Self::Output),
            ('?', '!') => Some(Self::Input),
            ('!', '.') => Some(Self::OpenLoop),
            ('.', '!') => Some(Self::CloseLoop),
            _ => None,
        }
    }
}

/// One matched phrase: the instruction kind, the exact source text of the
/// match (internal whitespace preserved) and the line the phrase starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
}

/// A character that no phrase match could start from. Recoverable: the
/// scanner skips the character and resumes.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("line {line}: no instruction phrase at {found:?}")]
pub struct LexError {
    pub line: usize,
    pub found: char,
}

/// Scanner over one source text. Single pass; construct a new scanner to
/// restart from the beginning.
#[derive(Debug, Clone)]
pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(&c) = self.chars.get(self.pos) {
            if !c.is_whitespace() {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.pos += 1;
        }
    }

    /// Match a run of whitespace starting at `pos`. Returns the position
    /// after the run and the newlines crossed, or `None` if the run is
    /// empty (the grammar requires whitespace between words).
    fn whitespace_run(&self, mut pos: usize) -> Option<(usize, usize)> {
        let start = pos;
        let mut newlines = 0;
        while let Some(&c) = self.chars.get(pos) {
            if !c.is_whitespace() {
                break;
            }
            if c == '\n' {
                newlines += 1;
            }
            pos += 1;
        }
        (pos > start).then_some((pos, newlines))
    }

    /// Match one Groot sentence (`I am Groot` plus a terminator) starting
    /// at `pos`. Returns the position after the terminator, the newlines
    /// crossed and the terminator itself.
    fn sentence(&self, mut pos: usize) -> Option<(usize, usize, char)> {
        let mut newlines = 0;
        for (i, word) in ["I", "am", "Groot"].iter().enumerate() {
            if i > 0 {
                let (next, nl) = self.whitespace_run(pos)?;
                pos = next;
                newlines += nl;
            }
            for expected in word.chars() {
                if self.chars.get(pos) != Some(&expected) {
                    return None;
                }
                pos += 1;
            }
        }
        match self.chars.get(pos) {
            Some(&t @ ('.' | '!' | '?')) => Some((pos + 1, newlines, t)),
            _ => None,
        }
    }

    /// Match a full two-sentence phrase at the current position.
    fn phrase(&self) -> Option<(usize, usize, TokenKind)> {
        let (pos, nl1, first) = self.sentence(self.pos)?;
        let (pos, nl2) = self.whitespace_run(pos)?;
        let (end, nl3, second) = self.sentence(pos)?;
        let kind = TokenKind::from_terminators(first, second)?;
        Some((end, nl1 + nl2 + nl3, kind))
    }

    pub fn next_token(&mut self) -> Option<Result<Token, LexError>> {
        self.skip_whitespace();
        let start = self.pos;
        let found = *self.chars.get(self.pos)?;
        if let Some((end, newlines, kind)) = self.phrase() {
            let text: String = self.chars[start..end].iter().collect();
            let token = Token {
                kind,
                text,
                line: self.line,
            };
            self.pos = end;
            self.line += newlines;
            return Some(Ok(token));
        }
        // No phrase starts here. Report the character, step past it and
        // let the next call rescan.
        self.pos += 1;
        Some(Err(LexError {
            line: self.line,
            found,
        }))
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Scan a whole source text, partitioning tokens from the diagnostics that
/// were recovered from along the way.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<LexError>) {
    let mut tokens = vec![];
    let mut errors = vec![];
    for item in Lexer::new(source) {
        match item {
            Ok(token) => tokens.push(token),
            Err(err) => errors.push(err),
        }
    }
    (tokens, errors)
}
