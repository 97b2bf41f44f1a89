#![no_main]

use libfuzzer_sys::fuzz_target;

use grook::{parse, tokenize, ParseError, TokenKind};

fuzz_target!(|data: &[u8]| {
    let Ok(source) = std::str::from_utf8(data) else {
        return;
    };
    let (tokens, _diagnostics) = tokenize(source);

    // Replay the loop markers to predict the balance outcome.
    let mut depth = 0i64;
    let mut stray_close = false;
    for token in &tokens {
        match token.kind {
            TokenKind::OpenLoop => depth += 1,
            TokenKind::CloseLoop => {
                depth -= 1;
                if depth < 0 {
                    stray_close = true;
                    break;
                }
            }
            _ => (),
        }
    }

    match parse(&tokens) {
        Ok(program) => {
            assert!(!stray_close && depth == 0);
            assert!(program.instruction_count() <= tokens.len());
        }
        Err(ParseError::UnmatchedCloseLoop { .. }) => assert!(stray_close),
        Err(ParseError::UnclosedLoop { .. }) => assert!(!stray_close && depth > 0),
        Err(ParseError::EmptyLoop { .. }) => (),
        Err(ParseError::EmptyProgram) => assert!(tokens.is_empty()),
    }
});
