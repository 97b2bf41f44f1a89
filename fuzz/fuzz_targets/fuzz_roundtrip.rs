#![no_main]

use libfuzzer_sys::fuzz_target;

use grook::{parse, render_source, tokenize};

fuzz_target!(|data: &[u8]| {
    let Ok(source) = std::str::from_utf8(data) else {
        return;
    };
    let (tokens, _diagnostics) = tokenize(source);
    let Ok(program) = parse(&tokens) else {
        return;
    };

    // Canonical text must scan cleanly, reparse and hit a fixed point.
    let rendered = render_source(&program);
    let (tokens, diagnostics) = tokenize(&rendered);
    assert!(diagnostics.is_empty());
    let reparsed = parse(&tokens).expect("canonical text must reparse");
    assert_eq!(render_source(&reparsed), rendered);
});
