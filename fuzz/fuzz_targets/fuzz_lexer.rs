#![no_main]

use grook::Lexer;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(source) = std::str::from_utf8(data) else {
        return;
    };
    // The scanner must terminate without panicking, whatever the input.
    for _ in Lexer::new(source) {}
});
