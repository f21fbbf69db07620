#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let p = ply_ascii::parser::Parser::new();
        let _ = p.read_header(text);
    }
});
