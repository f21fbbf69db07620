#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut cursor = std::io::Cursor::new(data);
    let mut ply = ply_ascii::ply::Ply::new();
    let _ = ply.read_from(&mut cursor);
});
