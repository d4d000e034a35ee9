#![no_main]
use libfuzzer_sys::fuzz_target;
use icy_infostring::parser;

fuzz_target!(|data: &[u8]| {
    // Scanning must never panic, whatever the peer sends
    let _ = parser::is_valid(data);
    let _ = parser::value_for_key(data, b"name");
    let _ = parser::find_largest_key(data);
    for pair in parser::pairs(data) {
        let _ = pair.display_line();
    }
});
