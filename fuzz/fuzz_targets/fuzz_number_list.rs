#![no_main]
use libfuzzer_sys::fuzz_target;
use path_data::{parse_number, parse_number_list};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let mut values: Vec<f32> = Vec::new();
        if parse_number_list(text, &mut values) && values.len() == 1 {
            // a lone number parses the same way on its own
            let trimmed = text.trim_matches([' ', '\t', '\r', '\n', ','].as_slice());
            assert_eq!(parse_number(trimmed).ok(), values.first().copied());
        }
        let _ = parse_number(text);
    }
});
