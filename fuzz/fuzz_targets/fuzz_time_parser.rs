#![no_main]

use libfuzzer_sys::fuzz_target;
use timecheck::timecode::{ParseOptions, parse_time};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        for strict_ranges in [false, true] {
            if let Ok(seconds) = parse_time(input, ParseOptions { strict_ranges }) {
                assert!(seconds >= 0.0);
            }
        }
    }
});
