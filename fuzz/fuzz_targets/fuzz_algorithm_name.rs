#![no_main]

use libfuzzer_sys::fuzz_target;
use sortviz_core::Algorithm;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Parsing must never panic, and anything accepted must round-trip
    // through its key.
    if let Ok(algorithm) = text.parse::<Algorithm>() {
        assert_eq!(algorithm.key().parse::<Algorithm>().ok(), Some(algorithm));
        assert_eq!(algorithm.name().parse::<Algorithm>().ok(), Some(algorithm));
    }
});
