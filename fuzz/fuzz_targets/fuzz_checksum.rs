#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — any non-TIN input is simply false.
        let _ = rnokpp::checksum_ok(s);
    }
});
