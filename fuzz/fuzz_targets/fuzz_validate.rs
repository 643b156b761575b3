#![no_main]

use chrono::{TimeZone, Utc};
use libfuzzer_sys::fuzz_target;
use rnokpp::Validator;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — errors are fine, panics are bugs.
        let validator = Validator::builder()
            .strict(true)
            .now(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap())
            .build();
        let dob = Utc.with_ymd_and_hms(1983, 2, 14, 0, 0, 0).unwrap();
        let _ = validator.validate(s, None);
        let _ = validator.validate(s, Some(dob));
    }
});
