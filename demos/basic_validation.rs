use chrono::{TimeZone, Utc};
use rnokpp::Validator;

fn main() {
    // ── Default configuration ─────────────────────────────────────────
    println!("=== Basic Validation ===\n");

    let validator = Validator::new();
    let inputs = [
        "3036045681",       // valid, female, born 1983-02-14
        "30-36-04-56-81",   // separators are stripped
        "1234567890",       // plausible date, bad checksum
        "1111111111",       // all digits identical
        "12A",              // too short once normalized
    ];

    for input in &inputs {
        match validator.validate(input, None) {
            Ok(v) => println!(
                "  {input:>16} => valid={}, checksum={}, born={}, sex={}",
                v.valid,
                v.checksum_ok,
                v.birth_date.format("%Y-%m-%d"),
                v.sex
            ),
            Err(e) => println!("  {input:>16} => REJECTED: {e}"),
        }
    }

    // ── Strict mode with a known birth date ───────────────────────────
    println!("\n=== Strict Mode ===\n");

    let dob = Utc.with_ymd_and_hms(1983, 2, 14, 0, 0, 0).unwrap();
    let strict = Validator::builder().strict(true).build();

    match strict.validate("3036045681", Some(dob)) {
        Ok(v) => println!("  matching date: valid={}, matched={}", v.valid, v.dob_matched),
        Err(e) => println!("  matching date: REJECTED: {e}"),
    }

    let wrong = Utc.with_ymd_and_hms(1983, 2, 15, 0, 0, 0).unwrap();
    match strict.validate("3036045681", Some(wrong)) {
        Ok(v) => println!("  wrong date:    valid={}, matched={}", v.valid, v.dob_matched),
        Err(e) => println!("  wrong date:    REJECTED: {e}"),
    }

    // ── Setter-style configuration, equivalent to the builder ─────────
    println!("\n=== Setter-Style Configuration ===\n");

    let mut capped = Validator::new();
    capped.set_max_age(120).set_strict(false);

    match capped.validate("0000112345", None) {
        Ok(v) => println!("  1900 birth: valid={}", v.valid),
        Err(e) => println!("  1900 birth: REJECTED: {e}"),
    }
}
