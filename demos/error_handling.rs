use chrono::{TimeZone, Utc};
use rnokpp::{FailureKind, Validator};

fn main() {
    println!("=== Branching on Failure Kinds ===\n");

    let validator = Validator::builder()
        .strict(true)
        .max_age(120)
        .build();

    let dob = Utc.with_ymd_and_hms(1983, 2, 15, 0, 0, 0).unwrap();
    let inputs = [
        ("12A", None),
        ("1111111111", None),
        ("abcdefghij", None),
        ("0000112345", None),
        ("3036045681", Some(dob)), // encoded date is 1983-02-14, one day off
    ];

    for (input, provided) in inputs {
        let err = match validator.validate(input, provided) {
            Ok(v) => {
                println!("  {input:>12} => ok, valid={}", v.valid);
                continue;
            }
            Err(e) => e,
        };

        // Kinds are plain enum values, so callers branch with a match
        // instead of parsing message text.
        let advice = match &err.kind {
            FailureKind::NonDigit => "strip or fix the non-digit characters",
            FailureKind::Length => "a TIN is exactly ten digits",
            FailureKind::AllSame => "repeated digits are never issued",
            FailureKind::BirthOutOfRange => "the encoded birth date is not believable",
            FailureKind::DobMismatch => "the person's documents disagree with the TIN",
            FailureKind::Custom(code) => {
                println!("  {input:>12} => custom rule '{code}': {err}");
                continue;
            }
            _ => "unrecognized failure",
        };
        println!("  {input:>12} => {err}");
        println!("  {:>12}    hint: {advice}", "");
        if let Some(decoded) = err.decoded_dob {
            println!("  {:>12}    decoded: {decoded}, provided: {:?}", "", err.provided_dob);
        }
    }
}
