use chrono::Datelike;
use rnokpp::{Rule, Rules, TinError, Validator, decode_birth_date};

/// Rule: reject TINs whose encoded birth date falls in a blackout year.
fn forbid_year(year: i32) -> Rule {
    Box::new(move |tin| {
        let dob = decode_birth_date(tin)?;
        if dob.year() == year {
            return Err(TinError::custom(
                "blackout-year",
                tin,
                format!("birth year {year} is not accepted"),
            ));
        }
        Ok(())
    })
}

/// Rule: reject a reserved registration range.
fn forbid_reserved_prefix() -> Rule {
    Box::new(|tin| {
        if tin.starts_with("99999") {
            return Err(TinError::custom("reserved-range", tin, "reserved prefix"));
        }
        Ok(())
    })
}

fn main() {
    println!("=== Custom Rules ===\n");

    // Rules run after the structural checks, in the order supplied, and
    // stop at the first failure.
    let validator = Validator::builder()
        .rules(
            Rules::new()
                .add(forbid_reserved_prefix())
                .add(forbid_year(1999)),
        )
        .build();

    let inputs = [
        "3036045681", // passes both rules
        "3652412345", // encodes 1999-12-31, a blackout year
        "9999912345", // reserved prefix fires before the year rule
        "123",        // structural failure, custom rules never run
    ];

    for input in &inputs {
        match validator.validate(input, None) {
            Ok(v) => println!(
                "  {input:>10} => valid={}, born={}",
                v.valid,
                v.birth_date.format("%Y-%m-%d")
            ),
            Err(e) => println!("  {input:>10} => REJECTED ({:?}): {e}", e.kind),
        }
    }
}
