use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Sex encoded in a TIN's ninth digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Even ninth digit.
    Female,
    /// Odd ninth digit.
    Male,
}

impl Sex {
    pub(crate) fn from_digit(digit: u8) -> Self {
        if digit % 2 == 0 { Sex::Female } else { Sex::Male }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Sex::Female => "female",
            Sex::Male => "male",
        })
    }
}

/// Everything decoded from one TIN in a single validation call.
///
/// Produced fresh per call; the only state a call reads is the validator's
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    /// The TIN after digit normalization.
    pub tin: String,
    /// Decoded birth date (the encoded UTC midnight, expressed in the
    /// configured output offset).
    pub birth_date: DateTime<FixedOffset>,
    /// Sex inferred from the ninth digit.
    pub sex: Sex,
    /// Whether the control digit matches. A mismatch does not abort
    /// validation; it only clears [`Validation::valid`].
    pub checksum_ok: bool,
    /// Whether the decoded birth date passed the plausibility check.
    pub birth_date_plausible: bool,
    /// Whether a caller-provided birth date matched the decoded one by
    /// year, month, and day. `true` when no date was provided.
    pub dob_matched: bool,
    /// Overall verdict: checksum and plausibility, plus the date match in
    /// strict mode when a date was provided.
    pub valid: bool,
}
