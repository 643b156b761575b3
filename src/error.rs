use chrono::NaiveDate;
use thiserror::Error;

/// Why a TIN failed validation.
///
/// Kinds are matched with `==` or a pattern, not by message text. A failed
/// checksum is not a kind; it is reported through
/// [`Validation::checksum_ok`](crate::Validation::checksum_ok).
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FailureKind {
    /// The value under validation contains a non-digit character.
    NonDigit,
    /// The value is not exactly ten digits long.
    Length,
    /// All ten digits are identical (including the all-zeros case).
    AllSame,
    /// The decoded birth date is outside the plausible range.
    BirthOutOfRange,
    /// Strict mode: the provided birth date differs from the encoded one.
    DobMismatch,
    /// Raised by a caller-supplied rule; the string is the rule's own code.
    Custom(String),
}

/// A validation failure, carrying the offending TIN and any dates that
/// were in play when it was detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid TIN '{tin}': {message}")]
pub struct TinError {
    /// What went wrong.
    pub kind: FailureKind,
    /// The normalized TIN that triggered the failure.
    pub tin: String,
    /// Human-readable description.
    pub message: String,
    /// Birth date decoded from the TIN, if decoding had happened.
    pub decoded_dob: Option<NaiveDate>,
    /// Caller-provided birth date, if one was supplied.
    pub provided_dob: Option<NaiveDate>,
}

impl TinError {
    /// A failure without date context.
    pub fn new(kind: FailureKind, tin: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            tin: tin.into(),
            message: message.into(),
            decoded_dob: None,
            provided_dob: None,
        }
    }

    /// A failure carrying the decoded and/or provided birth dates.
    pub fn with_dates(
        kind: FailureKind,
        tin: impl Into<String>,
        message: impl Into<String>,
        decoded_dob: Option<NaiveDate>,
        provided_dob: Option<NaiveDate>,
    ) -> Self {
        Self {
            kind,
            tin: tin.into(),
            message: message.into(),
            decoded_dob,
            provided_dob,
        }
    }

    /// A failure from a caller-supplied rule, tagged with the rule's code.
    pub fn custom(
        code: impl Into<String>,
        tin: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(FailureKind::Custom(code.into()), tin, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_tin_and_message() {
        let err = TinError::new(FailureKind::Length, "12", "need 10 digits, got 2");
        assert_eq!(err.to_string(), "invalid TIN '12': need 10 digits, got 2");
    }

    #[test]
    fn custom_kind_carries_code() {
        let err = TinError::custom("banned-year", "3652412345", "1999 not allowed");
        assert_eq!(err.kind, FailureKind::Custom("banned-year".into()));
    }

    #[test]
    fn kinds_compare_by_tag() {
        let a = TinError::new(FailureKind::AllSame, "1111111111", "all digits identical");
        assert_eq!(a.kind, FailureKind::AllSame);
        assert_ne!(a.kind, FailureKind::Length);
    }
}
