//! The reusable validator: configuration plus the validation pipeline.

use chrono::{DateTime, FixedOffset, NaiveTime, Offset, Utc};

use crate::checksum::checksum_ok;
use crate::date::{decode_birth_date, is_birth_date_plausible};
use crate::error::{FailureKind, TinError};
use crate::rules::{self, Rule, Rules};
use crate::types::{Sex, Validation};

/// A reusable, configured RNOKPP validator.
///
/// Construct one via [`Validator::builder`], or [`Validator::new`] plus
/// the `set_*` methods, and call [`Validator::validate`] per input. Both
/// configuration styles are equivalent. A call only reads configuration,
/// so a configured validator can be shared across threads.
#[derive(Debug)]
pub struct Validator {
    now: DateTime<Utc>,
    max_age_years: u32,
    strict: bool,
    output_offset: FixedOffset,
    custom: Rules,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// A validator with defaults: `now` pinned to the current UTC time,
    /// maximum age 130, non-strict, UTC output, no custom rules.
    pub fn new() -> Self {
        Self {
            now: Utc::now(),
            max_age_years: 130,
            strict: false,
            output_offset: Utc.fix(),
            custom: Rules::new(),
        }
    }

    /// Start building a validator with explicit configuration.
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::new()
    }

    /// Cap the plausible age in years; 0 disables the cap.
    pub fn set_max_age(&mut self, years: u32) -> &mut Self {
        self.max_age_years = years;
        self
    }

    /// Treat a provided-birth-date mismatch as a hard failure.
    pub fn set_strict(&mut self, on: bool) -> &mut Self {
        self.strict = on;
        self
    }

    /// Offset in which decoded birth dates are reported.
    pub fn set_output_offset(&mut self, offset: FixedOffset) -> &mut Self {
        self.output_offset = offset;
        self
    }

    /// Pin the reference "now". Useful for tests and replays.
    pub fn set_now(&mut self, now: DateTime<Utc>) -> &mut Self {
        self.now = now;
        self
    }

    /// Replace the custom rule list.
    pub fn set_rules(&mut self, rules: Rules) -> &mut Self {
        self.custom = rules;
        self
    }

    /// Validate `raw` and decode what the TIN encodes.
    ///
    /// `raw` may contain separators or other junk; everything but ASCII
    /// digits is stripped before validation. `provided_dob` is a
    /// caller-known birth date compared (by year, month, day) against the
    /// decoded one.
    ///
    /// Structural rules run first, then custom rules, each stopping at the
    /// first failure. A failed checksum does NOT produce an error; it is
    /// reported through [`Validation::checksum_ok`] and clears
    /// [`Validation::valid`], so callers can tell a bad control digit from
    /// a structurally broken input.
    pub fn validate(
        &self,
        raw: &str,
        provided_dob: Option<DateTime<Utc>>,
    ) -> Result<Validation, TinError> {
        let tin = digits_only(raw);
        let provided_day = provided_dob.map(|d| d.date_naive());

        rules::structural().validate(&tin)?;
        self.custom.validate(&tin)?;

        // Digits 1-5 carry the day offset, digit 9 the sex parity.
        let dob = decode_birth_date(&tin)?;
        let sex = Sex::from_digit(tin.as_bytes()[8] - b'0');
        let birth_date = dob
            .and_time(NaiveTime::MIN)
            .and_utc()
            .with_timezone(&self.output_offset);

        if !is_birth_date_plausible(dob, self.now.date_naive(), self.max_age_years) {
            return Err(TinError::with_dates(
                FailureKind::BirthOutOfRange,
                &tin,
                "encoded birth date is outside the plausible range",
                Some(dob),
                provided_day,
            ));
        }

        let checksum_ok = checksum_ok(&tin);

        let dob_matched = match provided_day {
            Some(provided) => {
                let matched = provided == dob;
                if self.strict && !matched {
                    return Err(TinError::with_dates(
                        FailureKind::DobMismatch,
                        &tin,
                        "provided birth date does not match the encoded one",
                        Some(dob),
                        Some(provided),
                    ));
                }
                matched
            }
            // Nothing to compare against.
            None => true,
        };

        // Plausibility held or we would have returned above; the date
        // match only gates the verdict in strict mode.
        let mut valid = checksum_ok;
        if self.strict && provided_day.is_some() {
            valid = valid && dob_matched;
        }

        Ok(Validation {
            tin,
            birth_date,
            sex,
            checksum_ok,
            birth_date_plausible: true,
            dob_matched,
            valid,
        })
    }
}

/// Builder for [`Validator`].
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use rnokpp::Validator;
///
/// let validator = Validator::builder()
///     .max_age(120)
///     .strict(true)
///     .now(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap())
///     .build();
/// ```
#[derive(Debug)]
pub struct ValidatorBuilder {
    now: Option<DateTime<Utc>>,
    max_age_years: u32,
    strict: bool,
    output_offset: FixedOffset,
    custom: Rules,
}

impl Default for ValidatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidatorBuilder {
    /// A builder preloaded with the defaults of [`Validator::new`].
    pub fn new() -> Self {
        Self {
            now: None,
            max_age_years: 130,
            strict: false,
            output_offset: Utc.fix(),
            custom: Rules::new(),
        }
    }

    /// Cap the plausible age in years; 0 disables the cap.
    pub fn max_age(mut self, years: u32) -> Self {
        self.max_age_years = years;
        self
    }

    /// Treat a provided-birth-date mismatch as a hard failure.
    pub fn strict(mut self, on: bool) -> Self {
        self.strict = on;
        self
    }

    /// Offset in which decoded birth dates are reported.
    pub fn output_offset(mut self, offset: FixedOffset) -> Self {
        self.output_offset = offset;
        self
    }

    /// Pin the reference "now"; unset, it resolves at build time.
    pub fn now(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    /// Append one custom rule.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.custom.push(rule);
        self
    }

    /// Replace the whole custom rule list.
    pub fn rules(mut self, rules: Rules) -> Self {
        self.custom = rules;
        self
    }

    /// Finish, resolving an unpinned `now` to the current UTC time.
    pub fn build(self) -> Validator {
        Validator {
            now: self.now.unwrap_or_else(Utc::now),
            max_age_years: self.max_age_years,
            strict: self.strict,
            output_offset: self.output_offset,
            custom: self.custom,
        }
    }
}

/// Keep only ASCII digits, preserving order.
fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_only_strips_everything_else() {
        assert_eq!(digits_only("30-36-04-56-81"), "3036045681");
        assert_eq!(digits_only(" 12A34 "), "1234");
        assert_eq!(digits_only("абв"), "");
        assert_eq!(digits_only(""), "");
    }

    #[test]
    fn default_is_non_strict_with_130_year_cap() {
        let validator = Validator::new();
        assert!(!validator.strict);
        assert_eq!(validator.max_age_years, 130);
        assert_eq!(validator.output_offset, Utc.fix());
        assert!(validator.custom.is_empty());
    }

    #[test]
    fn builder_defaults_match_new() {
        let built = Validator::builder().build();
        let fresh = Validator::new();
        assert_eq!(built.max_age_years, fresh.max_age_years);
        assert_eq!(built.strict, fresh.strict);
        assert_eq!(built.output_offset, fresh.output_offset);
    }

    #[test]
    fn setters_chain() {
        let mut validator = Validator::new();
        validator.set_max_age(120).set_strict(true);
        assert_eq!(validator.max_age_years, 120);
        assert!(validator.strict);
    }
}
