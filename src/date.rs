//! Birth-date codec: the TIN's leading five digits count days from a
//! fixed epoch.

use chrono::{Datelike, Days, NaiveDate};

use crate::error::{FailureKind, TinError};

/// Day zero of the encoding: 1899-12-31.
fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1899, 12, 31).expect("1899-12-31 is a valid date")
}

/// Earliest birth date considered plausible.
fn plausible_floor() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).expect("1900-01-01 is a valid date")
}

/// The calendar date `days` days after 1899-12-31.
///
/// Offsets past the supported calendar range saturate at
/// [`NaiveDate::MAX`]; the plausibility check rejects them anyway.
///
/// ```
/// use chrono::NaiveDate;
///
/// assert_eq!(rnokpp::days_to_date(1), NaiveDate::from_ymd_opt(1900, 1, 1).unwrap());
/// assert_eq!(rnokpp::days_to_date(30360), NaiveDate::from_ymd_opt(1983, 2, 14).unwrap());
/// ```
pub fn days_to_date(days: u32) -> NaiveDate {
    epoch()
        .checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX)
}

/// Decode the birth date encoded in a TIN's leading five digits.
pub fn decode_birth_date(tin: &str) -> Result<NaiveDate, TinError> {
    let prefix = tin.get(..5).ok_or_else(|| {
        TinError::new(
            FailureKind::Length,
            tin,
            "need at least five digits to decode a birth date",
        )
    })?;
    if !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TinError::new(
            FailureKind::NonDigit,
            tin,
            "birth-date prefix must be numeric",
        ));
    }
    // Five digits always fit in u32.
    let days = prefix.parse::<u32>().unwrap_or(0);
    Ok(days_to_date(days))
}

/// Whether a decoded birth date is believable relative to `now`.
///
/// Rejects dates before 1900-01-01, dates after `now`, and, when
/// `max_age_years` is nonzero, dates more than `max_age_years` calendar
/// years before `now`. The age bound subtracts whole calendar years rather
/// than counting elapsed days; a Feb 29 reference date normalizes to Mar 1.
pub fn is_birth_date_plausible(date: NaiveDate, now: NaiveDate, max_age_years: u32) -> bool {
    if date < plausible_floor() || date > now {
        return false;
    }
    if max_age_years > 0 && date < years_before(now, max_age_years) {
        return false;
    }
    true
}

fn years_before(now: NaiveDate, years: u32) -> NaiveDate {
    let year = now.year().saturating_sub_unsigned(years);
    now.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(NaiveDate::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_zero_is_the_epoch() {
        assert_eq!(days_to_date(0), date(1899, 12, 31));
    }

    #[test]
    fn known_offsets() {
        assert_eq!(days_to_date(1), date(1900, 1, 1));
        assert_eq!(days_to_date(29411), date(1980, 7, 10));
        assert_eq!(days_to_date(30360), date(1983, 2, 14));
        assert_eq!(days_to_date(36524), date(1999, 12, 31));
    }

    #[test]
    fn leap_day_offset() {
        assert_eq!(days_to_date(36584), date(2000, 2, 29));
    }

    #[test]
    fn huge_offset_saturates() {
        assert_eq!(days_to_date(u32::MAX), NaiveDate::MAX);
    }

    #[test]
    fn decode_reads_leading_five_digits() {
        assert_eq!(decode_birth_date("3036045681").unwrap(), date(1983, 2, 14));
        assert_eq!(decode_birth_date("30360").unwrap(), date(1983, 2, 14));
    }

    #[test]
    fn decode_rejects_short_input() {
        let err = decode_birth_date("3036").unwrap_err();
        assert_eq!(err.kind, FailureKind::Length);
    }

    #[test]
    fn decode_rejects_non_digit_prefix() {
        let err = decode_birth_date("3A360 rest ignored").unwrap_err();
        assert_eq!(err.kind, FailureKind::NonDigit);
        let err = decode_birth_date("+1234567890").unwrap_err();
        assert_eq!(err.kind, FailureKind::NonDigit);
    }

    #[test]
    fn plausible_inside_range() {
        let now = date(2026, 6, 1);
        assert!(is_birth_date_plausible(date(1983, 2, 14), now, 130));
        assert!(is_birth_date_plausible(date(1900, 1, 1), now, 0));
    }

    #[test]
    fn implausible_before_1900() {
        let now = date(2026, 6, 1);
        assert!(!is_birth_date_plausible(date(1899, 12, 31), now, 0));
    }

    #[test]
    fn implausible_in_the_future() {
        let now = date(2026, 6, 1);
        assert!(!is_birth_date_plausible(date(2026, 6, 2), now, 0));
        assert!(is_birth_date_plausible(date(2026, 6, 1), now, 0));
    }

    #[test]
    fn age_cap_uses_calendar_years() {
        let now = date(2026, 6, 1);
        // Exactly at the bound is still plausible.
        assert!(is_birth_date_plausible(date(1906, 6, 1), now, 120));
        assert!(!is_birth_date_plausible(date(1906, 5, 31), now, 120));
        // Cap of zero disables the check.
        assert!(is_birth_date_plausible(date(1906, 5, 31), now, 0));
    }

    #[test]
    fn leap_day_reference_normalizes_to_march() {
        // 2024-02-29 minus 1 year lands on 2023-03-01.
        let now = date(2024, 2, 29);
        assert!(!is_birth_date_plausible(date(2023, 2, 28), now, 1));
        assert!(is_birth_date_plausible(date(2023, 3, 1), now, 1));
    }
}
