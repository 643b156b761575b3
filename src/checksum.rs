//! The RNOKPP control-digit scheme.

/// Position-aligned weights applied to the first nine digits.
const WEIGHTS: [i32; 9] = [-1, 5, 7, 9, 4, 6, 10, 5, 7];

/// Check the control digit of a ten-digit TIN.
///
/// The control value is `(sum mod 11) mod 10`, where `sum` is the weighted
/// sum of the first nine digits (a negative remainder is shifted into
/// `0..=10` before the second reduction). Input that is not exactly ten
/// ASCII digits returns `false` rather than failing, so the function stays
/// safe to call on unvalidated strings.
///
/// ```
/// assert!(rnokpp::checksum_ok("3036045681"));
/// assert!(!rnokpp::checksum_ok("1234567890"));
/// assert!(!rnokpp::checksum_ok("303604568"));
/// ```
pub fn checksum_ok(tin: &str) -> bool {
    let digits = tin.as_bytes();
    if digits.len() != 10 || !digits.iter().all(u8::is_ascii_digit) {
        return false;
    }

    let sum: i32 = digits[..9]
        .iter()
        .zip(WEIGHTS)
        .map(|(&d, w)| i32::from(d - b'0') * w)
        .sum();

    let mut control = sum % 11;
    if control < 0 {
        control += 11;
    }
    control % 10 == i32::from(digits[9] - b'0')
}
