//! # rnokpp
//!
//! Validation and decoding of Ukrainian taxpayer registration numbers
//! (РНОКПП, often called TIN or ІПН).
//!
//! A TIN is ten decimal digits: the first five encode the holder's birth
//! date as days since 1899-12-31, digits six to nine are a registration
//! sequence whose last digit carries sex parity (even is female, odd is
//! male), and the tenth digit is a weighted checksum.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use rnokpp::{Sex, Validator};
//!
//! let validator = Validator::builder()
//!     .strict(true)
//!     .now(Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap())
//!     .build();
//!
//! let dob = Utc.with_ymd_and_hms(1983, 2, 14, 0, 0, 0).unwrap();
//! let report = validator.validate("3036045681", Some(dob)).unwrap();
//!
//! assert!(report.valid);
//! assert!(report.checksum_ok);
//! assert_eq!(report.sex, Sex::Female);
//! ```
//!
//! ## Failure kinds
//!
//! Hard failures come back as a [`TinError`] tagged with a [`FailureKind`]:
//!
//! | Kind | Trigger |
//! |------|---------|
//! | `NonDigit` | a non-digit survived into the value under validation |
//! | `Length` | not exactly ten digits after normalization |
//! | `AllSame` | all ten digits identical (including all zeros) |
//! | `BirthOutOfRange` | decoded birth date before 1900, in the future, or past the age cap |
//! | `DobMismatch` | strict mode and the provided birth date differs from the encoded one |
//! | `Custom` | raised by a caller-supplied rule |
//!
//! A failed checksum is deliberately NOT an error: `validate` still returns
//! a [`Validation`] with `checksum_ok = false`, so callers can tell a bad
//! control digit apart from a structurally broken input.

mod checksum;
mod date;
mod error;
mod rules;
mod types;
mod validator;

pub use checksum::*;
pub use date::*;
pub use error::*;
pub use rules::*;
pub use types::*;
pub use validator::*;
