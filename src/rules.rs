//! The rule pipeline: an ordered list of checks over a normalized TIN
//! string, evaluated until the first failure.

use std::fmt;

use crate::error::{FailureKind, TinError};

/// A single check over a normalized TIN string.
///
/// A rule returns `Ok(())` to let validation continue, or a [`TinError`]
/// to stop it. Caller-supplied rules usually build their error with
/// [`TinError::custom`] so the failure stays distinguishable:
///
/// ```
/// use rnokpp::{Rule, TinError};
///
/// let no_leading_nines: Rule = Box::new(|tin| {
///     if tin.starts_with("99999") {
///         return Err(TinError::custom("reserved-range", tin, "reserved prefix"));
///     }
///     Ok(())
/// });
/// ```
pub type Rule = Box<dyn Fn(&str) -> Result<(), TinError> + Send + Sync>;

/// An ordered rule list with first-failure short-circuit evaluation.
#[derive(Default)]
pub struct Rules {
    rules: Vec<Rule>,
}

impl Rules {
    /// An empty rule list.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule, returning the list for chaining.
    #[must_use]
    pub fn add(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Append a rule in place.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Number of rules in the list.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the list holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run the rules in insertion order, returning the first failure and
    /// skipping everything after it.
    pub fn validate(&self, value: &str) -> Result<(), TinError> {
        for rule in &self.rules {
            rule(value)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rules").field("len", &self.rules.len()).finish()
    }
}

/// The structural checks every TIN must pass before custom rules run:
/// digits only, exactly ten of them, not all identical.
pub(crate) fn structural() -> Rules {
    Rules::new()
        .add(all_digits())
        .add(exact_length(10))
        .add(not_all_same())
}

fn all_digits() -> Rule {
    Box::new(|value| {
        if value.bytes().all(|b| b.is_ascii_digit()) {
            Ok(())
        } else {
            Err(TinError::new(
                FailureKind::NonDigit,
                value,
                "only digits allowed",
            ))
        }
    })
}

fn exact_length(n: usize) -> Rule {
    Box::new(move |value| {
        if value.len() == n {
            Ok(())
        } else {
            Err(TinError::new(
                FailureKind::Length,
                value,
                format!("need {n} digits, got {}", value.len()),
            ))
        }
    })
}

fn not_all_same() -> Rule {
    Box::new(|value| {
        // The length rule runs first in the structural set, so `value` is
        // never empty there; standalone use still gets a sane answer.
        let Some(first) = value.bytes().next() else {
            return Err(TinError::new(FailureKind::Length, value, "empty value"));
        };
        if value.bytes().all(|b| b == first) {
            return Err(TinError::new(
                FailureKind::AllSame,
                value,
                "all digits identical",
            ));
        }
        Ok(())
    })
}
