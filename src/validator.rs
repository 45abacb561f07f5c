//! Field-check accumulator used by every input validation pass.
//!
//! A [`Validator`] collects at most one message per field. The first failing
//! check for a field wins; later failures for the same field are ignored so
//! clients see the most fundamental problem first.

use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;
use std::sync::LazyLock;

use regex::Regex;

/// Per-field validation errors, ordered by field name.
pub type FieldErrors = BTreeMap<String, String>;

/// Accumulates named field errors across a series of checks.
///
/// Create a fresh `Validator` for each validation pass.
#[derive(Debug, Default)]
pub struct Validator {
    errors: FieldErrors,
}

impl Validator {
    /// Creates a validator with no recorded errors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when no check has failed.
    #[must_use]
    pub fn valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Records `message` against `field` unless the field already has one.
    pub fn add_error(&mut self, field: &str, message: &str) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    /// Records `message` against `field` when `ok` is `false`.
    pub fn check(&mut self, ok: bool, field: &str, message: &str) {
        if !ok {
            self.add_error(field, message);
        }
    }

    /// Returns the recorded errors.
    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Consumes the validator, returning the recorded errors.
    #[must_use]
    pub fn into_errors(self) -> FieldErrors {
        self.errors
    }
}

/// Returns `true` if `value` appears in `permitted`.
#[must_use]
pub fn permitted_value<T: PartialEq>(value: &T, permitted: &[T]) -> bool {
    permitted.contains(value)
}

/// Returns `true` if every element of `values` is distinct.
#[must_use]
pub fn unique<T: Eq + Hash>(values: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(values.len());
    values.iter().all(|v| seen.insert(v))
}

/// Local part, then a dotted domain whose labels are 1 to 63 alphanumerics
/// or inner hyphens.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$";

static EMAIL_RX: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(EMAIL_PATTERN).ok());

/// Returns `true` if `value` is a plausible email address of at most 254
/// bytes.
#[must_use]
pub fn looks_like_email(value: &str) -> bool {
    value.len() <= 254
        && EMAIL_RX
            .as_ref()
            .is_some_and(|rx| rx.is_match(value))
}
