//! Text patterns shared by the login and signup forms.
//!
//! Patterns are anchored and match the raw input: nothing is trimmed, so
//! leading or trailing whitespace fails an otherwise valid value. Digit
//! classes are ASCII-only.

#[cfg(test)]
#[path = "patterns_test.rs"]
mod patterns_test;

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static CNIC_DASHED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}-[0-9]{7}-[0-9]$").expect("dashed cnic pattern compiles"));

static CNIC_PLAIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{13}$").expect("plain cnic pattern compiles"));

/// `local@domain.tld` with no whitespace and a single `@`.
pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// `DDDDD-DDDDDDD-D` or 13 bare digits.
pub fn is_cnic(value: &str) -> bool {
    CNIC_DASHED_RE.is_match(value) || CNIC_PLAIN_RE.is_match(value)
}
