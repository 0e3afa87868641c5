//! Field-level validation for task records.
//!
//! All checks are whole-string regular expression matches:
//!
//! | Field                                | Pattern                 |
//! |--------------------------------------|-------------------------|
//! | name, description, priority, status | `[a-zA-Z\s\x1C-\x1F]+`  |
//! | date                                 | `\d{4}-\d{2}-\d{2}`     |
//!
//! `\s` is Unicode `White_Space`. The information separators U+001C to
//! U+001F are not in that set but are listed explicitly, so the whitespace
//! accepted here is the same set Python's `str.isspace()` accepts.
//!
//! The empty string never matches. Dates are checked for shape only, so
//! `2024-13-99` is accepted.

use regex::Regex;
use std::sync::OnceLock;

static TEXT_PATTERN: OnceLock<Regex> = OnceLock::new();
static DATE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn text_pattern() -> &'static Regex {
    TEXT_PATTERN.get_or_init(|| Regex::new(r"^[a-zA-Z\s\x1C-\x1F]+$").expect("text pattern is valid"))
}

fn date_pattern() -> &'static Regex {
    DATE_PATTERN.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern is valid"))
}

/// Letters and whitespace only, at least one character.
pub fn is_valid_name(name: &str) -> bool {
    text_pattern().is_match(name)
}

/// Same rule as [`is_valid_name`]; used for description, priority and status.
pub fn is_valid_text(text: &str) -> bool {
    text_pattern().is_match(text)
}

/// Exactly `YYYY-MM-DD` in digits, no calendar check.
pub fn is_valid_date(date: &str) -> bool {
    date_pattern().is_match(date)
}
