//! Display width utilities for boxtable.
//!
//! Terminal cells are fixed-width, but strings are not: a Han, Hiragana,
//! Katakana or Hangul character occupies two columns. Everything that lines
//! up text in a table goes through [`display_width`] (or
//! [`WidthMode::width`]) so that byte counts never leak into layout.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

static WIDE_SCRIPT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{Han}\p{Katakana}\p{Hiragana}\p{Hangul}]").expect("Invalid wide script regex")
});

/// Strategy used to measure the display width of a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidthMode {
    /// One column per scalar value, two for Han, Hiragana, Katakana and Hangul.
    #[default]
    Scripts,
    /// East Asian Width tables from `unicode-width` (emoji wide, combining marks zero).
    Unicode,
}

impl WidthMode {
    /// Measure `s` under this mode.
    pub fn width(self, s: &str) -> usize {
        match self {
            WidthMode::Scripts => display_width(s),
            WidthMode::Unicode => s.width(),
        }
    }
}

impl FromStr for WidthMode {
    type Err = UnknownWidthMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "scripts" | "cjk" => Ok(WidthMode::Scripts),
            "unicode" => Ok(WidthMode::Unicode),
            _ => Err(UnknownWidthMode(s.to_string())),
        }
    }
}

/// Returned when parsing an unrecognised width mode name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown width mode '{0}' (expected 'scripts' or 'unicode')")]
pub struct UnknownWidthMode(pub String);

/// Count the wide-script characters in a string.
pub fn count_wide(s: &str) -> usize {
    WIDE_SCRIPT_REGEX.find_iter(s).count()
}

/// Count the display width of a string.
///
/// Every Unicode scalar value counts as one column, wide-script characters
/// count as two.
pub fn display_width(s: &str) -> usize {
    s.chars().count() + count_wide(s)
}
