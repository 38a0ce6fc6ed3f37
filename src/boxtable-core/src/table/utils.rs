//! Utility functions for table rendering.
//!
//! Contains text alignment, line splitting and value conversion helpers.

use std::borrow::Cow;

use boxtable_utils_string::WidthMode;

use super::types::{Alignment, Value};

/// Pads text to a given display width.
///
/// Never truncates: text already at or past `width` is returned unchanged.
/// Centering puts the odd leftover space on the right.
///
/// # Arguments
/// * `text` - The text to align
/// * `width` - The target display width
/// * `alignment` - The alignment type
/// * `mode` - How display width is measured
pub fn align_text(text: &str, width: usize, alignment: Alignment, mode: WidthMode) -> String {
    let text_width = mode.width(text);

    if text_width >= width {
        return text.to_string();
    }

    let padding = width - text_width;

    match alignment {
        Alignment::Left => {
            format!("{}{}", text, " ".repeat(padding))
        }
        Alignment::Right => {
            format!("{}{}", " ".repeat(padding), text)
        }
        Alignment::Center => {
            let left_pad = padding / 2;
            let right_pad = padding - left_pad;
            format!("{}{}{}", " ".repeat(left_pad), text, " ".repeat(right_pad))
        }
    }
}

/// Splits cell text into physical lines. Always yields at least one line.
pub fn value_to_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Textual form of an unformatted cell value.
///
/// Strings are used as-is, numbers and booleans use their JSON spelling.
/// `null`, arrays and objects have no sensible cell text and become empty.
pub fn value_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(text) => Cow::Borrowed(text),
        Value::Number(number) => Cow::Owned(number.to_string()),
        Value::Bool(flag) => Cow::Owned(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => Cow::Borrowed(""),
    }
}
