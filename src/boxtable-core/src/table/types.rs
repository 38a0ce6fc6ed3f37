//! Core types for table rendering.
//!
//! Contains the `Alignment`, `DisplayKeys`, `Key` and `Row` types.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
pub use serde_json::Value;

use crate::error::{BoxError, TableError, TableResult};

/// Padding on each side of cell content
pub(crate) const CELL_PADDING: usize = 1;

/// Value formatter, called once per present cell while preparing a render.
///
/// Receives the original row, the cell's key and its value, and returns the
/// text to display. An error aborts the render and is returned unchanged.
pub type Formatter = Arc<dyn Fn(&Row, &Key, &Value) -> Result<String, BoxError> + Send + Sync>;

// ============================================================
// ALIGNMENT ENUM
// ============================================================

/// Alignment for header or data cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left-align content (default)
    #[default]
    Left,
    /// Center content, extra space goes to the right
    Center,
    /// Right-align content
    Right,
}

impl FromStr for Alignment {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" => Ok(Alignment::Left),
            "center" | "centre" => Ok(Alignment::Center),
            "right" => Ok(Alignment::Right),
            _ => Err(TableError::invalid_alignment(s)),
        }
    }
}

// ============================================================
// HEADER DISPLAY MODE
// ============================================================

/// Whether the header row is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "DisplayKeysRepr", into = "DisplayKeysRepr")]
pub enum DisplayKeys {
    Always,
    Never,
    /// Draw the header iff at least one column key is a name.
    #[default]
    Auto,
}

impl DisplayKeys {
    /// Resolve against the column keys of a prepared table.
    pub fn resolve(self, keys: &[Key]) -> bool {
        match self {
            DisplayKeys::Always => true,
            DisplayKeys::Never => false,
            DisplayKeys::Auto => keys.iter().any(|key| !key.is_index()),
        }
    }
}

impl From<bool> for DisplayKeys {
    fn from(value: bool) -> Self {
        if value {
            DisplayKeys::Always
        } else {
            DisplayKeys::Never
        }
    }
}

impl FromStr for DisplayKeys {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "true" | "always" | "yes" => Ok(DisplayKeys::Always),
            "false" | "never" | "no" => Ok(DisplayKeys::Never),
            "auto" => Ok(DisplayKeys::Auto),
            _ => Err(TableError::invalid_display_keys(s)),
        }
    }
}

/// Serialized form: a boolean or the string `"auto"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum DisplayKeysRepr {
    Flag(bool),
    Text(String),
}

impl TryFrom<DisplayKeysRepr> for DisplayKeys {
    type Error = TableError;

    fn try_from(repr: DisplayKeysRepr) -> Result<Self, Self::Error> {
        match repr {
            DisplayKeysRepr::Flag(flag) => Ok(flag.into()),
            DisplayKeysRepr::Text(text) => text.parse(),
        }
    }
}

impl From<DisplayKeys> for DisplayKeysRepr {
    fn from(mode: DisplayKeys) -> Self {
        match mode {
            DisplayKeys::Always => DisplayKeysRepr::Flag(true),
            DisplayKeys::Never => DisplayKeysRepr::Flag(false),
            DisplayKeys::Auto => DisplayKeysRepr::Text("auto".to_string()),
        }
    }
}

// ============================================================
// COLUMN KEY
// ============================================================

/// A column key: either a positional index or a field name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Index(i64),
    Name(String),
}

impl Key {
    /// Parse a textual key. Canonical integers (`"0"`, `"42"`, `"-1"`, but
    /// not `"007"`, `"-0"` or `"+1"`) that fit in an `i64` become positional
    /// keys.
    pub fn parse(text: &str) -> Self {
        let digits = text.strip_prefix('-').unwrap_or(text);
        let canonical = match digits.as_bytes() {
            [b'0'] => digits.len() == text.len(),
            [b'1'..=b'9', rest @ ..] => rest.iter().all(u8::is_ascii_digit),
            _ => false,
        };
        if canonical {
            if let Ok(index) = text.parse::<i64>() {
                return Key::Index(index);
            }
        }
        Key::Name(text.to_string())
    }

    /// Build a named key without integer normalization.
    ///
    /// `Key::name("3")` and `Key::Index(3)` are different columns even though
    /// both are labelled `3`. Use [`Key::parse`] for keys that come from text.
    pub fn name(text: impl Into<String>) -> Self {
        Key::Name(text.into())
    }

    #[inline]
    pub fn is_index(&self) -> bool {
        matches!(self, Key::Index(_))
    }

    /// Header text for this key.
    pub fn label(&self) -> Cow<'_, str> {
        match self {
            Key::Index(index) => Cow::Owned(index.to_string()),
            Key::Name(name) => Cow::Borrowed(name),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{}", index),
            Key::Name(name) => f.write_str(name),
        }
    }
}

impl From<i64> for Key {
    fn from(index: i64) -> Self {
        Key::Index(index)
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        i64::try_from(index).map_or_else(|_| Key::Name(index.to_string()), Key::Index)
    }
}

impl From<&str> for Key {
    fn from(text: &str) -> Self {
        Key::parse(text)
    }
}

impl From<String> for Key {
    fn from(text: String) -> Self {
        Key::parse(&text)
    }
}

// ============================================================
// ROW
// ============================================================

/// One logical table row: an ordered mapping from column key to value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: IndexMap<Key, Value>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a cell, replacing any previous value under the same key.
    pub fn with_cell(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) {
        self.cells.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.cells.get(key)
    }

    /// Keys in this row's own order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.cells.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.cells.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Normalize a JSON value into a row.
    ///
    /// Objects keep their field order, arrays become positional rows.
    /// Anything else is not row-like and yields `None`.
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(map.into_iter().map(|(k, v)| (Key::parse(&k), v)).collect()),
            Value::Array(items) => Some(items.into_iter().enumerate().collect()),
            _ => None,
        }
    }

    /// Normalize any serializable record (struct, map, tuple) into a row.
    ///
    /// Returns `Ok(None)` when the record serializes to something that is not
    /// row-like, such as a bare string or number.
    pub fn from_record<T: Serialize + ?Sized>(record: &T) -> TableResult<Option<Self>> {
        let value = serde_json::to_value(record)?;
        Ok(Self::from_json(value))
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<Key>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (key, value) in iter {
            row.insert(key, value);
        }
        row
    }
}

impl From<IndexMap<Key, Value>> for Row {
    fn from(cells: IndexMap<Key, Value>) -> Self {
        Self { cells }
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
