//! The `TextTable` type: rows plus presentation settings.
//!
//! Settings can be chained by value (`with_*`) or changed in place
//! (`set_*`). Nothing derived from the data is cached between renders.

use std::fmt;
use std::sync::Arc;

use boxtable_utils_string::WidthMode;
use serde::Serialize;

use super::border::{Decorator, UnicodeDecorator};
use super::prepare::{Prepared, prepare};
use super::render::{render_lines, render_table};
use super::types::{Alignment, DisplayKeys, Formatter, Key, Row, Value};
use crate::config::TableConfig;
use crate::error::{BoxError, TableResult};

/// A table of rows ready to be rendered as bordered text.
#[derive(Clone)]
pub struct TextTable {
    data: Vec<Row>,
    skipped_rows: usize,
    decorator: Arc<dyn Decorator>,
    indentation: String,
    display_keys: DisplayKeys,
    upper_keys: bool,
    keys_alignment: Alignment,
    values_alignment: Alignment,
    width_mode: WidthMode,
    formatter: Option<Formatter>,
}

impl Default for TextTable {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            skipped_rows: 0,
            decorator: Arc::new(UnicodeDecorator),
            indentation: String::new(),
            display_keys: DisplayKeys::Auto,
            upper_keys: true,
            keys_alignment: Alignment::Center,
            values_alignment: Alignment::Left,
            width_mode: WidthMode::Scripts,
            formatter: None,
        }
    }
}

impl fmt::Debug for TextTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextTable")
            .field("rows", &self.data.len())
            .field("skipped_rows", &self.skipped_rows)
            .field("decorator", &self.decorator)
            .field("indentation", &self.indentation)
            .field("display_keys", &self.display_keys)
            .field("upper_keys", &self.upper_keys)
            .field("keys_alignment", &self.keys_alignment)
            .field("values_alignment", &self.values_alignment)
            .field("width_mode", &self.width_mode)
            .field("formatter", &self.formatter.is_some())
            .finish()
    }
}

impl TextTable {
    /// Creates an empty table with default settings: Unicode borders, no
    /// indentation, automatic upper-cased centered header, left-aligned data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table from already-normalized rows.
    pub fn from_rows(rows: impl IntoIterator<Item = Row>) -> Self {
        Self::new().with_rows(rows)
    }

    /// Creates a table from a JSON document (see [`TextTable::set_json`]).
    pub fn from_json(data: Value) -> Self {
        let mut table = Self::new();
        table.set_json(data);
        table
    }

    /// Creates a table from serializable records (see [`TextTable::set_records`]).
    pub fn from_records<T: Serialize>(records: &[T]) -> TableResult<Self> {
        let mut table = Self::new();
        table.set_records(records)?;
        Ok(table)
    }

    // ------------------------------------------------------------
    // Data
    // ------------------------------------------------------------

    pub fn with_rows(mut self, rows: impl IntoIterator<Item = Row>) -> Self {
        self.set_rows(rows);
        self
    }

    /// Replaces the table data.
    pub fn set_rows(&mut self, rows: impl IntoIterator<Item = Row>) -> &mut Self {
        self.data = rows.into_iter().collect();
        self.skipped_rows = 0;
        self
    }

    /// Replaces the table data with the rows of a JSON array, or with the
    /// values of a JSON object whose members are rows.
    ///
    /// Objects and arrays become rows; any other element is skipped with a
    /// warning and counted in [`TextTable::skipped_rows`]. A document that is
    /// neither an array nor an object yields an empty table and counts as one
    /// skipped element.
    pub fn set_json(&mut self, data: Value) -> &mut Self {
        match data {
            Value::Array(items) => self.set_values(items),
            Value::Object(map) => self.set_values(map.into_iter().map(|(_, row)| row).collect()),
            other => {
                tracing::warn!(kind = json_kind(&other), "Table data is not a collection, ignoring it");
                self.data.clear();
                self.skipped_rows = 1;
                self
            }
        }
    }

    /// Replaces the table data with serializable records.
    ///
    /// Records that do not serialize to a mapping or sequence are skipped
    /// like malformed JSON rows.
    pub fn set_records<T: Serialize>(&mut self, records: &[T]) -> TableResult<&mut Self> {
        let values = records
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.set_values(values))
    }

    fn set_values(&mut self, values: Vec<Value>) -> &mut Self {
        let mut rows = Vec::with_capacity(values.len());
        let mut skipped = 0;
        for (index, value) in values.into_iter().enumerate() {
            let kind = json_kind(&value);
            match Row::from_json(value) {
                Some(row) => rows.push(row),
                None => {
                    tracing::warn!(index, kind, "Skipping row that is not a mapping or sequence");
                    skipped += 1;
                }
            }
        }
        self.data = rows;
        self.skipped_rows = skipped;
        self
    }

    pub fn data(&self) -> &[Row] {
        &self.data
    }

    /// Number of input elements dropped by the last data update because they
    /// were not row-like.
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    // ------------------------------------------------------------
    // Settings
    // ------------------------------------------------------------

    /// Applies every setting from a configuration, keeping the data.
    pub fn with_config(mut self, config: &TableConfig) -> Self {
        self.apply_config(config);
        self
    }

    pub fn apply_config(&mut self, config: &TableConfig) -> &mut Self {
        self.decorator = config.decorator.decorator();
        self.indentation = config.indentation.clone();
        self.display_keys = config.display_keys;
        self.upper_keys = config.upper_keys;
        self.keys_alignment = config.keys_alignment;
        self.values_alignment = config.values_alignment;
        self.width_mode = config.width_mode;
        self
    }

    pub fn with_decorator(mut self, decorator: impl Decorator + 'static) -> Self {
        self.set_decorator(decorator);
        self
    }

    pub fn set_decorator(&mut self, decorator: impl Decorator + 'static) -> &mut Self {
        self.decorator = Arc::new(decorator);
        self
    }

    /// Uses an already shared decorator.
    pub fn set_shared_decorator(&mut self, decorator: Arc<dyn Decorator>) -> &mut Self {
        self.decorator = decorator;
        self
    }

    pub fn decorator(&self) -> &dyn Decorator {
        self.decorator.as_ref()
    }

    pub fn with_indentation(mut self, indentation: impl Into<String>) -> Self {
        self.set_indentation(indentation);
        self
    }

    /// Prefix written before every output line.
    pub fn set_indentation(&mut self, indentation: impl Into<String>) -> &mut Self {
        self.indentation = indentation.into();
        self
    }

    pub fn indentation(&self) -> &str {
        &self.indentation
    }

    pub fn with_display_keys(mut self, display_keys: impl Into<DisplayKeys>) -> Self {
        self.set_display_keys(display_keys);
        self
    }

    /// Header display mode. Accepts a `bool` or a [`DisplayKeys`].
    pub fn set_display_keys(&mut self, display_keys: impl Into<DisplayKeys>) -> &mut Self {
        self.display_keys = display_keys.into();
        self
    }

    pub fn display_keys(&self) -> DisplayKeys {
        self.display_keys
    }

    pub fn with_upper_keys(mut self, upper_keys: bool) -> Self {
        self.set_upper_keys(upper_keys);
        self
    }

    pub fn set_upper_keys(&mut self, upper_keys: bool) -> &mut Self {
        self.upper_keys = upper_keys;
        self
    }

    pub fn upper_keys(&self) -> bool {
        self.upper_keys
    }

    pub fn with_keys_alignment(mut self, alignment: Alignment) -> Self {
        self.set_keys_alignment(alignment);
        self
    }

    /// Alignment of header labels.
    pub fn set_keys_alignment(&mut self, alignment: Alignment) -> &mut Self {
        self.keys_alignment = alignment;
        self
    }

    pub fn keys_alignment(&self) -> Alignment {
        self.keys_alignment
    }

    pub fn with_values_alignment(mut self, alignment: Alignment) -> Self {
        self.set_values_alignment(alignment);
        self
    }

    /// Alignment of data cells.
    pub fn set_values_alignment(&mut self, alignment: Alignment) -> &mut Self {
        self.values_alignment = alignment;
        self
    }

    pub fn values_alignment(&self) -> Alignment {
        self.values_alignment
    }

    pub fn with_width_mode(mut self, mode: WidthMode) -> Self {
        self.set_width_mode(mode);
        self
    }

    pub fn set_width_mode(&mut self, mode: WidthMode) -> &mut Self {
        self.width_mode = mode;
        self
    }

    pub fn width_mode(&self) -> WidthMode {
        self.width_mode
    }

    pub fn with_formatter<F, E>(mut self, formatter: F) -> Self
    where
        F: Fn(&Row, &Key, &Value) -> Result<String, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        self.set_formatter(formatter);
        self
    }

    /// Installs a value formatter.
    ///
    /// It is called once per present cell on every render, with the original
    /// row, and returns the text to display. An error aborts the render.
    pub fn set_formatter<F, E>(&mut self, formatter: F) -> &mut Self
    where
        F: Fn(&Row, &Key, &Value) -> Result<String, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        self.formatter = Some(Arc::new(
            move |row: &Row, key: &Key, value: &Value| -> Result<String, BoxError> {
                formatter(row, key, value).map_err(Into::into)
            },
        ));
        self
    }

    /// Removes the value formatter; cells are shown as their plain text.
    pub fn clear_formatter(&mut self) -> &mut Self {
        self.formatter = None;
        self
    }

    pub fn formatter(&self) -> Option<&Formatter> {
        self.formatter.as_ref()
    }

    // ------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------

    /// Column keys, widths and cell text as the next render would see them.
    pub fn prepare(&self) -> TableResult<Prepared> {
        prepare(
            &self.data,
            self.formatter.as_ref(),
            self.upper_keys,
            self.width_mode,
        )
    }

    /// Renders the table. Calling this repeatedly yields identical output.
    pub fn render(&self) -> TableResult<String> {
        render_table(self)
    }

    /// Replaces the data with `rows`, then renders.
    pub fn render_data(&mut self, rows: impl IntoIterator<Item = Row>) -> TableResult<String> {
        self.set_rows(rows);
        self.render()
    }

    /// Physical output lines, indentation included, without terminators.
    pub fn lines(&self) -> TableResult<Vec<String>> {
        render_lines(self)
    }
}

impl fmt::Display for TextTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.render().map_err(|err| {
            tracing::error!(error = %err, "Failed to render table");
            fmt::Error
        })?;
        f.write_str(&rendered)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
