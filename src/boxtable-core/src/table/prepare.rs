//! Column discovery and width calculation.
//!
//! Runs once per render and produces scratch state for that render only:
//! the ordered column keys, their widths, and the cell text of every row.

use boxtable_utils_string::WidthMode;
use indexmap::IndexMap;

use super::types::{Formatter, Key, Row};
use super::utils::{value_text, value_to_lines};
use crate::error::{TableError, TableResult};

/// Output of [`prepare`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Prepared {
    /// Column key → content width, in first-appearance order.
    columns: IndexMap<Key, usize>,
    /// Display text per row, keyed by column.
    rows: Vec<IndexMap<Key, String>>,
}

impl Prepared {
    /// Ordered, de-duplicated column keys.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &Key> {
        self.columns.keys()
    }

    /// Content width of a column (borders and padding excluded).
    pub fn width(&self, key: &Key) -> usize {
        self.columns.get(key).copied().unwrap_or(0)
    }

    /// Column keys paired with their widths.
    pub fn columns(&self) -> &IndexMap<Key, usize> {
        &self.columns
    }

    /// Prepared rows, in input order.
    pub fn rows(&self) -> &[IndexMap<Key, String>] {
        &self.rows
    }

    #[inline]
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Widens a column to fit every line of `text`.
    fn fit(&mut self, key: &Key, text: &str, mode: WidthMode) {
        let widest = value_to_lines(text)
            .into_iter()
            .map(|line| mode.width(line))
            .max()
            .unwrap_or(0);
        let width = self.columns.entry(key.clone()).or_insert(0);
        if widest > *width {
            *width = widest;
        }
    }
}

/// Header text for a column key, as it will be drawn.
pub(crate) fn header_label(key: &Key, upper_keys: bool) -> String {
    let label = key.label();
    if upper_keys {
        label.to_uppercase()
    } else {
        label.into_owned()
    }
}

/// Prepares rows for rendering.
///
/// 1. Applies the formatter (if any) to every present cell of a working copy.
/// 2. Collects column keys in first-appearance order across all rows.
/// 3. Starts each column at the width of its header label.
/// 4. Widens each column to its widest cell line.
///
/// # Arguments
/// * `rows` - The input rows; left untouched
/// * `formatter` - Optional per-cell value formatter
/// * `upper_keys` - Whether header labels are drawn upper-cased
/// * `mode` - How display width is measured
pub fn prepare(
    rows: &[Row],
    formatter: Option<&Formatter>,
    upper_keys: bool,
    mode: WidthMode,
) -> TableResult<Prepared> {
    let mut texts = Vec::with_capacity(rows.len());
    for row in rows {
        let mut cells = IndexMap::with_capacity(row.len());
        for (key, value) in row {
            let text = match formatter {
                Some(format_cell) => format_cell(row, key, value).map_err(TableError::Formatter)?,
                None => value_text(value).into_owned(),
            };
            cells.insert(key.clone(), text);
        }
        texts.push(cells);
    }

    let mut prepared = Prepared::default();

    for cells in &texts {
        for key in cells.keys() {
            if !prepared.columns.contains_key(key) {
                prepared.columns.insert(key.clone(), 0);
            }
        }
    }

    let keys: Vec<Key> = prepared.columns.keys().cloned().collect();
    for key in &keys {
        prepared.fit(key, &header_label(key, upper_keys), mode);
    }

    for cells in &texts {
        for (key, text) in cells {
            prepared.fit(key, text, mode);
        }
    }

    tracing::trace!(columns = ?prepared.columns, "Computed column widths");

    prepared.rows = texts;
    Ok(prepared)
}
