//! Table rendering functions.
//!
//! Contains functions for rendering a [`TextTable`] to bordered text lines.

use boxtable_utils_string::WidthMode;
use indexmap::IndexMap;

use super::border::Decorator;
use super::builder::TextTable;
use super::prepare::{Prepared, header_label, prepare};
use super::types::{Alignment, CELL_PADDING, Key};
use super::utils::{align_text, value_to_lines};
use crate::error::TableResult;

/// Line terminator appended after every rendered line.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Line terminator appended after every rendered line.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Renders a table to a single string, one terminated line per physical line.
///
/// # Returns
/// The complete table including the trailing line terminator, or the
/// formatter's error if a cell failed to format.
pub fn render_table(table: &TextTable) -> TableResult<String> {
    let lines = render_lines(table)?;

    let capacity = lines.iter().map(|l| l.len() + LINE_ENDING.len()).sum();
    let mut output = String::with_capacity(capacity);
    for line in &lines {
        output.push_str(line);
        output.push_str(LINE_ENDING);
    }

    Ok(output)
}

/// Renders a table to its physical lines, indentation included, without
/// line terminators.
pub fn render_lines(table: &TextTable) -> TableResult<Vec<String>> {
    let prepared = prepare(
        table.data(),
        table.formatter(),
        table.upper_keys(),
        table.width_mode(),
    )?;

    let keys: Vec<Key> = prepared.keys().cloned().collect();
    let show_header = table.display_keys().resolve(&keys);
    let decorator = table.decorator();
    let mode = table.width_mode();

    let mut lines = Vec::new();

    // Top border: ┌──────┬──────┐
    lines.push(render_horizontal_line(
        &prepared,
        decorator.top_left(),
        decorator.horizontal(),
        decorator.horizontal_down(),
        decorator.top_right(),
    ));

    if show_header {
        let header: IndexMap<Key, String> = keys
            .iter()
            .map(|key| (key.clone(), header_label(key, table.upper_keys())))
            .collect();
        lines.extend(render_row(
            &header,
            &prepared,
            decorator,
            table.keys_alignment(),
            mode,
        ));

        // Header separator: ├──────┼──────┤
        lines.push(render_horizontal_line(
            &prepared,
            decorator.vertical_right(),
            decorator.horizontal(),
            decorator.cross(),
            decorator.vertical_left(),
        ));
    }

    for row in prepared.rows() {
        lines.extend(render_row(
            row,
            &prepared,
            decorator,
            table.values_alignment(),
            mode,
        ));
    }

    // Bottom border: └──────┴──────┘
    lines.push(render_horizontal_line(
        &prepared,
        decorator.bottom_left(),
        decorator.horizontal(),
        decorator.horizontal_up(),
        decorator.bottom_right(),
    ));

    let indentation = table.indentation();
    if !indentation.is_empty() {
        for line in &mut lines {
            line.insert_str(0, indentation);
        }
    }

    tracing::debug!(
        columns = prepared.num_columns(),
        rows = prepared.rows().len(),
        lines = lines.len(),
        header = show_header,
        "Rendered table"
    );

    Ok(lines)
}

/// Renders a horizontal border line.
///
/// # Arguments
/// * `prepared` - Column keys and widths
/// * `left` - Left corner/junction glyph
/// * `horizontal` - Line glyph repeated across each column
/// * `mid` - Junction glyph between columns
/// * `right` - Right corner/junction glyph
fn render_horizontal_line(
    prepared: &Prepared,
    left: &str,
    horizontal: &str,
    mid: &str,
    right: &str,
) -> String {
    let mut line = String::from(left);
    let count = prepared.num_columns();

    for (i, &width) in prepared.columns().values().enumerate() {
        // Each column segment: padding + content + padding
        line.push_str(&horizontal.repeat(width + 2 * CELL_PADDING));

        if i < count - 1 {
            line.push_str(mid);
        }
    }

    line.push_str(right);
    line
}

/// Renders one logical row as one or more physical lines.
///
/// The tallest cell sets the number of lines; shorter cells and cells missing
/// from the row are blank on the extra lines.
fn render_row(
    cells: &IndexMap<Key, String>,
    prepared: &Prepared,
    decorator: &dyn Decorator,
    alignment: Alignment,
    mode: WidthMode,
) -> Vec<String> {
    let columns: Vec<Vec<&str>> = prepared
        .keys()
        .map(|key| {
            cells
                .get(key)
                .map(|text| value_to_lines(text))
                .unwrap_or_else(|| vec![""])
        })
        .collect();
    let height = columns.iter().map(Vec::len).max().unwrap_or(1).max(1);

    let padding = " ".repeat(CELL_PADDING);
    let vertical = decorator.vertical();

    (0..height)
        .map(|i| {
            let mut line = String::from(vertical);

            for (lines, &width) in columns.iter().zip(prepared.columns().values()) {
                let content = lines.get(i).copied().unwrap_or("");
                line.push_str(&padding);
                line.push_str(&align_text(content, width, alignment, mode));
                line.push_str(&padding);
                line.push_str(vertical);
            }

            if columns.is_empty() {
                line.push_str(vertical);
            }

            line
        })
        .collect()
}
