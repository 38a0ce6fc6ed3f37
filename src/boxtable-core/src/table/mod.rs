//! Box-Drawing Table Renderer
//!
//! Renders mapping-like rows as a bordered, column-aligned text table:
//! - Full box-drawing border characters (or ASCII / blank)
//! - Column keys discovered in first-appearance order
//! - Separate header and data alignment (left, center, right)
//! - Width calculation aware of wide glyphs and multi-line cells
//! - Optional per-cell value formatter
//!
//! ## Example Output
//!
//! ```text
//! ┌──────┬─────┐
//! │ NAME │ AGE │
//! ├──────┼─────┤
//! │ Al   │ 30  │
//! │ Bo   │ 7   │
//! └──────┴─────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use boxtable_core::{Alignment, AsciiDecorator, TextTable};
//! use serde_json::json;
//!
//! let table = TextTable::from_json(json!([
//!     {"name": "Al", "age": "30"},
//!     {"name": "Bo", "age": "7"},
//! ]))
//! .with_decorator(AsciiDecorator)
//! .with_values_alignment(Alignment::Right);
//!
//! print!("{}", table.render()?);
//! ```

// Sub-modules
pub mod border;
mod builder;
mod prepare;
mod render;
#[cfg(test)]
mod tests;
mod types;
pub mod utils;

pub use border::{AsciiDecorator, BlankDecorator, Decorator, DecoratorKind, UnicodeDecorator};
pub use builder::TextTable;
pub use prepare::{Prepared, prepare};
pub use render::{LINE_ENDING, render_lines, render_table};
pub use types::{Alignment, DisplayKeys, Formatter, Key, Row, Value};
