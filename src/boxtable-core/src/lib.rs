//! Bordered text tables for terminal display.
//!
//! Rows are normalized into ordered key/value maps, columns are discovered
//! in first-appearance order, and every line is padded by display width so
//! that wide (CJK) glyphs and multi-line cells stay aligned.

pub mod config;
pub mod error;
pub mod table;

pub use boxtable_utils_string::{WidthMode, display_width};
pub use config::TableConfig;
pub use error::{BoxError, TableError, TableResult};
pub use table::{
    Alignment, AsciiDecorator, BlankDecorator, Decorator, DecoratorKind, DisplayKeys, Key,
    Prepared, Row, TextTable, UnicodeDecorator, Value,
};
