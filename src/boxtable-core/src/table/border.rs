//! Border glyphs for table rendering.
//!
//! A [`Decorator`] supplies every glyph the renderer draws around and
//! between cells. Three are provided: light Unicode box drawing, plain
//! ASCII, and blank (all spaces).

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::TableError;

/// Supplier of the border and junction glyphs used to draw a table.
///
/// Glyphs are strings so that a decorator may use multi-character or
/// multi-byte sequences. The renderer assumes each glyph occupies the
/// same number of columns as the horizontal glyph.
pub trait Decorator: fmt::Debug + Send + Sync {
    /// Top-left corner: ┌
    fn top_left(&self) -> &str;
    /// Top-right corner: ┐
    fn top_right(&self) -> &str;
    /// Bottom-left corner: └
    fn bottom_left(&self) -> &str;
    /// Bottom-right corner: ┘
    fn bottom_right(&self) -> &str;
    /// Horizontal line: ─
    fn horizontal(&self) -> &str;
    /// Vertical line: │
    fn vertical(&self) -> &str;
    /// Cross intersection: ┼
    fn cross(&self) -> &str;
    /// Right edge junction: ┤
    fn vertical_left(&self) -> &str;
    /// Left edge junction: ├
    fn vertical_right(&self) -> &str;
    /// Bottom junction: ┴
    fn horizontal_up(&self) -> &str;
    /// Top junction: ┬
    fn horizontal_down(&self) -> &str;
}

/// Light Unicode box-drawing borders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnicodeDecorator;

impl Decorator for UnicodeDecorator {
    fn top_left(&self) -> &str {
        "\u{250C}"
    }
    fn top_right(&self) -> &str {
        "\u{2510}"
    }
    fn bottom_left(&self) -> &str {
        "\u{2514}"
    }
    fn bottom_right(&self) -> &str {
        "\u{2518}"
    }
    fn horizontal(&self) -> &str {
        "\u{2500}"
    }
    fn vertical(&self) -> &str {
        "\u{2502}"
    }
    fn cross(&self) -> &str {
        "\u{253C}"
    }
    fn vertical_left(&self) -> &str {
        "\u{2524}"
    }
    fn vertical_right(&self) -> &str {
        "\u{251C}"
    }
    fn horizontal_up(&self) -> &str {
        "\u{2534}"
    }
    fn horizontal_down(&self) -> &str {
        "\u{252C}"
    }
}

/// ASCII borders: every junction is `+`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AsciiDecorator;

impl Decorator for AsciiDecorator {
    fn top_left(&self) -> &str {
        "+"
    }
    fn top_right(&self) -> &str {
        "+"
    }
    fn bottom_left(&self) -> &str {
        "+"
    }
    fn bottom_right(&self) -> &str {
        "+"
    }
    fn horizontal(&self) -> &str {
        "-"
    }
    fn vertical(&self) -> &str {
        "|"
    }
    fn cross(&self) -> &str {
        "+"
    }
    fn vertical_left(&self) -> &str {
        "+"
    }
    fn vertical_right(&self) -> &str {
        "+"
    }
    fn horizontal_up(&self) -> &str {
        "+"
    }
    fn horizontal_down(&self) -> &str {
        "+"
    }
}

/// Invisible borders. Keeps the column layout without drawing lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlankDecorator;

impl Decorator for BlankDecorator {
    fn top_left(&self) -> &str {
        " "
    }
    fn top_right(&self) -> &str {
        " "
    }
    fn bottom_left(&self) -> &str {
        " "
    }
    fn bottom_right(&self) -> &str {
        " "
    }
    fn horizontal(&self) -> &str {
        " "
    }
    fn vertical(&self) -> &str {
        " "
    }
    fn cross(&self) -> &str {
        " "
    }
    fn vertical_left(&self) -> &str {
        " "
    }
    fn vertical_right(&self) -> &str {
        " "
    }
    fn horizontal_up(&self) -> &str {
        " "
    }
    fn horizontal_down(&self) -> &str {
        " "
    }
}

/// Named built-in decorators, for configuration files and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecoratorKind {
    #[default]
    Unicode,
    Ascii,
    Blank,
}

impl DecoratorKind {
    /// Instantiate the decorator this name refers to.
    pub fn decorator(self) -> Arc<dyn Decorator> {
        match self {
            DecoratorKind::Unicode => Arc::new(UnicodeDecorator),
            DecoratorKind::Ascii => Arc::new(AsciiDecorator),
            DecoratorKind::Blank => Arc::new(BlankDecorator),
        }
    }
}

impl FromStr for DecoratorKind {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "unicode" | "box" => Ok(DecoratorKind::Unicode),
            "ascii" => Ok(DecoratorKind::Ascii),
            "blank" | "none" => Ok(DecoratorKind::Blank),
            _ => Err(TableError::unknown_decorator(s)),
        }
    }
}
