//! Table presentation configuration.
//!
//! Loadable from TOML, either at the top level or under a `[table]` section:
//!
//! ```toml
//! [table]
//! indentation = "  "
//! display-keys = "auto"
//! upper-keys = true
//! keys-alignment = "center"
//! values-alignment = "left"
//! decorator = "unicode"
//! width-mode = "scripts"
//! ```

use std::path::Path;

use boxtable_utils_string::WidthMode;
use serde::{Deserialize, Serialize};

use crate::error::{TableError, TableResult};
use crate::table::{Alignment, DecoratorKind, DisplayKeys};

/// Presentation settings for a [`crate::TextTable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct TableConfig {
    /// Prefix written before every output line.
    pub indentation: String,
    /// Header row display: `true`, `false` or `"auto"`.
    pub display_keys: DisplayKeys,
    /// Upper-case header labels.
    pub upper_keys: bool,
    pub keys_alignment: Alignment,
    pub values_alignment: Alignment,
    pub decorator: DecoratorKind,
    pub width_mode: WidthMode,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            indentation: String::new(),
            display_keys: DisplayKeys::Auto,
            upper_keys: true,
            keys_alignment: Alignment::Center,
            values_alignment: Alignment::Left,
            decorator: DecoratorKind::Unicode,
            width_mode: WidthMode::Scripts,
        }
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from TOML text.
    pub fn from_toml_str(content: &str) -> TableResult<Self> {
        let table: toml::Table = content.parse()?;

        // Settings may live under [table] or at the top level
        if let Some(section) = table.get("table") {
            return Ok(section.clone().try_into::<Self>()?);
        }

        Ok(toml::Value::Table(table).try_into::<Self>()?)
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> TableResult<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|err| TableError::read_config(path, err))?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "Loaded table configuration");
        Ok(config)
    }
}
