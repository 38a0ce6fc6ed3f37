//! Error types for table configuration and rendering.

use std::path::PathBuf;

use boxtable_utils_string::UnknownWidthMode;

/// Error type returned by a user-supplied value formatter.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias for table operations.
pub type TableResult<T> = std::result::Result<T, TableError>;

/// Errors that can occur while configuring or rendering a table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// Alignment name is not one of left, center, right.
    #[error("Invalid alignment '{0}': expected 'left', 'center' or 'right'")]
    InvalidAlignment(String),

    /// Header display mode is not one of true, false, auto.
    #[error("Invalid header display mode '{0}': expected 'true', 'false' or 'auto'")]
    InvalidDisplayKeys(String),

    /// Decorator name does not match a known border style.
    #[error("Unknown decorator '{0}': expected 'unicode', 'ascii' or 'blank'")]
    UnknownDecorator(String),

    /// Width mode name is not recognised.
    #[error(transparent)]
    InvalidWidthMode(#[from] UnknownWidthMode),

    /// The value formatter failed. The formatter's own error is preserved as-is.
    #[error(transparent)]
    Formatter(BoxError),

    /// Failed to read a configuration file.
    #[error("Failed to read table configuration '{path}': {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a configuration file.
    #[error("Failed to parse table configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Failed to convert a record into a row.
    #[error("Failed to convert record into a row: {0}")]
    Record(#[from] serde_json::Error),
}

impl TableError {
    /// Creates a new `InvalidAlignment` error.
    pub fn invalid_alignment(value: impl Into<String>) -> Self {
        Self::InvalidAlignment(value.into())
    }

    /// Creates a new `InvalidDisplayKeys` error.
    pub fn invalid_display_keys(value: impl Into<String>) -> Self {
        Self::InvalidDisplayKeys(value.into())
    }

    /// Creates a new `ReadConfig` error.
    pub fn read_config(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadConfig {
            path: path.into(),
            source,
        }
    }

    /// Creates a new `UnknownDecorator` error.
    pub fn unknown_decorator(value: impl Into<String>) -> Self {
        Self::UnknownDecorator(value.into())
    }
}
