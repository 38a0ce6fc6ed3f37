//! Reading row documents from files or stdin.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use boxtable_core::Value;

/// Supported input document formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    #[default]
    Json,
    Yaml,
}

impl InputFormat {
    /// Guess the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "json" => Some(InputFormat::Json),
            "yaml" | "yml" => Some(InputFormat::Yaml),
            _ => None,
        }
    }
}

/// Parse document text into a value shaped as a list of rows.
///
/// A top-level object is wrapped as a single row; any other top-level value
/// is passed through and left to the table to accept or ignore.
pub fn parse_document(text: &str, format: InputFormat) -> Result<Value> {
    let value: Value = match format {
        InputFormat::Json => serde_json::from_str(text).context("Failed to parse JSON input")?,
        InputFormat::Yaml => serde_yaml::from_str(text).context("Failed to parse YAML input")?,
    };

    Ok(match value {
        Value::Object(_) => Value::Array(vec![value]),
        other => other,
    })
}

/// Read and parse the input document.
///
/// `None` or `-` reads stdin. Without an explicit format the file extension
/// decides, falling back to JSON.
pub fn read_document(path: Option<&Path>, format: Option<InputFormat>) -> Result<Value> {
    let (text, detected) = match path {
        Some(path) if path != Path::new("-") => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file '{}'", path.display()))?;
            (text, InputFormat::from_path(path))
        }
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read input from stdin")?;
            (text, None)
        }
    };

    let format = format.or(detected).unwrap_or_default();
    tracing::debug!(?format, bytes = text.len(), "Read input document");
    parse_document(&text, format)
}
