//! CLI argument structures and parsing.
//!
//! Defines all command-line argument structures using clap.

use std::path::PathBuf;

use boxtable_core::{Alignment, DecoratorKind, DisplayKeys, TableConfig, WidthMode};
use clap::Parser;

use crate::input::InputFormat;

/// Log verbosity level for CLI output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    /// Only show errors
    Error,
    /// Show warnings and errors (default)
    #[default]
    Warn,
    /// Show informational messages, warnings, and errors
    Info,
    /// Show debug messages and above
    Debug,
    /// Show all messages including trace-level details
    Trace,
}

impl LogLevel {
    /// Convert to tracing filter string.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Parse from string (case-insensitive).
    pub fn from_str_loose(s: &str) -> Option<LogLevel> {
        match s.to_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// boxtable - render rows as a bordered text table
///
/// Reads a JSON or YAML array of rows (objects or arrays) and prints it as
/// a column-aligned table. A single object is rendered as one row.
#[derive(Parser, Debug)]
#[command(name = "boxtable")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input file; reads stdin when omitted or "-"
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Input format (default: from file extension, else JSON)
    #[arg(long, short = 'f', value_enum)]
    pub format: Option<InputFormat>,

    /// TOML file with table settings; flags below override it
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Prefix written before every line
    #[arg(long, value_name = "TEXT", help_heading = "Table")]
    pub indent: Option<String>,

    /// Header row: true, false or auto
    #[arg(long, value_name = "MODE", help_heading = "Table")]
    pub display_keys: Option<DisplayKeys>,

    /// Keep header labels as written instead of upper-casing them
    #[arg(long, help_heading = "Table")]
    pub no_upper_keys: bool,

    /// Header alignment: left, center or right
    #[arg(long, value_name = "ALIGN", help_heading = "Table")]
    pub keys_align: Option<Alignment>,

    /// Data alignment: left, center or right
    #[arg(long, value_name = "ALIGN", help_heading = "Table")]
    pub values_align: Option<Alignment>,

    /// Border style: unicode, ascii or blank
    #[arg(long, value_name = "STYLE", help_heading = "Table")]
    pub decorator: Option<DecoratorKind>,

    /// Width measurement: scripts or unicode
    #[arg(long, value_name = "MODE", help_heading = "Table")]
    pub width_mode: Option<WidthMode>,

    /// Log verbosity (logs go to stderr)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Enable verbose output (same as --log-level debug)
    #[arg(long = "verbose", short = 'v')]
    pub verbose: bool,

    /// Enable trace-level logging for debugging
    #[arg(long = "trace")]
    pub trace: bool,
}

impl Cli {
    /// Overlay command-line settings on a loaded configuration.
    pub fn apply_overrides(&self, config: &mut TableConfig) {
        if let Some(indent) = &self.indent {
            config.indentation = indent.clone();
        }
        if let Some(display_keys) = self.display_keys {
            config.display_keys = display_keys;
        }
        if self.no_upper_keys {
            config.upper_keys = false;
        }
        if let Some(alignment) = self.keys_align {
            config.keys_alignment = alignment;
        }
        if let Some(alignment) = self.values_align {
            config.values_alignment = alignment;
        }
        if let Some(decorator) = self.decorator {
            config.decorator = decorator;
        }
        if let Some(mode) = self.width_mode {
            config.width_mode = mode;
        }
    }

    /// Effective log level from flags, falling back to `BOXTABLE_LOG_LEVEL`.
    pub fn effective_log_level(&self) -> LogLevel {
        if self.trace {
            LogLevel::Trace
        } else if self.verbose {
            LogLevel::Debug
        } else if let Ok(env_level) = std::env::var("BOXTABLE_LOG_LEVEL") {
            LogLevel::from_str_loose(&env_level).unwrap_or(self.log_level)
        } else {
            self.log_level
        }
    }
}
