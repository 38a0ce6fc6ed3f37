//! CLI argument parsing and command dispatch.
//!
//! - `args` - Command-line argument structures
//! - `handlers` - Command execution

pub mod args;
pub mod handlers;

// Re-export main types
pub use args::{Cli, LogLevel};
pub use handlers::{build_table, run};
