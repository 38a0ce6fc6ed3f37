//! boxtable CLI library module.
//!
//! - `cli/` - Argument parsing and command execution
//! - `input` - Reading JSON / YAML row documents

pub mod cli;
pub mod input;
