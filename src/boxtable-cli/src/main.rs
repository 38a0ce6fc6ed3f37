//! boxtable - render JSON or YAML rows as a bordered text table.
//!
//! The table goes to stdout; logs go to stderr.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use boxtable_cli::cli::{Cli, run};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG takes precedence over the CLI log level
    let log_level = cli.effective_log_level();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.as_filter_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    run(cli)
}
