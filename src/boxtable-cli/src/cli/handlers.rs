//! Command execution handlers.

use std::io::Write;

use anyhow::{Context, Result};
use boxtable_core::{TableConfig, TextTable};

use super::args::Cli;
use crate::input::read_document;

/// Build the table described by the command line: configuration file,
/// flag overrides, then the input document.
pub fn build_table(cli: &Cli) -> Result<TextTable> {
    let mut config = match &cli.config {
        Some(path) => TableConfig::load(path)
            .with_context(|| format!("Failed to load config '{}'", path.display()))?,
        None => TableConfig::default(),
    };
    cli.apply_overrides(&mut config);

    let data = read_document(cli.input.as_deref(), cli.format)?;
    let table = TextTable::from_json(data).with_config(&config);

    if table.skipped_rows() > 0 {
        tracing::info!(
            skipped = table.skipped_rows(),
            rendered = table.data().len(),
            "Some input elements were not rows"
        );
    }

    Ok(table)
}

/// Render the table to stdout.
pub fn run(cli: Cli) -> Result<()> {
    let table = build_table(&cli)?;
    let output = table.render().context("Failed to render table")?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write table to stdout")?;

    Ok(())
}
