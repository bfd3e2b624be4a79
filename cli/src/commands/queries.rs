//! Queries command - lists the catalog

use sqlsteps_core::SqlStepsConfig;

use crate::error::CliError;
use crate::output;

pub fn run(config: &SqlStepsConfig) -> Result<(), CliError> {
    let Some(file) = config.query_file() else {
        println!("  {}", output::warning("No query file configured."));
        println!("  Set [queries] file in sqlsteps.toml.");
        return Ok(());
    };

    let catalog = config.catalog()?;

    println!("{}", output::heading("Named Queries"));
    println!("  {}: {}", output::label("File"), file.display());
    println!();

    if catalog.is_empty() {
        println!("  {}", output::warning("No queries found."));
        return Ok(());
    }

    for name in catalog.names() {
        let sql = catalog.get(name).unwrap_or_default();
        println!("  {} {}", output::label(name), output::muted(sql));
    }

    println!();
    println!("  {} query(s)", catalog.len());
    Ok(())
}
