//! Run command - executes a scenario against the configured database

use std::path::Path;
use std::sync::Arc;

use sqlsteps_core::{
    DialectProvider, ExecutionEngine, SqlStepsConfig, StepOutcome, named_sql_steps, run_step,
};

use crate::commands::open_database;
use crate::error::CliError;
use crate::output;
use crate::scenario::{self, ScenarioLine};

pub fn run(
    config: &SqlStepsConfig,
    scenario_path: &Path,
    dialect_override: Option<&str>,
) -> Result<(), CliError> {
    let lines = scenario::load(scenario_path)?;
    let catalog = Arc::new(config.catalog()?);
    let registry = named_sql_steps()?;

    let dialect: Box<dyn DialectProvider> = match dialect_override {
        Some(dialect) => Box::new(dialect.to_owned()),
        None => Box::new(config.dialect()),
    };

    let conn = open_database(config)?;
    let mut engine = ExecutionEngine::new(&conn, catalog, dialect);

    println!(
        "{}",
        output::heading(&format!("Running {}", scenario_path.display()))
    );
    println!();

    for line in &lines {
        tracing::debug!(line = line.number, step = %line.text, "Running step");

        let outcome = run_step(&registry, &mut engine, &line.text).map_err(|source| {
            println!("  {:>3} {} {}", line.number, output::status_error(), line.text);
            CliError::StepFailed {
                line: line.number,
                text: line.text.clone(),
                source,
            }
        })?;

        report(&engine, line, outcome);
    }

    engine.reset();

    println!();
    println!(
        "{}",
        output::success(&format!("{} step(s) passed", lines.len()))
    );
    Ok(())
}

fn report(
    engine: &ExecutionEngine<'_, rusqlite::Connection>,
    line: &ScenarioLine,
    outcome: StepOutcome,
) {
    let detail = match outcome {
        StepOutcome::Queried(count) => format!("{count} row(s)"),
        StepOutcome::Updated(count) => format!("{count} row(s) affected"),
        StepOutcome::Staged => "staged".to_owned(),
        StepOutcome::Bound { position } => format!("bound at position {position}"),
    };

    println!(
        "  {:>3} {} {} {}",
        line.number,
        output::status_ok(),
        line.text,
        output::muted(&format!("({detail})"))
    );

    if let StepOutcome::Queried(_) = outcome
        && let Some(rows) = engine.results().query_result()
    {
        println!("{}", output::table(rows));
    }
}
