//! Check command - verifies every scenario line matches a directive

use std::path::Path;

use sqlsteps_core::named_sql_steps;

use crate::error::CliError;
use crate::output;
use crate::scenario;

pub fn run(scenario_path: &Path) -> Result<(), CliError> {
    let lines = scenario::load(scenario_path)?;
    let registry = named_sql_steps()?;

    println!(
        "{}",
        output::heading(&format!("Checking {}", scenario_path.display()))
    );
    println!();

    let mut failures = 0;
    for line in &lines {
        match registry.find(&line.text) {
            Ok(_) => println!("  {:>3} {} {}", line.number, output::status_ok(), line.text),
            Err(e) => {
                failures += 1;
                println!("  {:>3} {} {}", line.number, output::status_error(), line.text);
                println!("      {}", output::warning(&e.to_string()));
            }
        }
    }

    println!();
    if failures > 0 {
        return Err(CliError::InvalidScenario(failures));
    }

    println!(
        "{}",
        output::success(&format!("All {} line(s) are valid", lines.len()))
    );
    Ok(())
}
