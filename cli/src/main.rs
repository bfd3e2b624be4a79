//! sqlsteps CLI - Main entry point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use sqlsteps_cli::commands::{self, load_config};
use sqlsteps_cli::output;

/// sqlsteps - Run named SQL step scenarios
#[derive(Parser, Debug)]
#[command(name = "sqlsteps")]
#[command(author, version, about = "Run named SQL step scenarios", long_about = None)]
struct Cli {
    /// Path to config file (default: sqlsteps.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a scenario against the configured database
    Run {
        /// Scenario file, one directive per line
        scenario: PathBuf,

        /// Dialect used to resolve named queries (overrides config and environment)
        #[arg(short, long)]
        dialect: Option<String>,
    },

    /// Check that every line of a scenario matches a directive
    Check {
        /// Scenario file, one directive per line
        scenario: PathBuf,
    },

    /// List the named queries in the catalog
    Queries,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", output::err_line(&e.to_string()));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Run { scenario, dialect } => {
            let config = load_config(cli.config.as_deref())?;
            commands::run::run(&config, &scenario, dialect.as_deref())?;
        }
        Command::Check { scenario } => commands::check::run(&scenario)?,
        Command::Queries => {
            let config = load_config(cli.config.as_deref())?;
            commands::queries::run(&config)?;
        }
    }
    Ok(())
}
