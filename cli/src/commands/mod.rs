//! CLI command implementations

pub mod check;
pub mod queries;
pub mod run;

use std::path::Path;

use sqlsteps_core::{ConfigError, SqlStepsConfig};

use crate::error::CliError;

/// Load configuration from `path`, or from `sqlsteps.toml` in the working
/// directory. Only an explicitly given path is required to exist.
pub fn load_config(path: Option<&Path>) -> Result<SqlStepsConfig, CliError> {
    match path {
        Some(path) => Ok(SqlStepsConfig::load_from(path)?),
        None => match SqlStepsConfig::load() {
            Err(ConfigError::NotFound(path)) => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                Ok(SqlStepsConfig::default())
            }
            other => Ok(other?),
        },
    }
}

/// Open the configured SQLite database
pub fn open_database(config: &SqlStepsConfig) -> Result<rusqlite::Connection, CliError> {
    let conn = match config.database_path() {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Opening database");
            rusqlite::Connection::open(path)?
        }
        None => rusqlite::Connection::open_in_memory()?,
    };
    Ok(conn)
}
