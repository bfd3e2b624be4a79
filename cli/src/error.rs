//! Error types for the CLI

use std::path::PathBuf;

use sqlsteps_core::{ConfigError, StepError};
use thiserror::Error;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog or engine error outside of a scenario step
    #[error(transparent)]
    Step(#[from] StepError),

    /// A scenario step failed
    #[error("Step failed at line {line} ({text}): {source}")]
    StepFailed {
        line: usize,
        text: String,
        #[source]
        source: StepError,
    },

    /// Scenario lines that match no directive
    #[error("{0} line(s) match no directive")]
    InvalidScenario(usize),

    /// Scenario file could not be read
    #[error("failed to read {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    /// Database could not be opened
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}
