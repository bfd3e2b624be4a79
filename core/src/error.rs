use std::path::PathBuf;

use sqlsteps_types::ParamKind;
use thiserror::Error;

use crate::catalog::LoadError;
use crate::config::ConfigError;
use crate::driver::DriverError;
use crate::steps::NamedSqlStep;

#[derive(Debug, Error)]
pub enum StepError {
    /// Neither `name.dialect` nor `name` exists in the catalog
    #[error("No query found with name {0}")]
    QueryNotFound(String),

    /// A statement operation ran while nothing was staged
    #[error("No statement prepared")]
    NoStatementPrepared,

    /// `prepare` ran while another statement was still staged
    #[error("A statement is already prepared: {0}")]
    StatementAlreadyPrepared(String),

    /// The query file exists but could not be read or parsed
    #[error("Failed to load query file {}: {source}", path.display())]
    ResourceLoadFailed {
        path: PathBuf,
        #[source]
        source: LoadError,
    },

    /// The driver failed to prepare, bind or execute
    #[error("{context}: {source}")]
    ExecutionFailed {
        context: String,
        #[source]
        source: DriverError,
    },

    /// Error loading `sqlsteps.toml`
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// No registered step matches the line
    #[error("No step matches: {0}")]
    UnknownStep(String),

    /// More than one registered step matches the line
    #[error("Step \"{line}\" matches more than one pattern: {}", patterns.join(", "))]
    AmbiguousStep { line: String, patterns: Vec<String> },

    /// The same pattern was registered twice
    #[error("Duplicate step pattern: {0}")]
    DuplicateStep(String),

    /// A step pattern is not a valid regular expression
    #[error("Invalid step pattern {pattern}: {source}")]
    InvalidStepPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A step was run without the argument its pattern captures
    #[error("{0:?} step needs an argument")]
    MissingArgument(NamedSqlStep),

    /// A step argument could not be converted to its parameter kind
    #[error("Invalid {kind} argument: \"{value}\"")]
    InvalidArgument { kind: ParamKind, value: String },
}

impl StepError {
    pub(crate) fn execution(context: impl Into<String>, source: DriverError) -> Self {
        StepError::ExecutionFailed {
            context: context.into(),
            source,
        }
    }
}

/// Result type for step operations
pub type Result<T> = std::result::Result<T, StepError>;
