//! Core of sqlsteps: named query resolution and staged statement execution.
//!
//! A [`QueryCatalog`] maps names to SQL, optionally specialized per dialect.
//! An [`ExecutionEngine`] resolves names against it, stages a statement in its
//! [`StatementBinder`], binds typed positional parameters and runs the result
//! through a [`driver::Connection`].

pub mod binder;
pub mod catalog;
pub mod config;
pub mod dialect;
pub mod driver;
pub mod engine;
pub mod error;
pub mod result;
pub mod steps;
mod tracing;

#[cfg(test)]
mod testing;

// Re-export key types and traits
pub use binder::{BoundParams, StagedStatement, StatementBinder};
pub use catalog::{LoadError, QueryCatalog};
pub use config::{ConfigError, SqlStepsConfig};
pub use dialect::{DATABASE_TYPE_ENV, DialectFn, DialectProvider, EnvDialect};
pub use driver::{Connection, DriverError, PreparedStatement};
pub use engine::ExecutionEngine;
pub use error::{Result, StepError};
pub use result::{ExecutionResult, QueryResult, ResultHolder};
pub use steps::{NamedSqlStep, StepMatch, StepOutcome, StepRegistry, named_sql_steps, run_step};

pub use sqlsteps_types::{Dialect, Param, ParamKind, Value};
