//! # sqlsteps
//!
//! Named SQL queries for database-backed acceptance tests.
//!
//! Queries live in a catalog file keyed by name, optionally specialized per
//! database dialect (`findUser.mysql` beats `findUser` when the dialect is
//! `mysql`). Test steps look queries up by name, stage them, bind typed
//! positional parameters and run them.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use sqlsteps::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let conn = rusqlite::Connection::open_in_memory()?;
//! conn.execute_batch("CREATE TABLE users (name TEXT, age INTEGER)")?;
//!
//! let catalog = QueryCatalog::from_entries([
//!     ("addUser", "INSERT INTO users VALUES (?, ?)"),
//!     ("findUser", "SELECT name FROM users WHERE age > ?"),
//!     ("findUser.mysql", "SELECT `name` FROM `users` WHERE age > ?"),
//! ]);
//! let mut engine = ExecutionEngine::new(&conn, Arc::new(catalog), Dialect::SQLite);
//!
//! engine.fetch_named_query("addUser")?;
//! engine.add_string(Some("alice"))?;
//! engine.add_integer(Some(30))?;
//! assert_eq!(engine.execute_update()?, 1);
//!
//! engine.fetch_named_query("findUser")?;
//! engine.add_integer(Some(18))?;
//! assert_eq!(engine.execute_query()?, 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Directives
//!
//! [`named_sql_steps`] builds a registry of plain-text directives that drive an
//! engine one line at a time:
//!
//! ```text
//! FetchNamedQuery "findUser"
//! AddIntegerParameter value=18
//! ExecuteQuery
//! ```
//!
//! ## Feature Flags
//!
//! | Feature    | Default | Enables                                   |
//! |------------|---------|-------------------------------------------|
//! | `rusqlite` | yes     | [`Connection`] for `rusqlite::Connection` |
//! | `tracing`  | yes     | `tracing` events for resolve/bind/execute |
//! | `serde`    | no      | serde for [`Dialect`], [`Value`], [`ParamKind`] |

pub use sqlsteps_core::{
    BoundParams, ConfigError, Connection, DATABASE_TYPE_ENV, DialectFn, DialectProvider,
    DriverError, EnvDialect, ExecutionEngine, ExecutionResult, LoadError, NamedSqlStep,
    PreparedStatement, QueryCatalog, QueryResult, Result, ResultHolder, SqlStepsConfig,
    StagedStatement, StatementBinder, StepError, StepMatch, StepOutcome, StepRegistry,
    named_sql_steps, run_step,
};
pub use sqlsteps_types::{Dialect, DialectParseError, Param, ParamKind, Value};

pub mod catalog {
    pub use sqlsteps_core::catalog::*;
}

pub mod config {
    pub use sqlsteps_core::config::*;
}

pub mod steps {
    pub use sqlsteps_core::steps::*;
}

#[cfg(feature = "rusqlite")]
pub use rusqlite;

pub mod prelude {
    pub use sqlsteps_core::{
        DialectProvider, ExecutionEngine, QueryCatalog, QueryResult, StepError, named_sql_steps,
        run_step,
    };
    pub use sqlsteps_types::{Dialect, Param, ParamKind, Value};
}
