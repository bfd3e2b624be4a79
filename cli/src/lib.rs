//! sqlsteps CLI - runs named SQL step scenarios against SQLite
//!
//! # Configuration
//!
//! Create a `sqlsteps.toml` file next to your queries:
//!
//! ```toml
//! [database]
//! url = "./test.db"
//! type = "sqlite"
//!
//! [queries]
//! file = "queries.properties"
//! ```
//!
//! # Scenarios
//!
//! A scenario is a text file with one directive per line:
//!
//! ```text
//! # create a user and find it again
//! FetchNamedQuery "addUser"
//! AddStringParameter value="alice"
//! ExecuteUpdate
//! FetchNamedQuery "findUser"
//! AddStringParameter value="alice"
//! ExecuteQuery
//! ```
//!
//! # Commands
//!
//! - `sqlsteps run <SCENARIO>` - Run every directive, stopping at the first failure
//! - `sqlsteps check <SCENARIO>` - Verify every line matches a directive
//! - `sqlsteps queries` - List the named queries in the catalog

pub mod commands;
pub mod error;
pub mod output;
pub mod scenario;

pub use error::CliError;
