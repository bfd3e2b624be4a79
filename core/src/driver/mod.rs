//! Driver seam
//!
//! The step library performs no connection management. A [`Connection`] only has
//! to hand out prepared statements, and a [`PreparedStatement`] only has to bind
//! positional parameters, run once and close.

#[cfg(feature = "rusqlite")]
mod rusqlite;

use sqlsteps_types::Param;

use crate::result::QueryResult;

/// Error type reported by drivers
pub type DriverError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Connection trait to abstract database connections
pub trait Connection {
    type Statement<'conn>: PreparedStatement
    where
        Self: 'conn;

    /// Create a prepared statement for `sql`
    fn prepare<'conn>(&'conn self, sql: &str) -> Result<Self::Statement<'conn>, DriverError>;
}

/// A statement prepared by a [`Connection`]
pub trait PreparedStatement {
    /// Bind `param` to the 1-based placeholder `position`
    fn bind(&mut self, position: usize, param: &Param) -> Result<(), DriverError>;

    /// Number of placeholders in the statement, when the driver knows it
    fn parameter_count(&self) -> Option<usize> {
        None
    }

    /// Run the statement and read every row
    fn query(&mut self) -> Result<QueryResult, DriverError>;

    /// Run the statement and return the number of affected rows
    fn execute(&mut self) -> Result<usize, DriverError>;

    /// Release the statement
    fn close(self) -> Result<(), DriverError>
    where
        Self: Sized;
}
