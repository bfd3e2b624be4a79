//! Statement execution for one scenario
//!
//! ```text
//!   EMPTY    --prepare(sql)----------------> PREPARED
//!   PREPARED --add_parameter---------------> PREPARED
//!   PREPARED --execute_query/execute_update-> EMPTY   (result captured, handle closed)
//!   any      --close_statement-------------> EMPTY
//! ```
//!
//! Every execution closes its statement before returning, whether the driver
//! succeeded or not.

use std::sync::Arc;

use sqlsteps_types::Param;

use crate::binder::{StagedStatement, StatementBinder, close_quietly};
use crate::catalog::QueryCatalog;
use crate::dialect::DialectProvider;
use crate::driver::{Connection, DriverError, PreparedStatement};
use crate::error::{Result, StepError};
use crate::result::{QueryResult, ResultHolder};

/// Per-scenario execution state: the staged statement and the latest result
pub struct ExecutionEngine<'conn, C: Connection + 'conn> {
    catalog: Arc<QueryCatalog>,
    dialect: Box<dyn DialectProvider + 'conn>,
    binder: StatementBinder<'conn, C>,
    results: ResultHolder,
}

impl<'conn, C: Connection + 'conn> ExecutionEngine<'conn, C> {
    pub fn new(
        connection: &'conn C,
        catalog: Arc<QueryCatalog>,
        dialect: impl DialectProvider + 'conn,
    ) -> Self {
        Self {
            catalog,
            dialect: Box::new(dialect),
            binder: StatementBinder::new(connection),
            results: ResultHolder::new(),
        }
    }

    pub fn catalog(&self) -> &QueryCatalog {
        &self.catalog
    }

    pub fn binder(&self) -> &StatementBinder<'conn, C> {
        &self.binder
    }

    pub fn binder_mut(&mut self) -> &mut StatementBinder<'conn, C> {
        &mut self.binder
    }

    pub fn results(&self) -> &ResultHolder {
        &self.results
    }

    /// Look up the SQL for `name` using the current dialect
    pub fn resolve(&self, name: &str) -> Result<String> {
        self.catalog
            .resolve_with(name, &*self.dialect)
            .map(str::to_owned)
    }

    /// Resolve `name` and run it as a query with no parameters
    pub fn execute_named_query(&mut self, name: &str) -> Result<usize> {
        let sql = self.resolve(name)?;
        crate::sqlsteps_debug!("Running query {}", sql);
        self.execute_query_sql(&sql)
    }

    /// Resolve `name` and run it as an update with no parameters
    pub fn execute_named_update(&mut self, name: &str) -> Result<usize> {
        let sql = self.resolve(name)?;
        crate::sqlsteps_debug!("Executing update {}", sql);
        self.execute_update_sql(&sql)
    }

    /// Resolve `name` and stage it for parameter binding
    pub fn fetch_named_query(&mut self, name: &str) -> Result<()> {
        crate::sqlsteps_debug!("fetching query \"{}\"", name);
        let sql = self.resolve(name)?;
        self.binder.prepare(&sql)
    }

    /// Stage raw SQL for parameter binding
    pub fn prepare(&mut self, sql: &str) -> Result<()> {
        self.binder.prepare(sql)
    }

    /// Bind `param` to the next placeholder of the staged statement
    pub fn add_parameter(&mut self, param: impl Into<Param>) -> Result<usize> {
        self.binder.add_parameter(param.into())
    }

    pub fn add_string(&mut self, value: Option<&str>) -> Result<usize> {
        self.add_parameter(value)
    }

    pub fn add_integer(&mut self, value: Option<i32>) -> Result<usize> {
        self.add_parameter(value)
    }

    pub fn add_boolean(&mut self, value: Option<bool>) -> Result<usize> {
        self.add_parameter(value)
    }

    pub fn add_double(&mut self, value: Option<f64>) -> Result<usize> {
        self.add_parameter(value)
    }

    pub fn add_long(&mut self, value: Option<i64>) -> Result<usize> {
        self.add_parameter(value)
    }

    /// Run the staged statement as a query, keeping its rows. Returns the row count.
    pub fn execute_query(&mut self) -> Result<usize> {
        let staged = self.binder.take_staged()?;
        crate::sqlsteps_trace_query!("sqlsteps.execute_query", staged.sql(), staged.params().len());
        let mut statement = self.fully_bound(staged, "Failed to execute prepared statement")?;

        let outcome = statement.query();
        close_quietly(statement);

        self.record_rows(outcome, "Failed to execute prepared statement")
    }

    /// Run the staged statement as an update. Returns the affected row count.
    pub fn execute_update(&mut self) -> Result<usize> {
        let staged = self.binder.take_staged()?;
        crate::sqlsteps_trace_query!("sqlsteps.execute_update", staged.sql(), staged.params().len());
        let mut statement =
            self.fully_bound(staged, "Failed to execute prepared update statement")?;

        let outcome = statement.execute();
        close_quietly(statement);

        self.record_update(outcome, "Failed to execute prepared update statement")
    }

    /// Prepare, run and close `sql` as a query without touching the staged statement
    pub fn execute_query_sql(&mut self, sql: &str) -> Result<usize> {
        crate::sqlsteps_trace_query!("sqlsteps.query", sql, 0);
        let mut statement = self.prepare_unstaged(sql)?;

        let outcome = statement.query();
        close_quietly(statement);

        self.record_rows(outcome, format!("Failed to execute query: {sql}"))
    }

    /// Prepare, run and close `sql` as an update without touching the staged statement
    pub fn execute_update_sql(&mut self, sql: &str) -> Result<usize> {
        crate::sqlsteps_trace_query!("sqlsteps.update", sql, 0);
        let mut statement = self.prepare_unstaged(sql)?;

        let outcome = statement.execute();
        close_quietly(statement);

        self.record_update(outcome, format!("Failed to execute update: {sql}"))
    }

    /// Unwrap a staged statement, rejecting it when placeholders were left unbound
    fn fully_bound(
        &mut self,
        staged: StagedStatement<C::Statement<'conn>>,
        context: &str,
    ) -> Result<C::Statement<'conn>> {
        let bound = staged.params().len();
        let statement = staged.into_statement();

        match statement.parameter_count() {
            Some(expected) if expected != bound => {
                close_quietly(statement);
                self.results.clear();
                Err(StepError::execution(
                    context,
                    format!("statement has {expected} parameter(s) but {bound} were bound").into(),
                ))
            }
            _ => Ok(statement),
        }
    }

    fn prepare_unstaged(&mut self, sql: &str) -> Result<C::Statement<'conn>> {
        match self.binder.connection().prepare(sql) {
            Ok(statement) => Ok(statement),
            Err(e) => {
                self.results.clear();
                Err(StepError::execution("Failed to prepare statement", e))
            }
        }
    }

    fn record_rows(
        &mut self,
        outcome: std::result::Result<QueryResult, DriverError>,
        context: impl Into<String>,
    ) -> Result<usize> {
        match outcome {
            Ok(rows) => {
                let count = rows.row_count();
                self.results.set_rows(rows);
                Ok(count)
            }
            Err(e) => {
                self.results.clear();
                Err(StepError::execution(context, e))
            }
        }
    }

    fn record_update(
        &mut self,
        outcome: std::result::Result<usize, DriverError>,
        context: impl Into<String>,
    ) -> Result<usize> {
        match outcome {
            Ok(count) => {
                self.results.set_update_count(count);
                Ok(count)
            }
            Err(e) => {
                self.results.clear();
                Err(StepError::execution(context, e))
            }
        }
    }

    /// Close any staged statement. Safe to call when nothing is staged.
    pub fn close_statement(&mut self) {
        self.binder.close_statement();
    }

    /// Scenario boundary: release the staged statement and forget the last result
    pub fn reset(&mut self) {
        self.binder.close_statement();
        self.results.clear();
    }
}
