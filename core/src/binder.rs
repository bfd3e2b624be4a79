//! The staged statement and its positional parameters
//!
//! At most one statement is staged at a time. Parameters are bound to the next
//! 1-based placeholder in call order as soon as they are added.

use smallvec::SmallVec;
use sqlsteps_types::Param;

use crate::driver::{Connection, PreparedStatement};
use crate::error::{Result, StepError};

/// Parameters bound to a staged statement, in slot order
pub type BoundParams = SmallVec<[Param; 8]>;

/// A prepared statement together with the parameters bound to it so far
#[derive(Debug)]
pub struct StagedStatement<S> {
    sql: String,
    statement: S,
    params: BoundParams,
}

impl<S: PreparedStatement> StagedStatement<S> {
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    pub fn statement(&mut self) -> &mut S {
        &mut self.statement
    }

    /// Give up the SQL and parameters, keeping only the handle
    pub fn into_statement(self) -> S {
        self.statement
    }
}

/// Release a statement, logging instead of failing if the driver complains
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub(crate) fn close_quietly<S: PreparedStatement>(statement: S) {
    if let Err(e) = statement.close() {
        crate::sqlsteps_warn!(error = %e, "Failed to close statement");
    }
}

/// Owns the staged statement for one scenario
pub struct StatementBinder<'conn, C: Connection + 'conn> {
    connection: &'conn C,
    staged: Option<StagedStatement<C::Statement<'conn>>>,
}

impl<'conn, C: Connection + 'conn> StatementBinder<'conn, C> {
    pub fn new(connection: &'conn C) -> Self {
        Self {
            connection,
            staged: None,
        }
    }

    pub fn connection(&self) -> &'conn C {
        self.connection
    }

    /// Prepare `sql` and stage it.
    ///
    /// Fails with [`StepError::StatementAlreadyPrepared`] while another statement
    /// is staged; that statement is left as it was.
    pub fn prepare(&mut self, sql: &str) -> Result<()> {
        if let Some(staged) = &self.staged {
            return Err(StepError::StatementAlreadyPrepared(staged.sql.clone()));
        }

        crate::sqlsteps_trace_query!("sqlsteps.prepare", sql, 0);

        let connection = self.connection;
        let statement = connection
            .prepare(sql)
            .map_err(|e| StepError::execution("Failed to prepare statement", e))?;

        self.staged = Some(StagedStatement {
            sql: sql.to_owned(),
            statement,
            params: BoundParams::new(),
        });
        Ok(())
    }

    /// Bind `param` to the next placeholder and return its 1-based position.
    ///
    /// If the driver rejects the bind, the staged statement is closed.
    pub fn add_parameter(&mut self, param: Param) -> Result<usize> {
        let staged = self.staged.as_mut().ok_or(StepError::NoStatementPrepared)?;
        let position = staged.params.len() + 1;

        crate::sqlsteps_trace_bind!(position, param);

        if let Err(e) = staged.statement.bind(position, &param) {
            self.close_statement();
            return Err(StepError::execution(
                format!("Failed to bind {} parameter at position {position}", param.kind()),
                e,
            ));
        }

        staged.params.push(param);
        Ok(position)
    }

    /// The staged statement handle
    pub fn get_statement(&mut self) -> Result<&mut C::Statement<'conn>> {
        self.staged
            .as_mut()
            .map(StagedStatement::statement)
            .ok_or(StepError::NoStatementPrepared)
    }

    /// The staged statement with its SQL and parameters
    pub fn staged(&self) -> Option<&StagedStatement<C::Statement<'conn>>> {
        self.staged.as_ref()
    }

    pub fn is_prepared(&self) -> bool {
        self.staged.is_some()
    }

    /// Parameters bound so far; empty when nothing is staged
    pub fn parameters(&self) -> &[Param] {
        self.staged
            .as_ref()
            .map(StagedStatement::params)
            .unwrap_or_default()
    }

    /// Remove the staged statement so it can be executed.
    ///
    /// The binder is empty afterwards; the caller owns closing the handle.
    pub fn take_staged(&mut self) -> Result<StagedStatement<C::Statement<'conn>>> {
        self.staged.take().ok_or(StepError::NoStatementPrepared)
    }

    /// Close and clear the staged statement. Does nothing when none is staged.
    pub fn close_statement(&mut self) {
        if let Some(staged) = self.staged.take() {
            crate::sqlsteps_debug!(sql = %staged.sql, "Closing statement");
            close_quietly(staged.statement);
        }
    }
}

impl<'conn, C: Connection + 'conn> Drop for StatementBinder<'conn, C> {
    fn drop(&mut self) {
        self.close_statement();
    }
}
