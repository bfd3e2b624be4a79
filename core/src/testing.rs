//! Recording driver for unit tests

use std::cell::RefCell;

use sqlsteps_types::{Param, Value};

use crate::driver::{Connection, DriverError, PreparedStatement};
use crate::result::QueryResult;

#[derive(Debug, Default)]
struct Log {
    prepared: Vec<String>,
    binds: Vec<(usize, Param)>,
    executions: Vec<(String, Vec<Option<Param>>)>,
    closed: usize,
}

/// A connection that records every driver call
#[derive(Debug, Default)]
pub struct RecordingConnection {
    log: RefCell<Log>,
    fail_prepare: bool,
    fail_bind_at: Option<usize>,
    fail_execute: bool,
    count_placeholders: bool,
    rows: QueryResult,
    update_count: usize,
}

impl RecordingConnection {
    pub fn new() -> Self {
        Self {
            rows: QueryResult::new(
                vec!["id".into(), "name".into()],
                vec![vec![Value::Integer(1), Value::from("alice")]],
            ),
            update_count: 1,
            ..Self::default()
        }
    }

    pub fn fail_prepare(mut self) -> Self {
        self.fail_prepare = true;
        self
    }

    pub fn fail_bind_at(mut self, position: usize) -> Self {
        self.fail_bind_at = Some(position);
        self
    }

    pub fn fail_execute(mut self) -> Self {
        self.fail_execute = true;
        self
    }

    /// Report the number of `?` in the SQL as the statement's parameter count
    pub fn count_placeholders(mut self) -> Self {
        self.count_placeholders = true;
        self
    }

    pub fn with_update_count(mut self, count: usize) -> Self {
        self.update_count = count;
        self
    }

    pub fn prepared(&self) -> Vec<String> {
        self.log.borrow().prepared.clone()
    }

    pub fn binds(&self) -> Vec<(usize, Param)> {
        self.log.borrow().binds.clone()
    }

    /// SQL and slot contents of each execution; slot `i` holds position `i + 1`
    pub fn executions(&self) -> Vec<(String, Vec<Option<Param>>)> {
        self.log.borrow().executions.clone()
    }

    pub fn closed(&self) -> usize {
        self.log.borrow().closed
    }
}

pub struct RecordingStatement<'conn> {
    conn: &'conn RecordingConnection,
    sql: String,
    slots: Vec<Option<Param>>,
}

impl RecordingStatement<'_> {
    fn run(&mut self) -> Result<(), DriverError> {
        self.conn
            .log
            .borrow_mut()
            .executions
            .push((self.sql.clone(), self.slots.clone()));
        if self.conn.fail_execute {
            return Err("execution failed".into());
        }
        Ok(())
    }
}

impl Connection for RecordingConnection {
    type Statement<'conn>
        = RecordingStatement<'conn>
    where
        Self: 'conn;

    fn prepare<'conn>(&'conn self, sql: &str) -> Result<Self::Statement<'conn>, DriverError> {
        if self.fail_prepare {
            return Err(format!("cannot prepare {sql}").into());
        }
        self.log.borrow_mut().prepared.push(sql.to_owned());
        Ok(RecordingStatement {
            conn: self,
            sql: sql.to_owned(),
            slots: Vec::new(),
        })
    }
}

impl PreparedStatement for RecordingStatement<'_> {
    fn bind(&mut self, position: usize, param: &Param) -> Result<(), DriverError> {
        if self.conn.fail_bind_at == Some(position) {
            return Err(format!("no placeholder at position {position}").into());
        }
        self.conn
            .log
            .borrow_mut()
            .binds
            .push((position, param.clone()));
        if self.slots.len() < position {
            self.slots.resize(position, None);
        }
        self.slots[position - 1] = Some(param.clone());
        Ok(())
    }

    fn parameter_count(&self) -> Option<usize> {
        self.conn
            .count_placeholders
            .then(|| self.sql.matches('?').count())
    }

    fn query(&mut self) -> Result<QueryResult, DriverError> {
        self.run()?;
        Ok(self.conn.rows.clone())
    }

    fn execute(&mut self) -> Result<usize, DriverError> {
        self.run()?;
        Ok(self.conn.update_count)
    }

    fn close(self) -> Result<(), DriverError> {
        self.conn.log.borrow_mut().closed += 1;
        Ok(())
    }
}
