//! [`Connection`] and [`PreparedStatement`] for [`rusqlite`].
//!
//! Parameters are bound one at a time with `raw_bind_parameter`, so each bind
//! hits the placeholder slot it was added for.

use ::rusqlite::types::{Value as SqliteValue, ValueRef};
use sqlsteps_types::{Param, Value};

use super::{Connection, DriverError, PreparedStatement};
use crate::result::QueryResult;

fn param_to_sqlite(param: &Param) -> SqliteValue {
    match param {
        Param::String(Some(s)) => SqliteValue::Text(s.clone()),
        Param::Integer(Some(i)) => SqliteValue::Integer(i64::from(*i)),
        Param::Boolean(Some(b)) => SqliteValue::Integer(i64::from(*b)),
        Param::Double(Some(d)) => SqliteValue::Real(*d),
        Param::Long(Some(l)) => SqliteValue::Integer(*l),
        _ => SqliteValue::Null,
    }
}

fn value_from_sqlite(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::Integer(i),
        ValueRef::Real(r) => Value::Real(r),
        ValueRef::Text(bytes) => Value::Text(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(bytes) => Value::Blob(bytes.to_vec()),
    }
}

impl Connection for ::rusqlite::Connection {
    type Statement<'conn>
        = ::rusqlite::Statement<'conn>
    where
        Self: 'conn;

    fn prepare<'conn>(&'conn self, sql: &str) -> Result<Self::Statement<'conn>, DriverError> {
        Ok(::rusqlite::Connection::prepare(self, sql)?)
    }
}

impl PreparedStatement for ::rusqlite::Statement<'_> {
    fn bind(&mut self, position: usize, param: &Param) -> Result<(), DriverError> {
        self.raw_bind_parameter(position, param_to_sqlite(param))?;
        Ok(())
    }

    fn parameter_count(&self) -> Option<usize> {
        Some(::rusqlite::Statement::parameter_count(self))
    }

    fn query(&mut self) -> Result<QueryResult, DriverError> {
        let columns: Vec<String> = self.column_names().into_iter().map(String::from).collect();
        let width = columns.len();

        let mut rows = Vec::new();
        let mut cursor = self.raw_query();
        while let Some(row) = cursor.next()? {
            let values = (0..width)
                .map(|i| row.get_ref(i).map(value_from_sqlite))
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(values);
        }

        Ok(QueryResult::new(columns, rows))
    }

    fn execute(&mut self) -> Result<usize, DriverError> {
        Ok(self.raw_execute()?)
    }

    fn close(self) -> Result<(), DriverError> {
        self.finalize()?;
        Ok(())
    }
}
