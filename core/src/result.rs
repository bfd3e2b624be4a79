//! Query results and the per-scenario result holder

use sqlsteps_types::Value;

/// Rows returned by a query, fully read into memory
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryResult {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl QueryResult {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first column with this name (case-insensitive, as SQL labels are)
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.eq_ignore_ascii_case(name))
    }

    /// Value of `column` in row `row`
    pub fn value(&self, row: usize, column: &str) -> Option<&Value> {
        let index = self.column_index(column)?;
        self.rows.get(row)?.get(index)
    }
}

/// Outcome of the most recent execution
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionResult {
    Rows(QueryResult),
    UpdateCount(usize),
}

/// Holds the result of the most recent execution for later steps to inspect
#[derive(Debug, Default)]
pub struct ResultHolder {
    latest: Option<ExecutionResult>,
}

impl ResultHolder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_rows(&mut self, rows: QueryResult) {
        self.latest = Some(ExecutionResult::Rows(rows));
    }

    pub fn set_update_count(&mut self, count: usize) {
        self.latest = Some(ExecutionResult::UpdateCount(count));
    }

    pub fn latest(&self) -> Option<&ExecutionResult> {
        self.latest.as_ref()
    }

    /// Rows of the most recent execution, if it was a query
    pub fn query_result(&self) -> Option<&QueryResult> {
        match &self.latest {
            Some(ExecutionResult::Rows(rows)) => Some(rows),
            _ => None,
        }
    }

    /// Affected row count of the most recent execution, if it was an update
    pub fn update_count(&self) -> Option<usize> {
        match self.latest {
            Some(ExecutionResult::UpdateCount(count)) => Some(count),
            _ => None,
        }
    }

    pub fn take(&mut self) -> Option<ExecutionResult> {
        self.latest.take()
    }

    pub fn clear(&mut self) {
        self.latest = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> QueryResult {
        QueryResult::new(
            vec!["ID".into(), "name".into()],
            vec![
                vec![Value::Integer(1), Value::from("alice")],
                vec![Value::Integer(2), Value::Null],
            ],
        )
    }

    #[test]
    fn lookup_by_column_name() {
        let rows = users();
        assert_eq!(rows.row_count(), 2);
        assert_eq!(rows.value(0, "id"), Some(&Value::Integer(1)));
        assert_eq!(rows.value(1, "NAME"), Some(&Value::Null));
        assert_eq!(rows.value(2, "name"), None);
        assert_eq!(rows.value(0, "email"), None);
    }

    #[test]
    fn holder_keeps_only_the_latest_outcome() {
        let mut holder = ResultHolder::new();
        assert!(holder.latest().is_none());

        holder.set_rows(users());
        assert_eq!(holder.query_result().map(QueryResult::row_count), Some(2));
        assert_eq!(holder.update_count(), None);

        holder.set_update_count(3);
        assert!(holder.query_result().is_none());
        assert_eq!(holder.update_count(), Some(3));

        holder.clear();
        assert!(holder.latest().is_none());
    }
}
