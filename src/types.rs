use serde_json::Value as Json;

/// Outcome of one statement.
///
/// `types`, `columns` and every row of `values` are parallel sequences of
/// equal length. A result carries either a table or an `error`, never both.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryResult {
    /// Declared column types, parallel to `columns`.
    pub types: Vec<String>,
    /// Column names, parallel to `types`.
    pub columns: Vec<String>,
    /// Raw row cells; each row is parallel to `columns`.
    pub values: Vec<Vec<Json>>,
    /// SQL error reported by the server for this statement.
    pub error: Option<String>,
    /// Seconds spent executing, present when timings were requested.
    pub time: Option<f64>,
    /// Rows changed by an execute statement.
    pub rows_affected: Option<u64>,
    /// Rowid produced by the last insert of an execute statement.
    pub last_insert_id: Option<i64>,
}

impl QueryResult {
    /// Whether the statement reported a non-empty error.
    pub fn has_error(&self) -> bool {
        self.error
            .as_deref()
            .is_some_and(|error| !error.trim().is_empty())
    }

    /// Number of rows in this result.
    pub fn row_count(&self) -> usize {
        self.values.len()
    }
}

/// One [`QueryResult`] per submitted statement, in submission order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryResultSet {
    pub results: Vec<QueryResult>,
}

impl QueryResultSet {
    /// Whether any contained result reported an error.
    pub fn has_error(&self) -> bool {
        self.results.iter().any(QueryResult::has_error)
    }

    /// Total rows across all contained results.
    pub fn row_count(&self) -> usize {
        self.results.iter().map(QueryResult::row_count).sum()
    }
}
