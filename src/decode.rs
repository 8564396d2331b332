use chrono::{DateTime, NaiveDateTime};
use serde_json::Value as Json;

use crate::{
    value::TIMESTAMP_FORMAT, wire, QueryResult, QueryResultSet, RqliteError, Value,
};

/// Decodes one cell given its column's declared type.
///
/// JSON `null` decodes to [`Value::Null`] before any type dispatch; type
/// names are matched case-insensitively. An unknown type name fails with
/// [`RqliteError::UnsupportedColumnType`]; a raw value that does not fit
/// its declared type fails with [`RqliteError::MalformedResponse`].
pub fn decode_cell(decltype: &str, raw: &Json) -> Result<Value, RqliteError> {
    if raw.is_null() {
        return Ok(Value::Null);
    }

    match decltype.to_ascii_lowercase().as_str() {
        "text" => raw
            .as_str()
            .map(|text| Value::Text(text.to_owned()))
            .ok_or_else(|| cell_mismatch(decltype, raw)),
        "integer" | "numeric" => raw
            .as_i64()
            .map(Value::Integer)
            .ok_or_else(|| cell_mismatch(decltype, raw)),
        "int" => raw
            .as_i64()
            .and_then(|number| i32::try_from(number).ok())
            .map(Value::Int)
            .ok_or_else(|| cell_mismatch(decltype, raw)),
        "real" => raw
            .as_f64()
            .map(Value::Real)
            .ok_or_else(|| cell_mismatch(decltype, raw)),
        "timestamp" => raw
            .as_str()
            .and_then(parse_timestamp)
            .map(Value::Timestamp)
            .ok_or_else(|| cell_mismatch(decltype, raw)),
        "bool" => match raw {
            Json::Bool(flag) => Ok(Value::Bool(*flag)),
            // 0/1 integer semantics.
            _ => raw
                .as_i64()
                .map(|number| Value::Bool(number != 0))
                .ok_or_else(|| cell_mismatch(decltype, raw)),
        },
        other => Err(RqliteError::UnsupportedColumnType(other.to_owned())),
    }
}

fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|stamp| stamp.naive_utc())
        })
}

fn cell_mismatch(decltype: &str, raw: &Json) -> RqliteError {
    RqliteError::MalformedResponse(format!("cell value {raw} does not decode as '{decltype}'"))
}

/// Parses a full response body into a [`QueryResultSet`].
///
/// An absent or empty `results` sequence is a valid empty set. Shape
/// violations (row length diverging from column count, a result carrying
/// both a table and an error) fail with [`RqliteError::MalformedResponse`]
/// rather than being truncated or padded.
pub(crate) fn decode_result_set(body: &str) -> Result<QueryResultSet, RqliteError> {
    let envelope: wire::ResponseEnvelope = serde_json::from_str(body)
        .map_err(|err| RqliteError::MalformedResponse(format!("invalid response JSON: {err}")))?;

    let results = envelope
        .results
        .into_iter()
        .map(decode_result)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(QueryResultSet { results })
}

fn decode_result(raw: wire::WireResult) -> Result<QueryResult, RqliteError> {
    if let Some(error) = raw.error {
        let carries_table = raw.types.as_ref().is_some_and(|types| !types.is_empty())
            || raw.columns.as_ref().is_some_and(|columns| !columns.is_empty())
            || raw.values.as_ref().is_some_and(|values| !values.is_empty());
        if carries_table {
            return Err(RqliteError::MalformedResponse(
                "result carries both an error and row data".to_owned(),
            ));
        }
        return Ok(QueryResult {
            error: Some(error),
            time: raw.time,
            ..QueryResult::default()
        });
    }

    let types = raw.types.unwrap_or_default();
    let columns = raw.columns.unwrap_or_default();
    let values = raw.values.unwrap_or_default();

    if columns.len() != types.len() {
        return Err(RqliteError::MalformedResponse(format!(
            "column/type count mismatch: {} columns, {} types",
            columns.len(),
            types.len()
        )));
    }
    for (index, row) in values.iter().enumerate() {
        if row.len() != columns.len() {
            return Err(RqliteError::MalformedResponse(format!(
                "row {index} has {} cells, expected {}",
                row.len(),
                columns.len()
            )));
        }
    }

    Ok(QueryResult {
        types,
        columns,
        values,
        error: None,
        time: raw.time,
        rows_affected: raw.rows_affected,
        last_insert_id: raw.last_insert_id,
    })
}
