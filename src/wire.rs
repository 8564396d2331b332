use serde::Deserialize;
use serde_json::Value as Json;

/// Top-level response envelope: one result per submitted statement.
#[derive(Debug, Deserialize)]
pub(crate) struct ResponseEnvelope {
    #[serde(default)]
    pub results: Vec<WireResult>,
}

/// One statement's outcome as it appears on the wire.
///
/// Either `error` is set, or `types`/`columns`/`values` describe a result
/// table. Execute statements report `rows_affected`/`last_insert_id`
/// instead of a table; `time` appears when timings were requested.
#[derive(Debug, Deserialize)]
pub(crate) struct WireResult {
    #[serde(default)]
    pub types: Option<Vec<String>>,
    #[serde(default)]
    pub columns: Option<Vec<String>>,
    #[serde(default)]
    pub values: Option<Vec<Vec<Json>>>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub time: Option<f64>,
    #[serde(default)]
    pub rows_affected: Option<u64>,
    #[serde(default)]
    pub last_insert_id: Option<i64>,
}
