use serde_json::{Map, Value as Json};

use crate::{value::TIMESTAMP_FORMAT, Parameter, RqliteError, Value};

/// Builds the body for `/db/execute`: a JSON array of statement strings.
///
/// Quoting and escaping are delegated to the JSON serializer; statements
/// are never hand-quoted.
pub(crate) fn plain_body<S: AsRef<str>>(statements: &[S]) -> Json {
    Json::Array(
        statements
            .iter()
            .map(|statement| Json::String(statement.as_ref().to_owned()))
            .collect(),
    )
}

/// Builds the body for a parametrized query.
///
/// Positional parameters produce `[["SQL",[v1,v2,...]]]`; named parameters
/// produce `[["SQL",{"a":v1,...}]]`. The list must be non-empty and
/// homogeneous; violations fail before any body is built.
pub(crate) fn parametrized_body(sql: &str, params: &[Parameter]) -> Result<Json, RqliteError> {
    if params.is_empty() {
        return Err(RqliteError::ParameterShape(
            "parametrized statement requires at least one parameter".to_owned(),
        ));
    }

    let named_count = params
        .iter()
        .filter(|param| matches!(param, Parameter::Named { .. }))
        .count();
    if named_count != 0 && named_count != params.len() {
        return Err(RqliteError::ParameterShape(
            "statement parameters must be all positional or all named".to_owned(),
        ));
    }

    let args = if named_count == 0 {
        let mut values = Vec::with_capacity(params.len());
        for param in params {
            if let Parameter::Positional(value) = param {
                values.push(encode_value(value));
            }
        }
        Json::Array(values)
    } else {
        let mut fields = Map::new();
        for param in params {
            if let Parameter::Named { name, value } = param {
                if name.is_empty() {
                    return Err(RqliteError::ParameterShape(
                        "named parameter name cannot be empty".to_owned(),
                    ));
                }
                fields.insert(name.clone(), encode_value(value));
            }
        }
        Json::Object(fields)
    };

    Ok(Json::Array(vec![Json::Array(vec![
        Json::String(sql.to_owned()),
        args,
    ])]))
}

pub(crate) fn encode_value(value: &Value) -> Json {
    match value {
        Value::Null => Json::Null,
        Value::Text(text) => Json::String(text.clone()),
        Value::Integer(number) => Json::from(*number),
        Value::Int(number) => Json::from(*number),
        Value::Real(number) => Json::from(*number),
        Value::Timestamp(timestamp) => {
            Json::String(timestamp.format(TIMESTAMP_FORMAT).to_string())
        }
        // bool parameters travel as 0/1, same as bool columns.
        Value::Bool(flag) => Json::from(i64::from(*flag)),
    }
}
